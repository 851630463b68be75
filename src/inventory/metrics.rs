// src/inventory/metrics.rs — Derived dashboard numbers

use crate::inventory::{InventoryItem, LOW_STOCK_THRESHOLD};

/// The three dashboard figures, derived from the current list on every
/// render. Nothing is cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub total_items: usize,
    pub total_value: f64,
    pub low_stock: usize,
}

impl Metrics {
    pub fn compute(items: &[InventoryItem]) -> Self {
        let total_value = items
            .iter()
            .map(|i| f64::from(i.quantity) * i.price)
            .sum();
        let low_stock = items
            .iter()
            .filter(|i| i.quantity < LOW_STOCK_THRESHOLD)
            .count();
        Self {
            total_items: items.len(),
            total_value,
            low_stock,
        }
    }
}

/// Format a non-negative dollar amount with two decimals and comma thousands
/// separators ("57998.25" -> "57,998.25"). The currency sign lives in the
/// markup, not here.
pub fn format_usd(value: f64) -> String {
    let cents = (value * 100.0).round().max(0.0) as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::new();
    for (i, c) in whole.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let grouped: String = grouped.chars().rev().collect();
    format!("{grouped}.{:02}", cents % 100)
}
