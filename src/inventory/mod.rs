// src/inventory/mod.rs — Inventory domain: items, mutations, metrics

pub mod metrics;
pub mod ops;

pub use metrics::{format_usd, Metrics};
pub use ops::{apply, Applied, Command, ValidationError};

use serde::{Deserialize, Serialize};

/// Quantity below which an item counts as low stock.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Categories offered by the add form's dropdown. The server stores any
/// non-empty category; this list only drives the markup.
pub const CATEGORIES: [&str; 4] = ["Electronics", "Accessories", "Clothing", "Other"];

/// A single tracked stock item.
///
/// `name` and `category` are HTML-escaped before they reach this struct, so
/// stored text is always inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    pub category: String,
}

impl InventoryItem {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        quantity: u32,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            quantity,
            price,
            category: category.into(),
        }
    }

    pub fn low_stock(&self) -> bool {
        self.quantity < LOW_STOCK_THRESHOLD
    }
}

/// The three records every fresh session starts with.
pub fn seed_items() -> Vec<InventoryItem> {
    vec![
        InventoryItem::new(1, "Laptop", 25, 999.99, "Electronics"),
        InventoryItem::new(2, "Smartphone", 50, 499.99, "Electronics"),
        InventoryItem::new(3, "Headphones", 100, 79.99, "Accessories"),
    ]
}
