// src/web/render.rs — Page rendering via minijinja

use std::sync::OnceLock;

use minijinja::{context, Environment};
use serde::Serialize;

use crate::inventory::{format_usd, InventoryItem, Metrics, CATEGORIES};

const PAGE_TEMPLATE: &str = include_str!("templates/page.html");

/// Served verbatim when the template fails to render, keeping the
/// always-200 contract even for a template bug.
pub const FALLBACK_PAGE: &str = "<!DOCTYPE html>\n\
<html lang=\"en\"><head><meta charset=\"UTF-8\">\
<title>Smart Inventory Tracker</title></head>\n\
<body><h1>Smart Inventory Tracker</h1>\
<p>The page could not be displayed. Please try again.</p></body></html>\n";

/// One table row, with display formatting already applied.
#[derive(Debug, Serialize)]
struct ItemView {
    id: u32,
    name: String,
    quantity: u32,
    price: String,
    category: String,
    low_stock: bool,
}

impl From<&InventoryItem> for ItemView {
    fn from(item: &InventoryItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            quantity: item.quantity,
            price: format_usd(item.price),
            category: item.category.clone(),
            low_stock: item.low_stock(),
        }
    }
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        // The ".html" name turns on minijinja's HTML auto-escaping, a second
        // layer over the storage-time escaping in the domain code.
        if let Err(err) = env.add_template("page.html", PAGE_TEMPLATE) {
            tracing::error!("embedded page template failed to parse: {err}");
        }
        env
    })
}

/// Render the full page: metric cards, add form, and the item table.
/// `session_warning` adds the banner shown when the session store is down.
pub fn render_page(
    items: &[InventoryItem],
    session_warning: bool,
) -> Result<String, minijinja::Error> {
    let metrics = Metrics::compute(items);
    let rows: Vec<ItemView> = items.iter().map(ItemView::from).collect();
    environment().get_template("page.html")?.render(context! {
        session_warning,
        total_items => metrics.total_items,
        total_value => format_usd(metrics.total_value),
        low_stock => metrics.low_stock,
        categories => CATEGORIES,
        items => rows,
    })
}
