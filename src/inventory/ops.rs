// src/inventory/ops.rs — Add and update commands with their validation rules

use thiserror::Error;

use crate::inventory::InventoryItem;
use crate::util::escape_html;

/// A mutation parsed off the submitted form. Fields carry the raw submitted
/// text; validation happens in [`apply`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Add {
        name: String,
        quantity: String,
        price: String,
        category: String,
    },
    UpdateQuantity {
        id: String,
        quantity: String,
    },
}

/// What a successfully applied command did to the list.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Added { id: u32 },
    Updated { id: u32 },
    /// Update named an id no item carries. The list is unchanged but the
    /// caller still re-persists it.
    NoSuchItem { id: i64 },
}

/// Why a command was dropped. Never surfaced to the visitor, only logged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("item name is empty")]
    EmptyName,
    #[error("category is empty")]
    EmptyCategory,
    #[error("{field} is not numeric: {value:?}")]
    NotNumeric { field: &'static str, value: String },
}

/// Apply `cmd` to `items` in place.
///
/// A validation failure leaves the list untouched and the caller must not
/// persist. Every `Ok` case, including [`Applied::NoSuchItem`], requires the
/// caller to write the list back to the session.
pub fn apply(items: &mut Vec<InventoryItem>, cmd: &Command) -> Result<Applied, ValidationError> {
    match cmd {
        Command::Add {
            name,
            quantity,
            price,
            category,
        } => {
            // Check order matters: only the first failure is reported.
            if name.is_empty() {
                return Err(ValidationError::EmptyName);
            }
            let quantity = parse_numeric("quantity", quantity)?;
            let price = parse_numeric("price", price)?;
            if category.is_empty() {
                return Err(ValidationError::EmptyCategory);
            }
            let item = InventoryItem {
                // Count-based, not max-id-based. Items cannot be removed, so
                // ids stay unique and dense.
                id: items.len() as u32 + 1,
                name: escape_html(name),
                quantity: clamp_quantity(quantity),
                price: price.max(0.0),
                category: escape_html(category),
            };
            let id = item.id;
            items.push(item);
            Ok(Applied::Added { id })
        }
        Command::UpdateQuantity { id, quantity } => {
            let id = parse_numeric("id", id)?;
            let quantity = parse_numeric("quantity", quantity)?;
            // "2.9" targets item 2: ids are matched after integer truncation.
            let target = id as i64;
            let quantity = clamp_quantity(quantity);
            for item in items.iter_mut() {
                if i64::from(item.id) == target {
                    item.quantity = quantity;
                    return Ok(Applied::Updated { id: item.id });
                }
            }
            Ok(Applied::NoSuchItem { id: target })
        }
    }
}

/// Accepts what the page can submit as a number: optional surrounding
/// whitespace around a plain or scientific-notation literal. Infinities and
/// NaN are rejected.
fn parse_numeric(field: &'static str, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ValidationError::NotNumeric {
            field,
            value: raw.to_string(),
        }),
    }
}

/// Truncate toward zero and clamp into u32 range. Negative submissions
/// become 0.
fn clamp_quantity(v: f64) -> u32 {
    // `as` saturates at the type bounds and truncates the fraction.
    v.max(0.0) as u32
}
