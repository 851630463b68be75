// src/web/forms.rs — Raw POST body and marker dispatch

use serde::Deserialize;

use crate::inventory::Command;

/// Every field either form can submit, all optional. The two submit buttons
/// double as markers: whichever one the browser includes names the intent.
#[derive(Debug, Default, Deserialize)]
pub struct PageForm {
    #[serde(default)]
    pub add_item: Option<String>,
    #[serde(default)]
    pub update_quantity: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub price: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

impl PageForm {
    /// Turn the submission into a command, or `None` when no marker was sent
    /// (a plain re-render). With both markers present, add wins.
    ///
    /// Missing fields become empty strings and fail validation downstream,
    /// the same as submitting them blank.
    pub fn into_command(self) -> Option<Command> {
        if self.add_item.is_some() {
            Some(Command::Add {
                name: self.name.unwrap_or_default(),
                quantity: self.quantity.unwrap_or_default(),
                price: self.price.unwrap_or_default(),
                category: self.category.unwrap_or_default(),
            })
        } else if self.update_quantity.is_some() {
            Some(Command::UpdateQuantity {
                id: self.id.unwrap_or_default(),
                quantity: self.quantity.unwrap_or_default(),
            })
        } else {
            None
        }
    }
}
