//! # Line Items
//!
//! One product entry in the cart with its quantity.

use crate::money::Price;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// The serde layout matches the persisted record shape:
/// `{"id": ..., "name": ..., "price": ..., "quantity": ...}`.
///
/// Invariant: `quantity >= 1`. An item whose quantity reaches zero is
/// removed from the cart, never stored at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product identifier, unique within the cart
    pub id: String,

    /// Display name (denormalized for rendering)
    pub name: String,

    /// Unit price
    #[serde(rename = "price")]
    pub unit_price: Price,

    /// Quantity, always >= 1
    pub quantity: u32,
}

impl LineItem {
    /// Create a line item with quantity 1.
    pub fn new(id: impl Into<String>, name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
            quantity: 1,
        }
    }

    /// Total for this line (`unit_price * quantity`).
    pub fn line_total(&self) -> Price {
        Price::from_paise(self.unit_price.paise() * self.quantity as i64)
    }
}
