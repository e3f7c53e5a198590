//! # Cart Model
//!
//! The in-memory cart: an ordered list of line items with find-or-create
//! semantics on add. Mutations here are pure; persistence, rendering, and
//! navigation are the owning application's concern, so every operation is
//! independently testable.

use crate::item::LineItem;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Result of a quantity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// Quantity updated to the contained value
    Updated(u32),
    /// Quantity dropped below 1 and the item was removed
    Removed,
    /// No item with that id; nothing happened
    NotFound,
}

/// An ordered sequence of line items. Insertion order is display order,
/// and there is at most one line item per product id.
///
/// Serializes as a bare array of line-item records, matching the
/// persisted-state layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Add a product: increment the existing line item, or append a new
    /// one with quantity 1. Returns the resulting quantity.
    pub fn add(&mut self, id: impl Into<String>, name: impl Into<String>, unit_price: Price) -> u32 {
        let id = id.into();
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity += 1;
            return item.quantity;
        }
        self.items.push(LineItem::new(id, name, unit_price));
        1
    }

    /// Add `delta` to the quantity of the item with `id`. Absent ids are a
    /// no-op. A resulting quantity below 1 removes the item entirely.
    pub fn change_quantity(&mut self, id: &str, delta: i32) -> QuantityChange {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return QuantityChange::NotFound;
        };

        let quantity = item.quantity as i64 + delta as i64;
        if quantity < 1 {
            self.items.retain(|i| i.id != id);
            QuantityChange::Removed
        } else {
            item.quantity = quantity as u32;
            QuantityChange::Updated(quantity as u32)
        }
    }

    /// Remove the item with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        self.items.len() != before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total number of items (sum of quantities) — the header badge number.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Find a line item by product id.
    pub fn get(&self, id: &str) -> Option<&LineItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Line items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }
}
