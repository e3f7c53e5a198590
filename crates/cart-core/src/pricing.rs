//! # Pricing Calculator
//!
//! Derives subtotal, shipping, and grand total from the cart. Snapshots are
//! recomputed on demand and never cached across mutations.

use crate::cart::Cart;
use crate::money::Price;
use serde::{Deserialize, Serialize};

/// Shipping fee policy: a flat fee, waived above a subtotal threshold.
///
/// Amounts deserialize as paise (e.g., `flat_fee = 5000` is ₹50.00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingPolicy {
    /// Flat shipping fee charged below the threshold
    #[serde(default = "default_flat_fee")]
    pub flat_fee: Price,

    /// Subtotals strictly above this ship free
    #[serde(default = "default_free_over")]
    pub free_over: Price,
}

fn default_flat_fee() -> Price {
    Price::from_rupees(50.0)
}

fn default_free_over() -> Price {
    Price::from_rupees(1000.0)
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        Self {
            flat_fee: default_flat_fee(),
            free_over: default_free_over(),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged for a given subtotal. Free above the threshold,
    /// and nothing is charged unless there is a positive subtotal to
    /// ship.
    pub fn fee_for(&self, subtotal: Price) -> Price {
        if subtotal.paise() <= 0 || subtotal > self.free_over {
            Price::ZERO
        } else {
            self.flat_fee
        }
    }
}

/// Derived totals for the current cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingSnapshot {
    pub subtotal: Price,
    pub shipping: Price,
    pub grand_total: Price,
}

impl PricingSnapshot {
    /// The "nothing to pay" signal used by the payment handoff: a grand
    /// total that is zero or negative must never reach the widget.
    pub fn nothing_to_pay(&self) -> bool {
        self.grand_total.paise() <= 0
    }
}

/// Compute totals for the cart. Pure: the same cart and policy always
/// yield the same snapshot.
pub fn compute_totals(cart: &Cart, policy: &ShippingPolicy) -> PricingSnapshot {
    let subtotal: Price = cart.items().iter().map(|i| i.line_total()).sum();
    let shipping = policy.fee_for(subtotal);

    PricingSnapshot {
        subtotal,
        shipping,
        grand_total: subtotal + shipping,
    }
}
