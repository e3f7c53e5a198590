//! # Money
//!
//! Rupee amounts for the storefront.
//! All arithmetic happens in paise (INR subunits) so totals handed to the
//! payment widget are exact integers, never rounded floats.

use serde::{Deserialize, Serialize};

/// ISO 4217 code for the single currency the storefront charges in.
pub const CURRENCY_CODE: &str = "INR";

/// An INR amount, held in paise.
///
/// Serializes as a bare integer, so a persisted cart record stays a flat
/// `{id, name, price, quantity}` object.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price {
    paise: i64,
}

impl Price {
    /// Zero rupees.
    pub const ZERO: Price = Price { paise: 0 };

    /// Create a price from a decimal rupee amount, rounding to the nearest
    /// paisa. This is the one place decimal-to-subunit conversion happens.
    pub fn from_rupees(rupees: f64) -> Self {
        Self {
            paise: (rupees * 100.0).round() as i64,
        }
    }

    /// Create a price directly from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self { paise }
    }

    /// Amount in paise.
    pub fn paise(&self) -> i64 {
        self.paise
    }

    /// Amount as decimal rupees.
    pub fn as_rupees(&self) -> f64 {
        self.paise as f64 / 100.0
    }

    pub fn is_zero(&self) -> bool {
        self.paise == 0
    }

    /// Format for display (e.g., "₹600.00").
    pub fn display(&self) -> String {
        format!("₹{:.2}", self.as_rupees())
    }
}

impl std::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            paise: self.paise + rhs.paise,
        }
    }
}

impl std::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}
