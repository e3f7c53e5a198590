//! # cart-core
//!
//! Core cart model for the paisa-cart storefront.
//!
//! This crate provides:
//! - `Cart` and `LineItem` for the in-memory cart model
//! - `Price` for exact paise arithmetic
//! - `compute_totals` / `ShippingPolicy` for the pricing calculator
//! - `CartStore` over a `StorageBackend` for write-through persistence
//! - `CartError` for typed error handling
//!
//! ## Example
//!
//! ```rust
//! use cart_core::{compute_totals, Cart, CartStore, MemoryBackend, Price, ShippingPolicy};
//!
//! let store = CartStore::new(Box::new(MemoryBackend::new()), "shopping-cart");
//! let mut cart = store.load();
//!
//! cart.add("sku1", "Shoe", Price::from_rupees(600.0));
//! store.save(&cart).unwrap();
//!
//! let totals = compute_totals(&cart, &ShippingPolicy::default());
//! assert_eq!(totals.grand_total, Price::from_rupees(650.0));
//! ```

pub mod cart;
pub mod error;
pub mod item;
pub mod money;
pub mod pricing;
pub mod store;

// Re-exports for convenience
pub use cart::{Cart, QuantityChange};
pub use error::{CartError, CartResult};
pub use item::LineItem;
pub use money::{Price, CURRENCY_CODE};
pub use pricing::{compute_totals, PricingSnapshot, ShippingPolicy};
pub use store::{CartStore, FileBackend, MemoryBackend, StorageBackend};
