//! # cart-app
//!
//! Application layer for paisa-cart-rs: the storefront controller that
//! owns the cart, its write-through persistence, the checkout renderer,
//! and the payment widget handoff.
//!
//! ## Flow
//!
//! UI event → `Storefront` mutation → store write-through → `render()` →
//! (on checkout) `pay_now()` → widget → `on_payment_outcome()` →
//! cart cleared and persisted → `Nav::Landing`.
//!
//! ## Example
//!
//! ```rust,ignore
//! use cart_app::{Storefront, StorefrontConfig};
//! use cart_razorpay::{LoggingWidget, RazorpayConfig};
//! use std::sync::Arc;
//!
//! let mut front = Storefront::new(
//!     StorefrontConfig::load()?,
//!     RazorpayConfig::from_env()?,
//!     Arc::new(LoggingWidget),
//! )?;
//!
//! let nav = front.add_to_cart("sku1", "Shoe", Price::from_rupees(600.0))?;
//! assert_eq!(nav, Nav::Checkout);
//!
//! let page = front.render();
//! let attempt = front.pay_now().await?;
//! ```

pub mod config;
pub mod render;
pub mod storefront;

// Re-exports for convenience
pub use config::StorefrontConfig;
pub use render::{apply, render, CartRow, CheckoutPage, CheckoutView, NullView};
pub use storefront::{CheckoutAttempt, Nav, Storefront};
