//! # cart-razorpay
//!
//! Razorpay checkout widget handoff for paisa-cart-rs.
//!
//! The widget is hosted by the page that includes `checkout.js`; this
//! crate builds its invocation payload, holds the key configuration, and
//! turns its callbacks into typed payment outcomes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cart_razorpay::{LoggingWidget, PaymentWidget, RazorpayConfig, MerchantInfo, WidgetOptions};
//!
//! // Key comes from the environment, never from source
//! let config = RazorpayConfig::from_env()?;
//!
//! let options = WidgetOptions::build(&config, &merchant, grand_total, &order_ref);
//! widget.open(&options).await?;
//! ```
//!
//! ## Outcome Handling
//!
//! ```rust,ignore
//! use cart_razorpay::{dispatch_payment_outcome, CheckoutHandler, PaymentOutcome};
//!
//! let outcome = PaymentOutcome::from_success_json(callback_body, &order_ref)?;
//! dispatch_payment_outcome(&handler, outcome)?;
//! ```

pub mod config;
pub mod outcome;
pub mod widget;

// Re-exports
pub use config::RazorpayConfig;
pub use outcome::{
    dispatch_payment_outcome, CheckoutHandler, FailurePayload, LoggingCheckoutHandler,
    PaymentConfirmation, PaymentOutcome, SuccessPayload,
};
pub use widget::{
    LoggingWidget, MerchantInfo, PaymentWidget, Prefill, SharedPaymentWidget, Theme, WidgetOptions,
};
