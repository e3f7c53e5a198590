//! # Cart Error Types
//!
//! Typed error handling for the storefront. Fallible operations return
//! `Result<T, CartError>`.

use thiserror::Error;

/// Core error type for cart and checkout operations
#[derive(Debug, Error)]
pub enum CartError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Storage backend read/write failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Checkout attempted with nothing to charge
    #[error("Your cart is empty or the total is zero. Cannot proceed to payment.")]
    NothingToPay,

    /// Payment widget could not be opened
    #[error("Widget error [{provider}]: {message}")]
    WidgetError { provider: String, message: String },

    /// Payment was declined or failed inside the widget
    #[error("Payment failed [{code}]: {description}")]
    PaymentFailed { code: String, description: String },
}

impl CartError {
    /// Returns true if the shopper can simply try again
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            CartError::WidgetError { .. } | CartError::PaymentFailed { .. }
        )
    }

    /// Returns true if this error should be shown to the shopper as a
    /// blocking notice rather than logged and swallowed
    pub fn is_user_notice(&self) -> bool {
        matches!(
            self,
            CartError::NothingToPay | CartError::PaymentFailed { .. }
        )
    }
}

/// Result type alias for cart operations
pub type CartResult<T> = Result<T, CartError>;
