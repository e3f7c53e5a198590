//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay checkout widget.
//! The integration key is loaded from the environment, never embedded in
//! client code.

use cart_core::CartError;
use std::env;

/// Razorpay widget configuration
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// Key ID (rzp_test_... or rzp_live_...)
    pub key_id: String,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_ID`
    pub fn from_env() -> Result<Self, CartError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let key_id = env::var("RAZORPAY_KEY_ID")
            .map_err(|_| CartError::Configuration("RAZORPAY_KEY_ID not set".to_string()))?;

        if !key_id.starts_with("rzp_test_") && !key_id.starts_with("rzp_live_") {
            return Err(CartError::Configuration(
                "RAZORPAY_KEY_ID must start with rzp_test_ or rzp_live_".to_string(),
            ));
        }

        Ok(Self { key_id })
    }

    /// Create config with an explicit key (for testing)
    pub fn new(key_id: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
        }
    }

    /// Check if using a test key
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using a live key
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }
}
