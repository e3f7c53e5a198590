//! # Payment Outcomes
//!
//! Parses and dispatches the widget's callback payloads. The source flow
//! only ever registered a success handler, which made a declined card
//! indistinguishable from a closed widget; here every terminal state of
//! the widget is an explicit variant.

use cart_core::{CartError, CartResult};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Confirmation carried by the widget's success callback.
#[derive(Debug, Clone)]
pub struct PaymentConfirmation {
    /// Opaque payment identifier issued by the provider
    pub payment_id: String,

    /// Our order reference for this checkout attempt
    pub order_ref: String,

    /// When the confirmation was received
    pub confirmed_at: DateTime<Utc>,
}

impl PaymentConfirmation {
    pub fn new(payment_id: impl Into<String>, order_ref: impl Into<String>) -> Self {
        Self {
            payment_id: payment_id.into(),
            order_ref: order_ref.into(),
            confirmed_at: Utc::now(),
        }
    }
}

/// Terminal state of one widget presentation.
#[derive(Debug, Clone)]
pub enum PaymentOutcome {
    /// Payment captured; carries the confirmation token
    Completed(PaymentConfirmation),
    /// Payment attempted and declined or errored inside the widget
    Failed { code: String, description: String },
    /// Shopper closed the widget without paying
    Dismissed,
}

/// Success callback payload (`handler` in the widget contract).
#[derive(Debug, Deserialize)]
pub struct SuccessPayload {
    pub razorpay_payment_id: String,
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

/// Failure callback payload (`payment.failed` in the widget contract).
#[derive(Debug, Deserialize)]
pub struct FailurePayload {
    pub error: FailureDetail,
}

#[derive(Debug, Deserialize)]
pub struct FailureDetail {
    pub code: String,
    pub description: String,
    #[serde(default)]
    pub reason: Option<String>,
}

impl PaymentOutcome {
    /// Parse a success callback body into an outcome.
    pub fn from_success_json(body: &str, order_ref: &str) -> CartResult<Self> {
        let payload: SuccessPayload = serde_json::from_str(body)
            .map_err(|e| CartError::Serialization(format!("success payload: {}", e)))?;
        Ok(PaymentOutcome::Completed(PaymentConfirmation::new(
            payload.razorpay_payment_id,
            order_ref,
        )))
    }

    /// Parse a failure callback body into an outcome.
    pub fn from_failure_json(body: &str) -> CartResult<Self> {
        let payload: FailurePayload = serde_json::from_str(body)
            .map_err(|e| CartError::Serialization(format!("failure payload: {}", e)))?;
        Ok(PaymentOutcome::Failed {
            code: payload.error.code,
            description: payload.error.description,
        })
    }
}

/// Handler for terminal widget states.
///
/// Dismissal defaults to a no-op: closing the widget is not an error,
/// the cart stays as it was.
pub trait CheckoutHandler {
    /// Payment captured. Fulfil the order (clear the cart, persist).
    fn on_payment_completed(&self, confirmation: &PaymentConfirmation) -> CartResult<()>;

    /// Payment declined or errored. Surface a distinguishable failure.
    fn on_payment_failed(&self, code: &str, description: &str) -> CartResult<()>;

    /// Widget closed without a payment attempt completing.
    fn on_widget_dismissed(&self) -> CartResult<()> {
        Ok(())
    }
}

/// Route an outcome to the matching handler method.
pub fn dispatch_payment_outcome(
    handler: &dyn CheckoutHandler,
    outcome: PaymentOutcome,
) -> CartResult<()> {
    match outcome {
        PaymentOutcome::Completed(confirmation) => {
            info!(payment_id = %confirmation.payment_id, "payment completed");
            handler.on_payment_completed(&confirmation)
        }
        PaymentOutcome::Failed { code, description } => {
            warn!(%code, %description, "payment failed");
            handler.on_payment_failed(&code, &description)
        }
        PaymentOutcome::Dismissed => {
            debug!("checkout widget dismissed");
            handler.on_widget_dismissed()
        }
    }
}

/// Handler that just logs each outcome. Useful as a default and in tests.
pub struct LoggingCheckoutHandler;

impl CheckoutHandler for LoggingCheckoutHandler {
    fn on_payment_completed(&self, confirmation: &PaymentConfirmation) -> CartResult<()> {
        info!(
            payment_id = %confirmation.payment_id,
            order_ref = %confirmation.order_ref,
            "order paid"
        );
        Ok(())
    }

    fn on_payment_failed(&self, code: &str, description: &str) -> CartResult<()> {
        warn!(%code, %description, "order payment failed");
        Ok(())
    }
}
