//! # Widget Invocation
//!
//! Builds the Razorpay checkout options payload and defines the seam the
//! storefront uses to open the widget. The widget itself runs on the host
//! page; this crate only speaks its documented invocation contract.

use crate::config::RazorpayConfig;
use async_trait::async_trait;
use cart_core::{CartResult, Price, CURRENCY_CODE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Merchant display metadata shown inside the widget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MerchantInfo {
    /// Merchant display name
    pub name: String,

    /// Order description line
    pub description: String,

    /// Logo shown in the widget header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,

    /// Widget accent color (hex)
    #[serde(default = "default_theme_color")]
    pub theme_color: String,
}

fn default_theme_color() -> String {
    "#6d4c41".to_string()
}

impl Default for MerchantInfo {
    fn default() -> Self {
        Self {
            name: "Storefront".to_string(),
            description: "Payment for order".to_string(),
            logo_url: None,
            theme_color: default_theme_color(),
        }
    }
}

/// Customer prefill block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

impl Prefill {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.contact.is_none()
    }
}

/// Widget theme block
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub color: String,
}

/// The documented Razorpay invocation payload.
///
/// `amount` is in paise; the widget rejects decimal amounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub key: String,
    pub amount: i64,
    pub currency: String,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefill: Option<Prefill>,
    pub theme: Theme,
    /// Free-form metadata echoed back in the payment record
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub notes: HashMap<String, String>,
}

impl WidgetOptions {
    /// Build the payload for a checkout attempt.
    pub fn build(
        config: &RazorpayConfig,
        merchant: &MerchantInfo,
        amount: Price,
        order_ref: &str,
    ) -> Self {
        let mut notes = HashMap::new();
        notes.insert("order_ref".to_string(), order_ref.to_string());

        Self {
            key: config.key_id.clone(),
            amount: amount.paise(),
            currency: CURRENCY_CODE.to_string(),
            name: merchant.name.clone(),
            description: merchant.description.clone(),
            image: merchant.logo_url.clone(),
            prefill: None,
            theme: Theme {
                color: merchant.theme_color.clone(),
            },
            notes,
        }
    }

    /// Builder: attach a customer prefill block
    pub fn with_prefill(mut self, prefill: Prefill) -> Self {
        if !prefill.is_empty() {
            self.prefill = Some(prefill);
        }
        self
    }

    /// The order reference this payload was built for
    pub fn order_ref(&self) -> Option<&str> {
        self.notes.get("order_ref").map(|s| s.as_str())
    }
}

/// Seam for opening the checkout widget.
///
/// `open` returns as soon as the widget is presented; the payment outcome
/// arrives later through [`crate::outcome::PaymentOutcome`], triggered by
/// the widget's callbacks at a time this system does not control.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Present the widget with the given payload.
    async fn open(&self, options: &WidgetOptions) -> CartResult<()>;

    /// Provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared widget (dynamic dispatch)
pub type SharedPaymentWidget = Arc<dyn PaymentWidget>;

/// Widget stand-in that logs the payload instead of presenting anything.
/// Useful in development and host pages without the checkout script.
pub struct LoggingWidget;

#[async_trait]
impl PaymentWidget for LoggingWidget {
    async fn open(&self, options: &WidgetOptions) -> CartResult<()> {
        info!(
            amount = options.amount,
            currency = %options.currency,
            order_ref = options.order_ref().unwrap_or("unknown"),
            "would open checkout widget"
        );
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn merchant() -> MerchantInfo {
        MerchantInfo {
            name: "AMIO'Z WORLD".to_string(),
            description: "Payment for Footwear Order".to_string(),
            logo_url: Some("https://amioz.example/logo.png".to_string()),
            theme_color: "#6d4c41".to_string(),
        }
    }

    #[test]
    fn test_build_payload() {
        let config = RazorpayConfig::new("rzp_test_abc123");
        let options =
            WidgetOptions::build(&config, &merchant(), Price::from_rupees(650.0), "ord-1");

        assert_eq!(options.key, "rzp_test_abc123");
        assert_eq!(options.amount, 65000);
        assert_eq!(options.currency, "INR");
        assert_eq!(options.name, "AMIO'Z WORLD");
        assert_eq!(options.order_ref(), Some("ord-1"));
    }

    #[test]
    fn test_payload_json_shape() {
        let config = RazorpayConfig::new("rzp_test_abc123");
        let options =
            WidgetOptions::build(&config, &merchant(), Price::from_rupees(650.0), "ord-1");

        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json["amount"], 65000);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["theme"]["color"], "#6d4c41");
        // No prefill attached, so the key is absent entirely
        assert!(json.get("prefill").is_none());
    }

    #[test]
    fn test_empty_prefill_is_dropped() {
        let config = RazorpayConfig::new("rzp_test_abc123");
        let options = WidgetOptions::build(&config, &merchant(), Price::from_rupees(1.0), "ord-1")
            .with_prefill(Prefill::default());

        assert!(options.prefill.is_none());
    }

    #[tokio::test]
    async fn test_logging_widget_accepts_payload() {
        let config = RazorpayConfig::new("rzp_test_abc123");
        let options =
            WidgetOptions::build(&config, &merchant(), Price::from_rupees(650.0), "ord-1");

        assert!(LoggingWidget.open(&options).await.is_ok());
    }
}
