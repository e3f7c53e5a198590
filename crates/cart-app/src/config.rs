//! # Storefront Configuration
//!
//! Merchant display metadata, shipping policy, and storage settings.
//! Loaded from `config/storefront.toml` with built-in defaults, plus
//! environment overrides for the storage location.

use cart_core::ShippingPolicy;
use cart_razorpay::{MerchantInfo, Prefill};
use serde::Deserialize;
use std::path::PathBuf;
use tracing::{info, warn};

fn default_storage_key() -> String {
    "shopping-cart".to_string()
}

/// Storefront configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorefrontConfig {
    /// Merchant display metadata passed to the payment widget
    #[serde(default)]
    pub merchant: MerchantInfo,

    /// Shipping fee policy (amounts in paise)
    #[serde(default)]
    pub shipping: ShippingPolicy,

    /// Customer prefill block handed to the widget, if known
    #[serde(default)]
    pub prefill: Prefill,

    /// Storage key the serialized cart lives under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Directory for file-backed storage; None means in-memory only
    #[serde(default)]
    pub storage_dir: Option<PathBuf>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            merchant: MerchantInfo::default(),
            shipping: ShippingPolicy::default(),
            prefill: Prefill::default(),
            storage_key: default_storage_key(),
            storage_dir: None,
        }
    }
}

impl StorefrontConfig {
    /// Load from `config/storefront.toml`, falling back to defaults when
    /// no config file is found. `CART_STORAGE_DIR` in the environment
    /// overrides the configured storage directory.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::load_from_file()?;

        if let Ok(dir) = std::env::var("CART_STORAGE_DIR") {
            config.storage_dir = Some(PathBuf::from(dir));
        }

        Ok(config)
    }

    fn load_from_file() -> anyhow::Result<Self> {
        let config_paths = [
            "config/storefront.toml",
            "../config/storefront.toml",
            "../../config/storefront.toml",
        ];

        for path in config_paths {
            if let Ok(content) = std::fs::read_to_string(path) {
                let config: Self = toml::from_str(&content)
                    .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
                info!("Loaded storefront config from {}", path);
                return Ok(config);
            }
        }

        warn!("No storefront config found, using defaults");
        Ok(Self::default())
    }

    /// Parse from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cart_core::Price;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();

        assert_eq!(config.storage_key, "shopping-cart");
        assert_eq!(config.shipping.flat_fee, Price::from_rupees(50.0));
        assert_eq!(config.shipping.free_over, Price::from_rupees(1000.0));
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_from_toml() {
        let config = StorefrontConfig::from_toml(
            r##"
            storage_key = "amioz-cart"

            [merchant]
            name = "AMIO'Z WORLD"
            description = "Payment for Footwear Order"
            theme_color = "#6d4c41"

            [shipping]
            flat_fee = 5000
            free_over = 100000

            [prefill]
            name = "Test Customer"
            email = "customer@example.com"
            contact = "9999999999"
            "##,
        )
        .unwrap();

        assert_eq!(config.storage_key, "amioz-cart");
        assert_eq!(config.merchant.name, "AMIO'Z WORLD");
        assert_eq!(config.shipping.flat_fee, Price::from_paise(5000));
        assert_eq!(config.prefill.name.as_deref(), Some("Test Customer"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config = StorefrontConfig::from_toml(
            r##"
            [merchant]
            name = "AMIO'Z WORLD"
            description = "Payment for Footwear Order"
            "##,
        )
        .unwrap();

        assert_eq!(config.storage_key, "shopping-cart");
        assert_eq!(config.merchant.theme_color, "#6d4c41");
        assert_eq!(config.shipping, ShippingPolicy::default());
        assert!(config.prefill.is_empty());
    }
}
