//! Storefront configuration

use rusty_money::iso::{self, Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::{cart::store::DEFAULT_CART_KEY, discounts::DiscountRate, products::ProductId};

/// Errors raised while reading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The currency code is not an ISO 4217 code.
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Storefront settings shared by every page.
///
/// Every field has a default, so an empty document (`{}`) is a valid configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Key the cart is persisted under.
    pub storage_key: String,

    /// Catalog document path, relative to the page.
    pub catalog_path: String,

    /// Single-product page that listing cards link to.
    pub product_page: String,

    /// Show a blocking confirmation after every add-to-cart.
    pub confirm_on_add: bool,

    /// ISO 4217 code of the display currency.
    pub currency: String,

    /// Discount rate applied on the cart page, if any.
    pub discount_rate: Option<DiscountRate>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_CART_KEY.to_string(),
            catalog_path: "products.json".to_string(),
            product_page: "sproduct.html".to_string(),
            confirm_on_add: true,
            currency: "USD".to_string(),
            discount_rate: None,
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON configuration document, defaulting any missing field.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is not valid JSON or a
    /// field has the wrong type.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolve the display currency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownCurrency`] for an unrecognised code.
    pub fn currency(&self) -> Result<&'static Currency, ConfigError> {
        iso::find(&self.currency)
            .ok_or_else(|| ConfigError::UnknownCurrency(self.currency.clone()))
    }

    /// Link to the single-product page for a product.
    pub fn product_href(&self, id: ProductId) -> String {
        format!("{}?id={id}", self.product_page)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn empty_document_is_default() -> TestResult {
        let config = StorefrontConfig::from_json("{}")?;

        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.storage_key, "cart");
        assert_eq!(config.catalog_path, "products.json");

        Ok(())
    }

    #[test]
    fn partial_document_overrides_fields() -> TestResult {
        let config =
            StorefrontConfig::from_json(r#"{"confirm_on_add": false, "discount_rate": 0.1}"#)?;

        assert!(!config.confirm_on_add);
        assert_eq!(
            config.discount_rate.map(|rate| rate.value()),
            Some(Decimal::new(1, 1))
        );

        Ok(())
    }

    #[test]
    fn out_of_range_discount_is_rejected() {
        assert!(matches!(
            StorefrontConfig::from_json(r#"{"discount_rate": 2}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn currency_resolves_iso_code() -> TestResult {
        let currency = StorefrontConfig::default().currency()?;

        assert_eq!(currency, iso::USD);

        Ok(())
    }

    #[test]
    fn unknown_currency_errors() {
        let config = StorefrontConfig {
            currency: "XYZ".to_string(),
            ..StorefrontConfig::default()
        };

        assert!(matches!(
            config.currency(),
            Err(ConfigError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }

    #[test]
    fn product_href_uses_query_parameter() {
        let config = StorefrontConfig::default();

        assert_eq!(config.product_href(ProductId(4)), "sproduct.html?id=4");
    }
}
