//! Products

use std::fmt;

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

use crate::money::{PriceError, parse_display_price};

/// Product identifier, unique within a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u64);

impl ProductId {
    /// Resolve an id from user-facing text (a query parameter or a data attribute).
    ///
    /// Leading-integer semantics apply, so `"3abc"` resolves to `3`. Negative
    /// and non-numeric input resolves to nothing.
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        crate::views::input::parse_leading_int(raw)
            .and_then(|value| u64::try_from(value).ok())
            .map(ProductId)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(value: u64) -> Self {
        ProductId(value)
    }
}

/// Product
///
/// A read-only catalog entry as served by the static catalog document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product id
    pub id: ProductId,

    /// Product name
    pub name: String,

    /// Brand shown above the name on listing cards
    pub brand: String,

    /// Image path or URL
    pub image: String,

    /// Display price including the currency symbol (e.g. `"$49.99"`)
    pub price: String,

    /// Star rating, expected in `0..=5` but never clamped
    pub rating: i64,
}

impl Product {
    /// Parse the display price into money.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the display price is not a symbol-prefixed decimal.
    pub fn unit_price(
        &self,
        currency: &'static Currency,
    ) -> Result<Money<'static, Currency>, PriceError> {
        parse_display_price(&self.price, currency)
    }
}
