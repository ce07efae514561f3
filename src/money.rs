//! Money

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

/// Errors that can occur while parsing a display price.
#[derive(Debug, Error, PartialEq)]
pub enum PriceError {
    /// The price string was empty once the currency symbol was removed.
    #[error("price is empty")]
    Empty,

    /// The remaining amount could not be parsed as a decimal number.
    #[error("invalid price: {0}")]
    Invalid(String),
}

/// Parse a catalog display price (e.g. `"$49.99"`) into money.
///
/// The currency symbol is optional, so `"49.99"` parses to the same amount.
///
/// # Errors
///
/// - [`PriceError::Empty`]: nothing but the symbol (or whitespace) was given.
/// - [`PriceError::Invalid`]: the amount is not a decimal number.
pub fn parse_display_price(
    price: &str,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PriceError> {
    let trimmed = price.trim();
    let amount = trimmed
        .strip_prefix(currency.symbol)
        .unwrap_or(trimmed)
        .trim();

    if amount.is_empty() {
        return Err(PriceError::Empty);
    }

    let amount =
        Decimal::from_str(amount).map_err(|_err| PriceError::Invalid(price.to_string()))?;

    Ok(Money::from_decimal(amount, currency))
}

/// Format money for display: currency symbol, two decimal places, sign first.
///
/// Rounding happens here and nowhere else; stored amounts keep full precision.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format_amount(*money.amount(), money.currency())
}

/// Format a bare decimal amount in the given currency.
pub fn format_amount(amount: Decimal, currency: &Currency) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!("{sign}{}{:.2}", currency.symbol, rounded.abs())
}
