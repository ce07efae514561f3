//! Discounts

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;
use thiserror::Error;

use crate::cart::Cart;

/// Errors specific to discount rates.
#[derive(Debug, Error, PartialEq)]
pub enum DiscountError {
    /// The rate is not a fraction between 0 and 1.
    #[error("discount rate {0} is outside 0..=1")]
    OutOfRange(Decimal),
}

/// Fractional discount applied to the subtotal (e.g. `0.10` for 10% off).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Decimal")]
pub struct DiscountRate(Decimal);

impl DiscountRate {
    /// Create a rate.
    ///
    /// # Errors
    ///
    /// Returns [`DiscountError::OutOfRange`] unless `0 <= rate <= 1`.
    pub fn new(rate: Decimal) -> Result<Self, DiscountError> {
        if rate < Decimal::ZERO || rate > Decimal::ONE {
            return Err(DiscountError::OutOfRange(rate));
        }

        Ok(DiscountRate(rate))
    }

    /// The rate as a fraction.
    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for DiscountRate {
    type Error = DiscountError;

    fn try_from(rate: Decimal) -> Result<Self, Self::Error> {
        DiscountRate::new(rate)
    }
}

/// Subtotal, discount and total for a cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartTotals<'a> {
    /// Sum of price × quantity
    pub subtotal: Money<'a, Currency>,

    /// Subtotal × discount rate
    pub discount: Money<'a, Currency>,

    /// Subtotal − discount
    pub total: Money<'a, Currency>,
}

/// Calculate the totals for a cart, with an optional discount.
///
/// Amounts keep full precision; rounding is left to display formatting.
pub fn compute_totals<'a>(
    cart: &Cart,
    discount: Option<DiscountRate>,
    currency: &'a Currency,
) -> CartTotals<'a> {
    let subtotal = cart.subtotal();
    let discount = discount.map_or(Decimal::ZERO, |rate| {
        subtotal.saturating_mul(rate.value())
    });
    let total = subtotal.saturating_sub(discount);

    CartTotals {
        subtotal: Money::from_decimal(subtotal, currency),
        discount: Money::from_decimal(discount, currency),
        total: Money::from_decimal(total, currency),
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::USD;
    use testresult::TestResult;

    use crate::{cart::CartLine, money::format_money, products::ProductId};

    use super::*;

    fn test_cart() -> Cart {
        Cart::with_lines([
            CartLine::new(ProductId(1), "Tee", Decimal::new(1000, 2), "1.jpg", 2),
            CartLine::new(ProductId(2), "Cap", Decimal::new(1999, 2), "2.jpg", 1),
        ])
    }

    #[test]
    fn totals_without_discount() {
        let totals = compute_totals(&test_cart(), None, USD);

        assert_eq!(*totals.subtotal.amount(), Decimal::new(3999, 2));
        assert_eq!(*totals.discount.amount(), Decimal::ZERO);
        assert_eq!(totals.total, totals.subtotal);
    }

    #[test]
    fn totals_with_discount() -> TestResult {
        let rate = DiscountRate::new(Decimal::new(10, 2))?;

        let totals = compute_totals(&test_cart(), Some(rate), USD);

        assert_eq!(*totals.discount.amount(), Decimal::new(3999, 3));
        assert_eq!(*totals.total.amount(), Decimal::new(35991, 3));
        assert_eq!(format_money(&totals.total), "$35.99");

        Ok(())
    }

    #[test]
    fn totals_empty_cart_are_zero() {
        let totals = compute_totals(&Cart::new(), None, USD);

        assert_eq!(format_money(&totals.subtotal), "$0.00");
        assert_eq!(format_money(&totals.total), "$0.00");
    }

    #[test]
    fn totals_of_an_overflowing_cart_saturate() -> TestResult {
        let cart: Cart = serde_json::from_str(
            r#"[
                {"id":1,"name":"A","price":5e28,"image":"a.jpg","quantity":1},
                {"id":2,"name":"B","price":5e28,"image":"b.jpg","quantity":1}
            ]"#,
        )?;

        let totals = compute_totals(&cart, Some(DiscountRate::new(Decimal::new(1, 1))?), USD);

        assert_eq!(*totals.subtotal.amount(), Decimal::MAX);
        assert!(*totals.total.amount() < Decimal::MAX);
        assert!(format_money(&totals.total).starts_with('$'));

        Ok(())
    }

    #[test]
    fn rate_rejects_out_of_range() {
        assert_eq!(
            DiscountRate::new(Decimal::new(15, 1)),
            Err(DiscountError::OutOfRange(Decimal::new(15, 1)))
        );
        assert!(DiscountRate::new(Decimal::new(-1, 1)).is_err());
    }

    #[test]
    fn rate_deserializes_from_number() -> TestResult {
        let rate: DiscountRate = serde_json::from_str("0.25")?;

        assert_eq!(rate.value(), Decimal::new(25, 2));

        Ok(())
    }
}
