//! Cart page

use rusty_money::iso::Currency;

use crate::{
    cart::Cart,
    discounts::{DiscountRate, compute_totals},
    money::{format_amount, format_money},
    products::ProductId,
};

/// Row text shown in place of the lines when the cart is empty.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Number of columns in the cart table.
pub const CART_TABLE_COLUMNS: u32 = 6;

/// Width attribute of the product thumbnail in each row.
pub const CART_IMAGE_WIDTH: &str = "50";

/// Render model for one cart table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    /// Product id, carried on the row and its quantity field
    pub id: ProductId,

    /// Image source
    pub image: String,

    /// Product name
    pub name: String,

    /// Formatted unit price
    pub unit_price: String,

    /// Current quantity
    pub quantity: u32,

    /// Formatted price × quantity
    pub line_total: String,
}

/// Render model for the whole cart table and its totals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartPageModel {
    /// One row per cart line, in cart order
    pub rows: Vec<CartRow>,

    /// Formatted subtotal
    pub subtotal: String,

    /// Formatted discount
    pub discount: String,

    /// Formatted total
    pub total: String,
}

impl CartPageModel {
    /// Build the page from the current cart and discount.
    pub fn build(cart: &Cart, discount: Option<DiscountRate>, currency: &'static Currency) -> Self {
        let rows = cart
            .iter()
            .map(|line| CartRow {
                id: line.id,
                image: line.image.clone(),
                name: line.name.clone(),
                unit_price: format_amount(line.price, currency),
                quantity: line.quantity,
                line_total: format_amount(line.line_total(), currency),
            })
            .collect();

        let totals = compute_totals(cart, discount, currency);

        CartPageModel {
            rows,
            subtotal: format_money(&totals.subtotal),
            discount: format_money(&totals.discount),
            total: format_money(&totals.total),
        }
    }

    /// The empty-state row replaces the line rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
