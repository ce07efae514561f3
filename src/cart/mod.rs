//! Cart

use rust_decimal::Decimal;
use rusty_money::iso::Currency;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::{
    money::PriceError,
    products::{Product, ProductId},
};

pub mod store;

/// One product entry in the cart.
///
/// Name, image and price are snapshots taken when the product was added and are
/// never refreshed from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Catalog product id
    pub id: ProductId,

    /// Product name at add-time
    pub name: String,

    /// Unit price at add-time, without currency symbol
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    /// Product image at add-time
    pub image: String,

    /// Quantity, always at least 1
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

/// Clamp a quantity to the range a line can hold.
fn clamp_quantity(quantity: i64) -> u32 {
    u32::try_from(quantity.max(1)).unwrap_or(u32::MAX)
}

/// Persisted quantities may be zero or negative; both are raised to 1.
fn deserialize_quantity<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    i64::deserialize(deserializer).map(clamp_quantity)
}

impl CartLine {
    /// Create a new line; a zero quantity is raised to 1.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Decimal,
        image: impl Into<String>,
        quantity: u32,
    ) -> Self {
        CartLine {
            id,
            name: name.into(),
            price,
            image: image.into(),
            quantity: quantity.max(1),
        }
    }

    /// Snapshot a catalog product into a line.
    ///
    /// # Errors
    ///
    /// Returns a [`PriceError`] if the product's display price cannot be parsed.
    pub fn from_product(
        product: &Product,
        quantity: u32,
        currency: &'static Currency,
    ) -> Result<Self, PriceError> {
        let price = product.unit_price(currency)?;

        Ok(CartLine::new(
            product.id,
            product.name.clone(),
            *price.amount(),
            product.image.clone(),
            quantity,
        ))
    }

    /// Price multiplied by quantity, saturating at the largest representable amount.
    pub fn line_total(&self) -> Decimal {
        let quantity = Decimal::from(self.quantity);

        self.price.checked_mul(quantity).unwrap_or_else(|| {
            warn!(
                id = %self.id,
                price = %self.price,
                quantity = self.quantity,
                "line total overflows"
            );
            self.price.saturating_mul(quantity)
        })
    }
}

/// Cart
///
/// Ordered lines, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Create a cart from existing lines, merging any repeated ids.
    pub fn with_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Cart::new();

        for line in lines {
            cart.add(line);
        }

        cart
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Iterate over lines in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CartLine> {
        self.lines.iter()
    }

    /// Get the number of lines in the cart.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line for a product.
    pub fn get(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity over all lines, saturating rather than overflowing.
    pub fn subtotal(&self) -> Decimal {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Decimal::ZERO, |sum, amount| {
                sum.checked_add(amount).unwrap_or_else(|| {
                    warn!(%sum, %amount, "cart subtotal overflows");
                    sum.saturating_add(amount)
                })
            })
    }

    /// Add a line, merging into the existing line for the same product.
    pub fn add(&mut self, line: CartLine) {
        match self.lines.iter_mut().find(|existing| existing.id == line.id) {
            Some(existing) => {
                existing.quantity = existing.quantity.saturating_add(line.quantity);
            }
            None => self.lines.push(line),
        }
    }

    /// Set a line's quantity, clamped to at least 1.
    ///
    /// Returns `false` if no line has the given id.
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> bool {
        let Some(line) = self.lines.iter_mut().find(|line| line.id == id) else {
            return false;
        };

        line.quantity = clamp_quantity(quantity);

        true
    }

    /// Remove the line for a product.
    ///
    /// Returns `false` if no line has the given id.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.lines.len();

        self.lines.retain(|line| line.id != id);

        self.lines.len() != before
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        let lines = lines
            .into_iter()
            .map(|line| CartLine {
                quantity: line.quantity.max(1),
                ..line
            })
            .collect();

        Cart { lines }
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a CartLine;
    type IntoIter = std::slice::Iter<'a, CartLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
