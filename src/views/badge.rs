//! Cart badge

use crate::cart::Cart;

/// Item count shown next to the cart link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeState {
    /// Total units in the cart.
    pub count: u64,
}

impl BadgeState {
    /// Derive the badge from the cart.
    pub fn from_cart(cart: &Cart) -> Self {
        BadgeState {
            count: cart.item_count(),
        }
    }

    /// The badge is hidden when the cart holds nothing.
    pub fn is_visible(&self) -> bool {
        self.count > 0
    }

    /// Badge text.
    pub fn text(&self) -> String {
        self.count.to_string()
    }

    /// CSS `display` value for the badge element.
    pub fn display(&self) -> &'static str {
        if self.is_visible() { "inline" } else { "none" }
    }
}
