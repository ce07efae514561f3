//! Page detection
//!
//! One bundle serves every page. Each view looks for its own containers and stays
//! inert when they are missing.

/// Listing container id.
pub const LISTING_CONTAINER_ID: &str = "featured-products-container";

/// Single-product container id.
pub const DETAIL_CONTAINER_ID: &str = "product-details";

/// Cart table body id.
pub const CART_ITEMS_ID: &str = "cart-items";

/// Cart subtotal element id.
pub const CART_SUBTOTAL_ID: &str = "cart-subtotal";

/// Cart total element id.
pub const CART_TOTAL_ID: &str = "cart-total";

/// Item count badge id.
pub const BADGE_ID: &str = "cart-count";

/// Query parameter naming the product on the single-product page.
pub const PRODUCT_ID_PARAM: &str = "id";

/// Which containers the current page provides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "one presence flag per page container."
)]
pub struct PageContainers {
    /// `#featured-products-container` is present.
    pub listing: bool,

    /// `#product-details` is present.
    pub detail: bool,

    /// Raw value of the `id` query parameter.
    pub product_id: Option<String>,

    /// `#cart-items` is present.
    pub cart_items: bool,

    /// `#cart-subtotal` is present.
    pub cart_subtotal: bool,

    /// `#cart-total` is present.
    pub cart_total: bool,
}

impl PageContainers {
    /// The listing view has somewhere to render.
    pub fn listing_active(&self) -> bool {
        self.listing
    }

    /// The detail view has a container and a (non-empty) product id.
    pub fn detail_active(&self) -> bool {
        self.detail && self.product_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// The cart page has its table body and both totals elements.
    pub fn cart_active(&self) -> bool {
        self.cart_items && self.cart_subtotal && self.cart_total
    }

    /// Some active view needs the catalog.
    pub fn needs_catalog(&self) -> bool {
        self.listing_active() || self.detail_active()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_pages_are_inert() {
        let page = PageContainers::default();

        assert!(!page.listing_active());
        assert!(!page.detail_active());
        assert!(!page.cart_active());
        assert!(!page.needs_catalog());
    }

    #[test]
    fn detail_needs_container_and_id() {
        let without_id = PageContainers {
            detail: true,
            ..PageContainers::default()
        };
        let empty_id = PageContainers {
            detail: true,
            product_id: Some(String::new()),
            ..PageContainers::default()
        };
        let without_container = PageContainers {
            product_id: Some("3".to_string()),
            ..PageContainers::default()
        };
        let complete = PageContainers {
            detail: true,
            product_id: Some("3".to_string()),
            ..PageContainers::default()
        };

        assert!(!without_id.detail_active());
        assert!(!empty_id.detail_active());
        assert!(!without_container.detail_active());
        assert!(complete.detail_active());
        assert!(complete.needs_catalog());
    }

    #[test]
    fn cart_needs_all_three_elements() {
        let partial = PageContainers {
            cart_items: true,
            cart_subtotal: true,
            ..PageContainers::default()
        };
        let complete = PageContainers {
            cart_total: true,
            ..partial.clone()
        };

        assert!(!partial.cart_active());
        assert!(complete.cart_active());
        assert!(!complete.needs_catalog());
    }
}
