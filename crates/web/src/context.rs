//! Cart context

use leptos::prelude::*;
use storefront::{
    cart::{Cart, CartLine, store::CartStore},
    config::StorefrontConfig,
    products::ProductId,
};

use crate::{dom, storage::BrowserStorage};

/// Message shown after a successful add-to-cart.
pub const ADDED_MESSAGE: &str = "Product added to cart!";

/// The page's cart: persisted state plus the signal views and the badge read.
///
/// Every mutation goes through [`CartStore`], so storage is written before the
/// signal changes and the badge refreshes.
#[derive(Debug, Clone)]
pub struct CartContext {
    store: CartStore<BrowserStorage>,
    cart: RwSignal<Cart>,
    confirm_on_add: bool,
}

impl CartContext {
    /// Load the persisted cart for this page.
    pub fn load(config: &StorefrontConfig) -> Self {
        Self::with_store(
            CartStore::new(BrowserStorage, config.storage_key.clone()),
            config.confirm_on_add,
        )
    }

    fn with_store(store: CartStore<BrowserStorage>, confirm_on_add: bool) -> Self {
        let cart = RwSignal::new(store.load());

        Self {
            store,
            cart,
            confirm_on_add,
        }
    }

    /// Current cart state.
    pub fn cart(&self) -> RwSignal<Cart> {
        self.cart
    }

    /// Add a line and confirm to the shopper.
    pub fn add(&self, line: CartLine) {
        let cart = self.store.add_item(self.cart.get_untracked(), line);
        self.cart.set(cart);

        if self.confirm_on_add {
            dom::alert(ADDED_MESSAGE);
        }
    }

    /// Set a line's quantity; values below 1 are raised to 1.
    pub fn set_quantity(&self, id: ProductId, quantity: i64) {
        let cart = self
            .store
            .update_quantity(self.cart.get_untracked(), id, quantity);
        self.cart.set(cart);
    }

    /// Remove a line.
    pub fn remove(&self, id: ProductId) {
        let cart = self.store.remove_item(self.cart.get_untracked(), id);
        self.cart.set(cart);
    }
}
