//! Cart Store
//!
//! Reads and writes the cart as a single JSON blob under one key. Every mutation
//! saves the whole cart straight away; there is no batching and no undo.

use tracing::{debug, warn};

use crate::{
    cart::{Cart, CartLine},
    products::ProductId,
    storage::{KeyValueStore, StorageError},
};

/// Key the browser storefront persists its cart under.
pub const DEFAULT_CART_KEY: &str = "cart";

/// Cart persistence over a key-value store.
#[derive(Debug, Clone)]
pub struct CartStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store persisting under `key`.
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Create a store persisting under [`DEFAULT_CART_KEY`].
    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, DEFAULT_CART_KEY)
    }

    /// The storage key in use.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted cart.
    ///
    /// Returns `Ok(None)` when nothing has been stored yet.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the store cannot be read or the stored value
    /// is not a cart.
    pub fn try_load(&self) -> Result<Option<Cart>, StorageError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(None);
        };

        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Read the persisted cart, falling back to an empty cart when it is missing
    /// or unreadable.
    pub fn load(&self) -> Cart {
        match self.try_load() {
            Ok(Some(cart)) => cart,
            Ok(None) => Cart::new(),
            Err(error) => {
                warn!(key = %self.key, %error, "discarding unreadable cart");
                Cart::new()
            }
        }
    }

    /// Serialize and write the full cart, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if serialization or the write fails.
    pub fn try_save(&self, cart: &Cart) -> Result<(), StorageError> {
        let raw = serde_json::to_string(cart)?;

        self.storage.set(&self.key, &raw)?;

        debug!(key = %self.key, lines = cart.len(), items = cart.item_count(), "saved cart");

        Ok(())
    }

    /// Write the full cart, logging rather than returning any failure.
    pub fn save(&self, cart: &Cart) {
        if let Err(error) = self.try_save(cart) {
            warn!(key = %self.key, %error, "failed to save cart");
        }
    }

    /// Add a line (merging with an existing line for the same product) and save.
    pub fn add_item(&self, mut cart: Cart, line: CartLine) -> Cart {
        debug!(id = %line.id, quantity = line.quantity, "adding to cart");

        cart.add(line);
        self.save(&cart);

        cart
    }

    /// Set a line's quantity (clamped to at least 1) and save.
    pub fn update_quantity(&self, mut cart: Cart, id: ProductId, quantity: i64) -> Cart {
        if !cart.set_quantity(id, quantity) {
            debug!(%id, "quantity update for product not in cart");
        }

        self.save(&cart);

        cart
    }

    /// Remove the line for a product and save.
    pub fn remove_item(&self, mut cart: Cart, id: ProductId) -> Cart {
        if cart.remove(id) {
            debug!(%id, "removed from cart");
        }

        self.save(&cart);

        cart
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::storage::MemoryStore;

    use super::*;

    fn line(id: u64, quantity: u32) -> CartLine {
        CartLine::new(
            ProductId(id),
            format!("Product {id}"),
            Decimal::new(1000, 2),
            format!("img/{id}.jpg"),
            quantity,
        )
    }

    /// Store whose writes always fail.
    #[derive(Debug)]
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("quota exceeded".to_string()))
        }
    }

    #[test]
    fn load_missing_key_is_empty() {
        let store = CartStore::with_default_key(MemoryStore::new());

        assert!(store.load().is_empty());
    }

    #[test]
    fn load_malformed_value_is_empty() {
        let store = CartStore::with_default_key(MemoryStore::with_value("cart", "{not json"));

        assert!(store.load().is_empty());
        assert!(store.try_load().is_err());
    }

    #[test]
    fn load_wrong_shape_is_empty() {
        let store = CartStore::with_default_key(MemoryStore::with_value("cart", r#"{"id":1}"#));

        assert!(store.load().is_empty());
    }

    #[test]
    fn add_item_persists_immediately() -> TestResult {
        let store = CartStore::with_default_key(MemoryStore::new());

        let cart = store.add_item(Cart::new(), line(1, 2));

        assert_eq!(store.try_load()?, Some(cart));

        Ok(())
    }

    #[test]
    fn update_quantity_persists_clamped_value() {
        let store = CartStore::with_default_key(MemoryStore::new());
        let cart = store.add_item(Cart::new(), line(1, 2));

        store.update_quantity(cart, ProductId(1), -5);

        assert_eq!(
            store.load().get(ProductId(1)).map(|line| line.quantity),
            Some(1)
        );
    }

    #[test]
    fn remove_item_persists() {
        let store = CartStore::with_default_key(MemoryStore::new());
        let cart = store.add_item(Cart::new(), line(1, 1));
        let cart = store.add_item(cart, line(2, 1));

        store.remove_item(cart, ProductId(1));

        let reloaded = store.load();

        assert_eq!(reloaded.len(), 1);
        assert!(reloaded.get(ProductId(2)).is_some());
    }

    #[test]
    fn custom_key_is_used() {
        let store = CartStore::new(MemoryStore::new(), "basket");

        store.add_item(Cart::new(), line(1, 1));

        assert!(store.storage().raw("basket").is_some());
        assert!(store.storage().raw("cart").is_none());
    }

    #[test]
    fn failed_save_still_returns_updated_cart() {
        let store = CartStore::with_default_key(ReadOnlyStore);

        let cart = store.add_item(Cart::new(), line(1, 3));

        assert_eq!(cart.item_count(), 3);
        assert!(store.try_save(&cart).is_err());
    }
}
