//! Storage
//!
//! The durable key-value store the cart is persisted into. In the browser this is
//! `window.localStorage`; tests and native tools supply their own backing.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

use thiserror::Error;

/// Errors raised by a key-value backing store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The store could not be reached (no window, storage disabled, quota exceeded).
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Filesystem error from a file-backed store.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A stored value could not be serialized or deserialized.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

/// String key-value store with whole-value reads and writes.
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// In-memory store, scoped to the value's lifetime.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding a single value.
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        store
    }

    /// Raw value under `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn memory_store_missing_key_is_none() -> TestResult {
        let store = MemoryStore::new();

        assert_eq!(store.get("cart")?, None);

        Ok(())
    }

    #[test]
    fn memory_store_set_overwrites() -> TestResult {
        let store = MemoryStore::with_value("cart", "[]");

        store.set("cart", "[1]")?;

        assert_eq!(store.get("cart")?.as_deref(), Some("[1]"));

        Ok(())
    }

    #[test]
    fn shared_store_sees_writes() -> TestResult {
        let store = Rc::new(MemoryStore::new());
        let handle = Rc::clone(&store);

        handle.set("cart", "[]")?;

        assert_eq!(store.raw("cart").as_deref(), Some("[]"));

        Ok(())
    }
}
