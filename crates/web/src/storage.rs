//! Browser storage

use storefront::storage::{KeyValueStore, StorageError};

/// The window's `localStorage`.
///
/// Holds no handle of its own; the storage object is looked up on every call,
/// so the value can be captured by event handlers freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        use crate::dom::js_value_message;

        web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("window is unavailable".to_string()))?
            .local_storage()
            .map_err(|error| {
                StorageError::Unavailable(js_value_message(&error, "localStorage is blocked"))
            })?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::local_storage()?.get_item(key).map_err(|error| {
            StorageError::Unavailable(crate::dom::js_value_message(&error, "read failed"))
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?.set_item(key, value).map_err(|error| {
            StorageError::Unavailable(crate::dom::js_value_message(&error, "write failed"))
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KeyValueStore for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("not running in a browser".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("not running in a browser".to_string()))
    }
}
