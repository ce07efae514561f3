//! File-backed storage

use std::{collections::BTreeMap, fs, io, path::PathBuf};

use storefront::storage::{KeyValueStore, StorageError};
use tracing::debug;

/// Key-value store kept as a JSON object in a single file.
///
/// The file is read on every access and rewritten whole on every write. A missing
/// file is an empty store.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by the file at `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(error) => Err(error.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all()?;
        values.insert(key.to_string(), value.to_string());

        fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;

        debug!(path = %self.path.display(), key, "wrote store");

        Ok(())
    }
}
