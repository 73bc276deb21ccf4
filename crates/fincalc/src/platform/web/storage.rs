//! Web storage implementation using browser LocalStorage.
//!
//! Snapshots are stored under their bare logical name, the same keys the
//! calculators have always used in the browser.

use gloo_storage::errors::StorageError as GlooError;
use gloo_storage::{LocalStorage, Storage as GlooStorage};

use crate::platform::storage::{Storage, StorageError};

/// Web storage implementation using browser LocalStorage.
#[derive(Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for WebStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        // Values are raw JSON documents, so read them back as the stored string
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| StorageError::NotAvailable(GlooError::from(e).to_string()))
    }

    fn write(&self, key: &str, contents: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, contents)
            .map_err(|e| StorageError::Io(format!("Failed to write {}: {}", key, GlooError::from(e))))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        LocalStorage::delete(key);
        Ok(())
    }
}
