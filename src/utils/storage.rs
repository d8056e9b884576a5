// ============================================================================
// STORAGE - Key/value persistence for the session
// ============================================================================

use serde::Serialize;
use thiserror::Error;
use web_sys::{window, Storage};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,

    #[error("could not serialize value for {key}: {reason}")]
    Serialize { key: String, reason: String },

    #[error("could not write {key}")]
    Write { key: String },
}

/// Raw string storage. Implemented by the browser's localStorage and by an
/// in-memory map in tests.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str);

    fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError>
    where
        Self: Sized,
    {
        let json = serde_json::to_string(value).map_err(|e| StorageError::Serialize {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        self.set(key, &json)
    }
}

/// `window.localStorage`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<Storage> {
        window()?.local_storage().ok()?
    }
}

impl TokenStorage for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| StorageError::Write {
            key: key.to_string(),
        })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                log::warn!("⚠️ Could not remove {} from localStorage", key);
            }
        }
    }
}

#[cfg(test)]
pub use memory::MemoryStorage;
