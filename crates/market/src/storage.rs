//! Local persistence layer.
//!
//! A thin wrapper over an embedded [`sled`] database storing JSON values
//! under string keys. Writes flush synchronously so state survives an
//! abrupt exit; reads that hit absent or corrupt data fall back to a
//! caller-supplied default instead of erroring.

use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Keys for the persisted state slices.
pub mod keys {
    /// Key for the identity roster (JSON array).
    pub const USERS: &str = "users";

    /// Key for the id of the authenticated identity (JSON integer).
    pub const CURRENT_USER_ID: &str = "currentUserId";

    /// Key for the product catalog (JSON array).
    pub const PRODUCTS: &str = "products";
}

/// Errors that can occur when reading or writing the local store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The underlying database failed.
    #[error("storage error: {0}")]
    Db(#[from] sled::Error),

    /// A stored value could not be serialized or deserialized.
    #[error("storage encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Handle to the process-local key/value store.
///
/// Cheaply cloneable; clones share the same underlying database.
#[derive(Clone)]
pub struct LocalStore {
    db: sled::Db,
}

impl LocalStore {
    /// Open (or create) the store at the given path.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Db` if the database cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let db = sled::open(path)?;
        Ok(Self { db })
    }

    /// Open an in-memory store that is discarded on drop.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Db` if the database cannot be created.
    pub fn temporary() -> Result<Self, StorageError> {
        let db = sled::Config::new().temporary(true).open()?;
        Ok(Self { db })
    }

    /// Read and decode the value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Db` on a read failure and `StorageError::Json`
    /// when the stored bytes are not valid JSON for `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.db.get(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode `value` as JSON and store it under `key`, flushing to disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Json` if encoding fails and `StorageError::Db`
    /// if the write or flush fails.
    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec(value)?;
        self.db.insert(key, bytes)?;
        self.db.flush()?;
        Ok(())
    }

    /// Remove the value stored under `key`, flushing to disk.
    ///
    /// Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Db` if the removal or flush fails.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.db.remove(key)?;
        self.db.flush()?;
        Ok(())
    }

    /// Read the value under `key`, falling back to `fallback` when the key
    /// is absent or its contents cannot be decoded.
    ///
    /// Corruption is logged and swallowed; this never fails. Startup paths
    /// use this so a damaged store degrades to the seed dataset instead of
    /// taking the process down.
    pub fn load_or<T: DeserializeOwned>(&self, key: &str, fallback: impl FnOnce() -> T) -> T {
        match self.get(key) {
            Ok(Some(value)) => value,
            Ok(None) => fallback(),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable stored value");
                fallback()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn store() -> LocalStore {
        LocalStore::temporary().unwrap()
    }

    #[test]
    fn test_put_get_round_trip() {
        let store = store();
        store.put(keys::USERS, &vec![1, 2, 3]).unwrap();

        let back: Option<Vec<i32>> = store.get(keys::USERS).unwrap();
        assert_eq!(back, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_get_absent_key() {
        let store = store();
        let value: Option<Vec<i32>> = store.get(keys::PRODUCTS).unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_remove() {
        let store = store();
        store.put(keys::CURRENT_USER_ID, &1).unwrap();
        store.remove(keys::CURRENT_USER_ID).unwrap();

        let value: Option<i32> = store.get(keys::CURRENT_USER_ID).unwrap();
        assert!(value.is_none());

        // Removing again is a no-op
        store.remove(keys::CURRENT_USER_ID).unwrap();
    }

    #[test]
    fn test_load_or_absent_uses_fallback() {
        let store = store();
        let value: Vec<i32> = store.load_or(keys::USERS, || vec![9]);
        assert_eq!(value, vec![9]);
    }

    #[test]
    fn test_load_or_corrupt_uses_fallback() {
        let store = store();
        // Write bytes that are not valid JSON for the expected type
        store.put(keys::USERS, &"not an array").unwrap();

        let value: Vec<i32> = store.load_or(keys::USERS, || vec![7]);
        assert_eq!(value, vec![7]);
    }

    #[test]
    fn test_load_or_present_ignores_fallback() {
        let store = store();
        store.put(keys::USERS, &vec![4, 5]).unwrap();

        let value: Vec<i32> = store.load_or(keys::USERS, || unreachable!());
        assert_eq!(value, vec![4, 5]);
    }
}
