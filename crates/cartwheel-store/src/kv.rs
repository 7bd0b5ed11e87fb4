//! Key-value storage with automatic serialization.

use crate::StorageError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Raw string-keyed storage backend.
///
/// Implementations supply the durable side of a [`Storage`] handle: a
/// browser storage partition, a file, or an in-memory map. Values are
/// opaque strings; serialization happens in [`Storage`].
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value under `key`, replacing any previous value.
    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// List all keys currently present.
    fn keys(&self) -> Result<Vec<String>, StorageError>;
}

/// In-memory backend.
///
/// The default backend for tests and headless use. Writes are visible to
/// every [`Storage`] handle cloned from the same backend, which is also
/// how last-write-wins semantics between concurrent writers fall out.
#[derive(Default)]
pub struct MemoryBackend {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    /// Create an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Backend("poisoned lock".to_string()))
    }
}

impl StorageBackend for MemoryBackend {
    fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn keys(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

/// Cloneable storage handle with automatic JSON serialization.
///
/// Wraps a shared [`StorageBackend`] and serializes values as JSON, so any
/// type implementing `Serialize` and `DeserializeOwned` can be persisted.
///
/// # Example
///
/// ```rust,ignore
/// let storage = Storage::in_memory();
///
/// storage.set("cart", &cart)?;
/// let cart: Option<Vec<CartLineItem>> = storage.get("cart")?;
/// storage.delete("cart")?;
/// ```
#[derive(Clone)]
pub struct Storage {
    backend: Arc<dyn StorageBackend>,
}

impl Storage {
    /// Create a handle over the given backend.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Create a handle over a fresh [`MemoryBackend`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()))
    }

    /// Get a value.
    ///
    /// Returns `None` if the key doesn't exist. A value that exists but
    /// fails to deserialize is an error; callers that prefer to discard
    /// unreadable state handle that at their level.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        match self.backend.get_raw(key)? {
            Some(raw) => {
                let value: T = serde_json::from_str(&raw)?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Set a value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)?;
        self.backend.set_raw(key, &raw)
    }

    /// Delete a value.
    pub fn delete(&self, key: &str) -> Result<(), StorageError> {
        self.backend.delete(key)
    }

    /// Check if a key exists.
    pub fn exists(&self, key: &str) -> Result<bool, StorageError> {
        Ok(self.backend.get_raw(key)?.is_some())
    }

    /// Get all keys.
    pub fn keys(&self) -> Result<Vec<String>, StorageError> {
        self.backend.keys()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Entry {
        id: String,
        count: i64,
    }

    #[test]
    fn test_set_get_round_trip() {
        let storage = Storage::in_memory();
        let entry = Entry {
            id: "a".to_string(),
            count: 3,
        };

        storage.set("entry", &entry).unwrap();
        let loaded: Option<Entry> = storage.get("entry").unwrap();
        assert_eq!(loaded, Some(entry));
    }

    #[test]
    fn test_get_missing_key() {
        let storage = Storage::in_memory();
        let loaded: Option<Entry> = storage.get("missing").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_set_overwrites() {
        let storage = Storage::in_memory();
        storage.set("n", &1i64).unwrap();
        storage.set("n", &2i64).unwrap();
        assert_eq!(storage.get::<i64>("n").unwrap(), Some(2));
    }

    #[test]
    fn test_delete() {
        let storage = Storage::in_memory();
        storage.set("n", &1i64).unwrap();
        storage.delete("n").unwrap();
        assert!(!storage.exists("n").unwrap());

        // Deleting an absent key is fine
        storage.delete("n").unwrap();
    }

    #[test]
    fn test_unparseable_value_is_an_error() {
        let backend = Arc::new(MemoryBackend::new());
        backend.set_raw("entry", "not json").unwrap();

        let storage = Storage::new(backend);
        assert!(storage.get::<Entry>("entry").is_err());
    }

    #[test]
    fn test_clones_share_backend() {
        let storage = Storage::in_memory();
        let other = storage.clone();

        storage.set("n", &7i64).unwrap();
        assert_eq!(other.get::<i64>("n").unwrap(), Some(7));
    }

    #[test]
    fn test_keys() {
        let storage = Storage::in_memory();
        storage.set("a", &1i64).unwrap();
        storage.set("b", &2i64).unwrap();

        let mut keys = storage.keys().unwrap();
        keys.sort();
        assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
    }
}
