//! In-memory key-value store - used in tests and for throwaway instances.

use std::collections::HashMap;
use std::sync::RwLock;

use folio_core::ports::{KeyValueStore, StorageError};

/// In-memory store using a `HashMap` behind an `RwLock`.
///
/// Note: Data is lost when the store is dropped.
#[derive(Default)]
pub struct InMemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, e.g. with a serialized post list.
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.into(), value.into());
        Self {
            entries: RwLock::new(entries),
        }
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.read().map_err(|_| StorageError::Lock)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Lock)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.write().map_err(|_| StorageError::Lock)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("value1".to_string()));
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = InMemoryStore::new();
        assert_eq!(store.get("absent").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = InMemoryStore::with_entry("key1", "old");
        store.set("key1", "new").unwrap();
        assert_eq!(store.get("key1").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove() {
        let store = InMemoryStore::new();
        store.set("key1", "value1").unwrap();
        store.remove("key1").unwrap();
        store.remove("key1").unwrap();
        assert_eq!(store.get("key1").unwrap(), None);
    }
}
