//! Key/value storage capability.
//!
//! The browser implementation wraps `localStorage`; [`MemoryStore`] is the
//! in-memory version used by tests and as a fallback when `localStorage` is
//! blocked (private mode, sandboxed iframes).

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use thiserror::Error;

/// Storage access failures. Callers degrade to in-memory state on any of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Reading a key failed.
    #[error("failed to read `{key}`: {reason}")]
    Read {
        /// Key being read.
        key: String,
        /// Backend message.
        reason: String,
    },
    /// Writing or removing a key failed.
    #[error("failed to write `{key}`: {reason}")]
    Write {
        /// Key being written.
        key: String,
        /// Backend message.
        reason: String,
    },
}

/// String key/value store with interior mutability, like `localStorage`.
pub trait KeyValueStore {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Rc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`.
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: RefCell::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::new();
        assert_eq!(store.get("k"), Ok(None));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k"), Ok(Some("v".to_string())));
        assert_eq!(store.len(), 1);

        store.set("k", "w").unwrap();
        assert_eq!(store.get("k"), Ok(Some("w".to_string())));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn shared_store_sees_writes() {
        let store = Rc::new(MemoryStore::with_entries([("a", "1")]));
        let handle = Rc::clone(&store);
        handle.set("b", "2").unwrap();
        assert_eq!(store.get("a"), Ok(Some("1".to_string())));
        assert_eq!(store.get("b"), Ok(Some("2".to_string())));
    }

    #[test]
    fn storage_error_messages() {
        let err = StorageError::Write {
            key: "landing-hover-preference".into(),
            reason: "QuotaExceededError".into(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write `landing-hover-preference`: QuotaExceededError"
        );
    }
}
