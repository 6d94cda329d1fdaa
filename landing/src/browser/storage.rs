//! `localStorage` with an in-memory fallback.

use availio::storage::{KeyValueStore, MemoryStore, StorageError};

use super::js_error;

/// Storage used by the showcase: `localStorage` when the page may use it,
/// otherwise a per-page-load memory map.
pub enum BrowserStore {
    Local(web_sys::Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    /// Open `localStorage`, falling back to memory when it is blocked.
    pub fn open() -> Self {
        match local_storage() {
            Ok(storage) => BrowserStore::Local(storage),
            Err(e) => {
                tracing::warn!("{e}; showcase preference will not persist");
                BrowserStore::Memory(MemoryStore::new())
            }
        }
    }
}

fn local_storage() -> Result<web_sys::Storage, StorageError> {
    let window = web_sys::window().ok_or_else(|| StorageError::Unavailable("no window".into()))?;
    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(js_error(&e)))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".into()))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match self {
            BrowserStore::Local(storage) => storage.get_item(key).map_err(|e| StorageError::Read {
                key: key.to_string(),
                reason: js_error(&e),
            }),
            BrowserStore::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(storage) => {
                storage
                    .set_item(key, value)
                    .map_err(|e| StorageError::Write {
                        key: key.to_string(),
                        reason: js_error(&e),
                    })
            }
            BrowserStore::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match self {
            BrowserStore::Local(storage) => {
                storage.remove_item(key).map_err(|e| StorageError::Write {
                    key: key.to_string(),
                    reason: js_error(&e),
                })
            }
            BrowserStore::Memory(memory) => memory.remove(key),
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn local_storage_roundtrip() {
        let store = BrowserStore::open();
        store.set("availio-test", "right").unwrap();
        assert_eq!(store.get("availio-test").unwrap().as_deref(), Some("right"));
        store.remove("availio-test").unwrap();
        assert_eq!(store.get("availio-test").unwrap(), None);
    }
}
