#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashMap;

use crate::error::DomError;

/// A string key-value store. The browser implementation is `localStorage`;
/// tests use [`MemoryStorage`].
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, DomError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomError>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

fn local_storage() -> Result<web_sys::Storage, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    // Throws in some privacy modes, returns None in others.
    window.local_storage()?.ok_or(DomError::StorageUnavailable)
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomError> {
        Ok(local_storage()?.get_item(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        Ok(local_storage()?.set_item(key, value)?)
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
    unavailable: bool,
}

#[cfg(test)]
impl MemoryStorage {
    /// A store that fails every call, like `localStorage` with cookies blocked.
    pub fn unavailable() -> Self {
        Self {
            entries: RefCell::default(),
            unavailable: true,
        }
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::default();
        store.entries.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }
}

#[cfg(test)]
impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, DomError> {
        if self.unavailable {
            return Err(DomError::StorageUnavailable);
        }
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), DomError> {
        if self.unavailable {
            return Err(DomError::StorageUnavailable);
        }
        self.entries.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best-effort preference persistence. Reads fall back to the caller's
/// default and writes never fail from the caller's point of view.
#[derive(Debug, Default)]
pub struct PreferenceStore<S = BrowserStorage> {
    backend: S,
}

impl PreferenceStore<BrowserStorage> {
    pub fn browser() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: KeyValueStore> PreferenceStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn read(&self, key: &str, default: &str) -> String {
        self.read_stored(key).unwrap_or_else(|| default.to_string())
    }

    /// The stored value, or `None` when nothing is stored or storage is
    /// unreachable.
    pub fn read_stored(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Failed to read preference {}: {}", key, e);
                None
            }
        }
    }

    pub fn write(&self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            log::warn!("Failed to persist preference {}: {}", key, e);
        }
    }

    #[cfg(test)]
    pub fn backend(&self) -> &S {
        &self.backend
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_returns_stored_value() {
        let store = PreferenceStore::new(MemoryStorage::with_entry("theme", "light"));
        assert_eq!(store.read("theme", "dark"), "light");
    }

    #[test]
    fn read_falls_back_to_default_when_missing() {
        let store = PreferenceStore::new(MemoryStorage::default());
        assert_eq!(store.read("theme", "dark"), "dark");
        assert_eq!(store.read_stored("theme"), None);
    }

    #[test]
    fn unavailable_storage_is_absorbed() {
        let store = PreferenceStore::new(MemoryStorage::unavailable());
        store.write("theme", "light");
        assert_eq!(store.read("theme", "dark"), "dark");
    }

    #[test]
    fn write_then_read() {
        let store = PreferenceStore::new(MemoryStorage::default());
        store.write("reduce-motion", "on");
        assert_eq!(store.backend().get("reduce-motion").unwrap().as_deref(), Some("on"));
    }
}
