//! Lightweight preference storage contracts and adapters.
//!
//! Preference slots hold flat JSON text per key. The browser backend is synchronous, so the
//! contract is synchronous too; callers never suspend on storage.

use std::{cell::RefCell, collections::HashMap, rc::Rc};

/// Host service for lightweight preference values (JSON stored as text per key).
pub trait PrefsStore {
    /// Loads a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the read fails.
    fn load_pref(&self, key: &str) -> Result<Option<String>, String>;

    /// Saves a raw JSON string for a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or rejects the write.
    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String>;

    /// Deletes a preference key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage is unavailable or the delete fails.
    fn delete_pref(&self, key: &str) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op preference store for disabled storage and baseline tests.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Ok(None)
    }

    fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Ok(())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory preference store keyed by string.
///
/// Clones share the same backing map, which lets tests keep a handle for inspection while a
/// store owns another.
pub struct MemoryPrefsStore {
    inner: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the raw text stored under `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key).cloned()
    }

    /// Writes raw text under `key`, bypassing the trait. Used to seed corrupt payloads.
    pub fn insert_raw(&self, key: impl Into<String>, raw: impl Into<String>) {
        self.inner.borrow_mut().insert(key.into(), raw.into());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        Ok(self.inner.borrow().get(key).cloned())
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        self.inner
            .borrow_mut()
            .insert(key.to_string(), raw_json.to_string());
        Ok(())
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        self.inner.borrow_mut().remove(key);
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Preference store whose every operation fails, mirroring blocked or over-quota storage.
pub struct UnavailablePrefsStore;

impl PrefsStore for UnavailablePrefsStore {
    fn load_pref(&self, _key: &str) -> Result<Option<String>, String> {
        Err("preference storage unavailable".to_string())
    }

    fn save_pref(&self, _key: &str, _raw_json: &str) -> Result<(), String> {
        Err("preference storage unavailable".to_string())
    }

    fn delete_pref(&self, _key: &str) -> Result<(), String> {
        Err("preference storage unavailable".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_prefs_store_round_trip_and_delete() {
        let store = MemoryPrefsStore::default();
        let store_obj: &dyn PrefsStore = &store;

        store_obj.save_pref("pref.key", "{\"k\":1}").expect("save");
        assert_eq!(
            store_obj.load_pref("pref.key").expect("load"),
            Some("{\"k\":1}".to_string())
        );
        store_obj.delete_pref("pref.key").expect("delete");
        assert_eq!(store_obj.load_pref("pref.key").expect("load"), None);
    }

    #[test]
    fn memory_prefs_store_clones_share_backing_map() {
        let store = MemoryPrefsStore::default();
        let handle = store.clone();
        store.save_pref("theme-storage", "{}").expect("save");
        assert_eq!(handle.raw("theme-storage"), Some("{}".to_string()));

        handle.insert_raw("favorites-storage", "not json");
        assert_eq!(
            store.load_pref("favorites-storage").expect("load"),
            Some("not json".to_string())
        );
    }

    #[test]
    fn noop_prefs_store_is_empty_and_successful() {
        let store = NoopPrefsStore;
        let store_obj: &dyn PrefsStore = &store;
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
        store_obj.save_pref("k", "{}").expect("save");
        store_obj.delete_pref("k").expect("delete");
        assert_eq!(store_obj.load_pref("k").expect("load"), None);
    }

    #[test]
    fn unavailable_prefs_store_fails_every_operation() {
        let store = UnavailablePrefsStore;
        assert!(store.load_pref("k").is_err());
        assert!(store.save_pref("k", "{}").is_err());
        assert!(store.delete_pref("k").is_err());
    }
}
