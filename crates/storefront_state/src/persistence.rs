//! Persistence boundary between the stores and host preference slots.
//!
//! Every storage failure is absorbed here and logged. The stores only ever see "a slot with
//! valid JSON text" or "nothing", and in-memory state stays authoritative for the session.

use std::rc::Rc;

use leptos::logging;
use platform_host::PrefsStore;
use serde::de::IgnoredAny;

use crate::{
    codec,
    model::{FavoritesState, ThemeState},
};

#[derive(Clone)]
/// Best-effort reader/writer over a [`PrefsStore`].
pub struct PersistAdapter {
    prefs: Rc<dyn PrefsStore>,
}

impl PersistAdapter {
    pub fn new(prefs: Rc<dyn PrefsStore>) -> Self {
        Self { prefs }
    }

    /// Returns the raw JSON text stored under `key`.
    ///
    /// An absent slot, unavailable storage, and text that is not JSON all yield `None`.
    pub fn load(&self, key: &str) -> Option<String> {
        match self.prefs.load_pref(key) {
            Ok(Some(raw)) => {
                if serde_json::from_str::<IgnoredAny>(&raw).is_ok() {
                    Some(raw)
                } else {
                    logging::warn!("ignoring unparsable preference slot `{key}`");
                    None
                }
            }
            Ok(None) => None,
            Err(err) => {
                logging::warn!("preference load for `{key}` failed: {err}");
                None
            }
        }
    }

    /// Writes `raw_json` under `key`, logging and swallowing failures.
    pub fn save(&self, key: &str, raw_json: &str) {
        if let Err(err) = self.prefs.save_pref(key, raw_json) {
            logging::warn!("preference save for `{key}` failed: {err}");
        }
    }

    /// Deletes `key`, logging and swallowing failures.
    pub fn clear(&self, key: &str) {
        if let Err(err) = self.prefs.delete_pref(key) {
            logging::warn!("preference delete for `{key}` failed: {err}");
        }
    }
}

/// Loads persisted favorites. Corrupt or incompatible payloads are treated as absent.
pub fn load_favorites(adapter: &PersistAdapter, key: &str) -> Option<FavoritesState> {
    let raw = adapter.load(key)?;
    match codec::decode_favorites(&raw) {
        Ok(decoded) => {
            for (id, err) in &decoded.skipped {
                logging::warn!("dropping unreadable favorite `{id}` in `{key}`: {err}");
            }
            Some(decoded.state)
        }
        Err(err) => {
            logging::warn!("discarding persisted favorites in `{key}`: {err}");
            None
        }
    }
}

/// Persists favorites, best effort.
pub fn persist_favorites(adapter: &PersistAdapter, key: &str, state: &FavoritesState) {
    match codec::serialize_favorites(state) {
        Ok(raw) => adapter.save(key, &raw),
        Err(err) => logging::warn!("favorites serialization failed: {err}"),
    }
}

/// Loads the persisted theme preference. Corrupt or incompatible payloads are treated as absent.
pub fn load_theme(adapter: &PersistAdapter, key: &str) -> Option<ThemeState> {
    let raw = adapter.load(key)?;
    match codec::decode_theme(&raw) {
        Ok(state) => Some(state),
        Err(err) => {
            logging::warn!("discarding persisted theme in `{key}`: {err}");
            None
        }
    }
}

/// Persists the theme preference, best effort.
pub fn persist_theme(adapter: &PersistAdapter, key: &str, state: &ThemeState) {
    match codec::serialize_theme(state) {
        Ok(raw) => adapter.save(key, &raw),
        Err(err) => logging::warn!("theme serialization failed: {err}"),
    }
}
