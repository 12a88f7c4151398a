//! `localStorage`-backed preference store implementation.
//!
//! Every browser call is synchronous. A missing window, disabled storage, and a thrown
//! `SecurityError` all surface as `Err` so the persistence layer can decide what to swallow.

use platform_host::PrefsStore;

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
///
/// On non-`wasm32` targets the store behaves as empty, always-writable storage.
pub struct WebPrefsStore;

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .local_storage()
        .map_err(|e| format!("localStorage access denied: {e:?}"))?
        .ok_or_else(|| "localStorage unavailable".to_string())
}

impl PrefsStore for WebPrefsStore {
    fn load_pref(&self, key: &str) -> Result<Option<String>, String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .get_item(key)
                .map_err(|e| format!("localStorage get_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn save_pref(&self, key: &str, raw_json: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .set_item(key, raw_json)
                .map_err(|e| format!("localStorage set_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (key, raw_json);
            Ok(())
        }
    }

    fn delete_pref(&self, key: &str) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()?
                .remove_item(key)
                .map_err(|e| format!("localStorage remove_item failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = key;
            Ok(())
        }
    }
}
