//! # localStorage session backend — browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] used on the **web platform**.
//! It writes straight into `window.localStorage`, so the session survives a page
//! reload and is shared by every tab of the same origin.
//!
//! Like the browser API it wraps, the store is synchronous. It is a zero-size
//! handle that looks up `localStorage` on every call; `web_sys::Storage` is not
//! `Send`, and the lookup is cheap.
//!
//! Storage failures (private browsing quotas, storage disabled by policy) are
//! logged and swallowed: reads degrade to "signed out", which sends the user to
//! the login page instead of crashing the app.

use web_sys::Storage;

use crate::session::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorageStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            if let Err(e) = storage.set_item(key, value) {
                tracing::warn!("failed to write {key} to localStorage: {:?}", e);
            }
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
