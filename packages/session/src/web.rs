//! Browser token persistence over localStorage.
//!
//! Storage failures degrade to "no token": an unavailable or blocked
//! localStorage (private browsing, storage policy) reads as logged out
//! rather than crashing the app.

use crate::store::{TokenStore, TOKEN_STORAGE_KEY};

/// localStorage-backed TokenStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct WebTokenStore;

impl WebTokenStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl TokenStore for WebTokenStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(TOKEN_STORAGE_KEY).ok().flatten()
    }

    fn save(&self, token: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(TOKEN_STORAGE_KEY, token);
        }
    }

    fn clear(&self) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(TOKEN_STORAGE_KEY);
        }
    }
}
