use std::sync::{Arc, Mutex};

/// The single key-value pair that survives restarts: the raw token string.
/// Nothing else is ever persisted client-side.
pub const TOKEN_STORAGE_KEY: &str = "modeldesk.token";

/// Where the persisted token lives.
///
/// Implementations are cheap to clone and may swallow storage failures —
/// a store that cannot read degrades to "no token", i.e. logged out.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// In-memory TokenStore for tests and native builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.token.lock().unwrap() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc.def.ghi");
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn clones_share_the_same_token() {
        let store = MemoryTokenStore::new();
        let clone = store.clone();
        store.save("t");
        assert_eq!(clone.load().as_deref(), Some("t"));
    }
}
