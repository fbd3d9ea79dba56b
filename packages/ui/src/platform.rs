//! Platform wiring for the session store and API client.
//!
//! The browser build persists the token in localStorage via
//! [`session::WebTokenStore`]; native builds (host tests, tooling) fall back
//! to the in-memory store, which starts every process logged out.

use session::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformTokenStore = session::WebTokenStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformTokenStore = session::MemoryTokenStore;

pub type AppSessionStore = SessionStore<PlatformTokenStore>;
pub type AppApi = api::AgencyApi<PlatformTokenStore>;

/// Create the session store over the platform token store.
pub fn make_session_store() -> AppSessionStore {
    SessionStore::new(PlatformTokenStore::default())
}

/// Create the API client bound to `session` and the default backend root.
pub fn make_api(session: AppSessionStore) -> AppApi {
    api::AgencyApi::new(api::DEFAULT_BASE_URL, session)
}
