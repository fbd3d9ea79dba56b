//! # Session crate — who is logged in, and what may they see
//!
//! Single authority for the client-side session lifecycle. The backend issues
//! a signed bearer token at login; this crate decodes its claims, checks
//! expiry, persists the raw token under one well-known storage key, and
//! answers the two questions every other part of the app asks:
//!
//! - *who is logged in?* — [`SessionStore::current`]
//! - *may this screen render?* — [`guard::evaluate`]
//!
//! Token persistence goes through the [`TokenStore`] trait so the same store
//! logic runs against browser localStorage ([`WebTokenStore`], web builds) and
//! an in-memory map ([`MemoryTokenStore`], tests and native builds).
//!
//! Decode failures and expiry are routine outcomes, not faults: both collapse
//! to "not logged in" and erase the persisted token. Only an explicit
//! [`SessionStore::login`] reports failure to its caller, as a [`LoginError`]
//! value.

pub mod claims;
pub mod guard;
pub mod session;

mod store;
pub use store::{MemoryTokenStore, TokenStore, TOKEN_STORAGE_KEY};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod web;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use web::WebTokenStore;

mod time;
pub use time::now_unix_secs;

pub use claims::{Claims, TokenError};
pub use session::{CredentialExchange, LoginError, Role, Session, SessionStore};
