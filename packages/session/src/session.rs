//! The session value and its store.
//!
//! [`SessionStore`] is the one place session state changes: restore at
//! startup ([`initialize`](SessionStore::initialize)), credential login
//! ([`login`](SessionStore::login)), and [`logout`](SessionStore::logout).
//! Every transition replaces the whole `Option<Session>` under a mutex, so a
//! reader never observes a half-updated session (e.g. role set but model id
//! stale). The raw token is persisted through the [`TokenStore`] the store
//! was built with.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::claims::{Claims, TokenError};
use crate::store::TokenStore;
use crate::time::now_unix_secs;

/// Role claim value that grants manager access. Exact, case-sensitive match:
/// older backend revisions emitted `"manager"`, and those tokens do not
/// grant manager access here.
pub const MANAGER_ROLE: &str = "Manager";

/// `ModelId` claim value the backend emits for accounts that are not models.
const NO_MODEL_SENTINEL: &str = "-1";

/// What the authenticated principal is allowed to do.
///
/// Derived from the role claim at decode time; never user-supplied and never
/// inferred from other fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Model,
}

/// Client-side record of the current authenticated principal.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub email: String,
    pub first_name: Option<String>,
    pub role: Role,
    /// Present exactly when `role == Role::Model`; managers never carry one.
    pub model_id: Option<String>,
    /// Unix seconds; the session is invalid at or after this instant.
    pub expires_at: i64,
}

impl Session {
    /// Map a decoded claim set onto a session.
    ///
    /// The `"-1"` sentinel and any model id on a non-model token collapse to
    /// `None`, so the role/model-id invariant holds for every constructible
    /// session.
    pub fn from_claims(claims: Claims) -> Self {
        let role = if claims.role == MANAGER_ROLE {
            Role::Manager
        } else {
            Role::Model
        };
        let model_id = match role {
            Role::Manager => None,
            Role::Model => claims.model_id.filter(|id| id != NO_MODEL_SENTINEL),
        };
        Self {
            email: claims.email,
            first_name: claims.first_name,
            role,
            model_id,
            expires_at: claims.exp,
        }
    }

    /// Decode a raw token and validate its expiry against `now`.
    pub fn from_token(token: &str, now: i64) -> Result<Self, TokenError> {
        let claims = Claims::decode(token)?;
        if now >= claims.exp {
            return Err(TokenError::Expired);
        }
        Ok(Self::from_claims(claims))
    }

    pub fn is_valid_at(&self, now: i64) -> bool {
        now < self.expires_at
    }

    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

/// Why a login attempt produced no session. The caller turns this into a
/// user-visible message; session state is untouched on every variant.
#[derive(Debug, Error)]
pub enum LoginError {
    /// The authentication endpoint could not be reached.
    #[error("authentication service unreachable: {0}")]
    Unavailable(String),
    /// The endpoint answered but issued no token (wrong credentials,
    /// non-2xx status, empty body).
    #[error("credentials rejected")]
    Rejected,
    /// A token was issued but could not be turned into a session.
    #[error("unusable token: {0}")]
    InvalidToken(#[from] TokenError),
}

/// Exchanges credentials for a raw token at the authentication endpoint.
///
/// Implemented over HTTP by the api crate; tests substitute fixed-token
/// mocks.
pub trait CredentialExchange {
    fn exchange(
        &self,
        identity: &str,
        secret: &str,
    ) -> impl std::future::Future<Output = Result<String, LoginError>>;
}

/// Single authority for session lifecycle.
///
/// Clones share state (the session and the token store both sit behind
/// `Arc`s), so the store can be handed to the UI context and the API client
/// and every copy observes the same transitions.
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S: TokenStore> {
    tokens: S,
    current: Arc<Mutex<Option<Session>>>,
}

impl<S: TokenStore> SessionStore<S> {
    pub fn new(tokens: S) -> Self {
        Self {
            tokens,
            current: Arc::new(Mutex::new(None)),
        }
    }

    /// Restore the session from a previously persisted token.
    ///
    /// Runs once at startup, before anything renders. A missing token leaves
    /// the store empty; an expired or undecodable one also erases the
    /// persisted copy. Neither is an error — the caller cannot tell the
    /// cases apart and has no reason to.
    pub fn initialize(&self) {
        let Some(token) = self.tokens.load() else {
            return;
        };
        match Session::from_token(&token, now_unix_secs()) {
            Ok(session) => *self.current.lock().unwrap() = Some(session),
            Err(err) => {
                tracing::debug!("discarding persisted token: {err}");
                self.tokens.clear();
            }
        }
    }

    /// Exchange credentials for a token, decode it, persist it, publish the
    /// new session.
    ///
    /// On any failure the persisted token and the current session are left
    /// exactly as they were.
    pub async fn login(
        &self,
        auth: &impl CredentialExchange,
        identity: &str,
        secret: &str,
    ) -> Result<Session, LoginError> {
        let token = auth.exchange(identity, secret).await?;
        let session = Session::from_token(&token, now_unix_secs())?;
        self.tokens.save(&token);
        *self.current.lock().unwrap() = Some(session.clone());
        Ok(session)
    }

    /// Erase the persisted token and clear the session. Idempotent.
    pub fn logout(&self) {
        self.tokens.clear();
        *self.current.lock().unwrap() = None;
    }

    /// Snapshot of the current session, consistent with the last completed
    /// `initialize`/`login`/`logout`.
    pub fn current(&self) -> Option<Session> {
        self.current.lock().unwrap().clone()
    }

    /// Whether a live (present, unexpired) session exists right now.
    pub fn is_authenticated(&self) -> bool {
        self.current()
            .is_some_and(|s| s.is_valid_at(now_unix_secs()))
    }

    /// The raw persisted token, for the `Authorization: Bearer` header.
    /// This store is the sole owner of that header value.
    pub fn bearer_token(&self) -> Option<String> {
        self.tokens.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
    use serde_json::json;

    const EMAIL_CLAIM: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/emailaddress";
    const ROLE_CLAIM: &str =
        "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

    fn forge(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("{header}.{body}.sig")
    }

    fn manager_token(exp: i64) -> String {
        forge(json!({
            EMAIL_CLAIM: "boss@agency.test",
            ROLE_CLAIM: "Manager",
            "ModelId": "-1",
            "exp": exp,
        }))
    }

    fn model_token(model_id: &str, exp: i64) -> String {
        forge(json!({
            EMAIL_CLAIM: "eva@agency.test",
            ROLE_CLAIM: "Model",
            "ModelId": model_id,
            "firstName": "Eva",
            "exp": exp,
        }))
    }

    fn far_future() -> i64 {
        now_unix_secs() + 3600
    }

    /// Exchange that always issues the same token.
    struct FixedExchange(String);

    impl CredentialExchange for FixedExchange {
        async fn exchange(&self, _identity: &str, _secret: &str) -> Result<String, LoginError> {
            Ok(self.0.clone())
        }
    }

    /// Exchange that always fails like an unreachable endpoint.
    struct DownExchange;

    impl CredentialExchange for DownExchange {
        async fn exchange(&self, _identity: &str, _secret: &str) -> Result<String, LoginError> {
            Err(LoginError::Unavailable("connection refused".into()))
        }
    }

    // -- Session derivation ---------------------------------------------------

    #[test]
    fn manager_role_is_exact_match() {
        let session = Session::from_token(&manager_token(far_future()), now_unix_secs()).unwrap();
        assert_eq!(session.role, Role::Manager);
        assert_eq!(session.model_id, None);
    }

    #[test]
    fn lowercase_manager_claim_is_not_a_manager() {
        let token = forge(json!({
            EMAIL_CLAIM: "boss@agency.test",
            ROLE_CLAIM: "manager",
            "exp": far_future(),
        }));
        let session = Session::from_token(&token, now_unix_secs()).unwrap();
        assert_eq!(session.role, Role::Model);
    }

    #[test]
    fn model_keeps_its_model_id() {
        let session = Session::from_token(&model_token("42", far_future()), now_unix_secs()).unwrap();
        assert_eq!(session.role, Role::Model);
        assert_eq!(session.model_id.as_deref(), Some("42"));
        assert_eq!(session.first_name.as_deref(), Some("Eva"));
    }

    #[test]
    fn sentinel_model_id_maps_to_none() {
        let session = Session::from_token(&model_token("-1", far_future()), now_unix_secs()).unwrap();
        assert_eq!(session.model_id, None);
    }

    #[test]
    fn manager_never_carries_a_model_id() {
        // Even if the backend sends a stray real ModelId on a manager token.
        let token = forge(json!({
            EMAIL_CLAIM: "boss@agency.test",
            ROLE_CLAIM: "Manager",
            "ModelId": "7",
            "exp": far_future(),
        }));
        let session = Session::from_token(&token, now_unix_secs()).unwrap();
        assert_eq!(session.role, Role::Manager);
        assert_eq!(session.model_id, None);
    }

    #[test]
    fn expiry_is_at_or_after_exp() {
        let token = manager_token(1_000);
        assert!(Session::from_token(&token, 999).is_ok());
        assert_eq!(Session::from_token(&token, 1_000), Err(TokenError::Expired));
        assert_eq!(Session::from_token(&token, 1_001), Err(TokenError::Expired));
    }

    // -- initialize -----------------------------------------------------------

    #[test]
    fn initialize_with_no_token_stays_empty() {
        let store = SessionStore::new(MemoryTokenStore::new());
        store.initialize();
        assert_eq!(store.current(), None);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn initialize_restores_a_valid_session() {
        let tokens = MemoryTokenStore::new();
        tokens.save(&manager_token(far_future()));

        let store = SessionStore::new(tokens);
        store.initialize();

        let session = store.current().unwrap();
        assert_eq!(session.role, Role::Manager);
        assert_eq!(session.email, "boss@agency.test");
        assert!(store.is_authenticated());
    }

    #[test]
    fn initialize_erases_an_expired_token() {
        let tokens = MemoryTokenStore::new();
        tokens.save(&model_token("42", now_unix_secs() - 10));

        let store = SessionStore::new(tokens.clone());
        store.initialize();

        assert_eq!(store.current(), None);
        assert_eq!(tokens.load(), None);
    }

    #[test]
    fn initialize_erases_a_malformed_token() {
        let tokens = MemoryTokenStore::new();
        tokens.save("this is not a token");

        let store = SessionStore::new(tokens.clone());
        store.initialize();

        assert_eq!(store.current(), None);
        assert_eq!(tokens.load(), None);
    }

    // -- login ----------------------------------------------------------------

    #[tokio::test]
    async fn login_roundtrip_matches_issued_claims() {
        let token = model_token("42", far_future());
        let store = SessionStore::new(MemoryTokenStore::new());

        let session = store
            .login(&FixedExchange(token.clone()), "eva@agency.test", "pw")
            .await
            .unwrap();

        assert_eq!(session.email, "eva@agency.test");
        assert_eq!(session.role, Role::Model);
        assert_eq!(session.model_id.as_deref(), Some("42"));
        assert_eq!(store.current(), Some(session));
        assert_eq!(store.bearer_token(), Some(token));
    }

    #[tokio::test]
    async fn failed_exchange_leaves_state_untouched() {
        let store = SessionStore::new(MemoryTokenStore::new());

        let err = store
            .login(&DownExchange, "eva@agency.test", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::Unavailable(_)));
        assert_eq!(store.current(), None);
        assert_eq!(store.bearer_token(), None);
    }

    #[tokio::test]
    async fn failed_exchange_preserves_an_existing_session() {
        let tokens = MemoryTokenStore::new();
        tokens.save(&manager_token(far_future()));
        let store = SessionStore::new(tokens);
        store.initialize();

        let _ = store.login(&DownExchange, "boss@agency.test", "pw").await;

        assert!(store.current().is_some());
        assert!(store.bearer_token().is_some());
    }

    #[tokio::test]
    async fn login_with_an_expired_token_is_rejected_without_persisting() {
        let token = model_token("42", now_unix_secs() - 10);
        let store = SessionStore::new(MemoryTokenStore::new());

        let err = store
            .login(&FixedExchange(token), "eva@agency.test", "pw")
            .await
            .unwrap_err();

        assert!(matches!(err, LoginError::InvalidToken(TokenError::Expired)));
        assert_eq!(store.current(), None);
        assert_eq!(store.bearer_token(), None);
    }

    // -- logout ---------------------------------------------------------------

    #[tokio::test]
    async fn logout_is_idempotent() {
        let store = SessionStore::new(MemoryTokenStore::new());
        store
            .login(&FixedExchange(manager_token(far_future())), "boss@agency.test", "pw")
            .await
            .unwrap();
        assert!(store.current().is_some());

        store.logout();
        assert_eq!(store.current(), None);
        assert_eq!(store.bearer_token(), None);

        store.logout();
        assert_eq!(store.current(), None);
        assert_eq!(store.bearer_token(), None);
    }
}
