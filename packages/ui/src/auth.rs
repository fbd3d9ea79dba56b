//! Authentication context and hooks for the UI.

use dioxus::prelude::*;

use session::{LoginError, Session};

use crate::platform::{make_api, make_session_store, AppApi, AppSessionStore};

/// Authentication state for the application.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthState {
    pub session: Option<Session>,
}

impl AuthState {
    /// A session exists and has not expired.
    pub fn is_authenticated(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.is_valid_at(session::now_unix_secs()))
    }

    pub fn is_manager(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_manager)
    }
}

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// The process-wide session store.
pub fn use_session_store() -> AppSessionStore {
    use_context::<AppSessionStore>()
}

/// The API client bound to the session store.
pub fn use_api() -> AppApi {
    use_context::<AppApi>()
}

/// Provider component that owns session state.
/// Wrap your app with this component to enable authentication.
///
/// The persisted token is restored *synchronously*, before the first child
/// render, so no screen ever observes "not yet initialized" as
/// "unauthenticated" and redirects spuriously.
#[component]
pub fn AuthProvider(children: Element) -> Element {
    let store = use_hook(|| {
        let store = make_session_store();
        store.initialize();
        if let Some(session) = store.current() {
            tracing::debug!("restored session for {}", session.email);
        }
        store
    });

    let auth_state = use_signal(|| AuthState {
        session: store.current(),
    });

    use_context_provider(|| store.clone());
    use_context_provider({
        let store = store.clone();
        move || make_api(store.clone())
    });
    use_context_provider(|| auth_state);

    rsx! {
        {children}
    }
}

/// Exchange credentials for a session and publish it.
///
/// On failure the published state and the persisted token are left exactly
/// as they were; the caller owns user-facing messaging.
pub async fn login(
    store: AppSessionStore,
    mut auth: Signal<AuthState>,
    email: String,
    password: String,
) -> Result<Session, LoginError> {
    let endpoint = api::AuthEndpoint::default();
    let session = store.login(&endpoint, &email, &password).await?;
    auth.set(AuthState {
        session: Some(session.clone()),
    });
    Ok(session)
}

/// Clear the session and the published state. Safe when already logged out.
pub fn logout(store: &AppSessionStore, mut auth: Signal<AuthState>) {
    store.logout();
    auth.set(AuthState { session: None });
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let auth = use_auth();
    let store = use_session_store();

    let onclick = move |_| {
        logout(&store, auth);
        // Return to the login screen
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    rsx! {
        button {
            class: "logout-button {class}",
            onclick: onclick,
            "{label}"
        }
    }
}
