//! Route guard component.
//!
//! Thin wrapper that applies [`session::guard::evaluate`] to the published
//! session and either renders its children or replaces the current route.
//! Replacing (rather than pushing) keeps the denied screen out of history,
//! so Back does not bounce through it.

use dioxus::prelude::*;

use session::guard::{evaluate, Outcome, Requirement};
use ui::use_auth;

use crate::Route;

/// Gate `children` behind an access requirement.
///
/// Re-evaluated from scratch on every render; there is no remembered
/// "denied" state.
#[component]
pub fn Guard(requirement: Requirement, children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let state = auth();
    match evaluate(state.session.as_ref(), requirement, session::now_unix_secs()) {
        Outcome::Render => rsx! {
            {children}
        },
        Outcome::RedirectToLogin => {
            nav.replace(Route::Login {});
            rsx! {}
        }
        Outcome::RedirectToUnauthorized => {
            tracing::warn!("blocked navigation to a manager-only screen");
            nav.replace(Route::Unauthorized {});
            rsx! {}
        }
    }
}
