//! Role-gated navigation decisions.
//!
//! One pure function: (session snapshot, screen requirement) → outcome.
//! Evaluated from scratch on every navigation; nothing is remembered
//! between evaluations. The navigation chrome maps the two redirect
//! outcomes onto the login and unauthorized screens.

use crate::session::{Role, Session};

/// Access requirement a screen declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Public; renders regardless of session state.
    None,
    /// Any live session.
    Authenticated,
    /// A live session whose role is Manager. There are no elevated model
    /// routes; absence of the manager role is sufficient to deny.
    Manager,
}

/// Terminal outcome of one guard evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Render,
    RedirectToLogin,
    RedirectToUnauthorized,
}

/// Decide what a navigation to a screen declaring `requirement` should do.
///
/// A session that is absent *or* expired at `now` counts as unauthenticated.
/// Only the explicit role field is consulted — never `model_id`.
pub fn evaluate(session: Option<&Session>, requirement: Requirement, now: i64) -> Outcome {
    if requirement == Requirement::None {
        return Outcome::Render;
    }
    let Some(session) = session.filter(|s| s.is_valid_at(now)) else {
        return Outcome::RedirectToLogin;
    };
    if requirement == Requirement::Manager && session.role != Role::Manager {
        return Outcome::RedirectToUnauthorized;
    }
    Outcome::Render
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    fn session(role: Role) -> Session {
        Session {
            email: "who@agency.test".into(),
            first_name: None,
            role,
            model_id: match role {
                Role::Manager => None,
                Role::Model => Some("42".into()),
            },
            expires_at: NOW + 3600,
        }
    }

    #[test]
    fn public_screens_always_render() {
        assert_eq!(evaluate(None, Requirement::None, NOW), Outcome::Render);
        assert_eq!(
            evaluate(Some(&session(Role::Model)), Requirement::None, NOW),
            Outcome::Render
        );
    }

    #[test]
    fn anonymous_is_sent_to_login_for_any_protected_screen() {
        assert_eq!(
            evaluate(None, Requirement::Authenticated, NOW),
            Outcome::RedirectToLogin
        );
        assert_eq!(
            evaluate(None, Requirement::Manager, NOW),
            Outcome::RedirectToLogin
        );
    }

    #[test]
    fn expired_session_counts_as_anonymous() {
        let mut stale = session(Role::Manager);
        stale.expires_at = NOW - 1;
        assert_eq!(
            evaluate(Some(&stale), Requirement::Authenticated, NOW),
            Outcome::RedirectToLogin
        );
        assert_eq!(
            evaluate(Some(&stale), Requirement::Manager, NOW),
            Outcome::RedirectToLogin
        );
    }

    #[test]
    fn model_is_denied_manager_screens() {
        assert_eq!(
            evaluate(Some(&session(Role::Model)), Requirement::Manager, NOW),
            Outcome::RedirectToUnauthorized
        );
    }

    #[test]
    fn satisfied_requirements_render() {
        assert_eq!(
            evaluate(Some(&session(Role::Model)), Requirement::Authenticated, NOW),
            Outcome::Render
        );
        assert_eq!(
            evaluate(Some(&session(Role::Manager)), Requirement::Authenticated, NOW),
            Outcome::Render
        );
        assert_eq!(
            evaluate(Some(&session(Role::Manager)), Requirement::Manager, NOW),
            Outcome::Render
        );
    }

    #[test]
    fn role_is_the_only_signal_consulted() {
        // A manager-role session with a stray model id must still pass, and
        // a model without a model id must still be denied.
        let mut odd_manager = session(Role::Manager);
        odd_manager.model_id = Some("7".into());
        assert_eq!(
            evaluate(Some(&odd_manager), Requirement::Manager, NOW),
            Outcome::Render
        );

        let mut odd_model = session(Role::Model);
        odd_model.model_id = None;
        assert_eq!(
            evaluate(Some(&odd_model), Requirement::Manager, NOW),
            Outcome::RedirectToUnauthorized
        );
    }
}
