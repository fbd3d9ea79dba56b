//! This crate contains all shared UI for the workspace.

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

mod platform;
pub use platform::{make_api, make_session_store, AppApi, AppSessionStore, PlatformTokenStore};

mod auth;
pub use auth::{login, logout, use_api, use_auth, use_session_store, AuthProvider, AuthState, LogoutButton};

mod navbar;
pub use navbar::Navbar;

mod forms;
pub use forms::FormField;

mod model_card;
pub use model_card::{ModelCard, ModelSelector};

mod job_card;
pub use job_card::JobCard;

mod expense_list;
pub use expense_list::ExpenseList;
