//! # API crate — typed access to the agency backend
//!
//! Everything the screens know about the external REST service lives here:
//! the wire [`models`], the [`AgencyApi`] client with one method per
//! endpoint, and the [`AuthEndpoint`] implementation of the session crate's
//! credential exchange.
//!
//! The client attaches the current bearer token to every request by asking
//! the [`session::SessionStore`] it was built with — no other code touches
//! the `Authorization` header. Transport failures and non-2xx statuses
//! surface as [`ApiError`] values for the screens' error banners; they never
//! feed back into session state.

pub mod client;
pub mod models;

pub use client::{AgencyApi, ApiError, AuthEndpoint, DEFAULT_BASE_URL};
pub use models::{
    Expense, Job, Manager, Model, NewExpense, NewJob, NewManager, NewModel, PasswordChange,
};
