//! HTTP client for the agency backend.
//!
//! [`AgencyApi`] wraps one [`reqwest::Client`] plus the session store. The
//! `request` helper is the single place the bearer header is attached, so
//! every authenticated call goes out with whatever token the session store
//! currently holds. Endpoint casing follows the backend contract
//! (`/Account/login`, `/Models`, `/Jobs/{id}/model/{id}`, …).

use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use session::{CredentialExchange, LoginError, SessionStore, TokenStore};

use crate::models::{
    Expense, Job, Manager, Model, NewExpense, NewJob, NewManager, NewModel, PasswordChange,
};

/// Backend root used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";

/// Why an API call produced no data. Screens render these as retryable
/// error banners; nothing here ever touches session state.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server returned {0}")]
    Status(StatusCode),
}

/// Typed client for every resource endpoint.
#[derive(Clone, Debug)]
pub struct AgencyApi<S: TokenStore> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: TokenStore> AgencyApi<S> {
    pub fn new(base_url: impl Into<String>, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    /// Build a request with the bearer header attached, when one exists.
    /// Sole owner of the `Authorization` header across the app.
    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.http.request(method, format!("{}{path}", self.base_url));
        if let Some(token) = self.session.bearer_token() {
            req = req.bearer_auth(token);
        }
        req
    }

    fn ok(resp: Response) -> Result<Response, ApiError> {
        if resp.status().is_success() {
            Ok(resp)
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = self.request(Method::GET, path).send().await?;
        Ok(Self::ok(resp)?.json().await?)
    }

    async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = self.request(method, path).json(body).send().await?;
        Ok(Self::ok(resp)?.json().await?)
    }

    /// For endpoints whose response body carries nothing we need.
    async fn send_empty(&self, method: Method, path: &str) -> Result<(), ApiError> {
        let resp = self.request(method, path).send().await?;
        Self::ok(resp).map(|_| ())
    }

    // -- Models ---------------------------------------------------------------

    pub async fn models(&self) -> Result<Vec<Model>, ApiError> {
        self.get_json("/Models").await
    }

    pub async fn model(&self, id: i64) -> Result<Model, ApiError> {
        self.get_json(&format!("/Models/{id}")).await
    }

    pub async fn create_model(&self, model: &NewModel) -> Result<Model, ApiError> {
        self.send_json(Method::POST, "/Models", model).await
    }

    pub async fn update_model(&self, id: i64, model: &Model) -> Result<Model, ApiError> {
        self.send_json(Method::PUT, &format!("/Models/{id}"), model).await
    }

    pub async fn delete_model(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/Models/{id}")).await
    }

    /// Jobs a given model is assigned to.
    pub async fn model_jobs(&self, id: i64) -> Result<Vec<Job>, ApiError> {
        self.get_json(&format!("/Models/{id}/jobs")).await
    }

    // -- Managers -------------------------------------------------------------

    pub async fn managers(&self) -> Result<Vec<Manager>, ApiError> {
        self.get_json("/Managers").await
    }

    pub async fn manager(&self, id: i64) -> Result<Manager, ApiError> {
        self.get_json(&format!("/Managers/{id}")).await
    }

    pub async fn create_manager(&self, manager: &NewManager) -> Result<Manager, ApiError> {
        self.send_json(Method::POST, "/Managers", manager).await
    }

    pub async fn update_manager(&self, id: i64, manager: &Manager) -> Result<Manager, ApiError> {
        self.send_json(Method::PUT, &format!("/Managers/{id}"), manager).await
    }

    pub async fn delete_manager(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/Managers/{id}")).await
    }

    // -- Jobs -----------------------------------------------------------------

    /// Jobs visible to the caller: all of them for a manager, the assigned
    /// ones for a model. The backend scopes by the bearer token.
    pub async fn jobs(&self) -> Result<Vec<Job>, ApiError> {
        self.get_json("/Jobs").await
    }

    pub async fn job(&self, id: i64) -> Result<Job, ApiError> {
        self.get_json(&format!("/Jobs/{id}")).await
    }

    pub async fn create_job(&self, job: &NewJob) -> Result<Job, ApiError> {
        self.send_json(Method::POST, "/Jobs", job).await
    }

    pub async fn update_job(&self, id: i64, job: &NewJob) -> Result<Job, ApiError> {
        self.send_json(Method::PUT, &format!("/Jobs/{id}"), job).await
    }

    pub async fn delete_job(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/Jobs/{id}")).await
    }

    pub async fn assign_model(&self, job_id: i64, model_id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::POST, &format!("/Jobs/{job_id}/model/{model_id}"))
            .await
    }

    pub async fn unassign_model(&self, job_id: i64, model_id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/Jobs/{job_id}/model/{model_id}"))
            .await
    }

    // -- Expenses -------------------------------------------------------------

    pub async fn expenses(&self) -> Result<Vec<Expense>, ApiError> {
        self.get_json("/Expenses").await
    }

    pub async fn expense(&self, id: i64) -> Result<Expense, ApiError> {
        self.get_json(&format!("/Expenses/{id}")).await
    }

    /// Expenses logged by one model, across jobs.
    pub async fn model_expenses(&self, model_id: i64) -> Result<Vec<Expense>, ApiError> {
        self.get_json(&format!("/Expenses/model/{model_id}")).await
    }

    pub async fn create_expense(&self, expense: &NewExpense) -> Result<Expense, ApiError> {
        self.send_json(Method::POST, "/Expenses", expense).await
    }

    pub async fn update_expense(&self, id: i64, expense: &NewExpense) -> Result<Expense, ApiError> {
        self.send_json(Method::PUT, &format!("/Expenses/{id}"), expense).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<(), ApiError> {
        self.send_empty(Method::DELETE, &format!("/Expenses/{id}")).await
    }

    // -- Account --------------------------------------------------------------

    pub async fn change_password(&self, change: &PasswordChange) -> Result<(), ApiError> {
        let resp = self
            .request(Method::PUT, "/Account/Password")
            .json(change)
            .send()
            .await?;
        Self::ok(resp).map(|_| ())
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// The credential exchange, over `POST /Account/login`.
///
/// Unauthenticated by construction — login is the one call that cannot
/// carry a bearer token, so this sits outside [`AgencyApi`].
#[derive(Clone, Debug)]
pub struct AuthEndpoint {
    http: reqwest::Client,
    base_url: String,
}

impl AuthEndpoint {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for AuthEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// The backend answers with the token as the bare response body; some
/// revisions quote it as a JSON string. Both normalize to the raw token.
fn token_from_body(body: &str) -> Option<String> {
    let token = body.trim().trim_matches('"').trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

impl CredentialExchange for AuthEndpoint {
    async fn exchange(&self, identity: &str, secret: &str) -> Result<String, LoginError> {
        let resp = self
            .http
            .post(format!("{}/Account/login", self.base_url))
            .json(&LoginRequest {
                email: identity,
                password: secret,
            })
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("login request failed: {e}");
                LoginError::Unavailable(e.to_string())
            })?;

        if !resp.status().is_success() {
            return Err(LoginError::Rejected);
        }

        let body = resp
            .text()
            .await
            .map_err(|e| LoginError::Unavailable(e.to_string()))?;
        token_from_body(&body).ok_or(LoginError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_token_body_passes_through() {
        assert_eq!(token_from_body("abc.def.ghi").as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn json_quoted_token_is_unwrapped() {
        assert_eq!(
            token_from_body("\"abc.def.ghi\"\n").as_deref(),
            Some("abc.def.ghi")
        );
    }

    #[test]
    fn empty_body_is_no_token() {
        assert_eq!(token_from_body(""), None);
        assert_eq!(token_from_body("  \n"), None);
        assert_eq!(token_from_body("\"\""), None);
    }
}
