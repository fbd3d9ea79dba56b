//! Wire models for the agency backend.
//!
//! Field names are camelCase on the wire (`#[serde(rename_all)]`); the
//! `New*` structs are the create payloads, which differ from the read
//! models in that they carry no server-assigned id and, for accounts, a
//! password.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model profile as the backend returns it.
///
/// Everything past the contact block is optional — profiles are created
/// with the core fields and filled in over time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Model {
    pub model_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_no: Option<String>,
    #[serde(default)]
    pub address_line1: Option<String>,
    #[serde(default)]
    pub address_line2: Option<String>,
    #[serde(default)]
    pub zip: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub birth_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub shoe_size: Option<f64>,
    #[serde(default)]
    pub hair_color: Option<String>,
    #[serde(default)]
    pub eye_color: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl Model {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create payload for `POST /Models`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewModel {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone_no: String,
}

/// A back-office manager account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub manager_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Manager {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Create payload for `POST /Managers`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewManager {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A job engagement. `GET /Jobs` returns these scoped to the caller: a
/// manager sees every job, a model only the jobs it is assigned to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: i64,
    pub customer: String,
    pub start_date: DateTime<Utc>,
    pub days: i32,
    pub location: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub models: Vec<Model>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Job {
    /// Last day of the engagement (start + duration).
    pub fn end_date(&self) -> DateTime<Utc> {
        self.start_date + chrono::Duration::days(i64::from(self.days))
    }

    /// A job is active until its end date has passed.
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.end_date() >= now
    }
}

/// Create payload for `POST /Jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub customer: String,
    pub start_date: DateTime<Utc>,
    pub days: i32,
    pub location: String,
    #[serde(default)]
    pub comments: Option<String>,
}

/// An expense a model logged against a job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub expense_id: i64,
    pub model_id: i64,
    pub job_id: i64,
    pub date: DateTime<Utc>,
    pub text: String,
    pub amount: f64,
}

/// Create payload for `POST /Expenses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpense {
    pub model_id: i64,
    pub job_id: i64,
    pub date: DateTime<Utc>,
    pub text: String,
    pub amount: f64,
}

/// Payload for `PUT /Account/Password`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChange {
    pub email: String,
    pub old_password: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn job_deserializes_from_backend_shape() {
        let json = r#"{
            "jobId": 3,
            "customer": "Vogue",
            "startDate": "2026-08-01T00:00:00Z",
            "days": 4,
            "location": "Milan",
            "comments": null,
            "models": [{
                "modelId": 42,
                "firstName": "Eva",
                "lastName": "Larsen",
                "email": "eva@agency.test",
                "phoneNo": "555-0142"
            }],
            "expenses": [{
                "expenseId": 9,
                "modelId": 42,
                "jobId": 3,
                "date": "2026-08-02T12:00:00Z",
                "text": "Taxi",
                "amount": 23.5
            }]
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert_eq!(job.job_id, 3);
        assert_eq!(job.models[0].full_name(), "Eva Larsen");
        assert_eq!(job.expenses[0].text, "Taxi");
        assert_eq!(job.expenses[0].amount, 23.5);
    }

    #[test]
    fn job_without_relations_still_deserializes() {
        let json = r#"{
            "jobId": 1,
            "customer": "H&M",
            "startDate": "2026-01-15T00:00:00Z",
            "days": 2,
            "location": "Copenhagen"
        }"#;

        let job: Job = serde_json::from_str(json).unwrap();
        assert!(job.models.is_empty());
        assert!(job.expenses.is_empty());
        assert_eq!(job.comments, None);
    }

    #[test]
    fn job_activity_window_includes_the_end_date() {
        let job = Job {
            job_id: 1,
            customer: "X".into(),
            start_date: Utc.with_ymd_and_hms(2026, 8, 1, 0, 0, 0).unwrap(),
            days: 3,
            location: "Y".into(),
            comments: None,
            models: Vec::new(),
            expenses: Vec::new(),
        };

        let during = Utc.with_ymd_and_hms(2026, 8, 2, 12, 0, 0).unwrap();
        let on_end = Utc.with_ymd_and_hms(2026, 8, 4, 0, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2026, 8, 5, 0, 0, 1).unwrap();

        assert!(job.is_active_at(during));
        assert!(job.is_active_at(on_end));
        assert!(!job.is_active_at(after));
    }

    #[test]
    fn new_model_serializes_camel_case() {
        let payload = NewModel {
            first_name: "Eva".into(),
            last_name: "Larsen".into(),
            email: "eva@agency.test".into(),
            password: "secret123".into(),
            phone_no: "555-0142".into(),
        };

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["firstName"], "Eva");
        assert_eq!(value["phoneNo"], "555-0142");
        assert!(value.get("first_name").is_none());
    }
}
