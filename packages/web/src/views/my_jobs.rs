//! Model screen: assigned jobs, their expenses, and expense entry.
//!
//! `GET /Jobs` already comes back scoped to the calling model, so this
//! screen never filters client-side.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use api::{Job, NewExpense};
use session::guard::Requirement;
use ui::{use_api, use_auth, ExpenseList, FormField};

use crate::guard::Guard;

fn fmt_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[component]
pub fn MyJobs() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Authenticated,
            MyJobsContent {}
        }
    }
}

#[component]
fn MyJobsContent() -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut jobs = use_signal(Vec::<Job>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut selected_job_id = use_signal(|| Option::<i64>::None);
    let mut amount = use_signal(String::new);
    let mut text = use_signal(String::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.jobs().await {
                    Ok(list) => jobs.set(list),
                    Err(e) => error.set(Some(format!("Failed to load jobs: {e}"))),
                }
                loading.set(false);
            }
        }
    });

    let select_job = use_callback(move |job_id: i64| {
        selected_job_id.set(Some(job_id));
    });

    let handle_add_expense = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            async move {
                let Some(job_id) = selected_job_id() else {
                    return;
                };
                // The model id travels in the token; a session without one
                // cannot log expenses.
                let model_id = auth
                    .peek()
                    .session
                    .as_ref()
                    .and_then(|s| s.model_id.as_deref()?.parse::<i64>().ok());
                let Some(model_id) = model_id else {
                    error.set(Some("Your account has no model profile".to_string()));
                    return;
                };
                let Ok(parsed_amount) = amount().trim().parse::<f64>() else {
                    error.set(Some("Amount must be a positive number".to_string()));
                    return;
                };
                if parsed_amount <= 0.0 {
                    error.set(Some("Amount must be a positive number".to_string()));
                    return;
                }

                let payload = NewExpense {
                    model_id,
                    job_id,
                    date: Utc::now(),
                    text: text(),
                    amount: parsed_amount,
                };
                match api.create_expense(&payload).await {
                    Ok(_) => {
                        amount.set(String::new());
                        text.set(String::new());
                        selected_job_id.set(None);
                        error.set(None);
                        // Refetch so the new expense shows under its job.
                        match api.jobs().await {
                            Ok(list) => jobs.set(list),
                            Err(e) => error.set(Some(format!("Failed to refresh jobs: {e}"))),
                        }
                    }
                    Err(e) => error.set(Some(format!("Failed to add expense: {e}"))),
                }
            }
        }
    };

    rsx! {
        div {
            class: "my-jobs-page",
            h1 { "My Jobs" }

            {error().map(|message| rsx! {
                div { class: "alert alert-danger", "{message}" }
            })}

            if loading() {
                p { "Loading your jobs..." }
            } else if jobs().is_empty() {
                p { "You don't have any assigned jobs yet." }
            } else {
                div {
                    class: "job-list",
                    for job in jobs() {
                        JobExpensesCard {
                            key: "{job.job_id}",
                            job: job.clone(),
                            on_add_expense: select_job,
                        }
                    }
                }
            }

            {selected_job_id().map(|_| rsx! {
                div {
                    class: "create-form add-expense-form",
                    h3 { "Add Expense" }
                    form {
                        onsubmit: handle_add_expense.clone(),
                        div {
                            class: "form-group",
                            label { r#for: "amount", "Amount ($)" }
                            input {
                                r#type: "number",
                                id: "amount",
                                name: "amount",
                                step: "0.01",
                                min: "0.01",
                                value: amount(),
                                required: true,
                                oninput: move |evt: FormEvent| amount.set(evt.value()),
                            }
                        }
                        FormField {
                            label: "Description",
                            name: "text",
                            value: text(),
                            required: true,
                            oninput: move |evt: FormEvent| text.set(evt.value()),
                        }
                        div {
                            class: "form-buttons",
                            button { r#type: "submit", "Add Expense" }
                            button {
                                r#type: "button",
                                class: "btn btn-outline",
                                onclick: move |_| selected_job_id.set(None),
                                "Cancel"
                            }
                        }
                    }
                }
            })}
        }
    }
}

/// One assigned job with its expenses, model-side (no assignment controls).
#[component]
fn JobExpensesCard(job: Job, on_add_expense: EventHandler<i64>) -> Element {
    let job_id = job.job_id;
    let start_date = fmt_date(&job.start_date);

    rsx! {
        div {
            class: "job-card",
            h3 { "{job.customer}" }
            p { strong { "Start Date: " } "{start_date}" }
            p { strong { "Duration: " } "{job.days} days" }
            p { strong { "Location: " } "{job.location}" }
            {job.comments.as_deref().map(|comments| rsx! {
                p { strong { "Comments: " } "{comments}" }
            })}

            div {
                class: "job-expenses",
                h4 { "Expenses" }
                if job.expenses.is_empty() {
                    p { "No expenses added yet." }
                } else {
                    ExpenseList { expenses: job.expenses.clone() }
                }
            }

            button {
                class: "btn add-expense-button",
                onclick: move |_| on_add_expense.call(job_id),
                "Add Expense"
            }
        }
    }
}
