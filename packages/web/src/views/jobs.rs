//! Manager screen: create jobs, assign models, prune engagements.

use chrono::{NaiveDate, TimeZone, Utc};
use dioxus::prelude::*;

use api::{Job, Model, NewJob};
use session::guard::Requirement;
use ui::{use_api, AppApi, FormField, JobCard};

use crate::guard::Guard;

#[component]
pub fn Jobs() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Manager,
            JobsContent {}
        }
    }
}

/// Refetch the job list after a mutation; relations (models, expenses) come
/// back embedded, so this is the one way to keep cards consistent.
fn refresh_jobs(api: AppApi, mut jobs: Signal<Vec<Job>>, mut error: Signal<Option<String>>) {
    spawn(async move {
        match api.jobs().await {
            Ok(list) => jobs.set(list),
            Err(e) => error.set(Some(format!("Failed to refresh jobs: {e}"))),
        }
    });
}

#[component]
fn JobsContent() -> Element {
    let api = use_api();
    let mut jobs = use_signal(Vec::<Job>::new);
    let mut models = use_signal(Vec::<Model>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut customer = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut days = use_signal(String::new);
    let mut location = use_signal(String::new);
    let mut comments = use_signal(String::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match (api.jobs().await, api.models().await) {
                    (Ok(job_list), Ok(model_list)) => {
                        jobs.set(job_list);
                        models.set(model_list);
                    }
                    (Err(e), _) | (_, Err(e)) => {
                        error.set(Some(format!("Failed to load data: {e}")));
                    }
                }
                loading.set(false);
            }
        }
    });

    let handle_create = {
        let api = api.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let api = api.clone();
            async move {
                let Ok(parsed_days) = days().trim().parse::<i32>() else {
                    error.set(Some("Days must be a whole number".to_string()));
                    return;
                };
                let Ok(date) = NaiveDate::parse_from_str(start_date().trim(), "%Y-%m-%d") else {
                    error.set(Some("Start date is required".to_string()));
                    return;
                };
                let start = match date.and_hms_opt(0, 0, 0) {
                    Some(dt) => Utc.from_utc_datetime(&dt),
                    None => return,
                };

                let payload = NewJob {
                    customer: customer(),
                    start_date: start,
                    days: parsed_days,
                    location: location(),
                    comments: Some(comments()).filter(|c| !c.trim().is_empty()),
                };
                match api.create_job(&payload).await {
                    Ok(created) => {
                        jobs.write().push(created);
                        customer.set(String::new());
                        start_date.set(String::new());
                        days.set(String::new());
                        location.set(String::new());
                        comments.set(String::new());
                        error.set(None);
                    }
                    Err(e) => error.set(Some(format!("Failed to create job: {e}"))),
                }
            }
        }
    };

    // Callback handles are Copy, so one of each serves every card in the list.
    let handle_assign = use_callback({
        let api = api.clone();
        move |(job_id, model_id): (i64, i64)| {
            let api = api.clone();
            spawn(async move {
                match api.assign_model(job_id, model_id).await {
                    Ok(()) => refresh_jobs(api, jobs, error),
                    Err(e) => error.set(Some(format!("Failed to add model to job: {e}"))),
                }
            });
        }
    });

    let handle_unassign = use_callback({
        let api = api.clone();
        move |(job_id, model_id): (i64, i64)| {
            let api = api.clone();
            spawn(async move {
                match api.unassign_model(job_id, model_id).await {
                    Ok(()) => refresh_jobs(api, jobs, error),
                    Err(e) => error.set(Some(format!("Failed to remove model from job: {e}"))),
                }
            });
        }
    });

    let handle_delete = use_callback({
        let api = api.clone();
        move |job_id: i64| {
            let api = api.clone();
            spawn(async move {
                match api.delete_job(job_id).await {
                    Ok(()) => refresh_jobs(api, jobs, error),
                    Err(e) => error.set(Some(format!("Failed to delete job: {e}"))),
                }
            });
        }
    });

    rsx! {
        div {
            class: "jobs-page",
            h1 { "Jobs Management" }

            {error().map(|message| rsx! {
                div { class: "alert alert-danger", "{message}" }
            })}

            div {
                class: "create-form",
                h2 { "Create New Job" }
                form {
                    onsubmit: handle_create,
                    FormField {
                        label: "Customer",
                        name: "customer",
                        value: customer(),
                        required: true,
                        oninput: move |evt: FormEvent| customer.set(evt.value()),
                    }
                    FormField {
                        label: "Start Date",
                        name: "startDate",
                        input_type: "date",
                        value: start_date(),
                        required: true,
                        oninput: move |evt: FormEvent| start_date.set(evt.value()),
                    }
                    FormField {
                        label: "Days",
                        name: "days",
                        input_type: "number",
                        value: days(),
                        required: true,
                        oninput: move |evt: FormEvent| days.set(evt.value()),
                    }
                    FormField {
                        label: "Location",
                        name: "location",
                        value: location(),
                        required: true,
                        oninput: move |evt: FormEvent| location.set(evt.value()),
                    }
                    FormField {
                        label: "Comments",
                        name: "comments",
                        value: comments(),
                        oninput: move |evt: FormEvent| comments.set(evt.value()),
                    }
                    button { r#type: "submit", "Create Job" }
                }
            }

            if loading() {
                p { "Loading..." }
            } else if jobs().is_empty() {
                p { "No jobs yet." }
            } else {
                div {
                    class: "job-list",
                    for job in jobs() {
                        JobCard {
                            key: "{job.job_id}",
                            job: job.clone(),
                            models: models(),
                            on_assign: handle_assign,
                            on_unassign: handle_unassign,
                            on_delete: handle_delete,
                        }
                    }
                }
            }
        }
    }
}
