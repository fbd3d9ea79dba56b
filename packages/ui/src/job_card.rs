//! Manager-facing job card: engagement details plus model assignment.

use api::{Job, Model};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::model_card::ModelSelector;

fn fmt_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// One job with its assigned models and the controls to change them.
///
/// `models` is the full roster; the selector offers only the ones not yet
/// on this job.
#[component]
pub fn JobCard(
    job: Job,
    models: Vec<Model>,
    on_assign: EventHandler<(i64, i64)>,
    on_unassign: EventHandler<(i64, i64)>,
    on_delete: EventHandler<i64>,
) -> Element {
    let job_id = job.job_id;
    let start_date = fmt_date(&job.start_date);
    let unassigned: Vec<Model> = models
        .iter()
        .filter(|m| !job.models.iter().any(|a| a.model_id == m.model_id))
        .cloned()
        .collect();

    rsx! {
        div {
            class: "job-card",
            div {
                class: "job-card-header",
                h3 { "{job.customer}" }
                button {
                    class: "btn btn-outline",
                    title: "Delete this job",
                    onclick: move |_| on_delete.call(job_id),
                    "Delete"
                }
            }

            div {
                class: "job-details",
                p { strong { "Start Date: " } "{start_date}" }
                p { strong { "Days: " } "{job.days}" }
                p { strong { "Location: " } "{job.location}" }
                {job.comments.as_deref().map(|comments| rsx! {
                    p { strong { "Comments: " } "{comments}" }
                })}
            }

            div {
                class: "job-models",
                h4 { "Assigned Models" }
                if job.models.is_empty() {
                    p { "No models assigned yet." }
                } else {
                    ul {
                        class: "assigned-models",
                        for model in job.models.iter() {
                            li {
                                key: "{model.model_id}",
                                span { {model.full_name()} }
                                button {
                                    class: "btn btn-outline remove-btn",
                                    onclick: {
                                        let model_id = model.model_id;
                                        move |_| on_unassign.call((job_id, model_id))
                                    },
                                    "Remove"
                                }
                            }
                        }
                    }
                }

                ModelSelector {
                    models: unassigned,
                    on_add: move |model_id| on_assign.call((job_id, model_id)),
                }
            }
        }
    }
}
