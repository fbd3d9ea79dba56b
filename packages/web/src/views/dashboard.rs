//! Landing screen: welcome header plus, for managers, agency-wide stats.

use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use api::Job;
use session::guard::Requirement;
use ui::icons::{FaBriefcase, FaCalendarDays, FaUserGroup};
use ui::{use_api, use_auth, Icon};

use crate::guard::Guard;
use crate::Route;

#[derive(Debug, Clone, PartialEq)]
struct Stats {
    total_models: usize,
    total_jobs: usize,
    active_jobs: usize,
    recent_jobs: Vec<Job>,
}

fn fmt_date(date: &DateTime<Utc>) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[component]
pub fn Dashboard() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Authenticated,
            DashboardContent {}
        }
    }
}

#[component]
fn DashboardContent() -> Element {
    let auth = use_auth();
    let api = use_api();
    let mut stats = use_signal(|| Option::<Stats>::None);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let session = auth().session;
    let manager = session.as_ref().is_some_and(|s| s.is_manager());
    let who = session
        .as_ref()
        .map(|s| s.first_name.clone().unwrap_or_else(|| s.email.clone()))
        .unwrap_or_default();

    let _loader = use_resource(move || {
        let api = api.clone();
        async move {
            if !manager {
                loading.set(false);
                return;
            }
            match (api.models().await, api.jobs().await) {
                (Ok(models), Ok(jobs)) => {
                    let now = Utc::now();
                    let active = jobs.iter().filter(|j| j.is_active_at(now)).count();
                    let mut recent = jobs.clone();
                    recent.sort_by(|a, b| b.start_date.cmp(&a.start_date));
                    recent.truncate(5);
                    stats.set(Some(Stats {
                        total_models: models.len(),
                        total_jobs: jobs.len(),
                        active_jobs: active,
                        recent_jobs: recent,
                    }));
                }
                (Err(e), _) | (_, Err(e)) => {
                    error.set(Some(format!("Failed to load dashboard data: {e}")));
                }
            }
            loading.set(false);
        }
    });

    rsx! {
        div {
            class: "dashboard-page",
            div {
                class: "page-header",
                h1 { "Dashboard" }
            }

            {error().map(|message| rsx! {
                div { class: "alert alert-danger", "{message}" }
            })}

            div {
                class: "welcome-section",
                h2 { "Welcome back, {who}" }
            }

            if !manager {
                div {
                    class: "model-home",
                    p { "Your assigned jobs and expenses live under My Jobs." }
                    Link { to: Route::MyJobs {}, class: "btn btn-primary", "View My Jobs" }
                }
            } else if loading() {
                p { class: "loading", "Loading..." }
            } else {
                {stats().map(|stats| {
                    let recent = stats.recent_jobs.clone();
                    rsx! {
                        div {
                            class: "stats-grid",
                            StatCard { value: stats.total_models, label: "Total Models", icon: StatIcon::Models, to: Route::Models {} }
                            StatCard { value: stats.total_jobs, label: "Total Jobs", icon: StatIcon::Jobs, to: Route::Jobs {} }
                            StatCard { value: stats.active_jobs, label: "Active Jobs", icon: StatIcon::Active, to: Route::Jobs {} }
                        }

                        div {
                            class: "recent-jobs-section",
                            h2 { "Recent Jobs" }
                            if recent.is_empty() {
                                div {
                                    class: "empty-state",
                                    p { "No jobs yet. Create your first job to get started." }
                                    Link { to: Route::Jobs {}, class: "btn btn-primary", "Create Job" }
                                }
                            } else {
                                table {
                                    class: "recent-jobs-table",
                                    thead {
                                        tr {
                                            th { "Customer" }
                                            th { "Location" }
                                            th { "Start Date" }
                                            th { "Duration" }
                                            th { "Models" }
                                        }
                                    }
                                    tbody {
                                        for job in recent.iter() {
                                            tr {
                                                key: "{job.job_id}",
                                                td { "{job.customer}" }
                                                td { "{job.location}" }
                                                td { {fmt_date(&job.start_date)} }
                                                td { "{job.days} days" }
                                                td { {job.models.len().to_string()} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                })}
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum StatIcon {
    Models,
    Jobs,
    Active,
}

#[component]
fn StatCard(value: usize, label: String, icon: StatIcon, to: Route) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div {
                class: "stat-icon",
                {match icon {
                    StatIcon::Models => rsx! { Icon { icon: FaUserGroup, width: 28, height: 28 } },
                    StatIcon::Jobs => rsx! { Icon { icon: FaBriefcase, width: 28, height: 28 } },
                    StatIcon::Active => rsx! { Icon { icon: FaCalendarDays, width: 28, height: 28 } },
                }}
            }
            div { class: "stat-value", "{value}" }
            div { class: "stat-label", "{label}" }
            Link { to: to.clone(), class: "btn btn-primary", "View" }
        }
    }
}
