//! Manager screen: create manager accounts, browse the team.

use dioxus::prelude::*;

use api::NewManager;
use session::guard::Requirement;
use ui::{use_api, FormField};

use crate::guard::Guard;

#[component]
pub fn Managers() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Manager,
            ManagersContent {}
        }
    }
}

#[component]
fn ManagersContent() -> Element {
    let api = use_api();
    let mut managers = use_signal(Vec::<api::Manager>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.managers().await {
                    Ok(list) => managers.set(list),
                    Err(e) => error.set(Some(format!("Failed to load managers: {e}"))),
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let payload = NewManager {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                password: password(),
            };
            match api.create_manager(&payload).await {
                Ok(created) => {
                    managers.write().push(created);
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to create manager: {e}"))),
            }
        }
    };

    rsx! {
        div {
            class: "managers-page",
            h1 { "Managers" }

            div {
                class: "create-form",
                h2 { "Create New Manager" }

                {error().map(|message| rsx! {
                    div { class: "alert alert-danger", "{message}" }
                })}

                form {
                    onsubmit: handle_submit,
                    FormField {
                        label: "First Name",
                        name: "firstName",
                        value: first_name(),
                        required: true,
                        oninput: move |evt: FormEvent| first_name.set(evt.value()),
                    }
                    FormField {
                        label: "Last Name",
                        name: "lastName",
                        value: last_name(),
                        required: true,
                        oninput: move |evt: FormEvent| last_name.set(evt.value()),
                    }
                    FormField {
                        label: "Email",
                        name: "email",
                        input_type: "email",
                        value: email(),
                        required: true,
                        oninput: move |evt: FormEvent| email.set(evt.value()),
                    }
                    FormField {
                        label: "Password",
                        name: "password",
                        input_type: "password",
                        value: password(),
                        required: true,
                        oninput: move |evt: FormEvent| password.set(evt.value()),
                    }
                    button { r#type: "submit", "Create Manager" }
                }
            }

            div {
                class: "list-section",
                h2 { "Managers List" }
                if loading() {
                    p { "Loading..." }
                } else if managers().is_empty() {
                    p { "No managers available." }
                } else {
                    div {
                        class: "card-grid",
                        for manager in managers() {
                            div {
                                key: "{manager.manager_id}",
                                class: "manager-card",
                                h3 { {manager.full_name()} }
                                p { "Email: {manager.email}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
