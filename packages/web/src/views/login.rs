//! Email/password login screen.

use dioxus::prelude::*;

use session::Role;
use ui::{use_auth, use_session_store, FormField};

use crate::Route;

fn home_for(role: Role) -> Route {
    match role {
        Role::Manager => Route::Dashboard {},
        Role::Model => Route::MyJobs {},
    }
}

#[component]
pub fn Login() -> Element {
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let auth = use_auth();
    let store = use_session_store();
    let nav = use_navigator();

    // Already logged in: go straight to the role's home screen.
    if let Some(session) = auth().session {
        nav.replace(home_for(session.role));
        return rsx! {};
    }

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        async move {
            error.set(None);
            loading.set(true);
            match ui::login(store, auth, email(), password()).await {
                Ok(session) => {
                    nav.push(home_for(session.role));
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    error.set(Some("Failed to log in".to_string()));
                }
            }
            loading.set(false);
        }
    };

    rsx! {
        div {
            class: "login-container",
            h2 { "Login" }

            {error().map(|message| rsx! {
                div { class: "alert alert-danger", "{message}" }
            })}

            form {
                onsubmit: handle_submit,
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
                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() {
                        "Logging in..."
                    } else {
                        "Login"
                    }
                }
            }
        }
    }
}
