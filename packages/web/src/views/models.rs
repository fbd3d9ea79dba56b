//! Manager screen: create models, browse the roster.

use dioxus::prelude::*;

use api::NewModel;
use session::guard::Requirement;
use ui::{use_api, FormField, ModelCard};

use crate::guard::Guard;

#[component]
pub fn Models() -> Element {
    rsx! {
        Guard {
            requirement: Requirement::Manager,
            ModelsContent {}
        }
    }
}

#[component]
fn ModelsContent() -> Element {
    let api = use_api();
    let mut models = use_signal(Vec::<api::Model>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| Option::<String>::None);

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone_no = use_signal(String::new);

    let _loader = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move {
                match api.models().await {
                    Ok(list) => models.set(list),
                    Err(e) => error.set(Some(format!("Failed to load models: {e}"))),
                }
                loading.set(false);
            }
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let api = api.clone();
        async move {
            let payload = NewModel {
                first_name: first_name(),
                last_name: last_name(),
                email: email(),
                password: password(),
                phone_no: phone_no(),
            };
            match api.create_model(&payload).await {
                Ok(created) => {
                    models.write().push(created);
                    first_name.set(String::new());
                    last_name.set(String::new());
                    email.set(String::new());
                    password.set(String::new());
                    phone_no.set(String::new());
                    error.set(None);
                }
                Err(e) => error.set(Some(format!("Failed to create model: {e}"))),
            }
        }
    };

    rsx! {
        div {
            class: "models-page",
            h1 { "Models" }

            div {
                class: "create-form",
                h2 { "Create New Model" }

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
                    FormField {
                        label: "Phone Number",
                        name: "phoneNo",
                        value: phone_no(),
                        required: true,
                        oninput: move |evt: FormEvent| phone_no.set(evt.value()),
                    }
                    button { r#type: "submit", "Create Model" }
                }
            }

            div {
                class: "list-section",
                h2 { "Models List" }
                if loading() {
                    p { "Loading..." }
                } else if models().is_empty() {
                    p { "No models available." }
                } else {
                    div {
                        class: "card-grid",
                        for model in models() {
                            ModelCard { key: "{model.model_id}", model: model.clone() }
                        }
                    }
                }
            }
        }
    }
}
