//! Model profile card and the assignment selector.

use api::Model;
use dioxus::prelude::*;

/// Read-only card for one model profile.
#[component]
pub fn ModelCard(model: Model) -> Element {
    let name = model.full_name();

    rsx! {
        div {
            class: "model-card",
            h3 { "{name}" }
            p { "Email: {model.email}" }
            {model.phone_no.as_deref().map(|phone| rsx! {
                p { "Phone: {phone}" }
            })}
            {model.city.as_deref().map(|city| rsx! {
                p { "City: {city}" }
            })}
        }
    }
}

/// Dropdown of candidate models with an Add button.
///
/// The caller passes only the models that can still be assigned; an empty
/// list renders a hint instead of the selector.
#[component]
pub fn ModelSelector(models: Vec<Model>, on_add: EventHandler<i64>) -> Element {
    let mut selected = use_signal(|| Option::<i64>::None);

    if models.is_empty() {
        return rsx! {
            p { class: "model-selector-empty", "All models are already assigned." }
        };
    }

    let handle_add = move |_| {
        if let Some(id) = selected() {
            on_add.call(id);
            selected.set(None);
        }
    };

    rsx! {
        div {
            class: "model-selector",
            select {
                value: selected().map(|id| id.to_string()).unwrap_or_default(),
                onchange: move |evt| selected.set(evt.value().parse().ok()),
                option { value: "", "Select a model..." }
                for model in models.iter() {
                    option {
                        key: "{model.model_id}",
                        value: "{model.model_id}",
                        {model.full_name()}
                    }
                }
            }
            button {
                class: "btn btn-primary",
                disabled: selected().is_none(),
                onclick: handle_add,
                "Add"
            }
        }
    }
}
