//! Labelled form field, shared by every create/edit form.

use dioxus::prelude::*;

/// A label + input pair in the app's standard form markup.
#[component]
pub fn FormField(
    label: String,
    name: String,
    #[props(default = "text".to_string())] input_type: String,
    value: String,
    #[props(default = "".to_string())] placeholder: String,
    #[props(default)] required: bool,
    oninput: EventHandler<FormEvent>,
) -> Element {
    rsx! {
        div {
            class: "form-group",
            label { r#for: "{name}", "{label}" }
            input {
                r#type: "{input_type}",
                id: "{name}",
                name: "{name}",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                oninput: move |evt| oninput.call(evt),
            }
        }
    }
}
