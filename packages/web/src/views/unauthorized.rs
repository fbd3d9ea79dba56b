//! Denial screen for authenticated users who lack the manager role.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Unauthorized() -> Element {
    rsx! {
        div {
            class: "unauthorized-page",
            h1 { "Not Authorized" }
            p { "You don't have permission to view that page." }
            Link { to: Route::Root {}, class: "btn btn-primary", "Back to Dashboard" }
        }
    }
}
