use dioxus::prelude::*;

use ui::{AuthProvider, LogoutButton, Navbar};
use views::{Dashboard, Jobs, Login, Managers, Models, MyJobs, Unauthorized};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/unauthorized")]
        Unauthorized {},
        #[route("/dashboard")]
        Dashboard {},
        #[route("/models")]
        Models {},
        #[route("/managers")]
        Managers {},
        #[route("/jobs")]
        Jobs {},
        #[route("/my-jobs")]
        MyJobs {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation chrome around every screen. Links depend on the published
/// session: role-gated sections for managers and models, a Login link for
/// anonymous visitors.
#[component]
fn Shell() -> Element {
    let auth = ui::use_auth();
    let state = auth();
    let authenticated = state.is_authenticated();
    let manager = state.is_manager();

    rsx! {
        div {
            class: "app-container",
            Navbar {
                div {
                    class: "logo",
                    Link { to: Route::Root {}, "ModelDesk" }
                }
                div {
                    class: "nav-links",
                    if authenticated {
                        Link { to: Route::Dashboard {}, "Dashboard" }
                        if manager {
                            Link { to: Route::Models {}, "Models" }
                            Link { to: Route::Managers {}, "Managers" }
                            Link { to: Route::Jobs {}, "Jobs" }
                        } else {
                            Link { to: Route::MyJobs {}, "My Jobs" }
                        }
                        LogoutButton {}
                    } else {
                        Link { to: Route::Login {}, "Login" }
                    }
                }
            }
            main {
                class: "main-content",
                Outlet::<Route> {}
            }
        }
    }
}

/// Redirect `/` to the dashboard; the guard sends anonymous visitors on to
/// the login screen from there.
#[component]
fn Root() -> Element {
    let nav = use_navigator();
    nav.replace(Route::Dashboard {});
    rsx! {}
}
