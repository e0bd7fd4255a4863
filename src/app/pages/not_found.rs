//! Rendered for any route the table does not know.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::navigation_context::use_navigation;
use crate::app::routes;

#[component]
pub fn NotFound(route: String) -> Element {
    let nav = use_navigation();

    rsx! {
        section { class: "py-12 text-center",
            h1 { "Page not found" }
            p { class: "text-muted", "Nothing lives at \"{route}\"." }
            div { class: "flex gap-2 justify-center mt-4",
                if nav.can_go_back() {
                    button {
                        class: "btn btn-ghost",
                        onclick: move |_| nav.go_back(),
                        "Go back"
                    }
                }
                NavLink { route: routes::HOME, label: "Home", class: "btn btn-primary" }
            }
        }
    }
}
