//! Navigation bar and in-app links.

use dioxus::prelude::*;

use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::app::session::{use_session, Role};
use crate::navigation::{serialize, RouteId, RouteParams};

/// Link to an in-app route.
///
/// Renders a real `href` so the target can be opened in a new tab, but a
/// plain click goes through the navigator instead of the browser.
#[component]
pub fn NavLink(
    #[props(into)] route: String,
    #[props(into)] label: String,
    #[props(default)] params: RouteParams,
    #[props(default, into)] class: String,
) -> Element {
    let nav = use_navigation();
    let href = serialize(&RouteId::from(route.as_str()), &params);
    let active = nav.current_route().normalized() == route;

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            "aria-current": active.then_some("page"),
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                let params = (!params.is_empty()).then(|| params.clone());
                nav.navigate(route.clone(), params);
            },
            if active {
                strong { "{label}" }
            } else {
                "{label}"
            }
        }
    }
}

/// Top navigation bar; links depend on the signed-in role.
#[component]
pub fn Nav(app_name: String) -> Element {
    let nav = use_navigation();
    let session = use_session();
    let role = session.role();

    rsx! {
        nav {
            ul {
                li {
                    NavLink { route: routes::HOME, label: app_name.clone() }
                }
            }
            ul {
                li { NavLink { route: routes::PRICING, label: "Pricing" } }
                if role.allows(Role::Customer) {
                    li { NavLink { route: routes::ORDER_HISTORY, label: "Orders" } }
                }
                if role.allows(Role::StoreOwner) {
                    li { NavLink { route: routes::STORE_DASHBOARD, label: "My store" } }
                }
                if role.allows(Role::Admin) {
                    li { NavLink { route: routes::ADMIN_DASHBOARD, label: "Admin" } }
                }
                if nav.can_go_back() {
                    li {
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| nav.go_back(),
                            "Back"
                        }
                    }
                }
                li {
                    if role == Role::Guest {
                        NavLink { route: routes::LOGIN, label: "Sign in" }
                    } else {
                        span { class: "text-muted mr-2", "{role.label()}" }
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| {
                                session.sign_out();
                                nav.navigate(routes::HOME, None);
                            },
                            "Sign out"
                        }
                    }
                }
            }
        }
    }
}
