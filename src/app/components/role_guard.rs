//! Gate for screens that need a signed-in role.

use dioxus::prelude::*;

use super::nav::NavLink;
use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::app::session::{use_session, Role};
use crate::navigation::{serialize, RouteId, RouteParams};

/// Renders `children` only when the session role allows `required`.
///
/// Otherwise shows a sign-in prompt that comes back to the current route
/// with its params.
#[component]
pub fn RoleGuard(required: Role, children: Element) -> Element {
    let session = use_session();
    let nav = use_navigation();

    if session.role().allows(required) {
        return rsx! { {children} };
    }

    let current = nav.current_route();
    tracing::debug!(
        "Route {} needs role {}, have {}",
        current,
        required.as_str(),
        session.role().as_str()
    );
    let back_to = serialize(&RouteId::new(current.normalized()), &nav.route_params());
    let next = RouteParams::new().with("next", back_to);

    rsx! {
        article { class: "card p-4",
            h2 { "Sign in required" }
            p { "This page is available to {required.label()} accounts." }
            NavLink {
                route: routes::LOGIN,
                label: "Sign in",
                params: next,
                class: "btn btn-primary",
            }
        }
    }
}
