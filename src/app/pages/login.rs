//! Mock sign-in: pick a role.

use dioxus::prelude::*;

use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::app::session::{use_session, Role};
use crate::navigation::{parse, ParsedLocation, RouteParams};

/// Where a role lands after signing in without a `next` param.
fn landing_route(role: Role) -> &'static str {
    match role {
        Role::Admin => routes::ADMIN_DASHBOARD,
        Role::StoreOwner => routes::STORE_DASHBOARD,
        Role::Customer => routes::ORDER_HISTORY,
        Role::Guest => routes::HOME,
    }
}

/// Where to go after signing in as `role`.
///
/// `next` is a fragment such as `#/notice-detail?noticeId=2`; its params
/// come back with it.
fn redirect_target(next: Option<&str>, role: Role) -> ParsedLocation {
    match next {
        Some(next) if !next.trim().is_empty() => parse(next),
        _ => ParsedLocation {
            route: landing_route(role).into(),
            params: RouteParams::new(),
        },
    }
}

#[component]
pub fn Login(#[props(!optional)] next: Option<String>) -> Element {
    let nav = use_navigation();
    let session = use_session();

    rsx! {
        h1 { "Sign in" }
        p { "Choose an account to continue." }
        div { class: "flex gap-2",
            for role in Role::SIGNED_IN {
                button {
                    key: "{role.as_str()}",
                    class: "btn btn-primary",
                    onclick: {
                        let next = next.clone();
                        move |_| {
                            session.sign_in(role);
                            let target = redirect_target(next.as_deref(), role);
                            let params = (!target.params.is_empty()).then_some(target.params);
                            nav.navigate(target.route, params);
                        }
                    },
                    "{role.label()}"
                }
            }
        }
    }
}
