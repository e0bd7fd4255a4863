//! Platform admin overview.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::routes::{admin_api_route, ADMIN_APIS};

#[component]
pub fn AdminDashboard() -> Element {
    rsx! {
        h1 { "Platform admin" }
        section {
            h2 { "Integrations" }
            ul {
                for api in ADMIN_APIS.iter().copied() {
                    li { key: "{api}",
                        NavLink { route: admin_api_route(api), label: api }
                    }
                }
            }
        }
    }
}
