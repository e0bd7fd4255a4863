//! Detail screen for one integration in the `admin-api-detail-` family.

use dioxus::prelude::*;
use serde_json::Value;

use crate::app::components::NavLink;
use crate::app::routes;

#[component]
pub fn AdminApiDetail(api: String, #[props(!optional)] request: Option<Value>) -> Element {
    rsx! {
        h1 { "Integration: {api}" }
        if let Some(request) = request {
            section {
                h2 { "Request" }
                pre { "{request}" }
            }
        } else {
            p { class: "text-muted", "No request selected." }
        }
        NavLink { route: routes::ADMIN_DASHBOARD, label: "All integrations" }
    }
}
