//! Store owner overview.

use dioxus::prelude::*;

use super::notice_detail::NOTICES;
use super::order_history::{OrderStatus, ORDERS};
use crate::app::components::NavLink;
use crate::app::routes;
use crate::navigation::RouteParams;

#[component]
pub fn StoreDashboard() -> Element {
    let open_orders = ORDERS
        .iter()
        .filter(|o| matches!(o.status, OrderStatus::Preparing | OrderStatus::OnTheWay))
        .count();
    let revenue: f64 = ORDERS
        .iter()
        .filter(|o| o.status == OrderStatus::Delivered)
        .map(|o| o.total)
        .sum();

    rsx! {
        h1 { "My store" }
        div { class: "grid grid-cols-2 gap-4 mb-6",
            article { class: "card p-4",
                h2 { "{open_orders}" }
                p { "Open orders" }
                NavLink {
                    route: routes::ORDER_HISTORY,
                    label: "View",
                    params: RouteParams::new().with("status", OrderStatus::Preparing.as_str()),
                }
            }
            article { class: "card p-4",
                h2 { "${revenue:.2}" }
                p { "Delivered revenue" }
            }
        }
        section {
            h2 { "Notices" }
            ul {
                for notice in NOTICES {
                    li { key: "{notice.id}",
                        NavLink {
                            route: routes::NOTICE_DETAIL,
                            label: notice.title,
                            params: RouteParams::new().with("noticeId", notice.id),
                        }
                    }
                }
            }
        }
    }
}
