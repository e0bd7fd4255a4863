//! Delivery tracking for one order, picked by the `orderId` param.

use dioxus::prelude::*;

use super::order_history::{find_order, OrderStatus};
use crate::app::components::NavLink;
use crate::app::routes;

const STAGES: &[OrderStatus] = &[
    OrderStatus::Preparing,
    OrderStatus::OnTheWay,
    OrderStatus::Delivered,
];

fn stage_class(reached: Option<usize>, stage: usize) -> &'static str {
    if reached.is_some_and(|r| stage <= r) {
        "step step-primary"
    } else {
        "step"
    }
}

#[component]
pub fn CustomerOrderTrack(#[props(!optional)] order_id: Option<String>) -> Element {
    let Some(order_id) = order_id else {
        return rsx! {
            h1 { "Track your order" }
            p { "No order selected." }
            NavLink { route: routes::ORDER_HISTORY, label: "Your orders" }
        };
    };

    let Some(order) = find_order(&order_id) else {
        return rsx! {
            h1 { "Track your order" }
            p { "We couldn't find order {order_id}." }
        };
    };

    let reached = STAGES.iter().position(|s| *s == order.status);

    rsx! {
        h1 { "Order {order.id}" }
        p { class: "text-muted", "From {order.store}" }
        if order.status == OrderStatus::Cancelled {
            p { class: "text-error", "This order was cancelled." }
        } else {
            ol { class: "steps",
                for (i, stage) in STAGES.iter().enumerate() {
                    li {
                        key: "{stage.as_str()}",
                        class: stage_class(reached, i),
                        "{stage.label()}"
                    }
                }
            }
        }
    }
}
