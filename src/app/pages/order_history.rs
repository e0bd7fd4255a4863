//! Past orders; a row opens the order-details modal.

use dioxus::prelude::*;
use serde_json::{json, Value};

use crate::app::components::modal_host::ORDER_DETAILS;
use crate::app::components::NavLink;
use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::navigation::RouteParams;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderStatus {
    Preparing,
    OnTheWay,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnTheWay => "on-the-way",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OnTheWay => "On the way",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Order {
    pub id: &'static str,
    pub customer: &'static str,
    pub store: &'static str,
    pub total: f64,
    pub status: OrderStatus,
}

impl Order {
    /// Payload for the order-details modal.
    pub fn modal_payload(&self) -> Value {
        json!({
            "orderId": self.id,
            "customer": self.customer,
            "total": self.total,
            "status": self.status.label(),
        })
    }
}

pub const ORDERS: &[Order] = &[
    Order {
        id: "ORD-1001",
        customer: "Dana Kim",
        store: "Corner Bistro",
        total: 24.5,
        status: OrderStatus::Delivered,
    },
    Order {
        id: "ORD-1002",
        customer: "Sam Ortiz",
        store: "Corner Bistro",
        total: 13.0,
        status: OrderStatus::OnTheWay,
    },
    Order {
        id: "ORD-1003",
        customer: "Lee Park",
        store: "Noodle Bar",
        total: 31.75,
        status: OrderStatus::Preparing,
    },
    Order {
        id: "ORD-1004",
        customer: "Alex Moreau",
        store: "Noodle Bar",
        total: 9.9,
        status: OrderStatus::Cancelled,
    },
];

pub fn find_order(id: &str) -> Option<&'static Order> {
    ORDERS.iter().find(|o| o.id == id)
}

#[component]
pub fn OrderHistory(#[props(!optional)] filter: Option<String>) -> Element {
    let nav = use_navigation();

    let orders: Vec<&'static Order> = ORDERS
        .iter()
        .filter(|o| filter.as_deref().map_or(true, |f| o.status.as_str() == f))
        .collect();

    rsx! {
        h1 { "Orders" }
        nav { class: "flex gap-2 mb-4",
            NavLink { route: routes::ORDER_HISTORY, label: "All" }
            for status in [OrderStatus::Preparing, OrderStatus::OnTheWay, OrderStatus::Delivered] {
                NavLink {
                    key: "{status.as_str()}",
                    route: routes::ORDER_HISTORY,
                    label: status.label(),
                    params: RouteParams::new().with("status", status.as_str()),
                }
            }
        }
        if orders.is_empty() {
            p { class: "text-muted", "No orders match this filter." }
        }
        table { class: "table w-full",
            thead {
                tr {
                    th { "Order" }
                    th { "Store" }
                    th { "Total" }
                    th { "Status" }
                }
            }
            tbody {
                for order in orders {
                    tr {
                        key: "{order.id}",
                        class: "cursor-pointer",
                        onclick: move |_| nav.open_modal(ORDER_DETAILS, Some(order.modal_payload())),
                        td { "{order.id}" }
                        td { "{order.store}" }
                        td { "${order.total:.2}" }
                        td { "{order.status.label()}" }
                    }
                }
            }
        }
    }
}
