//! Renders the open modal, if any.
//!
//! The kind string picks the dialog; unknown kinds render nothing. Closing
//! and navigating are separate calls, so a dialog that leads somewhere
//! closes itself first.

use dioxus::prelude::*;
use serde_json::{json, Value};

use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::navigation::RouteParams;

pub const ORDER_DETAILS: &str = "order-details";
pub const CONFIRM_CANCEL: &str = "confirm-cancel";
pub const UPGRADE_PLAN: &str = "upgrade-plan";

/// Modal kinds with a dialog.
pub const MODAL_KINDS: &[&str] = &[ORDER_DETAILS, CONFIRM_CANCEL, UPGRADE_PLAN];

fn payload_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(Value::as_str).unwrap_or("")
}

#[component]
pub fn ModalHost() -> Element {
    let nav = use_navigation();

    let Some(kind) = nav.modal_kind() else {
        return rsx! {};
    };
    let payload = nav.modal_payload();

    match kind.as_str() {
        ORDER_DETAILS => rsx! { OrderDetailsDialog { payload } },
        CONFIRM_CANCEL => rsx! { ConfirmCancelDialog { payload } },
        UPGRADE_PLAN => rsx! { UpgradePlanDialog { payload } },
        other => {
            tracing::debug!("No dialog for modal kind {:?}", other);
            rsx! {}
        }
    }
}

/// Backdrop and frame shared by every dialog.
#[component]
fn ModalFrame(title: String, children: Element) -> Element {
    let nav = use_navigation();

    rsx! {
        div {
            class: "fixed inset-0 bg-black/50 flex items-center justify-center",
            role: "presentation",
            onclick: move |_| nav.close_modal(),
            dialog {
                open: true,
                class: "card p-6 max-w-lg w-full",
                "aria-modal": "true",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                header { class: "flex justify-between items-center mb-4",
                    h3 { "{title}" }
                    button {
                        class: "btn btn-ghost btn-sm",
                        "aria-label": "Close",
                        onclick: move |_| nav.close_modal(),
                        "×"
                    }
                }
                {children}
            }
        }
    }
}

#[component]
fn OrderDetailsDialog(payload: Value) -> Element {
    let nav = use_navigation();
    let order_id = payload_str(&payload, "orderId").to_string();
    let customer = payload_str(&payload, "customer");
    let status = payload_str(&payload, "status");
    let total = payload.get("total").and_then(Value::as_f64).unwrap_or(0.0);

    let track_id = order_id.clone();
    let cancel_id = order_id.clone();

    rsx! {
        ModalFrame { title: format!("Order {order_id}"),
            dl {
                dt { "Customer" }
                dd { "{customer}" }
                dt { "Status" }
                dd { "{status}" }
                dt { "Total" }
                dd { "${total:.2}" }
            }
            footer { class: "flex gap-2 mt-4",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.close_modal();
                        nav.navigate(
                            routes::CUSTOMER_ORDER_TRACK,
                            Some(RouteParams::new().with("orderId", track_id.as_str())),
                        );
                    },
                    "Track delivery"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| nav.open_modal(CONFIRM_CANCEL, Some(json!({ "orderId": cancel_id }))),
                    "Cancel order"
                }
            }
        }
    }
}

#[component]
fn ConfirmCancelDialog(payload: Value) -> Element {
    let nav = use_navigation();
    let order_id = payload_str(&payload, "orderId").to_string();
    let cancelled = order_id.clone();

    rsx! {
        ModalFrame { title: "Cancel order?".to_string(),
            p { "Order {order_id} will be cancelled and the customer notified." }
            footer { class: "flex gap-2 mt-4",
                button {
                    class: "btn btn-error",
                    onclick: move |_| {
                        tracing::info!("Order {} cancelled", cancelled);
                        nav.close_modal();
                    },
                    "Cancel order"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| nav.close_modal(),
                    "Keep order"
                }
            }
        }
    }
}

#[component]
fn UpgradePlanDialog(payload: Value) -> Element {
    let nav = use_navigation();
    let plan = match payload_str(&payload, "plan") {
        "" => "pro".to_string(),
        plan => plan.to_string(),
    };
    let chosen = plan.clone();

    rsx! {
        ModalFrame { title: "Upgrade plan".to_string(),
            p { "Switch to the {plan} plan? You can change plans at any time." }
            footer { class: "flex gap-2 mt-4",
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.close_modal();
                        nav.navigate(
                            routes::ONBOARDING,
                            Some(RouteParams::new().with("plan", chosen.as_str()).with("step", 1)),
                        );
                    },
                    "Continue"
                }
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| nav.close_modal(),
                    "Not now"
                }
            }
        }
    }
}
