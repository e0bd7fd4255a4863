//! Plans and upgrade entry point.

use dioxus::prelude::*;
use serde_json::json;

use crate::app::components::modal_host::UPGRADE_PLAN;
use crate::app::navigation_context::use_navigation;

struct Plan {
    id: &'static str,
    name: &'static str,
    price: &'static str,
    blurb: &'static str,
}

const PLANS: &[Plan] = &[
    Plan {
        id: "starter",
        name: "Starter",
        price: "$0",
        blurb: "One store, up to 50 orders a month",
    },
    Plan {
        id: "pro",
        name: "Pro",
        price: "$49",
        blurb: "Unlimited orders, live tracking, SMS updates",
    },
    Plan {
        id: "enterprise",
        name: "Enterprise",
        price: "Talk to us",
        blurb: "Multiple brands, custom integrations",
    },
];

#[component]
pub fn Pricing() -> Element {
    let nav = use_navigation();

    rsx! {
        h1 { "Pricing" }
        div { class: "grid grid-cols-1 md:grid-cols-3 gap-4",
            for plan in PLANS {
                article { key: "{plan.id}", class: "card p-4",
                    h2 { "{plan.name}" }
                    p { class: "text-2xl", "{plan.price}" }
                    p { "{plan.blurb}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| nav.open_modal(UPGRADE_PLAN, Some(json!({ "plan": plan.id }))),
                        "Choose {plan.name}"
                    }
                }
            }
        }
    }
}
