//! Store setup wizard; the current step travels in the `step` param.

use dioxus::prelude::*;

use crate::app::navigation_context::use_navigation;
use crate::app::routes;
use crate::navigation::RouteParams;

const STEPS: &[&str] = &["Store details", "Menu", "Delivery area"];

#[component]
pub fn Onboarding(step: i64) -> Element {
    let nav = use_navigation();
    let last = STEPS.len() as i64;
    let step = step.clamp(1, last);
    let title = STEPS[(step - 1) as usize];

    rsx! {
        h1 { "Set up your store" }
        p { class: "text-muted", "Step {step} of {last}" }
        article { class: "card p-4",
            h2 { "{title}" }
        }
        footer { class: "flex gap-2 mt-4",
            if step > 1 {
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| {
                        nav.navigate(routes::ONBOARDING, Some(RouteParams::new().with("step", step - 1)));
                    },
                    "Previous"
                }
            }
            if step < last {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        nav.navigate(routes::ONBOARDING, Some(RouteParams::new().with("step", step + 1)));
                    },
                    "Next"
                }
            } else {
                button {
                    class: "btn btn-primary",
                    onclick: move |_| nav.navigate(routes::STORE_DASHBOARD, None),
                    "Finish"
                }
            }
        }
    }
}
