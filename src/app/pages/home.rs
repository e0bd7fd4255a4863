//! Landing page.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::navigation_context::use_navigation;
use crate::app::routes;

/// Section anchors on the landing page.
pub const SECTIONS: &[(&str, &str)] = &[
    ("features", "Features"),
    ("how-it-works", "How it works"),
    ("testimonials", "Customers"),
];

#[component]
pub fn Home() -> Element {
    let nav = use_navigation();

    rsx! {
        section { id: "hero", class: "py-12 text-center",
            h1 { "Launch your own delivery app" }
            p { "Menus, ordering, live tracking and payouts. No code required." }
            div { class: "flex gap-2 justify-center mt-4",
                NavLink { route: routes::ONBOARDING, label: "Get started", class: "btn btn-primary" }
                NavLink { route: routes::PRICING, label: "See pricing", class: "btn btn-ghost" }
            }
            nav { class: "flex gap-4 justify-center mt-6",
                for (id, label) in SECTIONS.iter().copied() {
                    button {
                        key: "{id}",
                        class: "btn btn-ghost btn-sm",
                        onclick: move |_| nav.scroll_to_section(id),
                        "{label}"
                    }
                }
            }
        }
        section { id: "features", class: "py-8",
            h2 { "Features" }
            ul {
                li { "Branded customer app with your menu and colors" }
                li { "Store dashboard for incoming orders" }
                li { "Live courier tracking for customers" }
            }
        }
        section { id: "how-it-works", class: "py-8",
            h2 { "How it works" }
            ol {
                li { "Pick a plan" }
                li { "Set up your store and menu" }
                li { "Share the link with your customers" }
            }
        }
        section { id: "testimonials", class: "py-8",
            h2 { "Customers" }
            blockquote { "\"We went live over a weekend.\" - Corner Bistro" }
        }
    }
}
