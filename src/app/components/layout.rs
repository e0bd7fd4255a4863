//! Layout component wrapping every screen.

use dioxus::prelude::*;

use super::nav::Nav;
use crate::config::Config;

/// Main layout component: title, nav bar, content and footer.
#[component]
pub fn Layout(children: Element) -> Element {
    let config = use_context::<Config>();
    let version = env!("DAB_VERSION");
    let git_sha = env!("DAB_GIT_SHA");

    rsx! {
        // Dioxus hoists this to the real <head>
        document::Title { "{config.app_name}" }

        Nav { app_name: config.app_name.clone() }
        main { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 mt-4",
            {children}
        }
        footer { class: "max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 text-center py-3",
            small { class: "text-muted", "{config.app_name} v{version} ({git_sha})" }
        }
    }
}
