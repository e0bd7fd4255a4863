//! Dioxus application shell.
//!
//! The root component installs the shared contexts (config, session,
//! navigation) and renders the layout, the current screen and the modal
//! slot. Screens never own navigation state; they go through
//! [`navigation_context::use_navigation`].

use dioxus::prelude::*;

pub mod components;
pub mod navigation_context;
pub mod pages;
pub mod routes;
pub mod session;

use components::{Layout, ModalHost, RouteOutlet};
use navigation_context::use_navigation_provider;
use session::{use_session_provider, Role};

use crate::config::{self, Config};

/// Root app component
#[component]
pub fn App() -> Element {
    // Loaded once; falls back to defaults on bad input
    let config = use_hook(config::load_config_or_default);

    rsx! {
        AppWithConfig { config }
    }
}

/// Root component with a caller-provided config.
#[component]
pub fn AppWithConfig(config: Config) -> Element {
    use_context_provider(|| config.clone());
    use_session_provider(Role::parse(&config.mock_role));

    // Single navigator for the whole app, reconciled on hashchange
    use_navigation_provider(config.scroll);

    rsx! {
        Shell {}
    }
}

/// Everything below the providers.
#[component]
pub fn Shell() -> Element {
    rsx! {
        Layout {
            RouteOutlet {}
        }
        ModalHost {}
    }
}
