//! Navigation context shared by every screen.
//!
//! One [`Navigator`] per app, created at the root and handed down through
//! Dioxus context. Screens read the current route and modal and call the
//! control methods; none of them builds a navigator of its own.
//!
//! The provider also subscribes to location changes on the host so
//! back/forward and address-bar edits reconcile the navigator with the URL.
//! The subscription is made when the root is created and ends when it
//! unmounts.

use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use serde_json::Value;

use crate::navigation::{
    BrowserHost, ListenerGuard, NavigationSnapshot, Navigator, RouteId, RouteParams,
    ScrollSettings,
};

/// Browser host used by the running app.
#[cfg(target_arch = "wasm32")]
pub type AppHost = crate::navigation::WebHost;

/// Browser host used by the running app (in-memory off the web).
#[cfg(not(target_arch = "wasm32"))]
pub type AppHost = crate::navigation::MemoryHost;

/// Host for the current platform with the configured scroll behavior.
pub fn app_host(scroll: ScrollSettings) -> AppHost {
    #[cfg(target_arch = "wasm32")]
    {
        crate::navigation::WebHost::new(scroll)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        crate::navigation::MemoryHost::default().with_scroll(scroll)
    }
}

/// Global navigation state shared via context
#[derive(Clone, Copy)]
pub struct NavigationContext {
    navigator: Signal<Navigator<AppHost>>,
}

impl NavigationContext {
    pub fn current_route(&self) -> RouteId {
        self.navigator.read().current_route().clone()
    }

    pub fn route_params(&self) -> RouteParams {
        self.navigator.read().route_params().clone()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.read().history().can_go_back()
    }

    pub fn navigate(&self, route: impl Into<RouteId>, params: Option<RouteParams>) {
        let mut navigator = self.navigator;
        navigator.write().navigate(route, params);
    }

    pub fn go_back(&self) {
        let mut navigator = self.navigator;
        navigator.write().go_back();
    }

    /// Viewport only; does not subscribe or trigger a re-render.
    pub fn scroll_to_section(&self, section_id: &str) {
        self.navigator.peek().scroll_to_section(section_id);
    }

    pub fn open_modal(&self, kind: impl Into<String>, payload: Option<Value>) {
        let mut navigator = self.navigator;
        navigator.write().open_modal(kind, payload);
    }

    pub fn close_modal(&self) {
        let mut navigator = self.navigator;
        navigator.write().close_modal();
    }

    pub fn is_modal_open(&self) -> bool {
        self.navigator.read().is_modal_open()
    }

    pub fn modal_kind(&self) -> Option<String> {
        self.navigator.read().modal_kind().map(str::to_string)
    }

    pub fn modal_payload(&self) -> Value {
        self.navigator.read().modal_payload().clone()
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        self.navigator.read().snapshot()
    }
}

/// Initialize navigation context provider - call once at app root
pub fn use_navigation_provider(scroll: ScrollSettings) -> NavigationContext {
    use_navigation_provider_with(move || Navigator::new(app_host(scroll)))
}

/// Like [`use_navigation_provider`] with a caller-built navigator.
pub fn use_navigation_provider_with(
    init: impl FnOnce() -> Navigator<AppHost>,
) -> NavigationContext {
    let navigator = use_signal(init);
    let ctx = NavigationContext { navigator };

    use_context_provider(|| ctx);

    // Follow browser back/forward and hash edits
    let guard: Rc<RefCell<Option<ListenerGuard>>> = use_hook(|| {
        let mut target = navigator;
        let guard = navigator
            .peek()
            .host()
            .on_location_change(Box::new(move || target.write().reconcile()));
        Rc::new(RefCell::new(Some(guard)))
    });

    use_drop(move || {
        if guard.borrow_mut().take().is_some() {
            tracing::debug!("Navigation provider unmounted, location listener dropped");
        }
    });

    ctx
}

/// Get navigation context - use in any component
pub fn use_navigation() -> NavigationContext {
    use_context::<NavigationContext>()
}
