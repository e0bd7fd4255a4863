//! The single navigation interface handed to the screen tree.
//!
//! Combines the [`NavigationController`] and the [`OverlayManager`]. The two
//! halves never talk to each other: routing does not touch the modal and the
//! modal does not touch routing.

use serde::Serialize;
use serde_json::Value;

use super::controller::NavigationController;
use super::history::NavigationHistory;
use super::host::BrowserHost;
use super::overlay::{ModalState, OverlayManager};
use super::params::RouteParams;
use super::route::RouteId;

/// Owned, read-only copy of everything a consumer can observe.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationSnapshot {
    pub current_route: RouteId,
    pub route_params: RouteParams,
    pub history: NavigationHistory,
    pub modal: ModalState,
}

/// Navigation controller plus overlay manager.
pub struct Navigator<H: BrowserHost> {
    controller: NavigationController<H>,
    overlay: OverlayManager,
}

impl<H: BrowserHost> Navigator<H> {
    pub fn new(host: H) -> Self {
        Self {
            controller: NavigationController::new(host),
            overlay: OverlayManager::new(),
        }
    }

    // ----- routing -----

    pub fn current_route(&self) -> &RouteId {
        self.controller.current_route()
    }

    pub fn route_params(&self) -> &RouteParams {
        self.controller.route_params()
    }

    pub fn history(&self) -> &NavigationHistory {
        self.controller.history()
    }

    pub fn navigate(&mut self, route: impl Into<RouteId>, params: Option<RouteParams>) {
        self.controller.navigate(route, params);
    }

    pub fn go_back(&mut self) {
        self.controller.go_back();
    }

    pub fn scroll_to_section(&self, section_id: &str) {
        self.controller.scroll_to_section(section_id);
    }

    /// Browser-initiated navigation; see [`NavigationController::reconcile`].
    pub fn reconcile(&mut self) {
        self.controller.reconcile();
    }

    pub fn reconcile_with(&mut self, fragment: &str) {
        self.controller.reconcile_with(fragment);
    }

    // ----- overlay -----

    pub fn open_modal(&mut self, kind: impl Into<String>, payload: Option<Value>) {
        self.overlay.open(kind, payload);
    }

    pub fn close_modal(&mut self) {
        self.overlay.close();
    }

    pub fn modal(&self) -> &ModalState {
        self.overlay.state()
    }

    pub fn is_modal_open(&self) -> bool {
        self.overlay.state().is_open()
    }

    pub fn modal_kind(&self) -> Option<&str> {
        self.overlay.state().kind()
    }

    pub fn modal_payload(&self) -> &Value {
        self.overlay.state().payload()
    }

    // ----- diagnostics -----

    pub fn controller(&self) -> &NavigationController<H> {
        &self.controller
    }

    pub fn host(&self) -> &H {
        self.controller.host()
    }

    pub fn host_mut(&mut self) -> &mut H {
        self.controller.host_mut()
    }

    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_route: self.current_route().clone(),
            route_params: self.route_params().clone(),
            history: self.history().clone(),
            modal: self.modal().clone(),
        }
    }
}
