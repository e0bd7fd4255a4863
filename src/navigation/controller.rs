//! Navigation controller: which screen is showing, with what params, and how
//! to get back.
//!
//! ## Transitions
//!
//! - `navigate(route, params)` - set route and params, extend history, scroll
//!   to top
//! - `go_back()` - pop history, params cleared
//! - `scroll_to_section(id)` - viewport only, no state change
//! - `reconcile()` - browser back/forward/hash edit: the fragment overwrites
//!   route and params, history untouched
//!
//! Every transition completes synchronously and none of them can fail. When
//! a `hashchange` and an in-app `navigate()` race, whichever runs last wins
//! outright.
//!
//! ## Fragment drift
//!
//! `navigate()` does not write the fragment. After an in-app navigation the
//! address bar keeps showing the previous location until the browser reports
//! its next navigation. This is current product behavior and is kept as is;
//! [`NavigationController::is_fragment_in_sync`] reports the drift.

use serde::Serialize;

use super::history::NavigationHistory;
use super::host::BrowserHost;
use super::params::RouteParams;
use super::route::RouteId;
use super::url_codec::{self, ParsedLocation};

/// The controller's mutable state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NavigationState {
    pub current_route: RouteId,
    pub route_params: RouteParams,
    pub history: NavigationHistory,
}

impl NavigationState {
    /// State for a freshly parsed location: history holds just that route.
    pub fn from_location(location: ParsedLocation) -> Self {
        Self {
            history: NavigationHistory::new(location.route.clone()),
            current_route: location.route,
            route_params: location.params,
        }
    }
}

/// Owns [`NavigationState`] and the browser host it reconciles with.
pub struct NavigationController<H: BrowserHost> {
    host: H,
    state: NavigationState,
}

impl<H: BrowserHost> NavigationController<H> {
    /// Build the initial state from the host's current fragment.
    pub fn new(host: H) -> Self {
        let fragment = host.location_fragment();
        let state = NavigationState::from_location(url_codec::parse(&fragment));
        tracing::info!(
            "Navigation started at {} (fragment {:?})",
            state.current_route,
            fragment
        );
        Self { host, state }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn current_route(&self) -> &RouteId {
        &self.state.current_route
    }

    pub fn route_params(&self) -> &RouteParams {
        &self.state.route_params
    }

    pub fn history(&self) -> &NavigationHistory {
        &self.state.history
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Show `route` with `params` (empty when `None`).
    ///
    /// Params replace the previous ones wholesale. Any identifier is
    /// accepted; unknown ones resolve to the not-found screen at render time.
    pub fn navigate(&mut self, route: impl Into<RouteId>, params: Option<RouteParams>) {
        let route = route.into();
        let params = params.unwrap_or_default();

        let appended = self.state.history.push(&route);
        tracing::debug!(
            "navigate: {} -> {} ({} params, history {}{})",
            self.state.current_route,
            route,
            params.len(),
            self.state.history.len(),
            if appended { "" } else { ", deduped" }
        );

        self.state.current_route = route;
        self.state.route_params = params;
        self.host.scroll_to_top();
    }

    /// Return to the previous history entry. Params are always cleared.
    ///
    /// No-op when there is nothing to go back to.
    pub fn go_back(&mut self) {
        let Some(previous) = self.state.history.pop().cloned() else {
            tracing::debug!("go_back: already at first entry ({})", self.state.current_route);
            return;
        };

        tracing::debug!("go_back: {} -> {}", self.state.current_route, previous);
        self.state.current_route = previous;
        // TODO: keep params alongside history entries so back restores them
        self.state.route_params = RouteParams::new();
    }

    /// Scroll the element with `section_id` into view.
    pub fn scroll_to_section(&self, section_id: &str) {
        if !self.host.scroll_to_element(section_id) {
            tracing::debug!("scroll_to_section: no element with id {:?}", section_id);
        }
    }

    /// Adopt the host's current fragment as route and params.
    ///
    /// Called on `hashchange`. Bypasses `navigate()`: history is neither read
    /// nor written and the viewport is left alone.
    pub fn reconcile(&mut self) {
        let fragment = self.host.location_fragment();
        self.reconcile_with(&fragment);
    }

    /// Adopt `fragment` as route and params (see [`Self::reconcile`]).
    pub fn reconcile_with(&mut self, fragment: &str) {
        let ParsedLocation { route, params } = url_codec::parse(fragment);
        tracing::debug!(
            "reconcile: {} -> {} from fragment {:?}",
            self.state.current_route,
            route,
            fragment
        );
        self.state.current_route = route;
        self.state.route_params = params;
    }

    /// Whether the host fragment currently describes the displayed route.
    ///
    /// Only the route is compared; in-process params are often not
    /// representable in the URL.
    pub fn is_fragment_in_sync(&self) -> bool {
        let parsed = url_codec::parse(&self.host.location_fragment());
        let in_sync = parsed.route == self.state.current_route;
        if !in_sync {
            tracing::trace!(
                "Fragment shows {} while {} is displayed",
                parsed.route,
                self.state.current_route
            );
        }
        in_sync
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::host::{MemoryHost, ScrollBehavior, ScrollRequest};

    fn controller(fragment: &str) -> NavigationController<MemoryHost> {
        NavigationController::new(MemoryHost::new(fragment))
    }

    fn history(c: &NavigationController<MemoryHost>) -> Vec<&str> {
        c.history().entries().iter().map(RouteId::as_str).collect()
    }

    #[test]
    fn test_initial_state_from_fragment() {
        let c = controller("#/customer-order-track?orderId=TEST-123");
        assert_eq!(c.current_route(), &"customer-order-track");
        assert_eq!(c.route_params().get_str("orderId"), Some("TEST-123"));
        assert_eq!(history(&c), vec!["customer-order-track"]);
    }

    #[test]
    fn test_initial_state_malformed_fragment_is_home() {
        let c = controller("");
        assert_eq!(c.current_route(), &"home");
        assert!(c.route_params().is_empty());
    }

    #[test]
    fn test_navigate_replaces_params_wholesale() {
        let mut c = controller("#/");
        c.navigate(
            "order-history",
            Some(RouteParams::new().with("page", "2").with("filter", "open")),
        );
        c.navigate("order-history", Some(RouteParams::new().with("page", "3")));

        assert_eq!(c.route_params(), &RouteParams::new().with("page", "3"));
        c.navigate("store-dashboard", None);
        assert!(c.route_params().is_empty());
    }

    #[test]
    fn test_navigate_scrolls_to_top_every_time() {
        let mut c = controller("#/");
        c.navigate("pricing", None);
        c.navigate("pricing", None);
        assert_eq!(
            c.host().scroll_requests(),
            vec![
                ScrollRequest::Top(ScrollBehavior::Instant),
                ScrollRequest::Top(ScrollBehavior::Instant),
            ]
        );
    }

    #[test]
    fn test_navigate_accepts_unknown_route() {
        let mut c = controller("#/");
        c.navigate("totally-unknown-id", None);
        assert_eq!(c.current_route(), &"totally-unknown-id");
        assert_eq!(history(&c), vec!["home", "totally-unknown-id"]);
    }

    #[test]
    fn test_go_back_clears_params() {
        let mut c = controller("#/order-history?page=4");
        c.navigate("customer-order-track", Some(RouteParams::new().with("orderId", "A-9")));
        c.go_back();

        assert_eq!(c.current_route(), &"order-history");
        // Params of the earlier visit are not restored either.
        assert!(c.route_params().is_empty());
        assert_eq!(history(&c), vec!["order-history"]);
    }

    #[test]
    fn test_go_back_does_not_scroll() {
        let mut c = controller("#/");
        c.navigate("pricing", None);
        c.host().clear_scroll_requests();
        c.go_back();
        assert!(c.host().scroll_requests().is_empty());
    }

    #[test]
    fn test_reconcile_overwrites_without_touching_history() {
        let mut c = controller("#/");
        c.navigate("order-history", None);
        c.navigate("store-dashboard", Some(RouteParams::new().with("tab", "menu")));

        c.host_mut().set_fragment("#/customer-order-track?orderId=Z-1");
        c.reconcile();

        assert_eq!(c.current_route(), &"customer-order-track");
        assert_eq!(c.route_params(), &RouteParams::new().with("orderId", "Z-1"));
        assert_eq!(history(&c), vec!["home", "order-history", "store-dashboard"]);
    }

    #[test]
    fn test_reconcile_then_go_back_uses_in_app_history() {
        let mut c = controller("#/");
        c.navigate("order-history", None);
        c.reconcile_with("#/pricing");
        c.go_back();
        assert_eq!(c.current_route(), &"home");
    }

    #[test]
    fn test_scroll_to_section_has_no_state_effect() {
        let mut c = NavigationController::new(MemoryHost::new("#/").with_anchors(["features"]));
        c.navigate("home", None);
        let before = c.state().clone();

        c.scroll_to_section("features");
        c.scroll_to_section("missing");

        assert_eq!(c.state(), &before);
        let requests = c.host().scroll_requests();
        assert!(matches!(
            requests.last(),
            Some(ScrollRequest::Element { id, found: false, .. }) if id == "missing"
        ));
    }

    #[test]
    fn test_fragment_drift_after_navigate() {
        let mut c = controller("#/home");
        assert!(c.is_fragment_in_sync());

        c.navigate("order-history", None);
        assert!(!c.is_fragment_in_sync());

        c.host_mut().set_fragment("#/order-history");
        assert!(c.is_fragment_in_sync());
    }
}
