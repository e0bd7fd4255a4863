//! Renders the screen for the current route.

use std::rc::Rc;

use dioxus::prelude::*;

use crate::app::navigation_context::use_navigation;
use crate::app::routes::route_table;

/// Looks the current route up in the route table and renders its screen.
#[component]
pub fn RouteOutlet() -> Element {
    let nav = use_navigation();
    // Built once per mount
    let table = use_hook(|| Rc::new(route_table()));

    let route = nav.current_route();
    let params = nav.route_params();

    table.resolve(&route, &params)
}
