//! Navigation and overlay core.
//!
//! Framework-free state machines behind the app shell:
//! - `url_codec`: location fragment <-> route + params
//! - `controller`: current route, params and in-app history
//! - `overlay`: the single modal slot
//! - `route_table`: route identifier -> screen factory
//! - `navigator`: controller + overlay, the interface screens consume
//! - `host`: what the core needs from the browser
//!
//! Nothing in here fails across its public interface. Bad fragments land on
//! the home route, unknown routes render the not-found screen, and going back
//! past the first entry does nothing.

pub mod controller;
pub mod history;
pub mod host;
pub mod navigator;
pub mod overlay;
pub mod params;
pub mod route;
pub mod route_table;
pub mod url_codec;

pub use controller::{NavigationController, NavigationState};
pub use history::NavigationHistory;
#[cfg(target_arch = "wasm32")]
pub use host::WebHost;
pub use host::{
    BrowserHost, ListenerGuard, MemoryHost, ScrollBehavior, ScrollRequest, ScrollSettings,
};
pub use navigator::{NavigationSnapshot, Navigator};
pub use overlay::{ModalState, OverlayManager};
pub use params::RouteParams;
pub use route::{RouteId, HOME_ROUTE};
pub use route_table::{RouteMatch, RouteTable, RouteTableError, ScreenFactory, ScreenRequest};
pub use url_codec::{parse, serialize, ParsedLocation};
