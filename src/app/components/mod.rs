//! Shared UI components for the app shell.

pub mod layout;
pub mod modal_host;
pub mod nav;
pub mod role_guard;
pub mod route_outlet;

pub use layout::Layout;
pub use modal_host::ModalHost;
pub use nav::{Nav, NavLink};
pub use role_guard::RoleGuard;
pub use route_outlet::RouteOutlet;
