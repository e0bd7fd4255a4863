//! Screens rendered by the route table.
//!
//! Data shown here is sample data; the screens exist to exercise routing,
//! params and modals.

mod admin_api_detail;
mod admin_dashboard;
mod customer_order_track;
mod home;
mod login;
mod not_found;
mod notice_detail;
mod onboarding;
mod order_history;
mod pricing;
mod store_dashboard;

pub use admin_api_detail::AdminApiDetail;
pub use admin_dashboard::AdminDashboard;
pub use customer_order_track::CustomerOrderTrack;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use notice_detail::NoticeDetail;
pub use onboarding::Onboarding;
pub use order_history::OrderHistory;
pub use pricing::Pricing;
pub use store_dashboard::StoreDashboard;
