//! Route identifiers known to the app and the table that renders them.

use dioxus::prelude::*;

use crate::app::components::RoleGuard;
use crate::app::pages::{
    AdminApiDetail, AdminDashboard, CustomerOrderTrack, Home, Login, NotFound, NoticeDetail,
    Onboarding, OrderHistory, Pricing, StoreDashboard,
};
use crate::app::session::Role;
use crate::navigation::RouteTable;

pub const HOME: &str = "home";
pub const PRICING: &str = "pricing";
pub const ONBOARDING: &str = "onboarding";
pub const LOGIN: &str = "login";
pub const STORE_DASHBOARD: &str = "store-dashboard";
pub const ORDER_HISTORY: &str = "order-history";
pub const CUSTOMER_ORDER_TRACK: &str = "customer-order-track";
pub const ADMIN_DASHBOARD: &str = "admin-dashboard";
pub const NOTICE_DETAIL: &str = "notice-detail";

/// Family prefix; the remainder names the API (`admin-api-detail-payment-api`).
pub const ADMIN_API_DETAIL_PREFIX: &str = "admin-api-detail-";

/// Every exact route the table serves.
pub const ROUTE_IDS: &[&str] = &[
    HOME,
    PRICING,
    ONBOARDING,
    LOGIN,
    STORE_DASHBOARD,
    ORDER_HISTORY,
    CUSTOMER_ORDER_TRACK,
    ADMIN_DASHBOARD,
    NOTICE_DETAIL,
];

/// APIs with a detail screen in the admin family.
pub const ADMIN_APIS: &[&str] = &["payment-api", "maps-api", "sms-api", "push-api"];

/// Route id of the admin detail screen for `api`.
pub fn admin_api_route(api: &str) -> String {
    format!("{}{}", ADMIN_API_DETAIL_PREFIX, api)
}

/// Build the app's route table.
///
/// An invalid table is a programming error; it is logged and every route
/// then renders the not-found screen instead of taking the app down.
pub fn route_table() -> RouteTable<Element> {
    let builder = RouteTable::builder(|req| {
        rsx! {
            NotFound { route: req.route.to_string() }
        }
    })
    .route(HOME, |_| rsx! { Home {} })
    .route(PRICING, |_| rsx! { Pricing {} })
    .route(ONBOARDING, |req| {
        let step = req.params.get_i64("step").unwrap_or(1);
        rsx! { Onboarding { step } }
    })
    .route(LOGIN, |req| {
        let next = req.params.get_str("next").map(str::to_string);
        rsx! { Login { next } }
    })
    .route(STORE_DASHBOARD, |_| {
        rsx! {
            RoleGuard { required: Role::StoreOwner, StoreDashboard {} }
        }
    })
    .route(ORDER_HISTORY, |req| {
        let filter = req.params.get_str("status").map(str::to_string);
        rsx! {
            RoleGuard { required: Role::Customer, OrderHistory { filter } }
        }
    })
    .route(CUSTOMER_ORDER_TRACK, |req| {
        let order_id = req.params.get_str("orderId").map(str::to_string);
        rsx! { CustomerOrderTrack { order_id } }
    })
    .route(ADMIN_DASHBOARD, |_| {
        rsx! {
            RoleGuard { required: Role::Admin, AdminDashboard {} }
        }
    })
    .route(NOTICE_DETAIL, |req| {
        let notice_id = req.params.get_i64("noticeId");
        rsx! {
            RoleGuard { required: Role::StoreOwner, NoticeDetail { notice_id } }
        }
    })
    .family(ADMIN_API_DETAIL_PREFIX, |req| {
        let api = req.sub_type.unwrap_or_default().to_string();
        let request = req.params.get("request").cloned();
        rsx! {
            RoleGuard { required: Role::Admin, AdminApiDetail { api, request } }
        }
    });

    let fallback = builder.not_found_factory();
    match builder.build() {
        Ok(table) => table,
        Err(e) => {
            tracing::error!("Route table is invalid, only not-found will render: {}", e);
            RouteTable::only_not_found(fallback)
        }
    }
}
