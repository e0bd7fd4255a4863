//! One platform notice, picked by the numeric `noticeId` param.

use dioxus::prelude::*;

use crate::app::components::NavLink;
use crate::app::routes;

pub struct Notice {
    pub id: i64,
    pub title: &'static str,
    pub body: &'static str,
}

pub const NOTICES: &[Notice] = &[
    Notice {
        id: 1,
        title: "Scheduled maintenance",
        body: "Ordering will be paused for ten minutes on Sunday at 03:00 UTC.",
    },
    Notice {
        id: 2,
        title: "New: SMS order updates",
        body: "Pro stores can now text customers when an order leaves the kitchen.",
    },
];

#[component]
pub fn NoticeDetail(#[props(!optional)] notice_id: Option<i64>) -> Element {
    let notice = notice_id.and_then(|id| NOTICES.iter().find(|n| n.id == id));

    rsx! {
        if let Some(notice) = notice {
            h1 { "{notice.title}" }
            p { "{notice.body}" }
        } else {
            h1 { "Notice not found" }
        }
        NavLink { route: routes::STORE_DASHBOARD, label: "Back to my store" }
    }
}
