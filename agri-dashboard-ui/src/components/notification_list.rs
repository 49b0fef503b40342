//! Notification list; clicking an entry marks it read.

use super::CARD_STYLE;
use crate::state::DashboardState;
use agri_core::notification::NotificationKind;
use agri_utils::dates::format_timestamp;
use agri_utils::display::{recent, RECENT_LIMIT};
use dioxus::prelude::*;

fn row_style(read: bool) -> &'static str {
    if read {
        "padding: 8px; border-top: 1px solid #f1f5f9; cursor: pointer;"
    } else {
        "padding: 8px; border-top: 1px solid #f1f5f9; cursor: pointer; background: #f7fafc;"
    }
}

#[component]
pub fn NotificationList() -> Element {
    let mut state = use_context::<DashboardState>();
    let notifications = recent(state.store.read().notifications(), RECENT_LIMIT).to_vec();
    let stamps: Vec<String> = notifications
        .iter()
        .map(|n| format_timestamp(&n.timestamp))
        .collect();

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Notifications" }
            if notifications.is_empty() {
                p { style: "color: #666; font-size: 13px;", "No new notifications" }
            }
            for (notification, stamp) in notifications.into_iter().zip(stamps) {
                div {
                    key: "{notification.id}",
                    style: row_style(notification.read),
                    onclick: {
                        let id = notification.id;
                        move |_| {
                            state.store.write().mark_notification_read(id);
                        }
                    },
                    p {
                        style: "margin: 0; font-weight: 600;",
                        if notification.kind == NotificationKind::Warning { "⚠ " } else { "✔ " }
                        "{notification.title}"
                    }
                    p { style: "margin: 0; font-size: 13px;", "{notification.message}" }
                    p {
                        style: "margin: 0; font-size: 11px; color: #888;",
                        "{stamp}"
                    }
                }
            }
        }
    }
}
