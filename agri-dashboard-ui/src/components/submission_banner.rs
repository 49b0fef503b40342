//! Outcome of the profile submission that follows registration.

use crate::state::{DashboardState, SubmissionStatus};
use dioxus::prelude::*;

#[component]
pub fn SubmissionBanner() -> Element {
    let mut state = use_context::<DashboardState>();
    let status = state.submission.read().clone();
    let Some(message) = status.message() else {
        return rsx! {};
    };

    let style = if status.is_failure() {
        "background: #FFEBEE; color: #C62828; border: 1px solid #EF9A9A;"
    } else {
        "background: #F0FFF4; color: #166534; border: 1px solid #9AE6B4;"
    };
    let dismissable = status != SubmissionStatus::Sending;

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 10px 16px; margin: 8px 0; border-radius: 4px; font-size: 13px; {style}",
            span { "{message}" }
            if dismissable {
                button {
                    style: "border: none; background: transparent; color: inherit; cursor: pointer; font-size: 16px;",
                    onclick: move |_| state.submission.set(SubmissionStatus::Idle),
                    "×"
                }
            }
        }
    }
}
