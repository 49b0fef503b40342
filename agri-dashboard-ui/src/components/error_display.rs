//! Error banner component.

use crate::state::DashboardState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays a dismissible error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<DashboardState>();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            button {
                style: "border: none; background: transparent; color: #C62828; cursor: pointer; font-size: 16px;",
                onclick: move |_| state.error_msg.set(None),
                "×"
            }
        }
    }
}
