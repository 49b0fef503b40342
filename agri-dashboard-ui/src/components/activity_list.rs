//! Recent activity list.

use super::CARD_STYLE;
use crate::state::DashboardState;
use agri_core::activity::{ActivityKind, ActivityStatus};
use agri_utils::dates::format_date;
use agri_utils::display::{format_usd, recent, RECENT_LIMIT};
use dioxus::prelude::*;

fn icon(kind: ActivityKind) -> &'static str {
    match kind {
        ActivityKind::Insurance => "🛡",
        ActivityKind::Loan => "🏦",
        ActivityKind::CarbonCredits => "🌿",
        ActivityKind::Registration => "📈",
    }
}

fn status_style(status: ActivityStatus) -> &'static str {
    match status {
        ActivityStatus::Completed => "padding: 2px 8px; border-radius: 12px; background: #dcfce7; color: #166534; font-size: 12px;",
        ActivityStatus::Pending | ActivityStatus::Failed => "padding: 2px 8px; border-radius: 12px; background: #fef3c7; color: #92400e; font-size: 12px;",
    }
}

/// The newest activity entries.
#[component]
pub fn ActivityList() -> Element {
    let state = use_context::<DashboardState>();
    let rows: Vec<(String, String, String, ActivityStatus)> =
        recent(state.store.read().activities(), RECENT_LIMIT)
            .iter()
            .map(|a| {
                (
                    a.id.to_string(),
                    format!("{} {}", icon(a.kind), a.description),
                    format!("{} • {} • {}", format_date(&a.date), a.kind, format_usd(a.amount)),
                    a.status,
                )
            })
            .collect();

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: "margin: 0 0 8px 0; font-size: 16px;", "Recent Activity" }
            if rows.is_empty() {
                p {
                    style: "color: #666; font-size: 13px;",
                    "No recent activity. Start using AgriChain services to see your activity here."
                }
            }
            for (id, title, meta, status) in rows {
                div {
                    key: "{id}",
                    style: "display: flex; justify-content: space-between; align-items: center; padding: 6px 0; border-top: 1px solid #f1f5f9;",
                    div {
                        p { style: "margin: 0; font-weight: 600;", "{title}" }
                        p { style: "margin: 0; font-size: 12px; color: #666;", "{meta}" }
                    }
                    span { style: status_style(status), "{status}" }
                }
            }
        }
    }
}
