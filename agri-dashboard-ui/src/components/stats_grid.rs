//! Portfolio statistics cards.

use super::CARD_STYLE;
use crate::state::DashboardState;
use agri_utils::display::format_usd;
use dioxus::prelude::*;

#[component]
pub fn StatsGrid() -> Element {
    let state = use_context::<DashboardState>();
    let stats = state.store.read().stats().clone();

    let cards = [
        ("Carbon Credits", stats.carbon_credits.to_string()),
        ("Active Loans", stats.active_loans.to_string()),
        ("Insurance Policies", stats.insurance_policies.to_string()),
        ("Portfolio Value", format_usd(stats.total_value)),
        ("Credit Score", stats.credit_score.to_string()),
    ];

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 12px; margin: 12px 0;",
            for (label, value) in cards {
                div {
                    key: "{label}",
                    style: CARD_STYLE,
                    p { style: "margin: 0; font-size: 12px; color: #4a5568;", "{label}" }
                    p { style: "margin: 4px 0 0 0; font-size: 22px; font-weight: 700;", "{value}" }
                }
            }
        }
    }
}
