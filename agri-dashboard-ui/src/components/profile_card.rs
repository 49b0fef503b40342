//! Farmer profile summary.

use super::CARD_STYLE;
use crate::state::DashboardState;
use agri_core::profile::KycStatus;
use agri_utils::dates::format_timestamp;
use dioxus::prelude::*;

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn ProfileCard() -> Element {
    let state = use_context::<DashboardState>();
    let profile = state.store.read().profile().clone();

    let kyc = match profile.kyc_status {
        KycStatus::Verified => "KYC Verified",
        KycStatus::Pending => "KYC Pending",
    };
    let registered = profile
        .registration_date
        .as_ref()
        .map(format_timestamp)
        .unwrap_or_else(|| "Not registered".to_string());
    let joined = format_timestamp(&profile.join_date);
    let fields = [
        ("Location", or_dash(&profile.location)),
        ("Farm size", or_dash(&profile.farm_size)),
        ("Crop", or_dash(&profile.crop_type)),
        ("Method", or_dash(&profile.farming_method)),
        ("Experience", or_dash(&profile.years_of_experience)),
        ("Email", or_dash(&profile.email)),
        ("Phone", or_dash(&profile.phone)),
    ];
    let name = or_dash(&profile.name);

    rsx! {
        div {
            style: CARD_STYLE,
            h3 { style: "margin: 0; font-size: 18px;", "{name}" }
            p {
                style: "margin: 4px 0 8px 0; font-size: 12px; color: #4a5568;",
                "{kyc} · Registered: {registered} · Joined: {joined}"
            }
            if profile.nft_created {
                p { style: "margin: 0 0 8px 0; color: #166534; font-size: 13px;", "Farmer NFT minted" }
            }
            dl {
                style: "display: grid; grid-template-columns: max-content 1fr; gap: 4px 12px; margin: 0; font-size: 13px;",
                for (label, value) in fields {
                    dt { style: "color: #4a5568;", "{label}" }
                    dd { style: "margin: 0;", "{value}" }
                }
            }
        }
    }
}
