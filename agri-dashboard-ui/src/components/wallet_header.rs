//! Header bar with wallet connection, network and unread notifications.

use crate::state::DashboardState;
use agri_utils::display::short_address;
use dioxus::prelude::*;

#[component]
pub fn WalletHeader() -> Element {
    let state = use_context::<DashboardState>();
    let wallet = state.wallet.read().clone();
    let unread = state.store.read().unread_count();
    let address = wallet
        .account
        .as_ref()
        .map(|account| short_address(account.as_str()));
    let network_style = match wallet.network {
        Some(network) if !network.is_expected() => {
            "padding: 2px 8px; border-radius: 12px; background: #fef3c7; color: #92400e; font-size: 12px;"
        }
        _ => "padding: 2px 8px; border-radius: 12px; background: #dcfce7; color: #166534; font-size: 12px;",
    };

    let on_connect = move |_: MouseEvent| {
        spawn(async move {
            state.connect_wallet().await;
        });
    };

    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 16px; border-bottom: 1px solid #e2e8f0; background: #1a365d; color: #fff;",
            h2 {
                style: "margin: 0; font-size: 20px;",
                "AgriChain"
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",

                if let Some(network) = wallet.network {
                    span {
                        style: network_style,
                        "{network}"
                    }
                }

                if wallet.is_connected() {
                    span {
                        title: "Unread notifications",
                        "🔔 {unread}"
                    }
                }

                if let Some(address) = address {
                    span {
                        style: "font-family: monospace;",
                        "{address}"
                    }
                    button {
                        onclick: move |_| state.disconnect_wallet(),
                        "Disconnect"
                    }
                } else {
                    button {
                        disabled: wallet.connecting,
                        onclick: on_connect,
                        if wallet.connecting { "Connecting..." } else { "Connect Wallet" }
                    }
                }
            }
        }
    }
}
