//! AgriChain farmer dashboard.
//!
//! Single-page Dioxus app:
//! 1. On mount: ask the injected wallet for an already-authorised account
//!    and, if there is one, load that account's saved profile. Account and
//!    network changes in the wallet are followed for the whole session.
//! 2. Disconnected: show a connect prompt.
//! 3. Connected but not registered: show the registration form.
//! 4. Registered: show profile, stats, weather, activity and notifications.

use agri_dashboard_ui::components::{
    ActivityList, ErrorDisplay, LoadingSpinner, NotificationList, ProfileCard, RegistrationForm,
    StatsGrid, SubmissionBanner, WalletHeader, WeatherCard,
};
use agri_dashboard_ui::state::{use_dashboard_tasks, DashboardState};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("agrichain-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(DashboardState::new);
    use_dashboard_tasks(state);

    // ─── Effect: restore an authorised wallet once on mount ───
    use_effect(move || {
        spawn(async move {
            state.restore_wallet().await;
        });
    });

    let connected = state.wallet.read().is_connected();
    let registered = state.store.read().is_registered();

    // ─── Render ───
    rsx! {
        div {
            style: "font-family: 'Inter', system-ui, -apple-system, sans-serif; background: #fafafa; min-height: 100vh; color: #1a365d;",

            WalletHeader {}

            main {
                style: "max-width: 1100px; margin: 0 auto; padding: 16px;",

                if let Some(err) = state.error_msg.read().as_ref() {
                    ErrorDisplay { message: err.clone() }
                }

                SubmissionBanner {}

                if *state.loading.read() {
                    LoadingSpinner {}
                } else if !connected {
                    ConnectPrompt {}
                } else if !registered {
                    RegistrationForm {}
                    div {
                        style: "margin-top: 16px;",
                        NotificationList {}
                    }
                } else {
                    Dashboard {}
                }
            }
        }
    }
}

#[component]
fn ConnectPrompt() -> Element {
    rsx! {
        div {
            style: "text-align: center; padding: 48px 16px;",
            h1 { style: "margin: 0 0 8px 0;", "Welcome to AgriChain" }
            p {
                style: "color: #4a5568;",
                "Connect your wallet to register as a farmer and access insurance, lending and carbon credit services."
            }
        }
    }
}

/// Registered farmer overview.
#[component]
fn Dashboard() -> Element {
    rsx! {
        ProfileCard {}
        StatsGrid {}
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 12px;",
            WeatherCard {}
            ActivityList {}
            NotificationList {}
        }
    }
}
