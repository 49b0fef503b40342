//! Dashboard state managed via Dioxus context.
//!
//! `DashboardState` bundles all reactive signals into a single struct provided
//! via `use_context_provider`. Child components retrieve it with
//! `use_context::<DashboardState>()`.
//!
//! Work that must outlive the component that triggers it (wallet events,
//! profile submission) runs in coroutines started by [`use_dashboard_tasks`]
//! in the root component.

use crate::storage::LocalStorage;
use crate::wallet::{self, AccountChange, WalletEvent, WalletStatus};
use agri_core::account::AccountId;
use agri_core::network::Network;
use agri_core::profile::ProfilePatch;
use agri_core::submission::{SubmissionClient, DEFAULT_BASE_URL};
use agri_store::AppStore;
use dioxus::prelude::*;
use futures_util::StreamExt;

pub type DashboardStore = AppStore<LocalStorage>;

/// Progress of the profile submission that follows registration.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    /// Saved; holds the record path reported by the server.
    Saved(String),
    Failed(String),
}

impl SubmissionStatus {
    /// Text for the status banner, if there is anything to show.
    pub fn message(&self) -> Option<String> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Sending => Some("Saving your details...".to_string()),
            SubmissionStatus::Saved(file) => Some(format!("Details saved ({})", file)),
            SubmissionStatus::Failed(err) => Some(format!("Could not save details: {}", err)),
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, SubmissionStatus::Failed(_))
    }
}

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct DashboardState {
    /// Profile, stats, weather, activity and notifications
    pub store: Signal<DashboardStore>,
    /// Wallet account and network
    pub wallet: Signal<WalletStatus>,
    /// Transient error banner
    pub error_msg: Signal<Option<String>>,
    /// True until the initial wallet check finishes
    pub loading: Signal<bool>,
    pub submission: Signal<SubmissionStatus>,
    /// Base URL of the submission endpoint
    pub api_base: Signal<String>,
}

impl DashboardState {
    /// Create a new DashboardState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(AppStore::new(LocalStorage)),
            wallet: Signal::new(WalletStatus::default()),
            error_msg: Signal::new(None),
            loading: Signal::new(true),
            submission: Signal::new(SubmissionStatus::Idle),
            api_base: Signal::new(DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Pick up an account the wallet already authorised, without prompting.
    pub async fn restore_wallet(mut self) {
        match wallet::current_account().await {
            Ok(Some(account)) => self.finish_connect(account).await,
            Ok(None) => log::info!("No authorised wallet account"),
            Err(wallet::WalletError::NotInstalled) => log::info!("No wallet provider injected"),
            Err(e) => log::warn!("Wallet check failed: {}", e),
        }
        self.loading.set(false);
    }

    /// Prompt the wallet for an account and load its profile.
    pub async fn connect_wallet(mut self) {
        self.wallet.write().connecting = true;
        self.error_msg.set(None);

        match wallet::request_account().await {
            Ok(account) => self.finish_connect(account).await,
            Err(e) => {
                log::warn!("Wallet connect failed: {}", e);
                self.error_msg.set(Some(e.to_string()));
            }
        }
        self.wallet.write().connecting = false;
    }

    async fn finish_connect(mut self, account: AccountId) {
        let network = match wallet::network().await {
            Ok(network) => Some(network),
            Err(e) => {
                log::warn!("Could not read network: {}", e);
                None
            }
        };

        log::info!("Wallet connected: {}", account);
        self.store.write().connect(account.clone());
        self.wallet.write().account = Some(account);
        self.set_network(network);
    }

    /// Record the wallet's network, raising the banner when it is not the
    /// expected one and clearing it once the wallet switches back.
    fn set_network(mut self, network: Option<Network>) {
        let was_wrong = self.wallet.read().is_wrong_network();
        match network {
            Some(network) if !network.is_expected() => {
                self.error_msg
                    .set(Some(wallet::wrong_network_message(network)));
            }
            _ if was_wrong => self.error_msg.set(None),
            _ => {}
        }
        self.wallet.write().network = network;
    }

    pub fn disconnect_wallet(mut self) {
        self.store.write().disconnect();
        self.submission.set(SubmissionStatus::Idle);
        let mut status = self.wallet.write();
        status.account = None;
        status.network = None;
    }

    /// React to a provider notification.
    pub fn handle_wallet_event(mut self, event: WalletEvent) {
        match event {
            WalletEvent::AccountsChanged(reported) => {
                let change = self.wallet.read().account_change(reported);
                match change {
                    AccountChange::Switched(account) => {
                        log::info!("Wallet switched to {}", account);
                        self.store.write().connect(account.clone());
                        self.wallet.write().account = Some(account);
                        self.submission.set(SubmissionStatus::Idle);
                    }
                    AccountChange::Disconnected => {
                        log::info!("Wallet no longer exposes an account");
                        self.disconnect_wallet();
                    }
                    AccountChange::Unchanged => {}
                }
            }
            WalletEvent::ChainChanged(network) => {
                if self.wallet.read().is_connected() {
                    self.set_network(network);
                }
            }
        }
    }

    /// Complete registration in the store, then send the profile to the
    /// submission endpoint. A failed submission does not roll back the
    /// local registration.
    pub async fn register(mut self, patch: ProfilePatch) {
        let profile = self.store.write().complete_registration(patch);

        self.submission.set(SubmissionStatus::Sending);
        let client = SubmissionClient::new(&self.api_base.read());
        match client.submit(&profile).await {
            Ok(receipt) => self.submission.set(SubmissionStatus::Saved(receipt.file)),
            Err(e) => {
                log::error!("Profile submission failed: {:#}", e);
                self.submission.set(SubmissionStatus::Failed(e.to_string()));
            }
        }
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Start the dashboard's long-running tasks. Call once from the root
/// component.
///
/// - A wallet-event coroutine fed by the provider's `accountsChanged` and
///   `chainChanged` listeners.
/// - A registration coroutine; components submit a [`ProfilePatch`] through
///   `use_coroutine_handle::<ProfilePatch>()`. Registration hides the form
///   that submits it, so the work cannot live in that component's scope.
pub fn use_dashboard_tasks(state: DashboardState) {
    let wallet_events = use_coroutine(move |mut events: UnboundedReceiver<WalletEvent>| async move {
        while let Some(event) = events.next().await {
            state.handle_wallet_event(event);
        }
    });

    use_hook(move || {
        let tx = wallet_events.tx();
        let forward = move |event: WalletEvent| {
            let _ = tx.unbounded_send(event);
        };
        if let Err(e) = wallet::watch(forward) {
            log::info!("Not watching wallet events: {}", e);
        }
    });

    use_coroutine(move |mut requests: UnboundedReceiver<ProfilePatch>| async move {
        while let Some(patch) = requests.next().await {
            state.register(patch).await;
        }
    });
}
