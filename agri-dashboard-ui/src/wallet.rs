//! Typed wrappers around the injected EIP-1193 wallet provider.
//!
//! Wallet extensions expose `window.ethereum` with a promise-returning
//! `request({ method })` and an `on(event, listener)` subscription. This
//! module calls both through `js_sys::Reflect` and converts the results and
//! errors into Rust types.

use agri_core::account::AccountId;
use agri_core::network::Network;
use js_sys::{Array, Function, Object, Promise, Reflect};
use std::fmt;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// EIP-1193 code for "user rejected the request".
const USER_REJECTED: i64 = 4001;

/// What the wallet last told us.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletStatus {
    pub account: Option<AccountId>,
    pub network: Option<Network>,
    /// A connect prompt is open.
    pub connecting: bool,
}

/// What an `accountsChanged` report means for the connected session.
#[derive(Debug, Clone, PartialEq)]
pub enum AccountChange {
    /// Another account is now selected; load its profile.
    Switched(AccountId),
    /// The wallet no longer exposes any account.
    Disconnected,
    Unchanged,
}

/// Notifications pushed by the provider.
#[derive(Debug, Clone, PartialEq)]
pub enum WalletEvent {
    /// First valid account from `accountsChanged`, if any.
    AccountsChanged(Option<AccountId>),
    /// Network from `chainChanged`; `None` if the id did not parse.
    ChainChanged(Option<Network>),
}

impl WalletStatus {
    pub fn is_connected(&self) -> bool {
        self.account.is_some()
    }

    /// Interpret the account the wallet now reports. Reports that arrive
    /// while no account is connected are ignored.
    pub fn account_change(&self, reported: Option<AccountId>) -> AccountChange {
        match (&self.account, reported) {
            (None, _) => AccountChange::Unchanged,
            (Some(_), None) => AccountChange::Disconnected,
            (Some(current), Some(next)) if *current == next => AccountChange::Unchanged,
            (Some(_), Some(next)) => AccountChange::Switched(next),
        }
    }

    /// Connected to a network other than the expected one.
    pub fn is_wrong_network(&self) -> bool {
        matches!(self.network, Some(network) if !network.is_expected())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum WalletError {
    /// No `window.ethereum`.
    NotInstalled,
    /// The user dismissed the wallet prompt.
    Rejected,
    /// The wallet returned no usable account.
    NoAccount,
    Provider(String),
}

impl WalletError {
    /// Classify an RPC error by its EIP-1193 code.
    pub fn from_rpc(code: Option<i64>, message: String) -> Self {
        match code {
            Some(USER_REJECTED) => WalletError::Rejected,
            _ => WalletError::Provider(message),
        }
    }

    fn from_js(value: JsValue) -> Self {
        let code = Reflect::get(&value, &JsValue::from_str("code"))
            .ok()
            .and_then(|c| c.as_f64())
            .map(|c| c as i64);
        let message = Reflect::get(&value, &JsValue::from_str("message"))
            .ok()
            .and_then(|m| m.as_string())
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Self::from_rpc(code, message)
    }
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::NotInstalled => {
                write!(f, "No wallet found. Please install MetaMask to continue.")
            }
            WalletError::Rejected => write!(f, "Wallet connection was rejected."),
            WalletError::NoAccount => write!(f, "The wallet did not return a valid account."),
            WalletError::Provider(message) => write!(f, "Wallet error: {}", message),
        }
    }
}

impl std::error::Error for WalletError {}

fn provider() -> Result<JsValue, WalletError> {
    let window = web_sys::window().ok_or(WalletError::NotInstalled)?;
    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum"))
        .map_err(|_| WalletError::NotInstalled)?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return Err(WalletError::NotInstalled);
    }
    Ok(ethereum)
}

async fn request(method: &str) -> Result<JsValue, WalletError> {
    let ethereum = provider()?;
    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method))
        .map_err(WalletError::from_js)?;

    let request_fn: Function = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(WalletError::from_js)?
        .dyn_into()
        .map_err(|_| WalletError::Provider("provider has no request()".to_string()))?;
    let promise: Promise = request_fn
        .call1(&ethereum, &args)
        .map_err(WalletError::from_js)?
        .dyn_into()
        .map_err(|_| WalletError::Provider(format!("{} did not return a promise", method)))?;

    JsFuture::from(promise).await.map_err(WalletError::from_js)
}

/// Banner text for a wallet on the wrong network.
pub fn wrong_network_message(network: Network) -> String {
    format!(
        "Connected to {}. Please switch to {}.",
        network,
        agri_core::network::EXPECTED_NETWORK
    )
}

/// First valid address in an `eth_accounts`-style array.
pub fn first_account(raw: &[String]) -> Option<AccountId> {
    raw.iter().find_map(|a| AccountId::parse(a).ok())
}

fn accounts_from(value: JsValue) -> Vec<String> {
    Array::from(&value)
        .iter()
        .filter_map(|v| v.as_string())
        .collect()
}

/// Prompt the user to connect (`eth_requestAccounts`).
pub async fn request_account() -> Result<AccountId, WalletError> {
    let accounts = accounts_from(request("eth_requestAccounts").await?);
    first_account(&accounts).ok_or(WalletError::NoAccount)
}

/// Already-authorised account, without prompting (`eth_accounts`).
pub async fn current_account() -> Result<Option<AccountId>, WalletError> {
    let accounts = accounts_from(request("eth_accounts").await?);
    Ok(first_account(&accounts))
}

/// Network the wallet is on (`eth_chainId`).
pub async fn network() -> Result<Network, WalletError> {
    let value = request("eth_chainId").await?;
    let chain_id = value
        .as_string()
        .ok_or_else(|| WalletError::Provider("eth_chainId returned no string".to_string()))?;
    Network::from_chain_id(&chain_id).map_err(|e| WalletError::Provider(e.to_string()))
}

fn subscribe(
    ethereum: &JsValue,
    event: &str,
    listener: impl FnMut(JsValue) + 'static,
) -> Result<(), WalletError> {
    let on: Function = Reflect::get(ethereum, &JsValue::from_str("on"))
        .map_err(WalletError::from_js)?
        .dyn_into()
        .map_err(|_| WalletError::Provider("provider has no on()".to_string()))?;
    let closure = Closure::<dyn FnMut(JsValue)>::new(listener);
    on.call2(ethereum, &JsValue::from_str(event), closure.as_ref())
        .map_err(WalletError::from_js)?;
    // The provider keeps the listener for the lifetime of the page.
    closure.forget();
    Ok(())
}

/// Forward `accountsChanged` and `chainChanged` to `on_event`.
pub fn watch(on_event: impl FnMut(WalletEvent) + Clone + 'static) -> Result<(), WalletError> {
    let ethereum = provider()?;

    let mut on_accounts = on_event.clone();
    subscribe(&ethereum, "accountsChanged", move |value| {
        let account = first_account(&accounts_from(value));
        on_accounts(WalletEvent::AccountsChanged(account));
    })?;

    let mut on_chain = on_event;
    subscribe(&ethereum, "chainChanged", move |value| {
        let network = value
            .as_string()
            .and_then(|id| Network::from_chain_id(&id).ok());
        on_chain(WalletEvent::ChainChanged(network));
    })
}
