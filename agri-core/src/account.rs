//! Wallet account identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Prefix for the per-account profile key in browser storage.
pub const STORAGE_KEY_PREFIX: &str = "farmerData_";

/// An EVM wallet address as reported by the injected wallet provider.
///
/// The address is kept exactly as the provider returned it (providers
/// usually report lowercase) so storage keys stay stable between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountId(String);

impl AccountId {
    /// Parse and validate a `0x`-prefixed, 40 hex digit address.
    pub fn parse(raw: &str) -> Result<Self, AccountIdError> {
        let trimmed = raw.trim();
        let hex = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| AccountIdError(format!("missing 0x prefix: {raw:?}")))?;
        if hex.len() != 40 {
            return Err(AccountIdError(format!(
                "expected 40 hex digits, found {}",
                hex.len()
            )));
        }
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(AccountIdError(format!("non-hex character in {raw:?}")));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Browser storage key holding this account's profile snapshot.
    pub fn storage_key(&self) -> String {
        format!("{}{}", STORAGE_KEY_PREFIX, self.0)
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for AccountId {
    type Err = AccountIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for AccountId {
    type Error = AccountIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<AccountId> for String {
    fn from(value: AccountId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccountIdError(pub String);

impl fmt::Display for AccountIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid account id: {}", self.0)
    }
}

impl std::error::Error for AccountIdError {}
