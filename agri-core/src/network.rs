//! EVM networks the wallet can report.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Network the dashboard expects the wallet to be on.
pub const EXPECTED_NETWORK: Network = Network::Sepolia;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    Mainnet,
    Sepolia,
    Polygon,
    PolygonAmoy,
    Unknown(u64),
}

impl Network {
    pub fn from_id(id: u64) -> Self {
        match id {
            1 => Network::Mainnet,
            11_155_111 => Network::Sepolia,
            137 => Network::Polygon,
            80_002 => Network::PolygonAmoy,
            other => Network::Unknown(other),
        }
    }

    /// Parse the hex chain id returned by `eth_chainId` (e.g. `"0xaa36a7"`).
    pub fn from_chain_id(chain_id: &str) -> anyhow::Result<Self> {
        let trimmed = chain_id.trim();
        let id = match trimmed.strip_prefix("0x") {
            Some(hex) => u64::from_str_radix(hex, 16)?,
            None => trimmed.parse::<u64>()?,
        };
        Ok(Self::from_id(id))
    }

    pub fn is_expected(self) -> bool {
        self == EXPECTED_NETWORK
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("Ethereum Mainnet"),
            Network::Sepolia => f.write_str("Sepolia Testnet"),
            Network::Polygon => f.write_str("Polygon"),
            Network::PolygonAmoy => f.write_str("Polygon Amoy"),
            Network::Unknown(id) => write!(f, "Chain {}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_and_decimal_chain_ids() {
        assert_eq!(Network::from_chain_id("0x1").unwrap(), Network::Mainnet);
        assert_eq!(Network::from_chain_id("0xaa36a7").unwrap(), Network::Sepolia);
        assert_eq!(Network::from_chain_id("137").unwrap(), Network::Polygon);
        assert_eq!(Network::from_chain_id("0x539").unwrap(), Network::Unknown(1337));
        assert!(Network::from_chain_id("0xnope").is_err());
    }

    #[test]
    fn only_expected_network_is_accepted() {
        assert!(Network::Sepolia.is_expected());
        assert!(!Network::Mainnet.is_expected());
        assert_eq!(Network::Unknown(5).to_string(), "Chain 5");
    }
}
