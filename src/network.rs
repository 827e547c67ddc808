/// Chain-id to display-name resolution.
///
/// The registry is built once at session construction and immutable
/// afterwards. Unknown chain ids resolve to a synthesized `Chain ID: {id}`
/// label instead of failing, since a wallet can land on any devnet.

use std::collections::BTreeMap;

use crate::error::WalletError;

#[derive(Clone, Debug)]
pub struct NetworkRegistry {
    names: BTreeMap<u64, String>,
}

impl Default for NetworkRegistry {
    fn default() -> Self {
        let names = [
            (1, "Ethereum Mainnet"),
            (3, "Ropsten Testnet"),
            (4, "Rinkeby Testnet"),
            (5, "Goerli Testnet"),
            (137, "Polygon Mainnet"),
            (80001, "Polygon Mumbai"),
            (56, "BSC Mainnet"),
            (97, "BSC Testnet"),
            (42161, "Arbitrum One"),
            (421613, "Arbitrum Goerli"),
        ]
        .into_iter()
        .map(|(id, name)| (id, name.to_string()))
        .collect();
        Self { names }
    }
}

impl NetworkRegistry {
    /// Default registry extended with additional `(chain_id, name)` entries,
    /// e.g. local devnets from configuration. Extra entries shadow defaults.
    pub fn with_extra(extra: impl IntoIterator<Item = (u64, String)>) -> Self {
        let mut registry = Self::default();
        for (id, name) in extra {
            registry.names.insert(id, name);
        }
        registry
    }

    pub fn name_for(&self, chain_id: u64) -> String {
        self.names
            .get(&chain_id)
            .cloned()
            .unwrap_or_else(|| format!("Chain ID: {}", chain_id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.names.iter().map(|(id, name)| (*id, name.as_str()))
    }
}

/// Parse a provider chain id (`"0x89"`, with or without the prefix) into a
/// numeric id.
pub fn parse_chain_id(raw: &str) -> Result<u64, WalletError> {
    let digits = raw
        .trim()
        .strip_prefix("0x")
        .or_else(|| raw.trim().strip_prefix("0X"))
        .unwrap_or_else(|| raw.trim());
    u64::from_str_radix(digits, 16)
        .map_err(|_| WalletError::InvalidResponse(format!("chain id {:?} is not hex", raw)))
}
