/// Session configuration from environment variables.
///
/// Controls the block tag used for balance queries and any extra network
/// labels merged into the registry (handy for local devnets).

use std::env;

#[derive(Clone, Debug)]
pub struct WalletConfig {
    /// Block tag passed to balance queries.
    pub block_tag: String,
    /// Extra `(chain_id, name)` entries merged into the network registry.
    pub extra_networks: Vec<(u64, String)>,
}

impl WalletConfig {
    /// Load configuration from environment variables.
    ///
    /// - `WALLET_BLOCK_TAG`: block tag for balance queries (default `latest`)
    /// - `WALLET_NETWORKS`: comma-separated `chainid=Name` pairs, e.g.
    ///   `31337=Anvil Local,1337=Ganache`
    ///
    /// Garbled `WALLET_NETWORKS` entries are warned about and skipped.
    pub fn from_env() -> Self {
        let block_tag = env::var("WALLET_BLOCK_TAG").unwrap_or_else(|_| "latest".to_string());

        let extra_networks = env::var("WALLET_NETWORKS")
            .map(|raw| Self::parse_networks(&raw))
            .unwrap_or_default();

        Self {
            block_tag,
            extra_networks,
        }
    }

    fn parse_networks(raw: &str) -> Vec<(u64, String)> {
        raw.split(',')
            .filter(|entry| !entry.trim().is_empty())
            .filter_map(|entry| {
                let (id, name) = entry.split_once('=')?;
                match id.trim().parse::<u64>() {
                    Ok(id) if !name.trim().is_empty() => Some((id, name.trim().to_string())),
                    _ => {
                        log::warn!("Ignoring malformed WALLET_NETWORKS entry '{}'", entry);
                        None
                    }
                }
            })
            .collect()
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            block_tag: "latest".to_string(),
            extra_networks: Vec::new(),
        }
    }
}
