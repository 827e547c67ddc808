/// Injected wallet-provider capability.
///
/// The browser-injected provider handle is abstracted behind a trait so the
/// session manager can be driven by a fake in tests. Provider-originated
/// events arrive as typed messages over a channel rather than callbacks
/// closing over mutable state; they feed the same dispatch path as
/// user-initiated calls.

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::error::WalletError;

/// Events pushed by the provider outside any explicit request.
#[derive(Clone, Debug)]
pub enum ProviderEvent {
    /// The authorized account list changed. Empty means access was revoked.
    AccountsChanged(Vec<String>),
    /// The active chain changed; payload is the new hex chain id.
    ChainChanged(String),
    /// The provider dropped the session.
    Disconnected,
}

#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// List authorized accounts. With `interactive` set the provider may
    /// prompt the user and the call can be rejected; without it the call
    /// returns the already-authorized accounts (possibly none) silently.
    async fn request_accounts(&self, interactive: bool) -> Result<Vec<String>, WalletError>;

    /// Balance of `address` at `block_tag` as a hex wei string.
    async fn get_balance(&self, address: &str, block_tag: &str) -> Result<String, WalletError>;

    /// Current chain id as a hex string.
    async fn chain_id(&self) -> Result<String, WalletError>;

    /// Open a stream of provider-originated events.
    fn subscribe(&self) -> mpsc::UnboundedReceiver<ProviderEvent>;
}
