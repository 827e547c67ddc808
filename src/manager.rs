/// Wallet session manager.
///
/// Owns the conversation with the injected provider and keeps the wallet
/// store synchronized with provider reality. Presentation code calls the
/// imperative operations; provider-originated events arrive over the
/// subscription channel and run through `handle_event`, which dispatches on
/// the same action path as the explicit calls.
///
/// Requests within one `connect` are strictly sequential. Provider events
/// may interleave with in-flight user calls; the store's last-write-wins
/// dispatch is the only arbitration, matching the source behavior.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::balance::wei_hex_to_eth;
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::network::{parse_chain_id, NetworkRegistry};
use crate::notify::{LogNotifier, Notifier};
use crate::provider::{ProviderEvent, WalletProvider};
use crate::state::{TransactionRecord, WalletAction};
use crate::store::WalletStore;

pub struct SessionManager {
    provider: Option<Arc<dyn WalletProvider>>,
    store: Arc<WalletStore>,
    networks: NetworkRegistry,
    notifier: Arc<dyn Notifier>,
    block_tag: String,
}

impl SessionManager {
    /// `provider` is `None` when no wallet extension is installed; every
    /// interactive operation then fails with `ProviderMissing` up front.
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        store: Arc<WalletStore>,
        config: WalletConfig,
    ) -> Self {
        Self {
            provider,
            store,
            networks: NetworkRegistry::with_extra(config.extra_networks),
            notifier: Arc::new(LogNotifier),
            block_tag: config.block_tag,
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn state(&self) -> crate::state::WalletState {
        self.store.snapshot()
    }

    pub fn store(&self) -> &Arc<WalletStore> {
        &self.store
    }

    pub fn networks(&self) -> &NetworkRegistry {
        &self.networks
    }

    /// Run once per application session.
    ///
    /// Probes the provider for already-authorized accounts without
    /// prompting; if any exist the full connect flow runs (the provider
    /// will not re-prompt an authorized origin). Probe failures are
    /// expected when no prior authorization exists and are not surfaced.
    /// Then subscribes to provider events and drives them on a background
    /// task.
    pub async fn initialize(self: &Arc<Self>) {
        let Some(provider) = self.provider.clone() else {
            log::debug!("No wallet provider present, skipping session restore");
            return;
        };

        match provider.request_accounts(false).await {
            Ok(accounts) if !accounts.is_empty() => {
                if let Err(e) = self.connect().await {
                    log::debug!("Session restore failed: {}", e);
                }
            }
            Ok(_) => log::debug!("No previously authorized accounts"),
            Err(e) => log::debug!("No previous wallet connection found: {}", e),
        }

        let events = provider.subscribe();
        let manager = Arc::clone(self);
        tokio::spawn(async move {
            manager.event_loop(events).await;
        });
    }

    async fn event_loop(&self, mut events: mpsc::UnboundedReceiver<ProviderEvent>) {
        while let Some(event) = events.recv().await {
            self.handle_event(event).await;
        }
        log::debug!("Provider event stream closed");
    }

    /// Interactive connect flow.
    ///
    /// Without a provider this notifies the user and returns
    /// `ProviderMissing` before any state transition. Otherwise it
    /// dispatches connect-start, walks the provider sequentially (accounts,
    /// balance, chain id), and lands on connect-success or connect-failure.
    /// Failures are recorded in state and re-raised so callers can notify.
    pub async fn connect(&self) -> Result<(), WalletError> {
        let Some(provider) = self.provider.clone() else {
            let err = WalletError::ProviderMissing;
            self.notifier.error(&err.to_string());
            return Err(err);
        };

        self.store.dispatch(WalletAction::ConnectStart);

        match self.run_connect(&provider).await {
            Ok(()) => Ok(()),
            Err(e) => {
                log::error!("Failed to connect wallet: {}", e);
                self.store.dispatch(WalletAction::ConnectFailure {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn run_connect(&self, provider: &Arc<dyn WalletProvider>) -> Result<(), WalletError> {
        let accounts = provider.request_accounts(true).await?;
        let address = accounts
            .first()
            .map(|a| a.to_lowercase())
            .ok_or_else(|| WalletError::RequestFailed("no accounts authorized".to_string()))?;

        let raw_balance = provider.get_balance(&address, &self.block_tag).await?;
        let balance = wei_hex_to_eth(&raw_balance)?;

        let chain_id = parse_chain_id(&provider.chain_id().await?)?;
        let network = self.networks.name_for(chain_id);

        log::info!("Wallet connected: {} on {}", address, network);
        self.store.dispatch(WalletAction::ConnectSuccess {
            address,
            balance,
            network,
        });
        Ok(())
    }

    /// Local-only: the provider model has no revoke call.
    pub fn disconnect(&self) {
        self.store.dispatch(WalletAction::Disconnect);
    }

    /// Re-query the balance for the current address.
    ///
    /// No-op when no address is known. Failures keep the last known value
    /// and are logged only; stale balance beats interrupting the user.
    pub async fn refresh_balance(&self) {
        let Some(address) = self.store.snapshot().user_address else {
            return;
        };
        let Some(provider) = self.provider.as_ref() else {
            return;
        };

        let refreshed = provider
            .get_balance(&address, &self.block_tag)
            .await
            .and_then(|raw| wei_hex_to_eth(&raw));
        match refreshed {
            Ok(balance) => self.store.dispatch(WalletAction::UpdateBalance(balance)),
            Err(e) => log::error!("Failed to update balance: {}", e),
        }
    }

    /// Append to the transaction log (most recent first).
    pub fn record_transaction(&self, record: TransactionRecord) {
        self.store.dispatch(WalletAction::AddTransaction(record));
    }

    /// Apply one provider-originated event.
    pub async fn handle_event(&self, event: ProviderEvent) {
        match event {
            ProviderEvent::AccountsChanged(accounts) => match accounts.first() {
                None => self.disconnect(),
                Some(first) => {
                    let first = first.to_lowercase();
                    if self.store.snapshot().user_address.as_deref() != Some(first.as_str()) {
                        // Full re-auth, not an address swap: balance and
                        // network must resync for the new account.
                        if let Err(e) = self.connect().await {
                            log::error!("Reconnect after account change failed: {}", e);
                        }
                    }
                }
            },
            ProviderEvent::ChainChanged(raw) => match parse_chain_id(&raw) {
                Ok(chain_id) => {
                    let network = self.networks.name_for(chain_id);
                    self.store
                        .dispatch(WalletAction::UpdateNetwork(network.clone()));
                    self.notifier
                        .info(&format!("Network changed to {}", network));
                    // Balance is chain-dependent. Read connectedness back
                    // from the store, not from a stale capture.
                    if self.store.snapshot().is_connected {
                        self.refresh_balance().await;
                    }
                }
                Err(e) => log::warn!("Ignoring chain change event: {}", e),
            },
            ProviderEvent::Disconnected => self.disconnect(),
        }
    }
}
