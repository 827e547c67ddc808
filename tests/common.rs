/// Shared test infrastructure for session tests:
/// - `MockProvider`: scripted in-process wallet provider (accounts, balance,
///   chain id, event emission, call counters)
/// - `RecordingNotifier`: captures user-facing notices
/// - `TestSession`: wires a manager, store and notifier together

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::mpsc;

use storefront_wallet::{
    Notifier, ProviderEvent, SessionManager, WalletConfig, WalletError, WalletProvider,
    WalletStore,
};

#[derive(Default)]
pub struct MockProvider {
    accounts: Mutex<Vec<String>>,
    /// Whether a non-interactive probe sees the accounts (prior authorization).
    authorized: AtomicBool,
    balance: Mutex<String>,
    chain: Mutex<String>,
    reject_interactive: AtomicBool,
    fail_probe: AtomicBool,
    fail_balance: AtomicBool,
    interactive_requests: AtomicUsize,
    balance_requests: AtomicUsize,
    subscribers: Mutex<Vec<mpsc::UnboundedSender<ProviderEvent>>>,
}

impl MockProvider {
    pub fn new(accounts: &[&str], balance_hex: &str, chain_hex: &str) -> Arc<Self> {
        Arc::new(Self {
            accounts: Mutex::new(accounts.iter().map(|a| a.to_string()).collect()),
            balance: Mutex::new(balance_hex.to_string()),
            chain: Mutex::new(chain_hex.to_string()),
            ..Default::default()
        })
    }

    pub fn authorize(&self) {
        self.authorized.store(true, Ordering::SeqCst);
    }

    pub fn set_accounts(&self, accounts: &[&str]) {
        *self.accounts.lock().unwrap() = accounts.iter().map(|a| a.to_string()).collect();
    }

    pub fn set_balance(&self, balance_hex: &str) {
        *self.balance.lock().unwrap() = balance_hex.to_string();
    }

    pub fn reject_interactive(&self) {
        self.reject_interactive.store(true, Ordering::SeqCst);
    }

    /// Make non-interactive account probes fail, as an unreachable provider
    /// would.
    pub fn fail_probe(&self) {
        self.fail_probe.store(true, Ordering::SeqCst);
    }

    pub fn fail_balance(&self) {
        self.fail_balance.store(true, Ordering::SeqCst);
    }

    pub fn interactive_requests(&self) -> usize {
        self.interactive_requests.load(Ordering::SeqCst)
    }

    pub fn balance_requests(&self) -> usize {
        self.balance_requests.load(Ordering::SeqCst)
    }

    pub fn emit(&self, event: ProviderEvent) {
        for subscriber in self.subscribers.lock().unwrap().iter() {
            let _ = subscriber.send(event.clone());
        }
    }
}

#[async_trait]
impl WalletProvider for MockProvider {
    async fn request_accounts(&self, interactive: bool) -> Result<Vec<String>, WalletError> {
        if interactive {
            self.interactive_requests.fetch_add(1, Ordering::SeqCst);
            if self.reject_interactive.load(Ordering::SeqCst) {
                return Err(WalletError::UserRejected(
                    "User rejected the request".to_string(),
                ));
            }
        } else {
            if self.fail_probe.load(Ordering::SeqCst) {
                return Err(WalletError::RequestFailed(
                    "provider unreachable".to_string(),
                ));
            }
            if !self.authorized.load(Ordering::SeqCst) {
                return Ok(Vec::new());
            }
        }
        Ok(self.accounts.lock().unwrap().clone())
    }

    async fn get_balance(&self, _address: &str, _block_tag: &str) -> Result<String, WalletError> {
        self.balance_requests.fetch_add(1, Ordering::SeqCst);
        if self.fail_balance.load(Ordering::SeqCst) {
            return Err(WalletError::RequestFailed("balance query failed".to_string()));
        }
        Ok(self.balance.lock().unwrap().clone())
    }

    async fn chain_id(&self) -> Result<String, WalletError> {
        Ok(self.chain.lock().unwrap().clone())
    }

    fn subscribe(&self) -> mpsc::UnboundedReceiver<ProviderEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub infos: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl Notifier for RecordingNotifier {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

pub struct TestSession {
    pub manager: Arc<SessionManager>,
    pub store: Arc<WalletStore>,
    pub notifier: Arc<RecordingNotifier>,
}

impl TestSession {
    pub fn with_provider(provider: Arc<MockProvider>) -> Self {
        Self::build(Some(provider))
    }

    pub fn without_provider() -> Self {
        Self::build(None)
    }

    fn build(provider: Option<Arc<MockProvider>>) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let store = Arc::new(WalletStore::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let manager = SessionManager::new(
            provider.map(|p| p as Arc<dyn WalletProvider>),
            store.clone(),
            WalletConfig::default(),
        )
        .with_notifier(notifier.clone());
        Self {
            manager: Arc::new(manager),
            store,
            notifier,
        }
    }
}
