//! Wallet connection core for the storefront frontend.
//!
//! Two cooperating pieces: a pure reducer-style wallet state machine
//! (`state` + `store`) and an asynchronous session manager (`manager`) that
//! bridges an injected browser-wallet provider to it.
//!
//! # Architecture
//!
//! - **WalletStore**: owns the single `WalletState`; every mutation is a
//!   named `WalletAction` applied by the pure reducer.
//! - **SessionManager**: issues provider requests, translates results and
//!   provider events into actions, and exposes the imperative API
//!   (connect, disconnect, refresh balance) to presentation code.
//! - **WalletProvider**: injected capability trait standing in for the
//!   browser-injected provider handle, so the manager is testable against
//!   a fake.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use storefront_wallet::{SessionManager, WalletConfig, WalletStore};
//!
//! let store = Arc::new(WalletStore::new());
//! let manager = Arc::new(SessionManager::new(
//!     Some(provider),
//!     store.clone(),
//!     WalletConfig::from_env(),
//! ));
//!
//! manager.initialize().await;
//! manager.connect().await?;
//! assert!(store.snapshot().is_connected);
//! ```

pub mod balance;
pub mod config;
pub mod error;
pub mod manager;
pub mod network;
pub mod notify;
pub mod provider;
pub mod state;
pub mod store;

pub use balance::wei_hex_to_eth;
pub use config::WalletConfig;
pub use error::WalletError;
pub use manager::SessionManager;
pub use network::{parse_chain_id, NetworkRegistry};
pub use notify::{LogNotifier, Notifier};
pub use provider::{ProviderEvent, WalletProvider};
pub use state::{reduce, TransactionRecord, WalletAction, WalletState};
pub use store::WalletStore;
