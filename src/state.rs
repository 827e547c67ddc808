/// Wallet connection state and its reducer.
///
/// `WalletState` is the single source of truth read by the presentation
/// layer; it only ever changes through `reduce`, which is a pure function
/// over a named action. Connecting is the one transient phase: it ends in
/// connected, failed, or abandoned, never overlapping a connected steady
/// state.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One entry in the wallet's transaction log, most recent first.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub hash: String,
    pub from: String,
    pub to: String,
    /// Value in ether, formatted like the balance fields (4 fractional digits).
    pub value: String,
    pub timestamp: DateTime<Utc>,
}

/// Snapshot of the wallet connection.
///
/// `user_address`, `user_balance` and `current_network` are populated as a
/// unit on a successful connect; `user_address` is always lowercase hex.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletState {
    pub is_connected: bool,
    pub user_address: Option<String>,
    pub user_balance: Option<String>,
    pub current_network: Option<String>,
    pub is_connecting: bool,
    pub error: Option<String>,
    pub transactions: Vec<TransactionRecord>,
}

/// State transitions understood by the reducer.
#[derive(Clone, Debug)]
pub enum WalletAction {
    ConnectStart,
    ConnectSuccess {
        address: String,
        balance: String,
        network: String,
    },
    ConnectFailure {
        message: String,
    },
    Disconnect,
    UpdateBalance(String),
    UpdateNetwork(String),
    AddTransaction(TransactionRecord),
}

/// Apply one action to the current state.
///
/// Pure and deterministic: no I/O, no clock, no randomness. `Disconnect`
/// returns the exact initial state, transaction log included.
pub fn reduce(state: WalletState, action: WalletAction) -> WalletState {
    match action {
        WalletAction::ConnectStart => WalletState {
            is_connecting: true,
            error: None,
            ..state
        },
        WalletAction::ConnectSuccess {
            address,
            balance,
            network,
        } => WalletState {
            is_connected: true,
            is_connecting: false,
            user_address: Some(address),
            user_balance: Some(balance),
            current_network: Some(network),
            error: None,
            ..state
        },
        WalletAction::ConnectFailure { message } => WalletState {
            is_connecting: false,
            error: Some(message),
            ..state
        },
        WalletAction::Disconnect => WalletState::default(),
        WalletAction::UpdateBalance(value) => WalletState {
            user_balance: Some(value),
            ..state
        },
        WalletAction::UpdateNetwork(name) => WalletState {
            current_network: Some(name),
            ..state
        },
        WalletAction::AddTransaction(record) => {
            let mut transactions = Vec::with_capacity(state.transactions.len() + 1);
            transactions.push(record);
            transactions.extend(state.transactions);
            WalletState {
                transactions,
                ..state
            }
        }
    }
}
