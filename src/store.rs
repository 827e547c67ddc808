/// Owned state container for the wallet slice.
///
/// Replaces ambient global lookup: the one `WalletState` lives here and is
/// shared by handle (`Arc<WalletStore>`). Every mutation goes through
/// `dispatch`, so readers always observe a complete post-transition
/// snapshot, never a partial update.

use std::sync::{Mutex, PoisonError};

use crate::state::{reduce, WalletAction, WalletState};

#[derive(Debug, Default)]
pub struct WalletStore {
    state: Mutex<WalletState>,
}

impl WalletStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the reducer over the current state. Last write wins.
    pub fn dispatch(&self, action: WalletAction) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let prior = std::mem::take(&mut *state);
        *state = reduce(prior, action);
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> WalletState {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
