use thiserror::Error;

/// Failures surfaced by the wallet session.
///
/// `ProviderMissing` means no request was ever attempted (and no
/// connect-failure is recorded in state); the other variants are
/// attempted-and-failed and do get recorded.
#[derive(Error, Debug)]
pub enum WalletError {
    #[error("No wallet provider detected. Install a browser wallet extension to continue.")]
    ProviderMissing,

    #[error("Connection request rejected: {0}")]
    UserRejected(String),

    #[error("Provider request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),
}
