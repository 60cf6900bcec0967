//! Sink error type

use super::RegisterError;
use super::StoreError;

/// Failure of the sink a validated submission was forwarded to.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The local store failed to persist the user.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The remote registration call failed or was rejected.
    #[error("Registration error: {0}")]
    Register(#[from] RegisterError),
}

impl SinkError {
    /// Returns the user-facing failure line for this sink failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::Store(_) => "Could not save the user locally.".to_string(),
            Self::Register(err) => err.user_message(),
        }
    }
}
