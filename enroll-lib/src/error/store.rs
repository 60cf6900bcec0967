//! Local store error types

/// Errors that can occur in a local user store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Filesystem failure while reading or writing the store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored list could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
