//! Registration sinks: local user stores and the remote registration call.
//!
//! A sink is the external collaborator that receives `(email, password)` once
//! validation allows a submission. The two shipped families are append-only
//! local stores (behind [`UserStore`]) and the HTTP client in
//! [`crate::RegistrationClient`]; a screen picks exactly one per submission.

mod json;
mod memory;

pub use json::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::error::SinkError;
use crate::error::StoreError;

/// A registered user as persisted by a local store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    pub password: String,
}

impl UserRecord {
    /// Creates a new record.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Backend trait for local user storage.
///
/// Append-only: there is no update or delete. `list` returns records in
/// insertion order. Implementations are injected by the composition root
/// rather than reached through a global.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Appends a record to the store.
    async fn append(&self, record: &UserRecord) -> Result<(), StoreError>;

    /// Returns all stored records in insertion order.
    async fn list(&self) -> Result<Vec<UserRecord>, StoreError>;
}

/// A destination for a validated submission.
///
/// Implemented by the local stores (append a record) and by
/// [`crate::RegistrationClient`] (one registration call). Retry, queuing, and
/// idempotence are the sink's own business; none of the shipped sinks do any.
#[async_trait]
pub trait RegistrationSink: Send + Sync {
    /// Forwards a validated `(email, password)` pair to this sink.
    async fn submit(&self, email: &str, password: &str) -> Result<(), SinkError>;
}
