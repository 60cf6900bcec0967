//! In-memory user store

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::RegistrationSink;
use super::UserRecord;
use super::UserStore;
use crate::error::SinkError;
use crate::error::StoreError;

/// Local user store keeping the list in process memory.
///
/// Useful for tests and demos; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<UserRecord>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn append(&self, record: &UserRecord) -> Result<(), StoreError> {
        self.records.lock().await.push(record.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        Ok(self.records.lock().await.clone())
    }
}

#[async_trait]
impl RegistrationSink for MemoryStore {
    async fn submit(&self, email: &str, password: &str) -> Result<(), SinkError> {
        self.append(&UserRecord::new(email, password)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_append_and_list_in_order() {
        let store = MemoryStore::new();
        store
            .append(&UserRecord::new("a@gmail.com", "Abcdef1!"))
            .await
            .unwrap();
        store
            .append(&UserRecord::new("b@gmail.com", "Ghijkl2$"))
            .await
            .unwrap();

        let records = store.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "a@gmail.com");
        assert_eq!(records[1].email, "b@gmail.com");
    }

    #[tokio::test]
    async fn test_starts_empty() {
        assert!(MemoryStore::new().list().await.unwrap().is_empty());
    }
}
