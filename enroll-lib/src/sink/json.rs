//! JSON file user store

use std::io::ErrorKind;
use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;

use super::RegistrationSink;
use super::UserRecord;
use super::UserStore;
use crate::error::SinkError;
use crate::error::StoreError;

/// Local user store persisting the whole list as a JSON array in one file.
///
/// A missing or blank file reads as an empty list. Appends are
/// load-modify-write; a single writer is assumed, which holds because the UI
/// issues one submission at a time.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file and its parent directories are created on first append.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<UserRecord>, StoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => {
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Vec::new());
                }
                Ok(serde_json::from_slice(&bytes)?)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, records: &[UserRecord]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileStore {
    async fn append(&self, record: &UserRecord) -> Result<(), StoreError> {
        let mut records = self.load().await?;
        records.push(record.clone());
        self.save(&records).await?;
        log::debug!("appended user to {}", self.path.display());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.load().await
    }
}

#[async_trait]
impl RegistrationSink for JsonFileStore {
    async fn submit(&self, email: &str, password: &str) -> Result<(), SinkError> {
        self.append(&UserRecord::new(email, password)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("users.json"));
        assert_eq!(store.list().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_blank_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        std::fs::write(&path, "  \n").unwrap();
        let store = JsonFileStore::new(path);
        assert_eq!(store.list().await.unwrap(), Vec::new());
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");

        let store = JsonFileStore::new(&path);
        store
            .append(&UserRecord::new("first@gmail.com", "Abcdef1!"))
            .await
            .unwrap();
        store
            .append(&UserRecord::new("second@gmail.com", "Ghijkl2$"))
            .await
            .unwrap();

        // A fresh store over the same file sees the persisted list.
        let reopened = JsonFileStore::new(&path);
        let records = reopened.list().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].email, "first@gmail.com");
        assert_eq!(records[1].email, "second@gmail.com");
    }

    #[tokio::test]
    async fn test_parent_directories_created_on_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("users.json");
        let store = JsonFileStore::new(&path);
        store
            .append(&UserRecord::new("user@gmail.com", "Abcdef1!"))
            .await
            .unwrap();
        assert!(path.exists());
    }
}
