//! Object-storage seam for attachment files.
//!
//! Uploads happen elsewhere (the upload flow hands a URL to attachment
//! creation); the lifecycle engine only ever needs `delete`. Callers on the
//! cascade paths treat deletion as best-effort: a storage failure is logged
//! and swallowed, and the database row is removed regardless, trading a
//! possible storage orphan for guaranteed metadata consistency.

use async_trait::async_trait;

/// Failure talking to the object store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("object storage delete failed for {url}: {reason}")]
    DeleteFailed { url: String, reason: String },
}

/// External object storage holding attachment files, keyed by URL.
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Delete the object behind `url`.
    async fn delete(&self, url: &str) -> Result<(), StorageError>;
}

/// No-op storage for deployments without an object store (and for tests).
///
/// Logs each delete at debug level and reports success.
#[derive(Debug, Default)]
pub struct DisabledStorage;

#[async_trait]
impl ObjectStorage for DisabledStorage {
    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        tracing::debug!(url, "Object storage disabled, skipping delete");
        Ok(())
    }
}
