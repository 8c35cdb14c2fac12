//! Document storage abstraction for identity uploads.
//!
//! Provides a trait for object storage with a local filesystem
//! implementation. An S3 implementation can be added later.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::error::ApiReservationsError;

/// Object-storage trait for identity documents.
///
/// `store` writes a validated file and returns the public reference
/// callers persist alongside the reservation.
#[async_trait]
pub trait DocumentStorage: Send + Sync {
    /// Store a document under the given folder and return its public URL.
    async fn store(
        &self,
        folder: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, ApiReservationsError>;

    /// Remove a previously stored document.
    ///
    /// Used to clean up after an intake aborted between upload and
    /// persistence, so no orphan file outlives its reservation.
    async fn delete(&self, folder: &str, filename: &str) -> Result<(), ApiReservationsError>;
}

/// Local filesystem document storage.
pub struct LocalDocumentStorage {
    /// Base directory for document storage.
    base_path: PathBuf,
    /// URL prefix for serving documents (e.g. "/documents" or a CDN origin).
    url_prefix: String,
}

impl LocalDocumentStorage {
    /// Create a new local document storage.
    pub fn new(base_path: impl AsRef<Path>, url_prefix: impl Into<String>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
            url_prefix: url_prefix.into(),
        }
    }

    fn file_path(&self, folder: &str, filename: &str) -> PathBuf {
        self.base_path.join(folder).join(filename)
    }
}

#[async_trait]
impl DocumentStorage for LocalDocumentStorage {
    async fn store(
        &self,
        folder: &str,
        filename: &str,
        data: &[u8],
    ) -> Result<String, ApiReservationsError> {
        // Folder and filename are produced by the service, never taken
        // verbatim from client input.
        let dir = self.base_path.join(folder);
        fs::create_dir_all(&dir).await.map_err(|e| {
            ApiReservationsError::UploadFailed(format!("failed to create document directory: {e}"))
        })?;

        let path = self.file_path(folder, filename);
        fs::write(&path, data).await.map_err(|e| {
            ApiReservationsError::UploadFailed(format!("failed to write document: {e}"))
        })?;

        Ok(format!(
            "{}/{}/{}",
            self.url_prefix.trim_end_matches('/'),
            folder,
            filename
        ))
    }

    async fn delete(&self, folder: &str, filename: &str) -> Result<(), ApiReservationsError> {
        let path = self.file_path(folder, filename);
        fs::remove_file(&path).await.map_err(|e| {
            ApiReservationsError::UploadFailed(format!("failed to remove document: {e}"))
        })
    }
}
