//! Storage abstraction trait
//!
//! Defines the Storage trait that all photo storage backends implement.

use async_trait::async_trait;
use gudang_core::StorageBackend;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Delete failed: {0}")]
    DeleteFailed(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<StorageError> for gudang_core::AppError {
    fn from(err: StorageError) -> Self {
        gudang_core::AppError::Storage(err.to_string())
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Photo storage backends (S3, local filesystem) implement this trait so the
/// submission pipeline can work with any backend without coupling to
/// implementation details.
///
/// **Key format:** keys are `photos/{filename}`; see the crate root
/// documentation.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Upload a file and return (storage_key, public_url)
    ///
    /// The storage_key is an internal identifier used to reference the file.
    /// The public_url is the publicly resolvable URL to the file; it is what
    /// gets persisted in a record's `photo_urls` mapping.
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<(String, String)>;

    /// Download a file by its storage key
    async fn download(&self, storage_key: &str) -> StorageResult<Vec<u8>>;

    /// Delete a file by its storage key
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
