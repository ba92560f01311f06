//! Company-logo asset store.
//!
//! There is exactly one current logo: a single well-known file that every
//! save overwrites unconditionally. Modeled as an explicit store rather than
//! module-level mutable state.

use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::traits::{StorageError, StorageResult};

/// File name of the logo asset under the asset base path.
pub const LOGO_FILE_NAME: &str = "company-logo.png";

/// Single-slot logo asset store.
#[derive(Clone, Debug)]
pub struct LogoStore {
    base_path: PathBuf,
}

impl LogoStore {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        LogoStore {
            base_path: base_path.into(),
        }
    }

    /// Filesystem path of the logo asset.
    pub fn logo_path(&self) -> PathBuf {
        self.base_path.join(LOGO_FILE_NAME)
    }

    /// Publicly resolvable path for the logo asset.
    pub fn public_path(&self) -> String {
        format!("/{}", LOGO_FILE_NAME)
    }

    /// Persist the logo, overwriting any prior value.
    ///
    /// Returns the public path of the stored asset.
    pub async fn save_logo(&self, data: Vec<u8>) -> StorageResult<String> {
        fs::create_dir_all(&self.base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create asset directory {}: {}",
                self.base_path.display(),
                e
            ))
        })?;

        let path = self.logo_path();
        let size = data.len();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;
        file.write_all(&data).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;
        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            size_bytes = size,
            "Logo asset saved"
        );

        Ok(self.public_path())
    }

    /// Read the current logo, if one has been saved.
    pub async fn load_logo(&self) -> StorageResult<Option<Vec<u8>>> {
        let path = self.logo_path();
        if !Path::new(&path).exists() {
            return Ok(None);
        }
        let data = fs::read(&path).await.map_err(|e| {
            StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
        })?;
        Ok(Some(data))
    }
}
