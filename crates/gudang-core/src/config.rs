//! Configuration module
//!
//! Environment-driven configuration for the API, storage backends and the
//! submission pipeline. Loaded once at startup via [`Config::from_env`] and
//! validated fail-fast with [`Config::validate`].

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_SERVER_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_PHOTO_SIZE_MB: usize = 10;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    // Storage configuration
    pub storage_backend: Option<StorageBackend>,
    pub s3_bucket: Option<String>,
    pub s3_region: Option<String>,
    pub s3_endpoint: Option<String>, // Custom endpoint for S3-compatible providers
    pub local_storage_path: Option<String>,
    pub local_storage_base_url: Option<String>,
    // Logo asset store (single well-known file, overwritten in place)
    pub asset_path: String,
    // Photo upload constraints
    pub max_photo_size_bytes: usize,
    pub photo_allowed_extensions: Vec<String>,
    pub photo_allowed_content_types: Vec<String>,
    // Where the submission pipeline saves generated reports
    pub report_output_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let cors_origins_str = env::var("CORS_ORIGINS").unwrap_or_else(|_| "*".to_string());
        let is_production =
            environment.to_lowercase() == "production" || environment.to_lowercase() == "prod";
        if is_production && cors_origins_str.trim() == "*" {
            return Err(anyhow::anyhow!(
                "CORS_ORIGINS cannot be '*' in production. Please specify explicit origins."
            ));
        }
        let cors_origins: Vec<String> = cors_origins_str
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let server_port = env::var("PORT")
            .unwrap_or_else(|_| DEFAULT_SERVER_PORT.to_string())
            .parse::<u16>()
            .unwrap_or(DEFAULT_SERVER_PORT);

        let database_url =
            env::var("DATABASE_URL").map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| DEFAULT_MAX_CONNECTIONS.to_string())
            .parse::<u32>()
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        let db_timeout_seconds = env::var("DB_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| DEFAULT_CONNECTION_TIMEOUT_SECS.to_string())
            .parse::<u64>()
            .unwrap_or(DEFAULT_CONNECTION_TIMEOUT_SECS);

        let storage_backend = env::var("STORAGE_BACKEND")
            .ok()
            .map(|s| s.parse::<StorageBackend>())
            .transpose()?;

        let max_photo_size_mb = env::var("MAX_PHOTO_SIZE_MB")
            .unwrap_or_else(|_| DEFAULT_MAX_PHOTO_SIZE_MB.to_string())
            .parse::<usize>()
            .unwrap_or(DEFAULT_MAX_PHOTO_SIZE_MB);

        let photo_allowed_extensions = env::var("PHOTO_ALLOWED_EXTENSIONS")
            .unwrap_or_else(|_| "jpg,jpeg,png,webp".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        let photo_allowed_content_types = env::var("PHOTO_ALLOWED_CONTENT_TYPES")
            .unwrap_or_else(|_| "image/jpeg,image/png,image/webp".to_string())
            .split(',')
            .map(|s| s.trim().to_lowercase())
            .collect();

        Ok(Config {
            server_port,
            cors_origins,
            environment,
            database_url,
            db_max_connections,
            db_timeout_seconds,
            storage_backend,
            s3_bucket: env::var("S3_BUCKET").ok(),
            s3_region: env::var("S3_REGION").ok().or_else(|| env::var("AWS_REGION").ok()),
            s3_endpoint: env::var("S3_ENDPOINT").ok(),
            local_storage_path: env::var("LOCAL_STORAGE_PATH").ok(),
            local_storage_base_url: env::var("LOCAL_STORAGE_BASE_URL").ok(),
            asset_path: env::var("ASSET_PATH").unwrap_or_else(|_| "public".to_string()),
            max_photo_size_bytes: max_photo_size_mb * 1024 * 1024,
            photo_allowed_extensions,
            photo_allowed_content_types,
            report_output_dir: env::var("REPORT_OUTPUT_DIR").unwrap_or_else(|_| ".".to_string()),
        })
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    /// Fail-fast validation of cross-field constraints.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        match self.storage_backend {
            Some(StorageBackend::S3) => {
                if self.s3_bucket.is_none() {
                    return Err(anyhow::anyhow!("S3_BUCKET must be set for the s3 backend"));
                }
                if self.s3_region.is_none() {
                    return Err(anyhow::anyhow!(
                        "S3_REGION or AWS_REGION must be set for the s3 backend"
                    ));
                }
            }
            Some(StorageBackend::Local) | None => {
                if self.local_storage_path.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_PATH must be set for the local backend"
                    ));
                }
                if self.local_storage_base_url.is_none() {
                    return Err(anyhow::anyhow!(
                        "LOCAL_STORAGE_BASE_URL must be set for the local backend"
                    ));
                }
            }
        }
        if self.max_photo_size_bytes == 0 {
            return Err(anyhow::anyhow!("MAX_PHOTO_SIZE_MB must be greater than 0"));
        }
        Ok(())
    }

    pub fn storage_backend(&self) -> Option<StorageBackend> {
        self.storage_backend
    }

    pub fn s3_bucket(&self) -> Option<&str> {
        self.s3_bucket.as_deref()
    }

    pub fn s3_region(&self) -> Option<&str> {
        self.s3_region.as_deref()
    }

    pub fn s3_endpoint(&self) -> Option<&str> {
        self.s3_endpoint.as_deref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn local_storage_base_url(&self) -> Option<&str> {
        self.local_storage_base_url.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            server_port: 3000,
            cors_origins: vec!["*".to_string()],
            environment: "development".to_string(),
            database_url: "postgres://localhost/gudang".to_string(),
            db_max_connections: 20,
            db_timeout_seconds: 30,
            storage_backend: Some(StorageBackend::Local),
            s3_bucket: None,
            s3_region: None,
            s3_endpoint: None,
            local_storage_path: Some("/tmp/gudang".to_string()),
            local_storage_base_url: Some("http://localhost:3000/media".to_string()),
            asset_path: "public".to_string(),
            max_photo_size_bytes: 10 * 1024 * 1024,
            photo_allowed_extensions: vec!["jpg".to_string(), "png".to_string()],
            photo_allowed_content_types: vec!["image/jpeg".to_string(), "image/png".to_string()],
            report_output_dir: ".".to_string(),
        }
    }

    #[test]
    fn test_validate_local_backend() {
        let config = test_config();
        assert!(config.validate().is_ok());

        let mut missing_path = test_config();
        missing_path.local_storage_path = None;
        assert!(missing_path.validate().is_err());
    }

    #[test]
    fn test_validate_s3_backend_requires_bucket() {
        let mut config = test_config();
        config.storage_backend = Some(StorageBackend::S3);
        assert!(config.validate().is_err());

        config.s3_bucket = Some("photos".to_string());
        config.s3_region = Some("ap-southeast-1".to_string());
        assert!(config.validate().is_ok());
    }
}
