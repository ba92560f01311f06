//! Gudang Storage Library
//!
//! Storage abstraction and backends for loader-request photos, plus the
//! single-slot company-logo asset store.
//!
//! # Storage key format
//!
//! Photo keys are `photos/{filename}` where the filename is unique per
//! submission: `{unix_millis}-{section}-{original_file_name}`. Keys must not
//! contain `..` or a leading `/`. Key generation is centralized in the
//! `keys` module so all backends stay consistent.

pub mod factory;
pub mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
pub mod logo;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
pub use gudang_core::StorageBackend;
pub use keys::{photo_filename, photo_key};
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
pub use logo::LogoStore;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
