//! Gudang Core Library
//!
//! This crate provides the core domain models, error types, configuration and
//! validation shared across all Gudang components.

pub mod config;
pub mod error;
pub mod models;
pub mod storage_types;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::{
    CreateLoaderRequest, LoaderRequest, LoaderRequestResponse, Shift, Transaction, PHOTO_SECTIONS,
};
pub use storage_types::StorageBackend;
