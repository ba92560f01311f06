//! Database repositories for the data access layer.

pub mod loader_request;

pub use loader_request::{LoaderRequestRepository, LoaderRequestRow};
