//! Gudang database layer.
//!
//! Repositories for data access; loader-request records are append-only
//! (insert, point lookup, listing — no update or delete).

pub mod db;

pub use db::{LoaderRequestRepository, LoaderRequestRow};
