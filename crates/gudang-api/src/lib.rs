//! HTTP surface for the warehouse loader-request service.

pub mod api_doc;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod setup;
pub mod state;
