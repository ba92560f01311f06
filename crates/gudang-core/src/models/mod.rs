//! Domain models for loader requests.

pub mod loader_request;
pub mod section;

pub use loader_request::{
    CreateLoaderRequest, LoaderRequest, LoaderRequestResponse, Shift, Transaction,
};
pub use section::{is_valid_section, PHOTO_SECTIONS, SECTION_COUNT};
