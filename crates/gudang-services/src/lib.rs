//! Form-session state and the submission pipeline.

pub mod form;
pub mod record_store;
pub mod submission;

pub use form::{FormSession, PendingPhoto};
pub use record_store::RecordStore;
pub use submission::{SubmissionOutcome, SubmissionService};
