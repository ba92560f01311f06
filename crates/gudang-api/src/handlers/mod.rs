pub mod health;
pub mod loader_requests;
pub mod logo;
pub mod report;
