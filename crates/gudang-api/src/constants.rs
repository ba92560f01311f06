/// Route prefix shared by all versioned API endpoints.
pub const API_PREFIX: &str = "/api/v0";
