pub const CLASSIFY_ENDPOINT: &str = "/classify_dialect/";
pub const DEFAULT_BACKEND_ORIGIN: &str = "http://localhost:8000";

/// The backend downloads and classifies a whole video per request, so the
/// transport default has to be generous.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

pub const CLASSIFICATION_FAILED_MESSAGE: &str = "Classification failed";
pub const TRANSPORT_FAILED_MESSAGE: &str = "An error occurred while processing your request";
pub const NO_CLASSIFICATION_MESSAGE: &str = "No classification returned";
