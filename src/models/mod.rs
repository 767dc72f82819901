/// # Validation Payloads
///
/// Request bodies and response documents of the validation endpoints.
/// The same types back the GraphQL schema.
pub mod email;

/// # Health Status Response
///
/// Static liveness payload.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "service": "Email Validator API v1.0"
/// }
/// ```
pub mod health;

pub use email::{BulkEmailRequest, BulkEmailResult, BulkValidationResponse, EmailRequest, ValidationReport};
pub use health::HealthResponse;
