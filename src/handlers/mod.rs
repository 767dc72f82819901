/// The individual validation steps
pub mod validation;

/// # Email Validation Pipeline
///
/// Normalizes raw input, then runs syntax check, MX lookup, classification
/// and scoring. MX lookup and classification only run for syntactically
/// valid addresses.
pub mod validator;

pub use validator::{EmailAddress, EmailValidator, MAX_BULK_EMAILS};
