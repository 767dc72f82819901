/// Domain categorization against the built-in disposable and free-provider
/// lists.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::classify::{Classification, classify};
///
/// assert_eq!(classify("someone@yahoo.com"), Classification::Free);
/// ```
pub mod classify;

/// MX record resolution behind the [`dnsmx::MxLookup`] trait.
///
/// Lookup failures of any kind are reported as an empty record list.
pub mod dnsmx;

/// Additive quality score and deliverability verdict.
pub mod scoring;

/// Structural email pattern check.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user@example.com"));
/// assert!(!is_valid_email("user@example"));
/// ```
pub mod syntax;
