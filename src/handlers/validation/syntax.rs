use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Checks an email address against the service's structural pattern.
///
/// The pattern is deliberately lax: a local part drawn from `[A-Za-z0-9._%+-]`,
/// a single `@`, a domain drawn from `[A-Za-z0-9.-]` and an alphabetic
/// top-level label of at least two characters. Consecutive or leading dots,
/// overlong labels and internationalized addresses are not special-cased.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::syntax::is_valid_email;
///
/// assert!(is_valid_email("user.name+tag@example.com"));
/// assert!(is_valid_email("a..b@example..com"));
/// assert!(!is_valid_email("user@example.c0m"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
