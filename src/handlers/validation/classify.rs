use async_graphql::Enum;
use phf::{Set, phf_set};
use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// Domains of throwaway mailbox providers.
pub static DISPOSABLE_DOMAINS: Set<&'static str> = phf_set! {
    "tempmail.com", "throwaway.email", "guerrillamail.com", "mailinator.com",
    "yopmail.com", "sharklasers.com", "guerrillamailblock.com", "grr.la",
    "dispostable.com", "trashmail.com", "fakeinbox.com", "tempail.com",
    "maildrop.cc", "temp-mail.org", "10minutemail.com", "getnada.com",
    "mohmal.com", "burnermail.io", "tempmailo.com", "emailondeck.com",
};

/// Domains of free consumer mailbox providers.
pub static FREE_PROVIDERS: Set<&'static str> = phf_set! {
    "gmail.com", "yahoo.com", "hotmail.com", "outlook.com", "aol.com",
    "icloud.com", "mail.com", "protonmail.com", "zoho.com", "yandex.com",
    "gmx.com", "live.com", "msn.com",
};

/// Category assigned to an email address.
///
/// `Invalid` is reserved for addresses that failed the syntax check; every
/// syntactically valid address is exactly one of the other three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Disposable,
    Free,
    Business,
    Invalid,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Disposable => "disposable",
            Classification::Free => "free",
            Classification::Business => "business",
            Classification::Invalid => "invalid",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifies an email address by the text following its *first* `@`.
///
/// Matching is exact after lowercasing: `mail.gmail.com` is not `gmail.com`.
/// Disposable membership is checked before free membership and anything
/// else is `Business`. An input without `@` has no domain to classify and
/// yields `Invalid`.
///
/// # Examples
/// ```
/// use email_validator::handlers::validation::classify::{Classification, classify};
///
/// assert_eq!(classify("user@gmail.com"), Classification::Free);
/// assert_eq!(classify("user@tempmail.com"), Classification::Disposable);
/// assert_eq!(classify("user@acme.io"), Classification::Business);
/// ```
pub fn classify(email: &str) -> Classification {
    let Some((_, domain)) = email.split_once('@') else {
        return Classification::Invalid;
    };
    let domain = domain.to_lowercase();

    if DISPOSABLE_DOMAINS.contains(domain.as_str()) {
        Classification::Disposable
    } else if FREE_PROVIDERS.contains(domain.as_str()) {
        Classification::Free
    } else {
        Classification::Business
    }
}
