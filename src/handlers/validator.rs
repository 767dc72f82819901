use crate::handlers::validation::{
    classify::{Classification, classify},
    dnsmx::{MxLookup, resolve_mx},
    scoring::{is_deliverable, quality_score},
    syntax::is_valid_email,
};
use crate::models::{BulkEmailResult, BulkValidationResponse, ValidationReport};
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Upper bound on addresses processed per bulk request; extra entries are ignored.
pub const MAX_BULK_EMAILS: usize = 50;

/// Number of MX exchanges included in a report.
pub const MAX_REPORTED_MX: usize = 3;

/// A trimmed, lowercased email address.
///
/// Construction never fails: well-formedness is checked separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress {
    normalized: String,
}

impl EmailAddress {
    pub fn parse(raw: &str) -> Self {
        Self {
            normalized: raw.trim().to_lowercase(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// Text before the last `@`, or the whole address when there is none.
    pub fn local_part(&self) -> &str {
        self.normalized
            .rsplit_once('@')
            .map_or(self.normalized.as_str(), |(local, _)| local)
    }

    /// Text after the last `@`, or empty when there is none.
    pub fn domain(&self) -> &str {
        self.normalized
            .rsplit_once('@')
            .map_or("", |(_, domain)| domain)
    }

    pub fn into_string(self) -> String {
        self.normalized
    }
}

/// Outcome of running the pipeline on one address, before it is shaped
/// into a single or bulk response.
#[derive(Debug)]
struct Assessment {
    email: EmailAddress,
    syntax_valid: bool,
    mx_records: Vec<String>,
    classification: Classification,
}

impl Assessment {
    fn has_mx(&self) -> bool {
        !self.mx_records.is_empty()
    }

    fn deliverable(&self) -> bool {
        is_deliverable(self.syntax_valid, self.has_mx(), self.classification)
    }

    fn into_report(self) -> ValidationReport {
        let has_mx = self.has_mx();
        let deliverable = self.deliverable();
        let quality_score = quality_score(self.syntax_valid, &self.mx_records, self.classification);
        let mut mx_records = self.mx_records;
        mx_records.truncate(MAX_REPORTED_MX);

        ValidationReport {
            email: self.email.into_string(),
            valid_syntax: self.syntax_valid,
            mx_records,
            has_mx,
            classification: self.classification,
            quality_score,
            deliverable,
        }
    }

    fn into_bulk_result(self) -> BulkEmailResult {
        let valid = self.syntax_valid && self.has_mx();
        let deliverable = self.deliverable();

        BulkEmailResult {
            email: self.email.into_string(),
            valid,
            classification: self.classification,
            deliverable,
        }
    }
}

/// Syntax check, MX lookup, classification and scoring for email addresses.
///
/// Holds no state besides the MX source, so one instance is shared by all
/// requests.
#[derive(Clone)]
pub struct EmailValidator {
    lookup: Arc<dyn MxLookup>,
}

impl EmailValidator {
    pub fn new(lookup: Arc<dyn MxLookup>) -> Self {
        Self { lookup }
    }

    async fn assess(&self, raw: &str) -> Assessment {
        let email = EmailAddress::parse(raw);
        let syntax_valid = is_valid_email(email.as_str());

        let (mx_records, classification) = if syntax_valid {
            (
                resolve_mx(self.lookup.as_ref(), email.domain()).await,
                classify(email.as_str()),
            )
        } else {
            (Vec::new(), Classification::Invalid)
        };

        debug!(
            email = email.as_str(),
            syntax_valid,
            mx_count = mx_records.len(),
            %classification,
            "assessed email"
        );

        Assessment {
            email,
            syntax_valid,
            mx_records,
            classification,
        }
    }

    /// Produces the full report for one raw address.
    #[instrument(skip(self))]
    pub async fn validate(&self, raw: &str) -> ValidationReport {
        self.assess(raw).await.into_report()
    }

    /// Validates up to [`MAX_BULK_EMAILS`] addresses concurrently.
    ///
    /// Entries past the limit are dropped without error. Results keep the
    /// input order.
    #[instrument(skip(self, raws), fields(submitted = raws.len()))]
    pub async fn validate_bulk(&self, raws: &[String]) -> BulkValidationResponse {
        let assessments = join_all(
            raws.iter()
                .take(MAX_BULK_EMAILS)
                .map(|raw| self.assess(raw)),
        )
        .await;

        BulkValidationResponse::from_results(
            assessments
                .into_iter()
                .map(Assessment::into_bulk_result)
                .collect(),
        )
    }
}
