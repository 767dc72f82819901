use crate::handlers::EmailValidator;
use crate::models::{BulkValidationResponse, ValidationReport};
use async_graphql::{Context, Object, Result};

/// Email validation query operations
///
/// Same pipeline and limits as the REST endpoints.
pub struct EmailQuery {
    validator: EmailValidator,
}

impl EmailQuery {
    pub fn new(validator: EmailValidator) -> Self {
        Self { validator }
    }
}

#[Object]
impl EmailQuery {
    /// Full validation report for one address
    async fn validate_email(&self, _ctx: &Context<'_>, email: String) -> Result<ValidationReport> {
        Ok(self.validator.validate(&email).await)
    }

    /// Reduced results for up to 50 addresses; extra entries are ignored
    async fn validate_emails_bulk(
        &self,
        _ctx: &Context<'_>,
        emails: Vec<String>,
    ) -> Result<BulkValidationResponse> {
        Ok(self.validator.validate_bulk(&emails).await)
    }
}
