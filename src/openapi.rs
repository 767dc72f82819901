use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// REST handlers and served through Swagger UI.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Email Validation: `POST /validate`, `POST /validate/bulk`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::email::validate_emails_bulk,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::BulkEmailRequest,
            crate::models::email::ValidationReport,
            crate::models::email::BulkEmailResult,
            crate::models::email::BulkValidationResponse,
            crate::handlers::validation::classify::Classification
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Email Validation", description = "Email syntax, MX and domain quality assessment")
    ),
    info(
        description = "Scores email addresses by syntax, MX presence and domain category",
        title = "Email Validator API",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
