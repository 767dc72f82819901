use crate::error::ApiError;
use crate::handlers::EmailValidator;
use crate::models::{BulkEmailRequest, BulkValidationResponse, EmailRequest, ValidationReport};
use actix_web::{HttpResponse, post, web};
use tracing::info;

/// # Email Validation Endpoint
///
/// Assesses one address: syntax check, MX lookup, domain classification and
/// a 0-100 quality score.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: Full validation report
/// - **400 Bad Request**: `email` is missing or the body is not valid JSON
///
/// ## Example Request
/// ```json
/// { "email": "user@gmail.com" }
/// ```
#[utoipa::path(
    post,
    path = "/validate",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Validation report", body = ValidationReport),
        (status = 400, description = "Missing \"email\" field or malformed body")
    ),
    tag = "Email Validation"
)]
#[post("/validate")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    validator: web::Data<EmailValidator>,
) -> Result<HttpResponse, ApiError> {
    let email = req.into_inner().email.ok_or(ApiError::MissingEmail)?;

    let report = validator.validate(&email).await;
    info!(
        email = %report.email,
        score = report.quality_score,
        deliverable = report.deliverable,
        "validated email"
    );

    Ok(HttpResponse::Ok().json(report))
}

/// # Bulk Email Validation Endpoint
///
/// Validates up to 50 addresses concurrently. Entries past the 50th are
/// ignored without error.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `emails` array field
///
/// ## Responses
/// - **200 OK**: Per-address results plus valid/invalid counts
/// - **400 Bad Request**: `emails` is missing or the body is not valid JSON
///
/// ## Example Request
/// ```json
/// { "emails": ["user1@example.com", "user2@example.com"] }
/// ```
#[utoipa::path(
    post,
    path = "/validate/bulk",
    request_body = BulkEmailRequest,
    responses(
        (status = 200, description = "Bulk validation results", body = BulkValidationResponse),
        (status = 400, description = "Missing \"emails\" array or malformed body")
    ),
    tag = "Email Validation"
)]
#[post("/validate/bulk")]
pub async fn validate_emails_bulk(
    req: web::Json<BulkEmailRequest>,
    validator: web::Data<EmailValidator>,
) -> Result<HttpResponse, ApiError> {
    let emails = req.into_inner().emails.ok_or(ApiError::MissingEmails)?;

    let response = validator.validate_bulk(&emails).await;
    info!(
        submitted = emails.len(),
        total = response.total,
        valid = response.valid_count,
        "validated email batch"
    );

    Ok(HttpResponse::Ok().json(response))
}

/// JSON extractor settings: unparseable bodies become `400` JSON errors
/// instead of actix's plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| ApiError::InvalidBody(err.to_string()).into())
}

/// Configures email validation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(validate_email)
        .service(validate_emails_bulk);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::validation::dnsmx::StaticMxResolver;
    use actix_web::http::header::ContentType;
    use actix_web::{App, test};
    use serde_json::{Value, json};
    use std::sync::Arc;

    // Helper function to create a test app backed by a fixed MX table
    async fn create_test_app() -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        let resolver = StaticMxResolver::new()
            .with_records("gmail.com", ["gmail-smtp-in.l.google.com."])
            .with_records("tempmail.com", ["mx.tempmail.com."])
            .with_records(
                "example.com",
                ["mx1.example.com.", "mx2.example.com.", "mx3.example.com.", "mx4.example.com."],
            );

        test::init_service(
            App::new()
                .app_data(web::Data::new(EmailValidator::new(Arc::new(resolver))))
                .configure(configure_routes),
        )
        .await
    }

    async fn post_json(uri: &str, body: Value) -> (u16, Value) {
        let app = create_test_app().await;
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[actix_web::test]
    async fn test_free_email() {
        let (status, body) = post_json("/validate", json!({ "email": "user@gmail.com" })).await;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "email": "user@gmail.com",
                "valid_syntax": true,
                "mx_records": ["gmail-smtp-in.l.google.com"],
                "has_mx": true,
                "classification": "free",
                "quality_score": 90,
                "deliverable": true
            })
        );
    }

    #[actix_web::test]
    async fn test_disposable_email() {
        let (status, body) = post_json("/validate", json!({ "email": "user@tempmail.com" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["classification"], "disposable");
        assert_eq!(body["has_mx"], true);
        assert_eq!(body["deliverable"], false);
        assert_eq!(body["quality_score"], 50);
    }

    #[actix_web::test]
    async fn test_invalid_syntax() {
        let (status, body) = post_json("/validate", json!({ "email": "not-an-email" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["valid_syntax"], false);
        assert_eq!(body["classification"], "invalid");
        assert_eq!(body["mx_records"], json!([]));
        assert_eq!(body["has_mx"], false);
        assert_eq!(body["quality_score"], 0);
        assert_eq!(body["deliverable"], false);
    }

    #[actix_web::test]
    async fn test_unresolvable_business_domain() {
        let (status, body) = post_json("/validate", json!({ "email": "test@nonexistent.invalid" })).await;

        assert_eq!(status, 200);
        assert_eq!(body["classification"], "business");
        assert_eq!(body["has_mx"], false);
        assert_eq!(body["quality_score"], 60);
        assert_eq!(body["deliverable"], false);
    }

    #[actix_web::test]
    async fn test_mx_records_capped_at_three() {
        let (_, body) = post_json("/validate", json!({ "email": "User@Example.com" })).await;

        assert_eq!(body["email"], "user@example.com");
        assert_eq!(
            body["mx_records"],
            json!(["mx1.example.com", "mx2.example.com", "mx3.example.com"])
        );
        assert_eq!(body["quality_score"], 100);
    }

    #[actix_web::test]
    async fn test_missing_email_field() {
        let (status, body) = post_json("/validate", json!({})).await;

        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Missing \"email\" field" }));
    }

    #[actix_web::test]
    async fn test_malformed_json() {
        let app = create_test_app().await;
        let req = test::TestRequest::post()
            .uri("/validate")
            .insert_header(ContentType::json())
            .set_payload(r#"{"email": "user@gmail.com""#)
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_non_string_email() {
        let (status, body) = post_json("/validate", json!({ "email": 42 })).await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_array_body_rejected() {
        let (status, body) = post_json("/validate", json!(["user@gmail.com"])).await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_success() {
        let (status, body) = post_json(
            "/validate/bulk",
            json!({ "emails": ["user@gmail.com", "user@tempmail.com", "invalid-email", "a@nowhere.org"] }),
        )
        .await;

        assert_eq!(status, 200);
        assert_eq!(
            body,
            json!({
                "results": [
                    { "email": "user@gmail.com", "valid": true, "classification": "free", "deliverable": true },
                    { "email": "user@tempmail.com", "valid": true, "classification": "disposable", "deliverable": false },
                    { "email": "invalid-email", "valid": false, "classification": "invalid", "deliverable": false },
                    { "email": "a@nowhere.org", "valid": false, "classification": "business", "deliverable": false }
                ],
                "total": 4,
                "valid_count": 2,
                "invalid_count": 2
            })
        );
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_truncates() {
        let emails: Vec<String> = (0..1000).map(|i| format!("user{i}@gmail.com")).collect();
        let (status, body) = post_json("/validate/bulk", json!({ "emails": emails })).await;

        assert_eq!(status, 200);
        assert_eq!(body["total"], 50);
        assert_eq!(body["results"].as_array().unwrap().len(), 50);
        assert_eq!(body["valid_count"], 50);
        assert_eq!(body["invalid_count"], 0);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_empty_array() {
        let (status, body) = post_json("/validate/bulk", json!({ "emails": [] })).await;

        assert_eq!(status, 200);
        assert_eq!(body["results"].as_array().unwrap().len(), 0);
        assert_eq!(body["total"], 0);
        assert_eq!(body["valid_count"], 0);
        assert_eq!(body["invalid_count"], 0);
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_missing_field() {
        let (status, body) = post_json("/validate/bulk", json!({ "email": "user@gmail.com" })).await;

        assert_eq!(status, 400);
        assert_eq!(body, json!({ "error": "Missing \"emails\" array" }));
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_wrong_type() {
        let (status, body) = post_json("/validate/bulk", json!({ "emails": "user@gmail.com" })).await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_validate_emails_bulk_array_body_rejected() {
        let (status, body) = post_json("/validate/bulk", json!([["user@gmail.com"]])).await;

        assert_eq!(status, 400);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON body"));
    }

    #[actix_web::test]
    async fn test_configure_routes_function() {
        let app = create_test_app().await;
        let req = test::TestRequest::get().uri("/validate").to_request();

        let resp = test::call_service(&app, req).await;
        // Only POST is routed
        assert!(resp.status().is_client_error());
    }
}
