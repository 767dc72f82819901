use actix_web::web;

/// # Health Check Endpoint
///
/// `GET /health` returns a static status payload.
pub mod health;

/// # Email Validation Endpoints
///
/// - `POST /validate`: full report for one address
/// - `POST /validate/bulk`: reduced results for up to 50 addresses
pub mod email;

/// # GraphQL Endpoints
///
/// `POST /graphql` and the `GET /playground` UI.
pub mod graphql;

/// # API Route Configuration
///
/// Mounts all endpoints at the root path.
///
/// ```text
/// GET  /health         - Service health status
/// POST /validate       - Single email validation
/// POST /validate/bulk  - Bulk email validation
/// POST /graphql        - GraphQL queries
/// GET  /playground     - GraphQL playground
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::configure_routes)
        .configure(email::configure_routes)
        .configure(graphql::configure_routes);
}
