use crate::config::AppConfig;
use crate::error::AppError;
use crate::graphql::schema::create_schema;
use crate::handlers::EmailValidator;
use crate::handlers::validation::dnsmx::DnsMxResolver;
use crate::openapi::ApiDoc;
use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use std::sync::Arc;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Binds the HTTP listener and serves until shutdown.
///
/// # Endpoints
/// - REST: `/health`, `/validate`, `/validate/bulk`
/// - GraphQL: `/graphql`, playground at `/playground`
/// - Swagger UI: `/swagger-ui/`, OpenAPI spec at `/api-docs/openapi.json`
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.socket_addr()?;

    let validator = EmailValidator::new(Arc::new(DnsMxResolver::from_system_conf()));
    let schema = create_schema(validator.clone());
    let openapi = ApiDoc::openapi();

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(validator.clone()))
            .app_data(Data::new(schema.clone()))
            .configure(crate::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()))
    })
    .bind(addr)?;

    info!(%addr, "email validator listening");
    server.run().await?;
    Ok(())
}
