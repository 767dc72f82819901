use crate::models::health::HealthResponse;
use async_graphql::{Context, Object, Result};

/// Root query type for health-related GraphQL operations
///
/// Mirrors `GET /health`.
#[derive(Default)]
pub struct HealthQuery;

#[Object]
impl HealthQuery {
    /// Checks service health status
    async fn health(&self, _ctx: &Context<'_>) -> Result<HealthResponse> {
        Ok(HealthResponse::ok())
    }
}
