use super::email::EmailQuery;
use super::health::HealthQuery;
use crate::handlers::EmailValidator;
use async_graphql::{EmptyMutation, EmptySubscription, MergedObject, Schema};

/// Root query combining health and email validation operations.
#[derive(MergedObject)]
pub struct QueryRoot(HealthQuery, EmailQuery);

/// Main GraphQL Schema Definition
///
/// Query-only: mutations and subscriptions are empty.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Creates the GraphQL schema around the shared validator.
///
/// # Example
///
/// ```rust,no_run
/// use email_validator::graphql::schema::create_schema;
/// use email_validator::handlers::EmailValidator;
/// use email_validator::handlers::validation::dnsmx::DnsMxResolver;
/// use std::sync::Arc;
///
/// let validator = EmailValidator::new(Arc::new(DnsMxResolver::from_system_conf()));
/// let schema = create_schema(validator);
/// ```
pub fn create_schema(validator: EmailValidator) -> AppSchema {
    Schema::build(
        QueryRoot(HealthQuery, EmailQuery::new(validator)),
        EmptyMutation,
        EmptySubscription,
    )
    .finish()
}
