use crate::handlers::validation::classify::Classification;
use async_graphql::SimpleObject;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Body of `POST /validate`. Must be a JSON object; an absent or `null`
/// `email` is `None`.
#[derive(Debug, ToSchema)]
pub struct EmailRequest {
    pub email: Option<String>,
}

/// Body of `POST /validate/bulk`. Must be a JSON object; an absent or
/// `null` `emails` is `None`.
#[derive(Debug, ToSchema)]
pub struct BulkEmailRequest {
    pub emails: Option<Vec<String>>,
}

// Derived struct impls also accept a JSON array in field order, so the
// bodies are read through a `Map`, which only deserializes from objects.
fn take_field<'de, D, T>(object: &mut Map<String, Value>, name: &str) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match object.remove(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|err| D::Error::custom(format!("field \"{name}\": {err}"))),
    }
}

impl<'de> Deserialize<'de> for EmailRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::deserialize(deserializer)?;
        Ok(Self {
            email: take_field::<D, _>(&mut object, "email")?,
        })
    }
}

impl<'de> Deserialize<'de> for BulkEmailRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut object = Map::deserialize(deserializer)?;
        Ok(Self {
            emails: take_field::<D, _>(&mut object, "emails")?,
        })
    }
}

/// Full assessment of a single address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct ValidationReport {
    /// The address after trimming and lowercasing
    pub email: String,
    pub valid_syntax: bool,
    /// At most the first three exchanges, in resolver order
    pub mx_records: Vec<String>,
    pub has_mx: bool,
    pub classification: Classification,
    /// 0-100
    pub quality_score: u8,
    pub deliverable: bool,
}

/// Reduced per-address result of a bulk request.
///
/// `valid` only requires valid syntax and MX records, so a disposable
/// address can be `valid` without being `deliverable`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct BulkEmailResult {
    pub email: String,
    pub valid: bool,
    pub classification: Classification,
    pub deliverable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, SimpleObject)]
pub struct BulkValidationResponse {
    pub results: Vec<BulkEmailResult>,
    /// Number of addresses actually processed
    pub total: u32,
    pub valid_count: u32,
    pub invalid_count: u32,
}

impl BulkValidationResponse {
    pub fn from_results(results: Vec<BulkEmailResult>) -> Self {
        let valid_count = results.iter().filter(|r| r.valid).count() as u32;
        let total = results.len() as u32;

        Self {
            results,
            total,
            valid_count,
            invalid_count: total - valid_count,
        }
    }
}
