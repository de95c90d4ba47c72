//! Wire encoding of persisted-query requests.
//!
//! A persisted query is a `GET` to `<baseUri>op` with three query
//! parameters: `operationName`, `variables` (JSON) and `extensions`
//! (JSON, `{"persistedQuery":{"version":1,"sha256Hash":"..."}}`).

use serde::Serialize;
use serde_json::{Map, Value};

use crate::clients::errors::ApiError;
use crate::config::BaseUri;

/// Persisted-query protocol version sent in `extensions`.
pub const PERSISTED_QUERY_VERSION: u8 = 1;

/// Bookkeeping keys that must never appear in the wire `variables`.
pub const RESERVED_VARIABLE_KEYS: [&str; 4] =
    ["responseDtoClass", "operationName", "sha256Hash", "dataPath"];

#[derive(Serialize)]
struct Extensions<'a> {
    #[serde(rename = "persistedQuery")]
    persisted_query: PersistedQuery<'a>,
}

#[derive(Serialize)]
struct PersistedQuery<'a> {
    version: u8,
    #[serde(rename = "sha256Hash")]
    sha256_hash: &'a str,
}

/// Serializes request variables into a JSON object.
///
/// Unit and `null` encode as `{}`. Reserved bookkeeping keys are removed.
///
/// # Errors
///
/// Returns a 500 [`ApiError::ServerError`] if the value cannot be serialized
/// or does not serialize to a JSON object.
pub fn encode_variables<V>(variables: &V) -> Result<Map<String, Value>, ApiError>
where
    V: Serialize + ?Sized,
{
    let value = serde_json::to_value(variables).map_err(|e| {
        ApiError::internal(format!("Failed to encode request variables: {e}"))
    })?;

    let mut map = match value {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(ApiError::internal(format!(
                "Failed to encode request variables: expected a JSON object, got {}",
                json_kind(&other)
            )))
        }
    };

    for key in RESERVED_VARIABLE_KEYS {
        map.remove(key);
    }

    Ok(map)
}

/// Builds the URL-encoded query string for a persisted query.
///
/// # Errors
///
/// Returns a 500 [`ApiError::ServerError`] if JSON encoding fails.
pub fn build_query(
    operation_name: &str,
    variables: &Map<String, Value>,
    sha256_hash: &str,
) -> Result<String, ApiError> {
    let variables = serde_json::to_string(variables).map_err(|e| {
        ApiError::internal(format!("Failed to encode request variables: {e}"))
    })?;
    let extensions = serde_json::to_string(&Extensions {
        persisted_query: PersistedQuery {
            version: PERSISTED_QUERY_VERSION,
            sha256_hash,
        },
    })
    .map_err(|e| ApiError::internal(format!("Failed to encode request extensions: {e}")))?;

    Ok(format!(
        "operationName={}&variables={}&extensions={}",
        urlencoding::encode(operation_name),
        urlencoding::encode(&variables),
        urlencoding::encode(&extensions)
    ))
}

/// Returns the full request URI: `<baseUri>op?<query>`.
#[must_use]
pub fn operation_uri(base_uri: &BaseUri, query: &str) -> String {
    format!("{}?{query}", base_uri.operation_endpoint())
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
