//! API request/response models.

use crate::types::ModelName;
use serde::{Deserialize, Deserializer, Serialize};

/// Response for the index route.
#[derive(Debug, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Response for the user routes.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserResponse {
    pub user_id: String,
}

/// Query parameters for listing items.
#[derive(Debug, Deserialize)]
pub struct ListItemsParams {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    10
}

/// Query parameters for the item detail route.
#[derive(Debug, Deserialize)]
pub struct ItemDetailParams {
    pub q: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_bool")]
    pub short: bool,
}

/// Response for the item detail route.
///
/// `q` and `description` are omitted entirely when absent, not serialized
/// as null.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemDetailResponse {
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Response for the model lookup route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ModelResponse {
    pub model_name: ModelName,
    pub message: String,
}

/// Response for item creation.
///
/// Echoes every submitted field; `price_with_tax` is present only when a
/// non-zero tax was supplied.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateItemResponse {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_with_tax: Option<f64>,
}

/// Query parameters for item update.
#[derive(Debug, Deserialize)]
pub struct UpdateItemParams {
    pub q: Option<String>,
}

/// Response for item update: the path id merged with every item field.
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateItemResponse {
    pub item_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub tax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
}

/// Response for the explicit OPTIONS handler on the index route.
#[derive(Debug, Serialize, Deserialize)]
pub struct AllowedMethodsResponse {
    #[serde(rename = "allowed-methods")]
    pub allowed_methods: Vec<String>,
}

/// Error response envelope.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Parse the accepted boolean spellings, case-insensitively.
pub(crate) fn parse_loose_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Deserialize a query-string boolean, accepting the common truthy and
/// falsy spellings rather than only `true`/`false`.
fn deserialize_loose_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_loose_bool(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!(
            "invalid boolean value {raw:?} (expected true/false, 1/0, yes/no, or on/off)"
        ))
    })
}
