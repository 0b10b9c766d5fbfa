//! Token endpoint wire types

use serde::{Deserialize, Serialize};

/// Token response from the provider's token endpoint
///
/// Only `access_token` is consumed. A response without one deserializes to
/// an empty string so the subsequent profile call proceeds unauthenticated
/// and the provider rejects it with its own error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
}
