//! API-key wire types.

use serde::{Deserialize, Serialize};

use crate::types::activities::Timestamp;

/// Elliptic curve of an API key.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiKeyCurve {
    #[serde(rename = "API_KEY_CURVE_P256")]
    P256,
    #[serde(rename = "API_KEY_CURVE_SECP256K1")]
    Secp256k1,
    #[serde(rename = "API_KEY_CURVE_ED25519")]
    Ed25519,
}

/// Parameters for creating one API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKeyParams {
    /// Human-readable label.
    pub api_key_name: String,
    /// Hex-encoded public key (compressed, for P-256).
    pub public_key: String,
    /// Curve of the key.
    pub curve_type: ApiKeyCurve,
    /// Optional lifetime in seconds, as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_seconds: Option<String>,
}

/// Public credential attached to an API key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    /// Hex-encoded public key.
    pub public_key: String,
    /// Credential type, e.g. `CREDENTIAL_TYPE_API_KEY_P256`.
    ///
    /// `type` is a Rust keyword, hence the explicit rename.
    #[serde(rename = "type")]
    pub credential_type: String,
}

/// An API key as served by queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiKey {
    pub api_key_id: String,
    pub api_key_name: String,
    pub credential: Credential,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration_seconds: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Body for `/public/v1/query/get_api_keys`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiKeysRequest {
    pub organization_id: String,
    pub user_id: String,
}

/// Response for `/public/v1/query/get_api_keys`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetApiKeysResponse {
    pub api_keys: Vec<ApiKey>,
}

/// Intent for `ACTIVITY_TYPE_CREATE_API_KEYS_V2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeysIntent {
    /// User the new keys belong to.
    pub user_id: String,
    /// Keys to create.
    pub api_keys: Vec<ApiKeyParams>,
}

/// Result of `ACTIVITY_TYPE_CREATE_API_KEYS_V2`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApiKeysResult {
    /// Identifiers of the created keys, in request order.
    pub api_key_ids: Vec<String>,
}

/// Intent for `ACTIVITY_TYPE_DELETE_API_KEYS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiKeysIntent {
    /// User the keys belong to.
    pub user_id: String,
    /// Identifiers of the keys to delete.
    pub api_key_ids: Vec<String>,
}

/// Result of `ACTIVITY_TYPE_DELETE_API_KEYS`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteApiKeysResult {
    /// Identifiers of the deleted keys.
    pub api_key_ids: Vec<String>,
}
