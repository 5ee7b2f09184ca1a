//! Organization and identity wire types.

use serde::{Deserialize, Serialize};

/// Body for `/public/v1/query/whoami`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetWhoamiRequest {
    pub organization_id: String,
}

/// Response for `/public/v1/query/whoami`.
///
/// Identifies the organization and user the presented API key belongs to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhoamiResponse {
    pub organization_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,
    pub user_id: String,
    pub username: String,
}

/// Body for `/public/v1/query/get_organization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrganizationRequest {
    pub organization_id: String,
}

/// Organization details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationData {
    pub organization_id: String,
    pub name: String,
}

/// Response for `/public/v1/query/get_organization`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetOrganizationResponse {
    pub organization_data: OrganizationData,
}
