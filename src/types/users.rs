//! User wire types.

use serde::{Deserialize, Serialize};

use crate::types::activities::Timestamp;
use crate::types::api_keys::ApiKey;

/// A user within an organization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: String,
    pub user_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(default)]
    pub api_keys: Vec<ApiKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Body for `/public/v1/query/list_users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersRequest {
    pub organization_id: String,
}

/// Response for `/public/v1/query/list_users`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUsersResponse {
    pub users: Vec<User>,
}

/// Body for `/public/v1/query/get_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserRequest {
    pub organization_id: String,
    pub user_id: String,
}

/// Response for `/public/v1/query/get_user`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GetUserResponse {
    pub user: User,
}
