//! Wire types for the Turnkey API.
//!
//! These mirror the shapes the public API serves. Field names follow the
//! wire (camelCase via serde); where a wire name collides with a Rust
//! keyword the mapping is an explicit `#[serde(rename)]`, so the structs
//! stay plain and regenerate cleanly from the schema.

pub mod activities;
pub mod api_keys;
pub mod organizations;
pub mod users;

// Re-exports
pub use activities::{
    Activity, ActivityRequest, ActivityResponse, ActivityResult, ActivityStatus,
    GetActivityRequest, Timestamp, ACTIVITY_TYPE_CREATE_API_KEYS, ACTIVITY_TYPE_DELETE_API_KEYS,
};
pub use api_keys::{
    ApiKey, ApiKeyCurve, ApiKeyParams, CreateApiKeysIntent, CreateApiKeysResult, Credential,
    DeleteApiKeysIntent, DeleteApiKeysResult, GetApiKeysRequest, GetApiKeysResponse,
};
pub use organizations::{
    GetOrganizationRequest, GetOrganizationResponse, GetWhoamiRequest, OrganizationData,
    WhoamiResponse,
};
pub use users::{GetUserRequest, GetUserResponse, GetUsersRequest, GetUsersResponse, User};
