//! Activity-related wire types.
//!
//! Mutating Turnkey operations are "activities": the API records an intent,
//! processes it (possibly asynchronously, possibly gated on consensus), and
//! exposes progress through a status field. Clients poll until the activity
//! reaches a terminal status.

use serde::{Deserialize, Serialize};

use crate::types::api_keys::{CreateApiKeysResult, DeleteApiKeysResult};

/// Activity type for creating API keys (current version).
pub const ACTIVITY_TYPE_CREATE_API_KEYS: &str = "ACTIVITY_TYPE_CREATE_API_KEYS_V2";

/// Activity type for deleting API keys.
pub const ACTIVITY_TYPE_DELETE_API_KEYS: &str = "ACTIVITY_TYPE_DELETE_API_KEYS";

/// Protobuf-style timestamp as served on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Timestamp {
    /// Seconds since the Unix epoch, as a decimal string.
    pub seconds: String,
    /// Nanosecond remainder, as a decimal string.
    pub nanos: String,
}

/// Processing status of an activity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityStatus {
    #[serde(rename = "ACTIVITY_STATUS_CREATED")]
    Created,
    #[serde(rename = "ACTIVITY_STATUS_PENDING")]
    Pending,
    #[serde(rename = "ACTIVITY_STATUS_COMPLETED")]
    Completed,
    #[serde(rename = "ACTIVITY_STATUS_FAILED")]
    Failed,
    #[serde(rename = "ACTIVITY_STATUS_CONSENSUS_NEEDED")]
    ConsensusNeeded,
    #[serde(rename = "ACTIVITY_STATUS_REJECTED")]
    Rejected,
}

impl ActivityStatus {
    /// Whether the activity has finished processing (successfully or not).
    ///
    /// `ConsensusNeeded` is not terminal for polling purposes: another
    /// approver may still move it forward, but a client waiting on it will
    /// exhaust its polling budget and return the activity as-is.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Rejected)
    }
}

/// Result payloads attached to a completed activity.
///
/// Exactly one field is populated, keyed by the activity type.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResult {
    /// Result of `ACTIVITY_TYPE_CREATE_API_KEYS_V2`.
    #[serde(rename = "createApiKeysResultV2", skip_serializing_if = "Option::is_none")]
    pub create_api_keys_result: Option<CreateApiKeysResult>,
    /// Result of `ACTIVITY_TYPE_DELETE_API_KEYS`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_api_keys_result: Option<DeleteApiKeysResult>,
}

/// A recorded activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity identifier.
    pub id: String,
    /// Owning organization.
    pub organization_id: String,
    /// Processing status.
    pub status: ActivityStatus,
    /// Activity type, e.g. `ACTIVITY_TYPE_CREATE_API_KEYS_V2`.
    ///
    /// `type` is a Rust keyword, hence the explicit rename.
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Result payload, present once completed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ActivityResult>,
    /// When the activity was recorded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    /// When the activity last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// Submission body for a new activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest<P> {
    /// Activity type constant.
    #[serde(rename = "type")]
    pub activity_type: String,
    /// Client-side submission time in epoch milliseconds, as a string.
    pub timestamp_ms: String,
    /// Target organization.
    pub organization_id: String,
    /// Type-specific intent.
    pub parameters: P,
}

/// Body for `/public/v1/query/get_activity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetActivityRequest {
    pub organization_id: String,
    pub activity_id: String,
}

/// Response wrapper common to activity submission and lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityResponse {
    pub activity: Activity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_deserialize_with_keyword_field() {
        let json = r#"{
            "id": "act-123",
            "organizationId": "org-456",
            "status": "ACTIVITY_STATUS_COMPLETED",
            "type": "ACTIVITY_TYPE_CREATE_API_KEYS_V2",
            "result": {
                "createApiKeysResultV2": {
                    "apiKeyIds": ["key-1", "key-2"]
                }
            },
            "createdAt": {"seconds": "1700000000", "nanos": "0"}
        }"#;

        let activity: Activity = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(activity.activity_type, ACTIVITY_TYPE_CREATE_API_KEYS);
        assert_eq!(activity.status, ActivityStatus::Completed);
        let result = activity.result.unwrap().create_api_keys_result.unwrap();
        assert_eq!(result.api_key_ids, vec!["key-1", "key-2"]);
    }

    #[test]
    fn test_activity_request_serializes_type_field() {
        let request = ActivityRequest {
            activity_type: ACTIVITY_TYPE_DELETE_API_KEYS.to_string(),
            timestamp_ms: "1700000000000".to_string(),
            organization_id: "org-456".to_string(),
            parameters: serde_json::json!({"userId": "user-1"}),
        };

        let value = serde_json::to_value(&request).expect("should serialize");
        assert_eq!(value["type"], ACTIVITY_TYPE_DELETE_API_KEYS);
        assert_eq!(value["timestampMs"], "1700000000000");
        assert_eq!(value["organizationId"], "org-456");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(ActivityStatus::Completed.is_terminal());
        assert!(ActivityStatus::Failed.is_terminal());
        assert!(ActivityStatus::Rejected.is_terminal());
        assert!(!ActivityStatus::Created.is_terminal());
        assert!(!ActivityStatus::Pending.is_terminal());
        assert!(!ActivityStatus::ConsensusNeeded.is_terminal());
    }
}
