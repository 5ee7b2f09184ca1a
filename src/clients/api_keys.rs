//! API-key queries and activities.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{
    Activity, ApiKey, ApiKeyParams, CreateApiKeysIntent, DeleteApiKeysIntent, GetApiKeysRequest,
    GetApiKeysResponse, ACTIVITY_TYPE_CREATE_API_KEYS, ACTIVITY_TYPE_DELETE_API_KEYS,
};

const GET_API_KEYS_PATH: &str = "/public/v1/query/get_api_keys";
const CREATE_API_KEYS_PATH: &str = "/public/v1/submit/create_api_keys";
const DELETE_API_KEYS_PATH: &str = "/public/v1/submit/delete_api_keys";

/// Client for API-key operations.
pub struct ApiKeysClient {
    transport: Arc<HttpTransport>,
}

impl ApiKeysClient {
    /// Create a new API-keys client.
    #[must_use]
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List a user's API keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, user_id: &str) -> Result<Vec<ApiKey>, Error> {
        let request = GetApiKeysRequest {
            organization_id: self.transport.organization_id().to_string(),
            user_id: user_id.to_string(),
        };
        let response: GetApiKeysResponse =
            self.transport.post(GET_API_KEYS_PATH, &request).await?;
        Ok(response.api_keys)
    }

    /// Create API keys for a user.
    ///
    /// Submits the activity and polls it to a terminal status. On a
    /// completed activity, the created key ids are in
    /// `activity.result.create_api_keys_result`.
    ///
    /// # Errors
    ///
    /// Returns an error if submission or polling fails.
    pub async fn create(
        &self,
        user_id: &str,
        api_keys: Vec<ApiKeyParams>,
    ) -> Result<Activity, Error> {
        let intent = CreateApiKeysIntent {
            user_id: user_id.to_string(),
            api_keys,
        };
        self.transport
            .submit_activity(CREATE_API_KEYS_PATH, ACTIVITY_TYPE_CREATE_API_KEYS, &intent)
            .await
    }

    /// Delete a user's API keys by id.
    ///
    /// # Errors
    ///
    /// Returns an error if submission or polling fails.
    pub async fn delete(&self, user_id: &str, api_key_ids: Vec<String>) -> Result<Activity, Error> {
        let intent = DeleteApiKeysIntent {
            user_id: user_id.to_string(),
            api_key_ids,
        };
        self.transport
            .submit_activity(DELETE_API_KEYS_PATH, ACTIVITY_TYPE_DELETE_API_KEYS, &intent)
            .await
    }
}
