//! User queries.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{GetUserRequest, GetUserResponse, GetUsersRequest, GetUsersResponse, User};

const LIST_USERS_PATH: &str = "/public/v1/query/list_users";
const GET_USER_PATH: &str = "/public/v1/query/get_user";

/// Client for user queries.
pub struct UsersClient {
    transport: Arc<HttpTransport>,
}

impl UsersClient {
    /// Create a new users client.
    #[must_use]
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// List all users in the organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn list(&self) -> Result<Vec<User>, Error> {
        let request = GetUsersRequest {
            organization_id: self.transport.organization_id().to_string(),
        };
        let response: GetUsersResponse = self.transport.post(LIST_USERS_PATH, &request).await?;
        Ok(response.users)
    }

    /// Fetch a single user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the user does not exist.
    pub async fn get(&self, user_id: &str) -> Result<User, Error> {
        let request = GetUserRequest {
            organization_id: self.transport.organization_id().to_string(),
            user_id: user_id.to_string(),
        };
        let response: GetUserResponse = self.transport.post(GET_USER_PATH, &request).await?;
        Ok(response.user)
    }
}
