//! Organization and identity queries.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::{
    GetOrganizationRequest, GetOrganizationResponse, GetWhoamiRequest, WhoamiResponse,
};

const WHOAMI_PATH: &str = "/public/v1/query/whoami";
const GET_ORGANIZATION_PATH: &str = "/public/v1/query/get_organization";

/// Client for organization-level queries.
pub struct OrganizationsClient {
    transport: Arc<HttpTransport>,
}

impl OrganizationsClient {
    /// Create a new organizations client.
    #[must_use]
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Identify the organization and user behind the configured API key.
    ///
    /// This is the canonical smoke test for a fresh configuration: it fails
    /// with an authentication error when the stamp does not verify.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the key is not recognized.
    pub async fn whoami(&self) -> Result<WhoamiResponse, Error> {
        let request = GetWhoamiRequest {
            organization_id: self.transport.organization_id().to_string(),
        };
        self.transport.post(WHOAMI_PATH, &request).await
    }

    /// Fetch the configured organization.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self) -> Result<GetOrganizationResponse, Error> {
        let request = GetOrganizationRequest {
            organization_id: self.transport.organization_id().to_string(),
        };
        self.transport.post(GET_ORGANIZATION_PATH, &request).await
    }
}
