//! Turnkey SDK main client.
//!
//! Aggregates the resource clients and owns the stamped HTTP transport.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use crate::clients::{ActivitiesClient, ApiKeysClient, OrganizationsClient, UsersClient};
use crate::error::Error;
use crate::stamper::{ApiKeyStamper, Stamper, StamperConfig};
use crate::transport::{HttpTransport, PollingConfig};

/// Default base URL for the Turnkey API.
pub const DEFAULT_BASE_URL: &str = "https://api.turnkey.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Main client for the Turnkey API.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use turnkey_sdk::{ApiKeyStamper, StamperConfig, TurnkeyClient};
///
/// # async fn run() -> Result<(), turnkey_sdk::Error> {
/// let stamper = ApiKeyStamper::new(StamperConfig {
///     api_public_key: "02...".to_string(),
///     api_private_key: "...".to_string(),
/// })?;
///
/// let client = TurnkeyClient::new("my-org-id", Arc::new(stamper), None, None, None)?;
/// let whoami = client.organizations().whoami().await?;
/// println!("authenticated as {}", whoami.username);
/// # Ok(())
/// # }
/// ```
pub struct TurnkeyClient {
    organization_id: String,
    transport: Arc<HttpTransport>,
    organizations: OrganizationsClient,
    users: UsersClient,
    api_keys: ApiKeysClient,
    activities: ActivitiesClient,
}

impl TurnkeyClient {
    /// Create a new Turnkey client.
    ///
    /// # Arguments
    ///
    /// * `organization_id` - Organization the API key belongs to
    /// * `stamper` - Request stamper (usually an [`ApiKeyStamper`])
    /// * `base_url` - API base URL (default: <https://api.turnkey.com>)
    /// * `timeout` - Request timeout (default: 30 seconds)
    /// * `polling` - Activity polling configuration (optional)
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP transport cannot be created.
    pub fn new(
        organization_id: &str,
        stamper: Arc<dyn Stamper>,
        base_url: Option<&str>,
        timeout: Option<Duration>,
        polling: Option<PollingConfig>,
    ) -> Result<Self, Error> {
        let base_url = base_url.unwrap_or(DEFAULT_BASE_URL);
        let timeout = timeout.unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        let transport = Arc::new(HttpTransport::new(
            base_url,
            organization_id,
            stamper,
            timeout,
            polling,
        )?);

        Ok(Self {
            organization_id: organization_id.to_string(),
            organizations: OrganizationsClient::new(Arc::clone(&transport)),
            users: UsersClient::new(Arc::clone(&transport)),
            api_keys: ApiKeysClient::new(Arc::clone(&transport)),
            activities: ActivitiesClient::new(Arc::clone(&transport)),
            transport,
        })
    }

    /// Create a client from environment variables.
    ///
    /// # Environment Variables
    ///
    /// * `TURNKEY_API_PUBLIC_KEY` - Hex-encoded compressed public key (required)
    /// * `TURNKEY_API_PRIVATE_KEY` - Hex-encoded private scalar (required)
    /// * `TURNKEY_ORGANIZATION_ID` - Organization id (required)
    /// * `TURNKEY_BASE_URL` - API base URL (optional)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a required variable is missing and key
    /// validation errors if the keypair is malformed.
    pub fn from_env() -> Result<Self, Error> {
        let api_public_key = require_env("TURNKEY_API_PUBLIC_KEY")?;
        let api_private_key = require_env("TURNKEY_API_PRIVATE_KEY")?;
        let organization_id = require_env("TURNKEY_ORGANIZATION_ID")?;
        let base_url = env::var("TURNKEY_BASE_URL").ok();

        let stamper = ApiKeyStamper::new(StamperConfig {
            api_public_key,
            api_private_key,
        })?;

        Self::new(
            &organization_id,
            Arc::new(stamper),
            base_url.as_deref(),
            None,
            None,
        )
    }

    /// The configured organization id.
    #[must_use]
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    /// The underlying HTTP transport (for advanced use cases, e.g.
    /// preparing signed requests without sending them).
    #[must_use]
    pub fn transport(&self) -> &Arc<HttpTransport> {
        &self.transport
    }

    /// The organizations client.
    #[must_use]
    pub fn organizations(&self) -> &OrganizationsClient {
        &self.organizations
    }

    /// The users client.
    #[must_use]
    pub fn users(&self) -> &UsersClient {
        &self.users
    }

    /// The API-keys client.
    #[must_use]
    pub fn api_keys(&self) -> &ApiKeysClient {
        &self.api_keys
    }

    /// The activities client.
    #[must_use]
    pub fn activities(&self) -> &ActivitiesClient {
        &self.activities
    }
}

fn require_env(name: &str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::Config(format!("{name} environment variable not set")))
}
