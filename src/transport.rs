//! HTTP transport for the Turnkey SDK.
//!
//! Every API call is an HTTP POST. The body is serialized exactly once; the
//! resulting bytes are stamped and sent verbatim, since any re-encoding
//! between stamping and sending would invalidate the signature.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Error};
use crate::stamper::{StampHeader, Stamper};
use crate::types::{Activity, ActivityRequest, ActivityResponse, GetActivityRequest};

/// Value of the `X-Client-Version` header.
pub const CLIENT_VERSION: &str = concat!("turnkey-sdk-rust/", env!("CARGO_PKG_VERSION"));

const GET_ACTIVITY_PATH: &str = "/public/v1/query/get_activity";

/// Configuration for activity status polling.
#[derive(Debug, Clone)]
pub struct PollingConfig {
    /// Delay between polls.
    pub interval: Duration,
    /// Maximum number of polls after the initial response.
    pub max_polls: u32,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(1000),
            max_polls: 3,
        }
    }
}

/// A stamped request, ready to send.
///
/// Produced by [`HttpTransport::prepare`]; useful when the caller wants to
/// inspect or transport the request out-of-band before submission.
#[derive(Debug, Clone)]
pub struct SignedRequest {
    /// Full request URL.
    pub url: String,
    /// Exact body bytes that were stamped.
    pub body: String,
    /// Stamp header for the body.
    pub stamp: StampHeader,
}

/// HTTP transport with automatic request stamping.
pub struct HttpTransport {
    base_url: String,
    organization_id: String,
    stamper: Arc<dyn Stamper>,
    client: Client,
    polling: PollingConfig,
}

impl HttpTransport {
    /// Create a new transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(
        base_url: &str,
        organization_id: &str,
        stamper: Arc<dyn Stamper>,
        timeout: Duration,
        polling: Option<PollingConfig>,
    ) -> Result<Self, Error> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            organization_id: organization_id.to_string(),
            stamper,
            client,
            polling: polling.unwrap_or_default(),
        })
    }

    /// Stamp a request body for a path without sending it.
    ///
    /// The body is serialized here, once; an `organizationId` field is
    /// filled in from the transport configuration when the body omits it
    /// (a body-provided value wins).
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or stamping fails.
    pub fn prepare<B: Serialize>(&self, path: &str, body: &B) -> Result<SignedRequest, Error> {
        let mut value = serde_json::to_value(body)?;
        self.inject_organization_id(&mut value);
        let body = serde_json::to_string(&value)?;

        let stamp = self.stamper.stamp(body.as_bytes())?;

        Ok(SignedRequest {
            url: format!("{}{}", self.base_url, path),
            body,
            stamp,
        })
    }

    /// POST a body to a path, stamped, and parse the JSON response.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the API responds
    /// with a non-success status.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, Error> {
        let signed = self.prepare(path, body)?;
        self.send_signed(&signed).await
    }

    /// Send a previously prepared request.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails or the API responds
    /// with a non-success status.
    pub async fn send_signed<T: DeserializeOwned>(&self, signed: &SignedRequest) -> Result<T, Error> {
        let response = self
            .client
            .post(&signed.url)
            .header(signed.stamp.name, &signed.stamp.value)
            .header("Content-Type", "application/json")
            .header("X-Client-Version", CLIENT_VERSION)
            .body(signed.body.clone())
            .send()
            .await
            .map_err(|e| Error::from(ApiError::network(e.to_string())))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::parse_error_response(status.as_u16(), body).into());
        }

        response
            .json()
            .await
            .map_err(|e| Error::Http(format!("Failed to parse response: {e}")))
    }

    /// Submit an activity and poll it to a terminal status.
    ///
    /// Returns the final activity. Callers inspect its status: a polling
    /// budget that runs out leaves the last observed (non-terminal)
    /// activity, it is not an error.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if submission or any poll fails.
    pub async fn submit_activity<P: Serialize>(
        &self,
        path: &str,
        activity_type: &str,
        parameters: &P,
    ) -> Result<Activity, Error> {
        let request = ActivityRequest {
            activity_type: activity_type.to_string(),
            timestamp_ms: Utc::now().timestamp_millis().to_string(),
            organization_id: self.organization_id.clone(),
            parameters,
        };

        let response: ActivityResponse = self.post(path, &request).await?;
        self.poll_for_completion(response.activity).await
    }

    /// Fetch an activity by id.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_activity(&self, activity_id: &str) -> Result<Activity, Error> {
        let request = GetActivityRequest {
            organization_id: self.organization_id.clone(),
            activity_id: activity_id.to_string(),
        };
        let response: ActivityResponse = self.post(GET_ACTIVITY_PATH, &request).await?;
        Ok(response.activity)
    }

    /// Poll an activity until it reaches a terminal status or the polling
    /// budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if a poll request fails.
    pub async fn poll_for_completion(&self, mut activity: Activity) -> Result<Activity, Error> {
        if activity.status.is_terminal() {
            return Ok(activity);
        }

        for _ in 0..self.polling.max_polls {
            tokio::time::sleep(self.polling.interval).await;
            activity = self.get_activity(&activity.id).await?;
            if activity.status.is_terminal() {
                break;
            }
        }

        Ok(activity)
    }

    /// The configured organization id.
    #[must_use]
    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    /// The configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn inject_organization_id(&self, value: &mut Value) {
        if let Value::Object(map) = value {
            let missing = match map.get("organizationId") {
                None | Some(Value::Null) => true,
                Some(Value::String(s)) => s.is_empty(),
                Some(_) => false,
            };
            if missing {
                map.insert(
                    "organizationId".to_string(),
                    Value::String(self.organization_id.clone()),
                );
            }
        }
    }

    fn parse_error_response(status: u16, body: String) -> ApiError {
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .unwrap_or_else(|| format!("HTTP {status}"));

        ApiError::bad_response(status, message, Some(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::testing::MockStamper;
    use crate::types::{ActivityStatus, ACTIVITY_TYPE_CREATE_API_KEYS};
    use httpmock::prelude::*;

    fn create_test_transport(stamper: Arc<MockStamper>) -> HttpTransport {
        HttpTransport::new(
            "https://api.turnkey.com/",
            "org-123",
            stamper,
            Duration::from_secs(30),
            None,
        )
        .expect("transport creation should succeed")
    }

    fn activity_with_status(id: &str, status: ActivityStatus) -> Activity {
        Activity {
            id: id.to_string(),
            organization_id: "org-123".to_string(),
            status,
            activity_type: ACTIVITY_TYPE_CREATE_API_KEYS.to_string(),
            result: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn activity_json(id: &str, status: &str) -> serde_json::Value {
        serde_json::json!({
            "activity": {
                "id": id,
                "organizationId": "org-123",
                "status": status,
                "type": ACTIVITY_TYPE_CREATE_API_KEYS,
            }
        })
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let transport = create_test_transport(Arc::new(MockStamper::new()));
        assert_eq!(transport.base_url(), "https://api.turnkey.com");
    }

    #[test]
    fn test_prepare_stamps_exact_body_bytes() {
        let stamper = Arc::new(MockStamper::new());
        let transport = create_test_transport(Arc::clone(&stamper));

        let body = serde_json::json!({"organizationId": "org-123", "userId": "user-1"});
        let signed = transport.prepare("/public/v1/query/get_user", &body).unwrap();

        assert_eq!(signed.url, "https://api.turnkey.com/public/v1/query/get_user");
        let stamped = stamper.stamped_payloads();
        assert_eq!(stamped.len(), 1);
        assert_eq!(stamped[0], signed.body.as_bytes());
    }

    #[test]
    fn test_prepare_injects_missing_organization_id() {
        let transport = create_test_transport(Arc::new(MockStamper::new()));

        let body = serde_json::json!({"userId": "user-1"});
        let signed = transport.prepare("/public/v1/query/get_user", &body).unwrap();

        let value: Value = serde_json::from_str(&signed.body).unwrap();
        assert_eq!(value["organizationId"], "org-123");
    }

    #[test]
    fn test_prepare_keeps_body_organization_id() {
        let transport = create_test_transport(Arc::new(MockStamper::new()));

        let body = serde_json::json!({"organizationId": "other-org"});
        let signed = transport.prepare("/public/v1/query/whoami", &body).unwrap();

        let value: Value = serde_json::from_str(&signed.body).unwrap();
        assert_eq!(value["organizationId"], "other-org");
    }

    #[test]
    fn test_parse_error_response_with_message() {
        let error = HttpTransport::parse_error_response(
            401,
            r#"{"message":"could not verify stamp"}"#.to_string(),
        );

        assert_eq!(error.code, ErrorCode::BadResponse);
        assert_eq!(error.status, Some(401));
        assert_eq!(error.message, "could not verify stamp");
    }

    #[test]
    fn test_parse_error_response_with_opaque_body() {
        let error = HttpTransport::parse_error_response(502, "Bad Gateway".to_string());

        assert_eq!(error.message, "HTTP 502");
        assert_eq!(error.body.as_deref(), Some("Bad Gateway"));
    }

    #[test]
    fn test_prepare_propagates_stamper_failure() {
        let stamper = Arc::new(MockStamper::new());
        stamper.fail_with("hsm unavailable");
        let transport = create_test_transport(Arc::clone(&stamper));

        let body = serde_json::json!({"organizationId": "org-123"});
        let err = transport
            .prepare("/public/v1/query/whoami", &body)
            .unwrap_err();

        assert!(matches!(err, Error::Signing(_)));
        assert!(stamper.stamped_payloads().is_empty());
    }

    #[tokio::test]
    async fn test_poll_returns_terminal_activity_without_requests() {
        let stamper = Arc::new(MockStamper::new());
        // Unroutable base URL: any poll request would fail, proving the
        // terminal short-circuit never issues one.
        let transport = HttpTransport::new(
            "http://127.0.0.1:1",
            "org-123",
            Arc::clone(&stamper) as Arc<dyn Stamper>,
            Duration::from_millis(200),
            None,
        )
        .expect("transport creation should succeed");

        let activity = activity_with_status("act-1", ActivityStatus::Completed);
        let result = transport
            .poll_for_completion(activity)
            .await
            .expect("terminal activity should return immediately");

        assert_eq!(result.id, "act-1");
        assert_eq!(result.status, ActivityStatus::Completed);
        assert!(stamper.stamped_payloads().is_empty());
    }

    #[tokio::test]
    async fn test_poll_budget_exhaustion_returns_last_observed_activity() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/public/v1/query/get_activity");
                then.status(200)
                    .json_body(activity_json("act-1", "ACTIVITY_STATUS_PENDING"));
            })
            .await;

        let transport = HttpTransport::new(
            &server.base_url(),
            "org-123",
            Arc::new(MockStamper::new()),
            Duration::from_secs(5),
            Some(PollingConfig {
                interval: Duration::from_millis(1),
                max_polls: 2,
            }),
        )
        .expect("transport creation should succeed");

        let activity = activity_with_status("act-1", ActivityStatus::Pending);
        let result = transport
            .poll_for_completion(activity)
            .await
            .expect("an exhausted polling budget is not an error");

        assert_eq!(result.status, ActivityStatus::Pending);
        mock.assert_hits_async(2).await;
    }

    #[tokio::test]
    async fn test_poll_stops_at_first_terminal_response() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/public/v1/query/get_activity");
                then.status(200)
                    .json_body(activity_json("act-1", "ACTIVITY_STATUS_COMPLETED"));
            })
            .await;

        let transport = HttpTransport::new(
            &server.base_url(),
            "org-123",
            Arc::new(MockStamper::new()),
            Duration::from_secs(5),
            Some(PollingConfig {
                interval: Duration::from_millis(1),
                max_polls: 3,
            }),
        )
        .expect("transport creation should succeed");

        let activity = activity_with_status("act-1", ActivityStatus::Pending);
        let result = transport
            .poll_for_completion(activity)
            .await
            .expect("polling should succeed");

        assert_eq!(result.status, ActivityStatus::Completed);
        mock.assert_hits_async(1).await;
    }

    #[test]
    fn test_default_polling_config() {
        let config = PollingConfig::default();
        assert_eq!(config.interval, Duration::from_millis(1000));
        assert_eq!(config.max_polls, 3);
    }
}
