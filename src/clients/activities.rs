//! Activity queries and polling.

use std::sync::Arc;

use crate::error::Error;
use crate::transport::HttpTransport;
use crate::types::Activity;

/// Client for activity status operations.
pub struct ActivitiesClient {
    transport: Arc<HttpTransport>,
}

impl ActivitiesClient {
    /// Create a new activities client.
    #[must_use]
    pub fn new(transport: Arc<HttpTransport>) -> Self {
        Self { transport }
    }

    /// Fetch an activity by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get(&self, activity_id: &str) -> Result<Activity, Error> {
        self.transport.get_activity(activity_id).await
    }

    /// Poll an activity until it reaches a terminal status or the
    /// transport's polling budget is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if a poll request fails.
    pub async fn wait(&self, activity: Activity) -> Result<Activity, Error> {
        self.transport.poll_for_completion(activity).await
    }
}
