//! TfL road-status HTTP client.

use async_trait::async_trait;

use crate::checker::{DispatchError, RoadStatusProvider};
use crate::config::Settings;
use crate::outcome::{Outcome, ResultStatus};

use super::classify::{classify_error_body, classify_success_body};
use super::types::RoadStatus;

/// Request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Client for the TfL Unified API road endpoint.
///
/// Issues a single authenticated GET per query and folds every failure
/// mode into an [`Outcome`]; nothing escapes as a raised error. Stateless
/// across calls.
#[derive(Debug, Clone)]
pub struct RoadClient {
    http: reqwest::Client,
    settings: Settings,
}

impl RoadClient {
    /// Create a new road-status client.
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self { http, settings })
    }

    /// Fetch the current status of the given road.
    ///
    /// 2xx bodies are parsed as a road-status array (first element wins);
    /// other responses are parsed as the API's error payload and classified
    /// by the status code the body declares. Transport failures become
    /// GeneralError outcomes.
    pub async fn fetch_road_status(&self, road_id: &str) -> Outcome<RoadStatus> {
        let url = format!("{}/Road/{}", self.settings.base_url, road_id);

        let response = match self
            .http
            .get(&url)
            .query(&[
                ("app_id", self.settings.app_id.as_str()),
                ("app_key", self.settings.app_key.as_str()),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return Outcome::failure(ResultStatus::GeneralError, e.to_string()),
        };

        let is_success = response.status().is_success();

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return Outcome::failure(ResultStatus::GeneralError, e.to_string()),
        };

        if is_success {
            classify_success_body(&body)
        } else {
            classify_error_body(&body)
        }
    }
}

#[async_trait]
impl RoadStatusProvider for RoadClient {
    async fn road_status(&self, road_id: &str) -> Result<Outcome<RoadStatus>, DispatchError> {
        Ok(self.fetch_road_status(road_id).await)
    }
}
