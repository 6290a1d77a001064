use std::env;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use url::Url;

use forecast_core::model::{FargoRequest, SkillForecast, SkillRequest};

use crate::error::PredictionError;

/// Local development placeholder; the real host comes from configuration.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

const GENERIC_SERVER_ERROR: &str =
    "An unknown error occurred during communication with the server.";

#[derive(Clone, Debug)]
pub struct PredictionConfig {
    pub base_url: String,
}

impl PredictionConfig {
    /// Validates and stores a base URL.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` when `raw` is not an absolute URL.
    pub fn new(raw: &str) -> Result<Self, url::ParseError> {
        let parsed = Url::parse(raw)?;
        Ok(Self {
            base_url: parsed.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Reads `BILLIARD_API_URL`, falling back to the default when unset or
    /// invalid.
    #[must_use]
    pub fn from_env() -> Self {
        env::var("BILLIARD_API_URL")
            .ok()
            .and_then(|raw| Self::new(&raw).ok())
            .unwrap_or_default()
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Client seam for the two prediction endpoints. The UI talks to this
/// trait; tests substitute scripted implementations.
#[async_trait]
pub trait PredictionApi: Send + Sync {
    /// Predict a FargoRate rating from the regression endpoint.
    async fn predict_fargo(&self, request: &FargoRequest) -> Result<f64, PredictionError>;

    /// Calculate the skill-level forecast.
    async fn calculate_skill(
        &self,
        request: &SkillRequest,
    ) -> Result<SkillForecast, PredictionError>;
}

/// HTTP implementation backed by a shared `reqwest::Client`.
///
/// No retries and no partial updates: a failed call returns an error and
/// leaves nothing behind.
#[derive(Clone)]
pub struct PredictionService {
    client: Client,
    config: PredictionConfig,
}

impl PredictionService {
    #[must_use]
    pub fn new(config: PredictionConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::new(PredictionConfig::from_env())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl PredictionApi for PredictionService {
    async fn predict_fargo(&self, request: &FargoRequest) -> Result<f64, PredictionError> {
        let response = self
            .client
            .post(self.endpoint("predict_fargo_lr"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error_body(status, &body));
        }

        let body: FargoResponse = response.json().await?;
        Ok(body.predicted_fargo_rate_lr)
    }

    async fn calculate_skill(
        &self,
        request: &SkillRequest,
    ) -> Result<SkillForecast, PredictionError> {
        let response = self
            .client
            .post(self.endpoint("calculate_skill"))
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(decode_error_body(status, &body));
        }

        let forecast: SkillForecast = response.json().await?;
        Ok(forecast)
    }
}

#[derive(Debug, Deserialize)]
struct FargoResponse {
    predicted_fargo_rate_lr: f64,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Maps a non-2xx response body to `PredictionError::Server`, preferring
/// the server's `{"error": ...}` text over the generic fallback.
fn decode_error_body(status: StatusCode, body: &str) -> PredictionError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.error)
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| GENERIC_SERVER_ERROR.to_string());
    PredictionError::Server { status, message }
}
