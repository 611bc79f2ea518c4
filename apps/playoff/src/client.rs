//! # Scoring Client
//!
//! HTTP client for the scoring service: posts the prediction document and
//! reads back the leaderboard.

use crate::config::ServiceConfig;
use playoff_core::{PlayoffError, ScoreEntry, WirePredictions, WizardController, scores_from_json};

/// Errors from the HTTP client layer.
#[derive(Debug)]
pub enum ClientError {
    /// Cannot reach the scoring service.
    ConnectionFailed(String),
    /// The service answered with a non-2xx status.
    Rejected(u16, String),
    /// Failed to parse response body.
    ParseError(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConnectionFailed(msg) => write!(f, "Cannot connect to scoring service at {msg}"),
            Self::Rejected(status, body) if body.trim().is_empty() => {
                write!(f, "Server responded with {status}")
            }
            Self::Rejected(status, body) => {
                write!(f, "Server responded with {status}: {}", body.trim())
            }
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// HTTP client for the scoring service.
#[derive(Clone)]
pub struct ScoringClient {
    http: reqwest::Client,
    base_url: String,
    submit_path: String,
    scores_path: String,
    api_key: Option<String>,
}

impl ScoringClient {
    /// Build a client with the configured timeout.
    pub fn new(config: &ServiceConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ClientError::ConnectionFailed(format!("{}: {e}", config.base_url)))?;
        Ok(Self::with_http(http, config))
    }

    /// Use an existing `reqwest` client.
    pub fn with_http(http: reqwest::Client, config: &ServiceConfig) -> Self {
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            submit_path: config.submit_path.clone(),
            scores_path: config.scores_path.clone(),
            api_key: config.api_key.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with optional Bearer auth.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.http.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Send a request and turn non-2xx answers into [`ClientError::Rejected`].
    async fn send(&self, req: reqwest::RequestBuilder) -> Result<reqwest::Response, ClientError> {
        let resp = req
            .send()
            .await
            .map_err(|e| ClientError::ConnectionFailed(format!("{}: {e}", self.base_url)))?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Rejected(status.as_u16(), body));
        }
        Ok(resp)
    }

    /// POST the prediction document. Only the status matters.
    pub async fn submit(&self, predictions: &WirePredictions) -> Result<(), ClientError> {
        let req = self
            .request(reqwest::Method::POST, &self.submit_path)
            .json(predictions);
        self.send(req).await?;
        Ok(())
    }

    /// GET the leaderboard, in the order the service returns it.
    pub async fn fetch_scores(&self) -> Result<Vec<ScoreEntry>, ClientError> {
        let req = self.request(reqwest::Method::GET, &self.scores_path);
        let resp = self.send(req).await?;
        let body = resp
            .text()
            .await
            .map_err(|e| ClientError::ParseError(e.to_string()))?;
        scores_from_json(&body).map_err(|e| ClientError::ParseError(e.to_string()))
    }
}

// =============================================================================
// SUBMISSION FLOW
// =============================================================================

/// Submit the wizard's predictions, then load the leaderboard.
///
/// A rejected submission leaves the wizard on the finals step with its picks
/// intact and returns the error. A leaderboard failure after an accepted
/// submission is recorded in the wizard but does not fail the call.
pub async fn submit_wizard(
    wizard: &mut WizardController,
    client: &ScoringClient,
) -> Result<(), PlayoffError> {
    let document = wizard.begin_submission()?;
    tracing::info!(
        picks = document.pick_count(),
        url = client.base_url(),
        "Submitting predictions"
    );

    let outcome = client.submit(&document).await.map_err(|e| e.to_string());
    if let Err(reason) = &outcome {
        tracing::warn!(error = %reason, "Submission failed");
    }
    wizard.complete_submission(outcome)?;
    tracing::info!("Predictions accepted");

    let scores = client.fetch_scores().await.map_err(|e| e.to_string());
    match wizard.record_scores(scores) {
        Ok(()) => tracing::debug!(
            entries = wizard.scores().map_or(0, <[ScoreEntry]>::len),
            "Leaderboard loaded"
        ),
        Err(e) => tracing::warn!(error = %e, "Leaderboard unavailable"),
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================
