//! # casita-adapter-classifier-http
//!
//! Remote classifier backend speaking the Hugging Face inference API's
//! zero-shot classification shape: POST the utterance with the candidate
//! labels, get back parallel `labels`/`scores` arrays.
//!
//! The request timeout lives on the HTTP client; the controller applies its
//! own overall bound on top, so a stuck server can never stall the
//! pipeline.
//!
//! ## Dependency rule
//!
//! Depends on `casita-app` (port traits) and `casita-domain` only, plus the
//! HTTP stack.

use std::future::Future;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use casita_app::ports::{Classifier, ClassifierError};
use casita_domain::classification::{Ranking, Scored};

/// Configuration for the HTTP classifier backend.
#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    /// API base endpoint.
    pub endpoint: String,
    /// Model identifier, e.g. `MoritzLaurer/mDeBERTa-v3-base-mnli-xnli`.
    pub model: String,
    /// Optional bearer token.
    pub api_token: Option<String>,
    /// Request timeout applied at the HTTP client level.
    pub timeout: Duration,
}

impl HttpClassifierConfig {
    /// Create a config for the given model with default endpoint and
    /// timeout.
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co".to_string(),
            model: model.into(),
            api_token: None,
            timeout: Duration::from_secs(30),
        }
    }

    /// Set a custom endpoint.
    #[must_use]
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set a bearer token.
    #[must_use]
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn model_url(&self) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), self.model)
    }
}

impl Default for HttpClassifierConfig {
    fn default() -> Self {
        Self::new("MoritzLaurer/mDeBERTa-v3-base-mnli-xnli")
    }
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f32>,
}

/// Classifier backed by a remote zero-shot classification model.
pub struct HttpClassifier {
    config: HttpClassifierConfig,
    client: Client,
}

impl HttpClassifier {
    /// Build the backend, constructing the HTTP client.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifierError::Network`] when the client cannot be
    /// constructed. Callers treat this as fatal at startup: there is no
    /// degraded mode without a classifier.
    pub fn new(config: HttpClassifierConfig) -> Result<Self, ClassifierError> {
        tracing::debug!(endpoint = %config.endpoint, model = %config.model, "building HTTP classifier");
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ClassifierError::Network(err.to_string()))?;
        Ok(Self { config, client })
    }
}

impl Classifier for HttpClassifier {
    fn rank(
        &self,
        utterance: &str,
        candidates: &[&str],
    ) -> impl Future<Output = Result<Ranking, ClassifierError>> + Send {
        async move {
            let body = ZeroShotRequest {
                inputs: utterance,
                parameters: ZeroShotParameters {
                    candidate_labels: candidates,
                },
            };

            let mut request = self.client.post(self.config.model_url()).json(&body);
            if let Some(token) = &self.config.api_token {
                request = request.bearer_auth(token);
            }

            let response = request
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .map_err(|err| ClassifierError::Network(err.to_string()))?;

            let parsed: ZeroShotResponse = response
                .json()
                .await
                .map_err(|err| ClassifierError::Contract(err.to_string()))?;

            build_ranking(candidates.len(), parsed)
        }
    }
}

/// Validate the response against the oracle contract and build the ranking.
fn build_ranking(expected: usize, parsed: ZeroShotResponse) -> Result<Ranking, ClassifierError> {
    if parsed.labels.len() != expected || parsed.scores.len() != parsed.labels.len() {
        return Err(ClassifierError::Contract(format!(
            "expected {expected} ranked labels, got {} labels and {} scores",
            parsed.labels.len(),
            parsed.scores.len(),
        )));
    }

    let entries: Vec<Scored> = parsed
        .labels
        .into_iter()
        .zip(parsed.scores)
        .map(|(label, score)| Scored::new(label, score))
        .collect();

    Ranking::new(entries).map_err(|err| ClassifierError::Contract(err.to_string()))
}
