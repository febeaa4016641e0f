//! Scoring service client
//!
//! Wraps the single network round trip that turns the complete answer
//! vector into a career profile. Performs exactly one POST per call; no
//! internal retry, no caching. Failure classes are distinguished for
//! diagnostics only; the user sees one generic message regardless.

use rumo_core::catalog::TOTAL_QUESTIONS;
use rumo_core::{AnswerValue, ScoringResult};
use std::time::Duration;
use thiserror::Error;

const USER_AGENT: &str = concat!("Rumo/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Scoring client errors
#[derive(Debug, Error)]
pub enum ScoringError {
    /// HTTP client construction failed; no request was made
    #[error("HTTP client error: {0}")]
    Client(String),

    /// Answer vector of the wrong length; contract violation, nothing sent
    #[error("answer vector has {0} entries, expected {TOTAL_QUESTIONS}")]
    WrongVectorLength(usize),

    /// Transport-level failure, no response obtained
    #[error("Network error: {0}")]
    Network(String),

    /// Service answered with a non-2xx status
    #[error("Scoring service error {0}: {1}")]
    Server(u16, String),

    /// Service answered 2xx with an undecodable body
    #[error("Malformed scoring response: {0}")]
    MalformedResponse(String),
}

impl ScoringError {
    /// Generic user-facing message covering every failure class
    pub fn user_message(&self) -> &'static str {
        "Não foi possível calcular seu perfil. Verifique sua conexão e tente novamente."
    }
}

/// Scoring service HTTP client
pub struct ScoringClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl ScoringClient {
    /// Create a client for the given service base URL
    pub fn new(base_url: impl Into<String>) -> Result<Self, ScoringError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ScoringError::Client(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Submit the complete answer vector and decode the career profile
    ///
    /// The body is a bare JSON array of integers in catalog traversal
    /// order; position k corresponds to the k-th question across all
    /// blocks, so the slice must never be reordered.
    pub async fn submit(&self, answers: &[AnswerValue]) -> Result<ScoringResult, ScoringError> {
        if answers.len() != TOTAL_QUESTIONS {
            return Err(ScoringError::WrongVectorLength(answers.len()));
        }

        tracing::debug!(
            answers = answers.len(),
            url = %self.base_url,
            "submitting answer vector"
        );

        let response = self
            .http_client
            .post(format!("{}/predict", self.base_url))
            .json(&answers)
            .send()
            .await
            .map_err(|e| ScoringError::Network(e.to_string()))?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ScoringError::Server(status.as_u16(), error_text));
        }

        let result: ScoringResult = response
            .json()
            .await
            .map_err(|e| ScoringError::MalformedResponse(e.to_string()))?;

        tracing::info!(profile = %result.profile, "scoring response received");

        Ok(result)
    }
}
