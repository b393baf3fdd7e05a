//! Request Client — typed caller for the Analysis API.
//!
//! Server-reported failures carry the HTTP status; transport failures and
//! cancellation carry none.

use std::future::Future;

use reqwest::{Client, Url};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::analysis::AnalysisResult;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Analysis request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Response is not a valid analysis result: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Analysis request cancelled")]
    Cancelled,

    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// HTTP status reported by the server, if the server responded at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Clone)]
pub struct AnalysisClient {
    client: Client,
    endpoint: Url,
}

impl AnalysisClient {
    /// `base_url` is the service root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let endpoint = format!("{}/api/analyze", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&endpoint).map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        Ok(Self {
            client: Client::builder().build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Submits resume text and waits for the analysis.
    pub async fn analyze(&self, resume_text: &str) -> Result<AnalysisResult, ClientError> {
        self.analyze_with_cancel(resume_text, std::future::pending())
            .await
    }

    /// Like `analyze`, but settles with `ClientError::Cancelled` as soon as
    /// `cancel` completes. The in-flight request is dropped, which closes its connection.
    pub async fn analyze_with_cancel<F>(
        &self,
        resume_text: &str,
        cancel: F,
    ) -> Result<AnalysisResult, ClientError>
    where
        F: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                debug!("Analysis request to {} cancelled", self.endpoint);
                Err(ClientError::Cancelled)
            }
            result = self.send(resume_text) => result,
        }
    }

    async fn send(&self, resume_text: &str) -> Result<AnalysisResult, ClientError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&json!({ "resumeText": resume_text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Analysis API returned {}: {}", status, body);
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
