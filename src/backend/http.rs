//! HTTP implementation of the analysis backend contract.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::models::{HealthStatus, RawAnalysisResponse};

use super::{AnalysisBackend, BackendError};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = false;

use crate::log_info;

const REJECTION_FALLBACK: &str = "Analysis failed";

#[derive(Serialize)]
struct AnalyzeUrlRequest<'a> {
    url: &'a str,
}

/// Error body as the service emits it on non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

#[derive(Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Normalize a non-success response to a single display message,
    /// preferring the service's `detail` field.
    async fn rejection(response: reqwest::Response) -> BackendError {
        let status = response.status();
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .unwrap_or_else(|| REJECTION_FALLBACK.to_string());
        log_info!("service rejected request ({status}): {message}");
        BackendError::Rejected { message }
    }
}

#[async_trait]
impl AnalysisBackend for HttpBackend {
    async fn analyze(&self, url: &str) -> Result<RawAnalysisResponse, BackendError> {
        log_info!("POST {} url={url}", self.endpoint("analyze"));
        let response = self
            .client
            .post(self.endpoint("analyze"))
            .json(&AnalyzeUrlRequest { url })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn get_analysis(&self, request_id: i64) -> Result<RawAnalysisResponse, BackendError> {
        let response = self
            .client
            .get(self.endpoint(&format!("analysis/{request_id}")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        let response = self.client.get(self.endpoint("health")).send().await?;

        if !response.status().is_success() {
            return Err(Self::rejection(response).await);
        }

        Ok(response.json().await?)
    }
}
