pub mod http;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{HealthStatus, RawAnalysisResponse};

pub use http::HttpBackend;

/// Failure surfaced by the analysis service. Whatever the cause, it reaches
/// the controller as a single display message via `Display`.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The service answered with a non-success status and (usually) a
    /// `detail` message explaining why.
    #[error("{message}")]
    Rejected { message: String },
    /// Transport-level failure: connection, timeout, or an undecodable body.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The analysis service as the client sees it.
#[async_trait]
pub trait AnalysisBackend: Send + Sync {
    /// Submit a URL for analysis and wait for the full result.
    async fn analyze(&self, url: &str) -> Result<RawAnalysisResponse, BackendError>;

    /// Retrieve a previously completed analysis by its request id.
    async fn get_analysis(&self, request_id: i64) -> Result<RawAnalysisResponse, BackendError>;

    /// Probe service liveness.
    async fn health(&self) -> Result<HealthStatus, BackendError>;
}
