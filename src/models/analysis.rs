//! Wire-level models for the analysis service.
//!
//! The response side is treated as untrusted and partial: every analysis
//! field is optional and defaulted so a half-populated payload still
//! deserializes. Interpretation of missing fields happens downstream in
//! `crate::interpret`, never here.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single analysis submission, created when the user submits a URL and
/// held by the controller until the next submit/retry/reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub url: String,
    pub submitted_at: DateTime<Utc>,
}

impl AnalysisRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            submitted_at: Utc::now(),
        }
    }
}

/// Request identifier as the service sends it: an integer for records it
/// assigned itself, but tolerated as a string too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{}", n),
            RequestId::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Analysis response as returned by `POST /analyze` and `GET /analysis/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnalysisResponse {
    #[serde(default)]
    pub request_id: Option<RequestId>,
    #[serde(default)]
    pub url: String,
    /// "pending", "completed" or "failed" on the service side.
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub credibility_score: Option<f64>,
    /// "Yes" / "No" / "Uncertain"
    #[serde(default)]
    pub is_out_of_context: Option<String>,
    /// "Yes" / "No" / "Uncertain"
    #[serde(default)]
    pub is_propaganda: Option<String>,
    #[serde(default)]
    pub content_context: Option<String>,
    #[serde(default)]
    pub detailed_results: Option<DetailedResults>,
    /// Seconds spent analyzing, measured by the service.
    #[serde(default)]
    pub analysis_duration: Option<f64>,
    #[serde(default)]
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailedResults {
    #[serde(default)]
    pub out_of_context: Option<SectionDetail>,
    #[serde(default)]
    pub propaganda: Option<SectionDetail>,
    #[serde(default)]
    pub key_concerns: Option<Vec<String>>,
    #[serde(default)]
    pub positive_indicators: Option<Vec<String>>,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SectionDetail {
    #[serde(default)]
    pub assessment: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}
