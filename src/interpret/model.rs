//! Display-ready projection of an analysis response.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    /// Lowercase name, used as the styling class for the score widget.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::High => "high",
            ScoreBand::Medium => "medium",
            ScoreBand::Low => "low",
        }
    }
}

/// Coarse styling bucket for a Yes/No/Uncertain judgment. Unknown labels
/// style as Uncertain.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AssessmentTone {
    Yes,
    No,
    Uncertain,
}

/// A single judgment (out-of-context, propaganda) with its supporting text.
///
/// The label keeps whatever casing the service sent; only styling via
/// `tone()` is case-insensitive.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub label: String,
    pub explanation: String,
}

impl Assessment {
    pub fn tone(&self) -> AssessmentTone {
        if self.label.eq_ignore_ascii_case("yes") {
            AssessmentTone::Yes
        } else if self.label.eq_ignore_ascii_case("no") {
            AssessmentTone::No
        } else {
            AssessmentTone::Uncertain
        }
    }
}

/// Fully-defaulted, render-ready view of one analysis. Owned by the
/// `Results` state and discarded on the next transition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DisplayModel {
    pub score_value: i64,
    pub score_band: ScoreBand,
    pub interpretation: String,
    pub context_assessment: Assessment,
    pub propaganda_assessment: Assessment,
    pub content_context: String,
    pub key_concerns: Vec<String>,
    pub positive_indicators: Vec<String>,
    /// `None` hides the summary section entirely; lists get placeholder
    /// entries instead.
    pub summary: Option<String>,
    /// Untruncated; truncation happens at display time only.
    pub analyzed_url: String,
    pub duration_secs: f64,
    pub request_id: String,
}
