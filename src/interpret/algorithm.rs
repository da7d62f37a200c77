//! Turns a raw analysis response into a `DisplayModel`.
//!
//! This is deliberately lenient: the service may return a partially
//! populated payload, and every missing field defaults to something
//! renderable. Absence is never an error here.

use crate::models::{RawAnalysisResponse, SectionDetail};

use super::model::{Assessment, DisplayModel};
use super::scoring::{score_band, score_interpretation};

const UNCERTAIN_LABEL: &str = "Uncertain";
const NO_EXPLANATION: &str = "No detailed explanation available.";
const NO_CONTENT_CONTEXT: &str = "No content description available.";
const NO_CONCERNS: &str = "No major concerns identified.";
const NO_INDICATORS: &str = "No positive indicators identified.";

/// Interpret a response into its display form. Pure and deterministic;
/// identical inputs produce structurally identical models.
pub fn interpret(response: &RawAnalysisResponse) -> DisplayModel {
    let score = response.credibility_score.unwrap_or(0.0);
    let score_value = score.round() as i64;

    let details = response.detailed_results.as_ref();

    DisplayModel {
        score_value,
        score_band: score_band(score),
        interpretation: score_interpretation(score_value).to_string(),
        context_assessment: normalize_assessment(
            response.is_out_of_context.as_deref(),
            details.and_then(|d| d.out_of_context.as_ref()),
        ),
        propaganda_assessment: normalize_assessment(
            response.is_propaganda.as_deref(),
            details.and_then(|d| d.propaganda.as_ref()),
        ),
        content_context: non_empty(response.content_context.as_deref())
            .unwrap_or(NO_CONTENT_CONTEXT)
            .to_string(),
        key_concerns: list_or_placeholder(
            details.and_then(|d| d.key_concerns.as_ref()),
            NO_CONCERNS,
        ),
        positive_indicators: list_or_placeholder(
            details.and_then(|d| d.positive_indicators.as_ref()),
            NO_INDICATORS,
        ),
        summary: details
            .and_then(|d| non_empty(d.summary.as_deref()))
            .map(str::to_string),
        analyzed_url: response.url.clone(),
        duration_secs: response.analysis_duration.unwrap_or(0.0),
        request_id: response
            .request_id
            .as_ref()
            .map(|id| id.to_string())
            .unwrap_or_default(),
    }
}

fn normalize_assessment(label: Option<&str>, detail: Option<&SectionDetail>) -> Assessment {
    Assessment {
        label: non_empty(label).unwrap_or(UNCERTAIN_LABEL).to_string(),
        explanation: detail
            .and_then(|d| non_empty(d.explanation.as_deref()))
            .unwrap_or(NO_EXPLANATION)
            .to_string(),
    }
}

/// Items pass through verbatim, order preserved; an absent or empty list
/// becomes a single placeholder entry.
fn list_or_placeholder(items: Option<&Vec<String>>, placeholder: &str) -> Vec<String> {
    match items {
        Some(items) if !items.is_empty() => items.clone(),
        _ => vec![placeholder.to_string()],
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpret::model::{AssessmentTone, ScoreBand};
    use crate::models::DetailedResults;

    #[test]
    fn empty_response_defaults_everything() {
        let model = interpret(&RawAnalysisResponse::default());

        assert_eq!(model.score_value, 0);
        assert_eq!(model.score_band, ScoreBand::Low);
        assert_eq!(model.context_assessment.label, "Uncertain");
        assert_eq!(model.context_assessment.explanation, NO_EXPLANATION);
        assert_eq!(model.propaganda_assessment.label, "Uncertain");
        assert_eq!(model.propaganda_assessment.explanation, NO_EXPLANATION);
        assert_eq!(model.content_context, NO_CONTENT_CONTEXT);
        assert_eq!(model.key_concerns, vec![NO_CONCERNS.to_string()]);
        assert_eq!(model.positive_indicators, vec![NO_INDICATORS.to_string()]);
        assert!(model.summary.is_none());
        assert_eq!(model.duration_secs, 0.0);
        assert_eq!(model.request_id, "");
    }

    #[test]
    fn fractional_scores_round_for_display() {
        let response = RawAnalysisResponse {
            credibility_score: Some(85.6),
            ..Default::default()
        };
        let model = interpret(&response);
        assert_eq!(model.score_value, 86);
        assert_eq!(model.score_band, ScoreBand::High);
    }

    #[test]
    fn band_uses_raw_score_not_rounded() {
        let response = RawAnalysisResponse {
            credibility_score: Some(69.7),
            ..Default::default()
        };
        let model = interpret(&response);
        assert_eq!(model.score_value, 70);
        assert_eq!(model.score_band, ScoreBand::Medium);
    }

    #[test]
    fn lists_pass_through_in_order_without_dedup() {
        let response = RawAnalysisResponse {
            detailed_results: Some(DetailedResults {
                key_concerns: Some(vec![
                    "b".to_string(),
                    "a".to_string(),
                    "a".to_string(),
                ]),
                ..Default::default()
            }),
            ..Default::default()
        };
        let model = interpret(&response);
        assert_eq!(model.key_concerns, vec!["b", "a", "a"]);
        assert_eq!(model.positive_indicators, vec![NO_INDICATORS.to_string()]);
    }

    #[test]
    fn empty_summary_hides_the_section() {
        let response = RawAnalysisResponse {
            detailed_results: Some(DetailedResults {
                summary: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(interpret(&response).summary.is_none());
    }

    #[test]
    fn assessment_label_keeps_casing_but_tone_is_case_insensitive() {
        let response = RawAnalysisResponse {
            is_propaganda: Some("YES".to_string()),
            ..Default::default()
        };
        let model = interpret(&response);
        assert_eq!(model.propaganda_assessment.label, "YES");
        assert_eq!(model.propaganda_assessment.tone(), AssessmentTone::Yes);
    }

    #[test]
    fn interpret_is_idempotent() {
        let response = RawAnalysisResponse {
            credibility_score: Some(55.2),
            is_out_of_context: Some("No".to_string()),
            url: "https://example.com".to_string(),
            ..Default::default()
        };
        assert_eq!(interpret(&response), interpret(&response));
    }
}
