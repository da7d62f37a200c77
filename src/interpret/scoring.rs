use super::model::ScoreBand;

/// Band the raw credibility score for styling. 70 and 40 belong to the
/// higher band.
pub fn score_band(score: f64) -> ScoreBand {
    if score >= 70.0 {
        ScoreBand::High
    } else if score >= 40.0 {
        ScoreBand::Medium
    } else {
        ScoreBand::Low
    }
}

/// Map the rounded score to its interpretation sentence. Buckets have
/// inclusive lower bounds at 80/60/40/20.
pub fn score_interpretation(score_value: i64) -> &'static str {
    if score_value >= 80 {
        "High credibility - Content appears trustworthy and well-sourced"
    } else if score_value >= 60 {
        "Good credibility - Content is generally reliable with minor concerns"
    } else if score_value >= 40 {
        "Moderate credibility - Content has notable concerns, verify claims"
    } else if score_value >= 20 {
        "Low credibility - Content has significant issues, approach with caution"
    } else {
        "Very low credibility - Content is highly questionable or unreliable"
    }
}
