//! Display formatting helpers. These shape text for presentation only and
//! never mutate stored data.

pub const URL_DISPLAY_MAX_CHARS: usize = 50;

/// Truncate a URL for display, appending an ellipsis marker when it exceeds
/// `max_chars`. Counted in characters so multibyte URLs cannot split a
/// code point.
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let mut truncated: String = url.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

/// Format an analysis duration with exactly one decimal place.
pub fn format_duration_secs(duration_secs: f64) -> String {
    format!("{:.1}s", duration_secs)
}
