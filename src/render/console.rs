//! Console rendering of interaction states.

use crate::interpret::format::{format_duration_secs, truncate_url, URL_DISPLAY_MAX_CHARS};
use crate::interpret::{Assessment, AssessmentTone, DisplayModel};
use crate::request::InteractionState;

use super::Renderer;

pub struct ConsoleRenderer;

impl Renderer for ConsoleRenderer {
    fn render(&self, state: &InteractionState) {
        match state {
            InteractionState::Idle => {
                println!("Enter a URL to analyze (:quit to exit).");
            }
            InteractionState::Loading { url } => {
                println!("Analyzing {}...", url);
            }
            InteractionState::Error { message, .. } => {
                println!("Analysis failed: {}", message);
                println!("Type :retry to try again, or enter a new URL.");
            }
            InteractionState::Results { model, .. } => {
                print_results(model);
            }
        }
    }
}

fn print_results(model: &DisplayModel) {
    println!();
    println!(
        "Credibility score: {}/100 ({})",
        model.score_value,
        model.score_band.as_str()
    );
    println!("{}", model.interpretation);
    println!();
    print_assessment("Out of context", &model.context_assessment);
    print_assessment("Propaganda", &model.propaganda_assessment);
    println!();
    println!("About the content:");
    println!("  {}", model.content_context);
    println!();
    print_list("Key concerns", &model.key_concerns);
    print_list("Positive indicators", &model.positive_indicators);
    if let Some(summary) = &model.summary {
        println!("Summary:");
        println!("  {}", summary);
        println!();
    }
    println!(
        "URL: {}",
        truncate_url(&model.analyzed_url, URL_DISPLAY_MAX_CHARS)
    );
    println!("Duration: {}", format_duration_secs(model.duration_secs));
    println!("Request ID: #{}", model.request_id);
}

fn print_assessment(title: &str, assessment: &Assessment) {
    println!(
        "{}: {} {}",
        title,
        tone_marker(assessment.tone()),
        assessment.label
    );
    println!("  {}", assessment.explanation);
}

fn print_list(title: &str, items: &[String]) {
    println!("{}:", title);
    for item in items {
        println!("  - {}", item);
    }
    println!();
}

fn tone_marker(tone: AssessmentTone) -> &'static str {
    match tone {
        AssessmentTone::Yes => "[!]",
        AssessmentTone::No => "[ok]",
        AssessmentTone::Uncertain => "[?]",
    }
}
