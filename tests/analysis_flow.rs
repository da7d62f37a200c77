//! End-to-end controller flows against a scripted backend.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use credlens::backend::{AnalysisBackend, BackendError};
use credlens::interpret::ScoreBand;
use credlens::models::{DetailedResults, HealthStatus, RawAnalysisResponse, RequestId};
use credlens::render::Renderer;
use credlens::request::{InteractionState, RequestController};

struct ScriptedBackend {
    calls: AtomicUsize,
    script: Mutex<VecDeque<Result<RawAnalysisResponse, String>>>,
}

impl ScriptedBackend {
    fn new(script: Vec<Result<RawAnalysisResponse, String>>) -> Arc<Self> {
        Arc::new(Self {
            calls: AtomicUsize::new(0),
            script: Mutex::new(script.into()),
        })
    }
}

#[async_trait]
impl AnalysisBackend for ScriptedBackend {
    async fn analyze(&self, _url: &str) -> Result<RawAnalysisResponse, BackendError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(BackendError::Rejected { message }),
            None => Err(BackendError::Rejected {
                message: "script exhausted".to_string(),
            }),
        }
    }

    async fn get_analysis(&self, _request_id: i64) -> Result<RawAnalysisResponse, BackendError> {
        match self.script.lock().unwrap().pop_front() {
            Some(Ok(response)) => Ok(response),
            _ => Err(BackendError::Rejected {
                message: "Analysis not found".to_string(),
            }),
        }
    }

    async fn health(&self) -> Result<HealthStatus, BackendError> {
        Ok(HealthStatus {
            status: "healthy".to_string(),
        })
    }
}

#[derive(Default)]
struct RecordingRenderer {
    states: Mutex<Vec<InteractionState>>,
}

impl Renderer for RecordingRenderer {
    fn render(&self, state: &InteractionState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

fn full_response(url: &str) -> RawAnalysisResponse {
    RawAnalysisResponse {
        request_id: Some(RequestId::Number(7)),
        url: url.to_string(),
        status: Some("completed".to_string()),
        credibility_score: Some(74.3),
        is_out_of_context: Some("No".to_string()),
        is_propaganda: Some("Uncertain".to_string()),
        content_context: Some("Opinion piece on energy policy.".to_string()),
        detailed_results: Some(DetailedResults {
            key_concerns: Some(vec!["Relies on a single think-tank report".to_string()]),
            positive_indicators: Some(vec!["Links primary sources".to_string()]),
            summary: Some("Reasonably sourced but one-sided.".to_string()),
            ..Default::default()
        }),
        analysis_duration: Some(18.42),
        error_message: None,
    }
}

#[tokio::test]
async fn fail_retry_then_new_analysis() {
    let backend = ScriptedBackend::new(vec![
        Err("Insufficient content extracted from URL".to_string()),
        Ok(full_response("http://example.com/a")),
        Ok(full_response("http://example.com/b")),
    ]);
    let renderer = Arc::new(RecordingRenderer::default());
    let controller = RequestController::new(backend.clone(), renderer.clone());

    // First attempt fails and surfaces the backend's message.
    controller.submit("http://example.com/a").await;
    match controller.settled().await {
        InteractionState::Error { url, message } => {
            assert_eq!(url, "http://example.com/a");
            assert_eq!(message, "Insufficient content extracted from URL");
        }
        other => panic!("expected error, got {:?}", other),
    }

    // Retry goes back to the backend with the same URL and succeeds.
    controller.retry().await;
    match controller.settled().await {
        InteractionState::Results { url, model } => {
            assert_eq!(url, "http://example.com/a");
            assert_eq!(model.score_value, 74);
            assert_eq!(model.score_band, ScoreBand::High);
            assert_eq!(model.request_id, "7");
            assert_eq!(model.summary.as_deref(), Some("Reasonably sourced but one-sided."));
        }
        other => panic!("expected results, got {:?}", other),
    }

    // A fresh submission replaces the previous results outright.
    controller.submit("http://example.com/b").await;
    match controller.settled().await {
        InteractionState::Results { url, .. } => assert_eq!(url, "http://example.com/b"),
        other => panic!("expected results, got {:?}", other),
    }

    assert_eq!(backend.calls.load(Ordering::SeqCst), 3);

    // Reset clears everything back to the initial state.
    controller.reset().await;
    assert_eq!(controller.state().await, InteractionState::Idle);

    let states = renderer.states.lock().unwrap();
    assert!(states.iter().filter(|s| s.is_loading()).count() == 3);
    assert!(matches!(states.last(), Some(InteractionState::Idle)));
}

#[tokio::test]
async fn whitespace_url_never_reaches_the_backend() {
    let backend = ScriptedBackend::new(vec![]);
    let controller = RequestController::new(backend.clone(), Arc::new(RecordingRenderer::default()));

    controller.submit(" \t ").await;

    match controller.settled().await {
        InteractionState::Error { url, message } => {
            assert_eq!(url, "");
            assert_eq!(message, "Please enter a valid URL");
        }
        other => panic!("expected error, got {:?}", other),
    }
    assert_eq!(backend.calls.load(Ordering::SeqCst), 0);
}
