use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{watch, Mutex};

use crate::backend::AnalysisBackend;
use crate::interpret::interpret;
use crate::models::{AnalysisRequest, RawAnalysisResponse};
use crate::render::Renderer;

use super::InteractionState;

const EMPTY_URL_MESSAGE: &str = "Please enter a valid URL";

struct ControllerInner {
    state: InteractionState,
    request: Option<AnalysisRequest>,
    /// Bumped on every submission that reaches the backend. A completion
    /// callback only applies while its generation is still current, so a
    /// superseded call can never overwrite a newer outcome.
    generation: u64,
}

/// Owns the request lifecycle: user intents come in, backend outcomes come
/// back, and every transition is pushed to the renderer as a full snapshot.
///
/// Collaborators are injected at construction; independent controller
/// instances share nothing.
pub struct RequestController<B, R> {
    inner: Arc<Mutex<ControllerInner>>,
    changed_tx: watch::Sender<()>,
    backend: Arc<B>,
    renderer: Arc<R>,
}

impl<B, R> Clone for RequestController<B, R> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            changed_tx: self.changed_tx.clone(),
            backend: self.backend.clone(),
            renderer: self.renderer.clone(),
        }
    }
}

impl<B, R> RequestController<B, R>
where
    B: AnalysisBackend + 'static,
    R: Renderer + 'static,
{
    pub fn new(backend: Arc<B>, renderer: Arc<R>) -> Self {
        let (changed_tx, _) = watch::channel(());
        Self {
            inner: Arc::new(Mutex::new(ControllerInner {
                state: InteractionState::default(),
                request: None,
                generation: 0,
            })),
            changed_tx,
            backend,
            renderer,
        }
    }

    pub async fn state(&self) -> InteractionState {
        self.inner.lock().await.state.clone()
    }

    /// Submit a URL for analysis. A blank URL fails locally without ever
    /// contacting the backend. A submission while another request is in
    /// flight supersedes it: the older call keeps running but its outcome
    /// is discarded.
    pub async fn submit(&self, url: &str) {
        let url = url.trim().to_string();

        if url.is_empty() {
            let snapshot = {
                let mut inner = self.inner.lock().await;
                inner.request = Some(AnalysisRequest::new(""));
                inner.state = InteractionState::Error {
                    url: String::new(),
                    message: EMPTY_URL_MESSAGE.to_string(),
                };
                inner.state.clone()
            };
            self.publish(&snapshot);
            return;
        }

        let (generation, snapshot) = {
            let mut inner = self.inner.lock().await;
            if inner.state.is_loading() {
                warn!("superseding in-flight analysis with {}", url);
            }
            inner.generation += 1;
            inner.request = Some(AnalysisRequest::new(url.clone()));
            inner.state = InteractionState::Loading { url: url.clone() };
            (inner.generation, inner.state.clone())
        };
        self.publish(&snapshot);

        let controller = self.clone();
        tokio::spawn(async move {
            match controller.backend.analyze(&url).await {
                Ok(response) => {
                    controller
                        .on_backend_success(generation, response)
                        .await
                }
                Err(err) => {
                    controller
                        .on_backend_failure(generation, err.to_string())
                        .await
                }
            }
        });
    }

    /// Re-submit the URL that produced the current error. Retrying an
    /// empty-URL error reproduces the same error; that mirrors the original
    /// flow and keeps retry deterministic.
    pub async fn retry(&self) {
        let url = match self.state().await {
            InteractionState::Error { url, .. } => url,
            state => {
                warn!("retry ignored outside of error state ({:?})", state);
                return;
            }
        };
        self.submit(&url).await;
    }

    /// Clear the stored request and return to `Idle` from any state.
    pub async fn reset(&self) {
        {
            let mut inner = self.inner.lock().await;
            inner.request = None;
            inner.state = InteractionState::Idle;
        }
        self.publish(&InteractionState::Idle);
    }

    /// Wait until no request is in flight, returning the settled state.
    pub async fn settled(&self) -> InteractionState {
        let mut changed_rx = self.changed_tx.subscribe();
        loop {
            let state = self.state().await;
            if !state.is_loading() {
                return state;
            }
            if changed_rx.changed().await.is_err() {
                return self.state().await;
            }
        }
    }

    async fn on_backend_success(&self, generation: u64, response: RawAnalysisResponse) {
        let snapshot = {
            let mut inner = self.inner.lock().await;
            if !Self::accepts(&inner, generation) {
                info!("discarding stale analysis result (generation {})", generation);
                return;
            }
            let url = inner
                .request
                .as_ref()
                .map(|request| request.url.clone())
                .unwrap_or_default();
            inner.state = InteractionState::Results {
                url,
                model: interpret(&response),
            };
            inner.state.clone()
        };
        self.publish(&snapshot);
    }

    async fn on_backend_failure(&self, generation: u64, message: String) {
        let snapshot = {
            let mut inner = self.inner.lock().await;
            if !Self::accepts(&inner, generation) {
                info!("discarding stale analysis failure (generation {})", generation);
                return;
            }
            let url = inner
                .request
                .as_ref()
                .map(|request| request.url.clone())
                .unwrap_or_default();
            inner.state = InteractionState::Error { url, message };
            inner.state.clone()
        };
        self.publish(&snapshot);
    }

    /// A backend outcome applies only while its generation is the current
    /// in-flight one.
    fn accepts(inner: &ControllerInner, generation: u64) -> bool {
        inner.state.is_loading() && inner.generation == generation
    }

    fn publish(&self, snapshot: &InteractionState) {
        self.renderer.render(snapshot);
        let _ = self.changed_tx.send(());
    }
}
