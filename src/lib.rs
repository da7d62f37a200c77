pub mod backend;
pub mod interpret;
pub mod models;
pub mod render;
pub mod request;
pub mod settings;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use backend::{AnalysisBackend, HttpBackend};
use render::{ConsoleRenderer, Renderer};
use request::{InteractionState, RequestController};
use settings::SettingsStore;

/// Wire up the application and drive the interactive loop until `:quit`.
///
/// Everything the controller needs is constructed here and injected; the
/// loop itself is plain dispatch from input lines to controller intents.
pub async fn run() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("credlens starting up...");

    let settings_path = settings::default_settings_path()?;
    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let settings_store = SettingsStore::new(settings_path)?;
    let backend_settings = settings_store.backend();

    let backend = Arc::new(HttpBackend::new(
        &backend_settings.base_url,
        Duration::from_secs(backend_settings.timeout_secs),
    )?);
    let renderer = Arc::new(ConsoleRenderer);
    let controller = RequestController::new(backend.clone(), renderer.clone());

    renderer.render(&controller.state().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            ":quit" | ":q" => break,
            ":new" => controller.reset().await,
            ":retry" => {
                controller.retry().await;
                controller.settled().await;
            }
            ":health" => match backend.health().await {
                Ok(status) => println!("Service status: {}", status.status),
                Err(err) => println!("Health check failed: {}", err),
            },
            command if command.starts_with(":fetch") => {
                fetch_and_render(backend.as_ref(), renderer.as_ref(), command).await;
            }
            command if command.starts_with(':') => {
                println!("Unknown command: {}", command);
            }
            // Anything else is a URL to analyze; an empty line reproduces
            // the empty-input error, same as submitting an empty form.
            url => {
                controller.submit(url).await;
                controller.settled().await;
            }
        }
    }

    Ok(())
}

/// Retrieve a past analysis by id and render it like a fresh result.
async fn fetch_and_render(backend: &HttpBackend, renderer: &ConsoleRenderer, command: &str) {
    let argument = command.trim_start_matches(":fetch").trim();
    let request_id: i64 = match argument.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("Usage: :fetch <request-id>");
            return;
        }
    };

    match backend.get_analysis(request_id).await {
        Ok(response) => {
            let model = interpret::interpret(&response);
            renderer.render(&InteractionState::Results {
                url: response.url.clone(),
                model,
            });
        }
        Err(err) => println!("Fetch failed: {}", err),
    }
}
