use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use odontograma::infrastructure::audio::{FfmpegAudioTranscoder, check_ffmpeg_binary};
use odontograma::infrastructure::llm::GenerativeModelFactory;
use odontograma::infrastructure::observability::{TracingConfig, init_tracing};
use odontograma::infrastructure::prompts::PromptStore;
use odontograma::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::new(
        environment.as_str(),
        settings.logging.json,
    ));

    if let Err(e) = check_ffmpeg_binary() {
        tracing::warn!(error = %e, "WebM uploads cannot be transcoded until ffmpeg is installed");
    }

    let prompts = Arc::new(PromptStore::load(&settings.prompts.path));
    let model = GenerativeModelFactory::create(&settings.gemini)
        .context("Failed to build the generative model client")?;

    let state = AppState::new(model, Arc::new(FfmpegAudioTranscoder), prompts);
    let router = create_router(state, &settings.server);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(address = %addr, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
