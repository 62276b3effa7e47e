mod ats;
mod burnout;
mod config;
mod errors;
mod interview;
mod llm_client;
mod networking;
mod portfolio;
mod routes;
mod salary;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::AtsEngine;
use crate::config::Config;
use crate::llm_client::{CompletionBackend, GeminiClient, OpenAiClient};
use crate::routes::build_router;
use crate::salary::SalaryEstimator;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerFlow API v{}", env!("CARGO_PKG_VERSION"));

    // Pick the AI backend from whichever key is configured; Gemini wins when
    // both are present. No key means every analysis runs locally.
    let llm: Option<Arc<dyn CompletionBackend>> = if let Some(key) = config.gemini_api_key.clone() {
        let client = GeminiClient::new(key, config.gemini_model.clone());
        info!("LLM backend: {} (model: {})", client.name(), config.gemini_model);
        Some(Arc::new(client))
    } else if let Some(key) = config.openai_api_key.clone() {
        let client = OpenAiClient::new(key, config.openai_model.clone());
        info!("LLM backend: {} (model: {})", client.name(), config.openai_model);
        Some(Arc::new(client))
    } else {
        warn!("No LLM API key configured; analyses fall back to local heuristics");
        None
    };

    // Outbound client for GitHub profile fetches
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    let state = AppState {
        ats: Arc::new(AtsEngine::new()),
        salary: Arc::new(SalaryEstimator::new()),
        llm,
        http,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
