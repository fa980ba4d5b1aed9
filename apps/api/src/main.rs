mod analysis;
mod config;
mod errors;
mod llm_client;
mod matching;
mod resume;
mod routes;
mod state;
mod storage;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::GeminiNarrator;
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::matching::MatchContext;
use crate::routes::build_router;
use crate::state::AppState;
use crate::storage::jobs::load_jobs_corpus;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillgap API v{}", env!("CARGO_PKG_VERSION"));

    std::fs::create_dir_all(&config.upload_dir)
        .with_context(|| format!("cannot create {}", config.upload_dir.display()))?;
    std::fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("cannot create {}", config.data_dir.display()))?;

    // Load the job corpus and fit the matching model, once, before serving.
    // Every request reuses this context; the model is never refit per query.
    let corpus = load_jobs_corpus(&config.jobs_csv)?;
    let matcher = MatchContext::new(corpus).context("failed to build match context")?;
    info!(
        "Match context ready: {} jobs, {} skill dimensions",
        matcher.corpus_size(),
        matcher.dimensions()
    );

    // Initialize LLM client
    let llm = LlmClient::new(config.gemini_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let narrator = Arc::new(GeminiNarrator(llm.clone()));

    // Build app state
    let state = AppState {
        llm,
        config: config.clone(),
        matcher: Arc::new(matcher),
        narrator,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
