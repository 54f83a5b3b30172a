mod candidate;
mod config;
mod errors;
mod llm_client;
mod outreach;
mod requirements;
mod routes;
mod scoring;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::outreach::llm::LlmOutreachWriter;
use crate::outreach::template::TemplateOutreachWriter;
use crate::outreach::writer::OutreachWriter;
use crate::routes::build_router;
use crate::scoring::{ReferenceTables, ScoringEngine};
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

    info!("Starting Scout API v{}", env!("CARGO_PKG_VERSION"));

    if let Some(threads) = config.scoring_threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the scoring thread pool")?;
        info!("Scoring pool: {threads} threads");
    }

    // Reference tables are validated here; a bad table stops startup.
    let tables = ReferenceTables::load(config.reference_tables_path.as_deref())
        .context("Failed to load reference tables")?;
    let engine = Arc::new(ScoringEngine::new(tables)?);
    info!(
        "Reference tables loaded (target location: {}, {} top companies, {} elite universities)",
        engine.tables().target_location,
        engine.tables().top_companies.len(),
        engine.tables().elite_universities.len()
    );

    let outreach: Arc<dyn OutreachWriter> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("Outreach writer: llm (model: {})", llm_client::MODEL);
            Arc::new(LlmOutreachWriter::new(llm))
        }
        None => {
            info!("Outreach writer: template (ANTHROPIC_API_KEY not set)");
            Arc::new(TemplateOutreachWriter)
        }
    };

    let state = AppState {
        engine,
        outreach,
        config: config.clone(),
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
