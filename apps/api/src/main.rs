mod analysis;
mod config;
mod db;
mod errors;
mod extract;
mod llm_client;
mod models;
mod planning;
mod questions;
mod recommend;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::analysis::analyzer::{AiAnalyzer, Analyzer};
use crate::analysis::fallback::FallbackAnalyzer;
use crate::config::Config;
use crate::db::{create_pool, init_schema};
use crate::llm_client::LlmClient;
use crate::planning::engine::PlanEngine;
use crate::questions::seed_default_questions;
use crate::recommend::catalog::load_catalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (panics on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Growth API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    init_schema(&db).await?;
    seed_default_questions(&db).await?;

    // Initialize LLM client when credentials are present
    let llm = config.openai_api_key.clone().map(|key| {
        LlmClient::new(
            key,
            config.openai_api_base.clone(),
            config.openai_model.clone(),
        )
    });

    let analyzer: Arc<dyn Analyzer> = match &llm {
        Some(client) => {
            info!("LLM client initialized (model: {})", client.model());
            Arc::new(AiAnalyzer::new(client.clone()))
        }
        None => {
            info!("No LLM credentials configured, using fallback analysis");
            Arc::new(FallbackAnalyzer::new())
        }
    };
    info!("CV analyzer backend: {}", analyzer.backend());

    // Load course catalog (builtin unless COURSE_CATALOG_PATH points elsewhere)
    let catalog = load_catalog(config.course_catalog_path.as_deref())?;
    info!("Course catalog loaded ({} courses)", catalog.len());

    let plan_engine = Arc::new(PlanEngine::new(llm.clone()));

    // Build app state
    let state = AppState {
        db,
        llm,
        analyzer,
        plan_engine,
        catalog: Arc::new(catalog),
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
