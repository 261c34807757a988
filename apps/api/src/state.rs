use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::analyzer::Analyzer;
use crate::llm_client::LlmClient;
use crate::planning::engine::PlanEngine;
use crate::recommend::catalog::CourseDescriptor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// None when no API key is configured; every AI feature falls back.
    pub llm: Option<LlmClient>,
    /// Pluggable CV analyzer. AiAnalyzer when an LLM is configured,
    /// FallbackAnalyzer otherwise.
    pub analyzer: Arc<dyn Analyzer>,
    pub plan_engine: Arc<PlanEngine>,
    /// Course catalog used when AI course search is unavailable or empty.
    pub catalog: Arc<Vec<CourseDescriptor>>,
}
