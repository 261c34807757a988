//! Axum route handler for CV-driven course recommendations.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::analysis::handlers::read_upload_form;
use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::recommend::catalog::CourseDescriptor;
use crate::recommend::{matcher, search};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendationsResponse {
    pub analysis: AnalysisResult,
    pub target_job: String,
    pub recommendations: Vec<CourseDescriptor>,
}

/// POST /api/v1/cv/recommendations
///
/// Multipart upload: `file` plus an optional `target_job`. Analyzes the CV
/// in-flight (nothing is persisted) and returns matching courses. AI-backed
/// search runs first when an LLM is configured; the catalog matcher covers
/// everything else.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let (filename, bytes) = form
        .file
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;
    let target_job = form.target_job.unwrap_or_default();

    let text = extract_text(&filename, &bytes)?;
    let analysis = state.analyzer.analyze(&text).await;

    let mut recommendations = Vec::new();
    if let Some(llm) = &state.llm {
        recommendations = search::search_courses(llm, &analysis, &target_job).await;
    }
    if recommendations.is_empty() {
        info!("using catalog matcher for course recommendations");
        recommendations = matcher::recommend(&analysis, &target_job, &state.catalog);
    }

    Ok(Json(RecommendationsResponse {
        analysis,
        target_job,
        recommendations,
    }))
}
