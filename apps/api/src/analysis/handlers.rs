//! Axum route handlers for CV analysis.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use crate::analysis::models::AnalysisResult;
use crate::errors::AppError;
use crate::extract::extract_text;
use crate::state::AppState;

/// Parsed multipart upload form shared by the analysis endpoints.
pub(crate) struct UploadForm {
    pub user_id: Option<Uuid>,
    pub target_job: Option<String>,
    pub file: Option<(String, Vec<u8>)>,
}

pub(crate) async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm {
        user_id: None,
        target_job: None,
        file: None,
    };

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        match field.name() {
            Some("user_id") => {
                let raw = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?;
                let parsed = raw
                    .trim()
                    .parse::<Uuid>()
                    .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?;
                form.user_id = Some(parsed);
            }
            Some("target_job") => {
                form.target_job = Some(
                    field.text().await.map_err(|e| {
                        AppError::Validation(format!("Invalid multipart payload: {e}"))
                    })?,
                );
            }
            Some("file") => {
                let filename = field.file_name().unwrap_or("cv.txt").to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?;
                form.file = Some((filename, bytes.to_vec()));
            }
            _ => {}
        }
    }

    Ok(form)
}

#[derive(Debug, Serialize)]
pub struct AnalyzeCvResponse {
    pub cv_id: Uuid,
    pub analysis: AnalysisResult,
}

/// POST /api/v1/cv/analyze
///
/// Multipart upload: `file` (PDF or plain text) and `user_id`. Extracts
/// text, runs the configured analyzer, and persists the result.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzeCvResponse>, AppError> {
    let form = read_upload_form(multipart).await?;

    let user_id = form
        .user_id
        .ok_or_else(|| AppError::Validation("user_id is required".to_string()))?;
    let (filename, bytes) = form
        .file
        .ok_or_else(|| AppError::Validation("No file provided".to_string()))?;

    let text = extract_text(&filename, &bytes)?;
    let analysis = state.analyzer.analyze(&text).await;

    let cv_id = persist_analysis(&state.db, user_id, &filename, &text, &analysis).await?;

    Ok(Json(AnalyzeCvResponse { cv_id, analysis }))
}

async fn persist_analysis(
    db: &PgPool,
    user_id: Uuid,
    filename: &str,
    text: &str,
    analysis: &AnalysisResult,
) -> Result<Uuid, AppError> {
    let cv_id = Uuid::new_v4();

    sqlx::query(
        r#"
        INSERT INTO cv_uploads
            (id, user_id, original_filename, extracted_text, skills,
             experience_years, education_level, current_role, industries,
             strengths, areas_for_improvement, summary)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
        "#,
    )
    .bind(cv_id)
    .bind(user_id)
    .bind(filename)
    .bind(text)
    .bind(to_json(&analysis.skills)?)
    .bind(analysis.experience_years as i32)
    .bind(&analysis.education_level)
    .bind(&analysis.current_role)
    .bind(to_json(&analysis.industries)?)
    .bind(to_json(&analysis.strengths)?)
    .bind(to_json(&analysis.areas_for_improvement)?)
    .bind(&analysis.summary)
    .execute(db)
    .await?;

    Ok(cv_id)
}

pub(crate) fn to_json<T: Serialize>(value: &T) -> Result<Value, AppError> {
    serde_json::to_value(value).map_err(|e| AppError::Internal(e.into()))
}
