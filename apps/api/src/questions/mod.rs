//! Career questionnaire: seeded questions plus response capture.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::{FromRow, PgPool};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, FromRow)]
pub struct CareerQuestionRow {
    pub id: Uuid,
    pub question_text: String,
    pub question_type: String,
    pub question_order: i32,
}

const DEFAULT_QUESTIONS: &[(&str, &str)] = &[
    (
        "What are your primary career goals for the next 2-3 years?",
        "career_goals",
    ),
    (
        "What specific skills would you like to develop or improve?",
        "skills_interests",
    ),
    (
        "How many years of professional experience do you have?",
        "experience_level",
    ),
    (
        "What industry or field are you most interested in working in?",
        "industry_preference",
    ),
    (
        "What type of work environment do you prefer?",
        "work_environment",
    ),
    (
        "What are your salary expectations for your next role?",
        "career_goals",
    ),
    (
        "Are you interested in leadership or management roles?",
        "career_goals",
    ),
    ("What motivates you most in your career?", "career_goals"),
    (
        "Do you prefer working independently or in teams?",
        "work_environment",
    ),
    (
        "What are your biggest professional challenges right now?",
        "skills_interests",
    ),
];

/// Inserts the default questionnaire if the table is empty. Idempotent
/// across restarts.
pub async fn seed_default_questions(pool: &PgPool) -> Result<(), sqlx::Error> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM career_questions")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(());
    }

    for (i, (text, question_type)) in DEFAULT_QUESTIONS.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO career_questions (id, question_text, question_type, question_order)
            VALUES ($1, $2, $3, $4)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(text)
        .bind(question_type)
        .bind(i as i32 + 1)
        .execute(pool)
        .await?;
    }

    info!("seeded {} career questions", DEFAULT_QUESTIONS.len());
    Ok(())
}

#[derive(Debug, Serialize)]
struct QuestionPayload {
    id: Uuid,
    text: String,
    #[serde(rename = "type")]
    question_type: String,
    order: i32,
}

/// GET /api/v1/questions
pub async fn handle_list_questions(
    State(state): State<AppState>,
) -> Result<Json<Value>, AppError> {
    let rows: Vec<CareerQuestionRow> = sqlx::query_as(
        r#"
        SELECT id, question_text, question_type, question_order
        FROM career_questions
        WHERE is_active = TRUE
        ORDER BY question_order, id
        "#,
    )
    .fetch_all(&state.db)
    .await?;

    let questions: Vec<QuestionPayload> = rows
        .into_iter()
        .map(|q| QuestionPayload {
            id: q.id,
            text: q.question_text,
            question_type: q.question_type,
            order: q.question_order,
        })
        .collect();

    Ok(Json(json!({ "questions": questions })))
}

#[derive(Debug, Deserialize)]
pub struct ResponseItem {
    pub question_id: Uuid,
    pub response_text: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitResponsesRequest {
    pub user_id: Uuid,
    pub responses: Vec<ResponseItem>,
}

/// POST /api/v1/responses
///
/// Upserts one response per (user, question) pair.
pub async fn handle_submit_responses(
    State(state): State<AppState>,
    Json(req): Json<SubmitResponsesRequest>,
) -> Result<Json<Value>, AppError> {
    if req.responses.is_empty() {
        return Err(AppError::Validation("No responses provided".to_string()));
    }

    for item in &req.responses {
        let exists: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM career_questions WHERE id = $1")
                .bind(item.question_id)
                .fetch_optional(&state.db)
                .await?;
        if exists.is_none() {
            return Err(AppError::NotFound(format!(
                "Question {} not found",
                item.question_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO question_responses (id, user_id, question_id, response_text)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (user_id, question_id)
            DO UPDATE SET response_text = EXCLUDED.response_text, response_date = now()
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(req.user_id)
        .bind(item.question_id)
        .bind(&item.response_text)
        .execute(&state.db)
        .await?;
    }

    Ok(Json(json!({ "saved": req.responses.len() })))
}
