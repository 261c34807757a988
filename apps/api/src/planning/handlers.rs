//! Axum route handlers for career plan generation and tracking.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::analysis::handlers::to_json;
use crate::errors::AppError;
use crate::models::cv::CvUploadRow;
use crate::models::plan::{CareerPlanRow, LearningItemRow, SkillGapRow};
use crate::planning::models::{CareerPlanData, ItemStatus, QuestionnaireResponse};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GeneratePlanRequest {
    pub user_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct PlanDetailResponse {
    pub plan: CareerPlanRow,
    pub learning_items: Vec<LearningItemRow>,
    pub skill_gaps: Vec<SkillGapRow>,
}

/// POST /api/v1/plans
///
/// Generates a plan from the user's latest CV analysis and their
/// questionnaire responses, then persists it together with its learning
/// items and skill gaps.
pub async fn handle_generate_plan(
    State(state): State<AppState>,
    Json(req): Json<GeneratePlanRequest>,
) -> Result<Json<PlanDetailResponse>, AppError> {
    let latest_cv: CvUploadRow = sqlx::query_as(
        r#"
        SELECT * FROM cv_uploads
        WHERE user_id = $1
        ORDER BY uploaded_at DESC
        LIMIT 1
        "#,
    )
    .bind(req.user_id)
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::Validation("Please upload your CV first.".to_string()))?;

    let responses: Vec<QuestionnaireResponse> = sqlx::query_as(
        r#"
        SELECT q.question_type, r.response_text
        FROM question_responses r
        JOIN career_questions q ON q.id = r.question_id
        WHERE r.user_id = $1
        ORDER BY q.question_order, q.id
        "#,
    )
    .bind(req.user_id)
    .fetch_all(&state.db)
    .await?;

    let cv_analysis = json!({
        "skills": latest_cv.skills,
        "experience_years": latest_cv.experience_years,
        "education_level": latest_cv.education_level,
        "current_role": latest_cv.current_role,
        "industries": latest_cv.industries,
        "strengths": latest_cv.strengths,
        "areas_for_improvement": latest_cv.areas_for_improvement,
    });

    let plan_data = state.plan_engine.generate(&cv_analysis, &responses).await;

    let plan_id = persist_plan(&state.db, req.user_id, &latest_cv, &plan_data).await?;
    info!(%plan_id, user_id = %req.user_id, "career plan generated");

    let detail = load_plan_detail(&state.db, plan_id, req.user_id).await?;
    Ok(Json(detail))
}

async fn persist_plan(
    db: &PgPool,
    user_id: Uuid,
    latest_cv: &CvUploadRow,
    plan: &CareerPlanData,
) -> Result<Uuid, AppError> {
    let plan_id = Uuid::new_v4();
    let title = format!(
        "Career Development Plan - {}",
        latest_cv.current_role.as_deref().unwrap_or("Professional")
    );

    sqlx::query(
        r#"
        INSERT INTO career_plans
            (id, user_id, title, description, career_goals, skill_gaps,
             learning_path, timeline, recommendations)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        "#,
    )
    .bind(plan_id)
    .bind(user_id)
    .bind(&title)
    .bind("AI-generated career development plan based on your CV analysis and responses.")
    .bind(to_json(&plan.career_goals)?)
    .bind(to_json(&plan.skill_gaps)?)
    .bind(to_json(&plan.learning_path)?)
    .bind(to_json(&plan.timeline)?)
    .bind(to_json(&plan.recommendations)?)
    .execute(db)
    .await?;

    for (i, item) in plan.learning_path.iter().enumerate() {
        sqlx::query(
            r#"
            INSERT INTO learning_items
                (id, career_plan_id, title, description, item_type, duration,
                 priority, item_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plan_id)
        .bind(&item.title)
        .bind(&item.description)
        .bind(&item.item_type)
        .bind(&item.duration)
        .bind(&item.priority)
        .bind(i as i32 + 1)
        .execute(db)
        .await?;
    }

    for gap in &plan.skill_gaps {
        sqlx::query(
            r#"
            INSERT INTO skill_gaps
                (id, career_plan_id, skill_name, current_level, target_level, priority)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(plan_id)
        .bind(&gap.skill)
        .bind(&gap.current_level)
        .bind(&gap.target_level)
        .bind(&gap.priority)
        .execute(db)
        .await?;
    }

    Ok(plan_id)
}

#[derive(Debug, Deserialize)]
pub struct UserScope {
    pub user_id: Uuid,
}

/// GET /api/v1/plans/:plan_id?user_id=...
pub async fn handle_get_plan(
    State(state): State<AppState>,
    Path(plan_id): Path<Uuid>,
    Query(scope): Query<UserScope>,
) -> Result<Json<PlanDetailResponse>, AppError> {
    let detail = load_plan_detail(&state.db, plan_id, scope.user_id).await?;
    Ok(Json(detail))
}

async fn load_plan_detail(
    db: &PgPool,
    plan_id: Uuid,
    user_id: Uuid,
) -> Result<PlanDetailResponse, AppError> {
    let plan: CareerPlanRow =
        sqlx::query_as("SELECT * FROM career_plans WHERE id = $1 AND user_id = $2")
            .bind(plan_id)
            .bind(user_id)
            .fetch_optional(db)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Career plan {plan_id} not found")))?;

    let learning_items: Vec<LearningItemRow> = sqlx::query_as(
        "SELECT * FROM learning_items WHERE career_plan_id = $1 ORDER BY item_order, id",
    )
    .bind(plan_id)
    .fetch_all(db)
    .await?;

    let skill_gaps: Vec<SkillGapRow> =
        sqlx::query_as("SELECT * FROM skill_gaps WHERE career_plan_id = $1 ORDER BY id")
            .bind(plan_id)
            .fetch_all(db)
            .await?;

    Ok(PlanDetailResponse {
        plan,
        learning_items,
        skill_gaps,
    })
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub user_id: Uuid,
    pub status: String,
}

/// PATCH /api/v1/plans/items/:item_id/status
pub async fn handle_update_item_status(
    State(state): State<AppState>,
    Path(item_id): Path<Uuid>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<Value>, AppError> {
    let status = ItemStatus::parse(&req.status)
        .ok_or_else(|| AppError::Validation("Invalid status".to_string()))?;

    let result = sqlx::query(
        r#"
        UPDATE learning_items SET status = $1
        WHERE id = $2
          AND career_plan_id IN (SELECT id FROM career_plans WHERE user_id = $3)
        "#,
    )
    .bind(status.as_str())
    .bind(item_id)
    .bind(req.user_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!(
            "Learning item {item_id} not found"
        )));
    }

    Ok(Json(json!({
        "message": "Status updated successfully",
        "new_status": status.as_str(),
    })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateProgressRequest {
    pub user_id: Uuid,
    pub progress_percentage: i32,
}

/// PATCH /api/v1/plans/skills/:skill_id/progress
pub async fn handle_update_skill_progress(
    State(state): State<AppState>,
    Path(skill_id): Path<Uuid>,
    Json(req): Json<UpdateProgressRequest>,
) -> Result<Json<Value>, AppError> {
    if !(0..=100).contains(&req.progress_percentage) {
        return Err(AppError::Validation(
            "Invalid progress percentage".to_string(),
        ));
    }

    let result = sqlx::query(
        r#"
        UPDATE skill_gaps SET progress_percentage = $1
        WHERE id = $2
          AND career_plan_id IN (SELECT id FROM career_plans WHERE user_id = $3)
        "#,
    )
    .bind(req.progress_percentage)
    .bind(skill_id)
    .bind(req.user_id)
    .execute(&state.db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Skill gap {skill_id} not found")));
    }

    Ok(Json(json!({
        "message": "Progress updated successfully",
        "new_progress": req.progress_percentage,
    })))
}
