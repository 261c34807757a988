pub mod health;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::analysis::handlers as analysis_handlers;
use crate::planning::handlers as planning_handlers;
use crate::questions;
use crate::recommend::handlers as recommend_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // CV analysis
        .route(
            "/api/v1/cv/analyze",
            post(analysis_handlers::handle_analyze_cv),
        )
        .route(
            "/api/v1/cv/recommendations",
            post(recommend_handlers::handle_recommendations),
        )
        // Questionnaire
        .route("/api/v1/questions", get(questions::handle_list_questions))
        .route(
            "/api/v1/responses",
            post(questions::handle_submit_responses),
        )
        // Career planning
        .route("/api/v1/plans", post(planning_handlers::handle_generate_plan))
        .route(
            "/api/v1/plans/:plan_id",
            get(planning_handlers::handle_get_plan),
        )
        .route(
            "/api/v1/plans/items/:item_id/status",
            patch(planning_handlers::handle_update_item_status),
        )
        .route(
            "/api/v1/plans/skills/:skill_id/progress",
            patch(planning_handlers::handle_update_skill_progress),
        )
        .with_state(state)
}
