use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored career plan. `timeline` is a JSON object with keys
/// short_term/medium_term/long_term; the other JSON columns are arrays.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CareerPlanRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub career_goals: Value,
    pub skill_gaps: Value,
    pub learning_path: Value,
    pub timeline: Value,
    pub recommendations: Value,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LearningItemRow {
    pub id: Uuid,
    pub career_plan_id: Uuid,
    pub title: String,
    pub description: String,
    pub item_type: String,
    pub duration: String,
    pub priority: String,
    pub status: String,
    pub item_order: i32,
    pub url: Option<String>,
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillGapRow {
    pub id: Uuid,
    pub career_plan_id: Uuid,
    pub skill_name: String,
    pub current_level: String,
    pub target_level: String,
    pub priority: String,
    pub progress_percentage: i32,
    pub notes: String,
}
