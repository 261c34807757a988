use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A stored CV upload with its analysis. `skills`, `industries`,
/// `strengths` and `areas_for_improvement` are JSON arrays mirroring the
/// analysis records field-for-field.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CvUploadRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub original_filename: String,
    pub extracted_text: Option<String>,
    pub skills: Value,
    pub experience_years: Option<i32>,
    pub education_level: Option<String>,
    pub current_role: Option<String>,
    pub industries: Value,
    pub strengths: Value,
    pub areas_for_improvement: Value,
    pub summary: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}
