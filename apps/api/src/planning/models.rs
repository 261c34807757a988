//! Career plan data shapes, both LLM output and persisted state.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Completion state of a learning path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemStatus {
    NotStarted,
    InProgress,
    Completed,
    Paused,
}

impl ItemStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "not_started" => Some(Self::NotStarted),
            "in_progress" => Some(Self::InProgress),
            "completed" => Some(Self::Completed),
            "paused" => Some(Self::Paused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Paused => "paused",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGapSpec {
    pub skill: String,
    #[serde(default = "default_current_level")]
    pub current_level: String,
    #[serde(default = "default_target_level")]
    pub target_level: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningItemSpec {
    pub title: String,
    #[serde(rename = "type", default = "default_item_type")]
    pub item_type: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timeline {
    #[serde(default)]
    pub short_term: Vec<String>,
    #[serde(default)]
    pub medium_term: Vec<String>,
    #[serde(default)]
    pub long_term: Vec<String>,
}

/// Full plan payload as produced by the LLM or the fallback generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerPlanData {
    #[serde(default)]
    pub career_goals: Vec<String>,
    #[serde(default)]
    pub skill_gaps: Vec<SkillGapSpec>,
    #[serde(default)]
    pub learning_path: Vec<LearningItemSpec>,
    #[serde(default)]
    pub timeline: Timeline,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// One questionnaire answer, joined with its question type for prompting.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct QuestionnaireResponse {
    pub question_type: String,
    pub response_text: String,
}

fn default_current_level() -> String {
    "beginner".to_string()
}

fn default_target_level() -> String {
    "intermediate".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

fn default_item_type() -> String {
    "course".to_string()
}

// ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_status_round_trips_through_strings() {
        for s in ["not_started", "in_progress", "completed", "paused"] {
            let status = ItemStatus::parse(s).unwrap();
            assert_eq!(status.as_str(), s);
        }
        assert!(ItemStatus::parse("done").is_none());
        assert!(ItemStatus::parse("").is_none());
    }

    #[test]
    fn plan_data_tolerates_sparse_llm_output() {
        let raw = r#"{
            "career_goals": ["Become a tech lead"],
            "skill_gaps": [{"skill": "System Design"}],
            "learning_path": [{"title": "Design Primer"}]
        }"#;
        let plan: CareerPlanData = serde_json::from_str(raw).unwrap();
        assert_eq!(plan.skill_gaps[0].current_level, "beginner");
        assert_eq!(plan.skill_gaps[0].target_level, "intermediate");
        assert_eq!(plan.learning_path[0].item_type, "course");
        assert_eq!(plan.learning_path[0].priority, "medium");
        assert!(plan.timeline.short_term.is_empty());
        assert!(plan.recommendations.is_empty());
    }

    #[test]
    fn learning_item_type_uses_json_key_type() {
        let raw = r#"{"title": "AWS Cert", "type": "certification", "duration": "8 weeks"}"#;
        let item: LearningItemSpec = serde_json::from_str(raw).unwrap();
        assert_eq!(item.item_type, "certification");
        let back = serde_json::to_value(&item).unwrap();
        assert_eq!(back["type"], "certification");
    }
}
