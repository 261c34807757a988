//! Career plan generation with a deterministic fallback.

use serde_json::Value;
use tracing::warn;

use crate::llm_client::LlmClient;
use crate::planning::models::{
    CareerPlanData, LearningItemSpec, QuestionnaireResponse, SkillGapSpec, Timeline,
};
use crate::planning::prompts::{CAREER_PLAN_PROMPT_TEMPLATE, CAREER_PLAN_SYSTEM};

const PLAN_TEMPERATURE: f32 = 0.7;

/// Produces career plans from a CV analysis and questionnaire responses.
/// Uses the LLM when one is configured, otherwise a canned starter plan.
pub struct PlanEngine {
    llm: Option<LlmClient>,
}

impl PlanEngine {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self { llm }
    }

    pub async fn generate(
        &self,
        cv_analysis: &Value,
        responses: &[QuestionnaireResponse],
    ) -> CareerPlanData {
        let Some(llm) = &self.llm else {
            return fallback_plan();
        };

        let analysis_json =
            serde_json::to_string_pretty(cv_analysis).unwrap_or_else(|_| "{}".to_string());
        let responses_json =
            serde_json::to_string_pretty(responses).unwrap_or_else(|_| "[]".to_string());

        let prompt = CAREER_PLAN_PROMPT_TEMPLATE
            .replace("{cv_analysis}", &analysis_json)
            .replace("{user_responses}", &responses_json);

        match llm
            .call_json::<CareerPlanData>(&prompt, CAREER_PLAN_SYSTEM, PLAN_TEMPERATURE)
            .await
        {
            Ok(plan) => plan,
            Err(e) => {
                warn!(error = %e, "career plan generation failed, using fallback plan");
                fallback_plan()
            }
        }
    }
}

/// Generic starter plan returned when no LLM is available or the call fails.
pub fn fallback_plan() -> CareerPlanData {
    CareerPlanData {
        career_goals: vec![
            "Advance in current field".to_string(),
            "Develop new skills".to_string(),
            "Increase marketability".to_string(),
        ],
        skill_gaps: vec![
            SkillGapSpec {
                skill: "Communication".to_string(),
                current_level: "intermediate".to_string(),
                target_level: "advanced".to_string(),
                priority: "high".to_string(),
            },
            SkillGapSpec {
                skill: "Leadership".to_string(),
                current_level: "beginner".to_string(),
                target_level: "intermediate".to_string(),
                priority: "medium".to_string(),
            },
        ],
        learning_path: vec![
            LearningItemSpec {
                title: "Communication Skills Course".to_string(),
                item_type: "course".to_string(),
                duration: "4 weeks".to_string(),
                priority: "high".to_string(),
                description: "Improve verbal and written communication".to_string(),
            },
            LearningItemSpec {
                title: "Leadership Workshop".to_string(),
                item_type: "course".to_string(),
                duration: "6 weeks".to_string(),
                priority: "medium".to_string(),
                description: "Develop leadership and management skills".to_string(),
            },
        ],
        timeline: Timeline {
            short_term: vec![
                "Complete communication course".to_string(),
                "Update LinkedIn profile".to_string(),
            ],
            medium_term: vec![
                "Take on leadership role".to_string(),
                "Network with industry professionals".to_string(),
            ],
            long_term: vec![
                "Apply for senior positions".to_string(),
                "Consider advanced certifications".to_string(),
            ],
        },
        recommendations: vec![
            "Focus on skill development".to_string(),
            "Build professional network".to_string(),
            "Stay updated with industry trends".to_string(),
        ],
    }
}

// ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fallback_plan_is_complete() {
        let plan = fallback_plan();
        assert_eq!(plan.career_goals.len(), 3);
        assert_eq!(plan.skill_gaps.len(), 2);
        assert_eq!(plan.learning_path.len(), 2);
        assert_eq!(plan.skill_gaps[0].skill, "Communication");
        assert_eq!(plan.skill_gaps[0].priority, "high");
        assert_eq!(plan.learning_path[1].duration, "6 weeks");
        assert_eq!(plan.timeline.short_term.len(), 2);
        assert_eq!(plan.timeline.long_term.len(), 2);
        assert_eq!(plan.recommendations.len(), 3);
    }

    #[tokio::test]
    async fn generate_without_llm_uses_fallback() {
        let engine = PlanEngine::new(None);
        let plan = engine.generate(&json!({"skills": ["Python"]}), &[]).await;
        assert_eq!(plan.career_goals[0], "Advance in current field");
    }
}
