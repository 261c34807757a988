//! Prompt templates for career plan generation.

pub const CAREER_PLAN_SYSTEM: &str =
    "You are an expert career counselor. Create detailed, actionable career development plans.";

pub const CAREER_PLAN_PROMPT_TEMPLATE: &str = r#"Based on the following CV analysis and user responses, create a comprehensive career development plan.

CV Analysis:
{cv_analysis}

User Responses:
{user_responses}

Return a JSON response with this structure:
{
    "career_goals": ["goal1", "goal2", ...],
    "skill_gaps": [
        {"skill": "skill_name", "current_level": "beginner/intermediate/advanced", "target_level": "intermediate/advanced/expert", "priority": "high/medium/low"}
    ],
    "learning_path": [
        {"title": "Learning item", "type": "course/certification/practice", "duration": "X weeks", "priority": "high/medium/low", "description": "..."}
    ],
    "timeline": {
        "short_term": ["action1", "action2", ...],
        "medium_term": ["action1", "action2", ...],
        "long_term": ["action1", "action2", ...]
    },
    "recommendations": ["recommendation1", "recommendation2", ...]
}

Return only valid JSON, no additional text."#;
