// LLM prompt constants for CV analysis.

/// System prompt for CV analysis — enforces JSON-only output.
pub const CV_ANALYSIS_SYSTEM: &str =
    "You are an expert CV analyzer and career advisor. \
    Analyze CVs deeply and provide detailed, personalized strengths and weaknesses \
    with specific evidence from the CV. Always return valid JSON.";

/// CV analysis prompt template. Replace `{cv_text}` before sending.
pub const CV_ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze the following CV text in detail and extract comprehensive, personalized information.
Provide SPECIFIC strengths and weaknesses based on the actual content of this CV.

Return a JSON response with the following structure:
{
    "skills": ["skill1", "skill2", ...],
    "experience_years": number,
    "education_level": "Bachelor's/Master's/PhD/etc",
    "current_role": "current job title",
    "industries": ["industry1", "industry2", ...],
    "strengths": [
        {
            "title": "Specific strength title",
            "description": "Detailed explanation of this strength with evidence from the CV",
            "evidence": "Specific examples or achievements from CV that demonstrate this strength",
            "impact": "How this strength benefits their career"
        }
    ],
    "areas_for_improvement": [
        {
            "title": "Specific area that needs improvement",
            "description": "Detailed explanation of why this is a gap based on CV content",
            "current_state": "What the CV currently shows (or lacks)",
            "recommendation": "Specific actionable steps to improve this area",
            "priority": "high/medium/low"
        }
    ],
    "summary": "Comprehensive professional summary highlighting key achievements and background"
}

IMPORTANT GUIDELINES:
1. Strengths must be SPECIFIC to this person's CV - cite actual experiences, skills, or achievements
2. Weaknesses must be IDENTIFIED from what's MISSING or WEAK in the CV - not generic suggestions
3. Provide DETAILED descriptions with evidence from the CV text
4. Make recommendations ACTIONABLE and SPECIFIC
5. Base everything on the actual CV content, not assumptions

CV Text:
{cv_text}"#;
