// LLM prompt constants for AI-backed course search.

/// System prompt for course search — enforces a JSON-array-only answer.
pub const COURSE_SEARCH_SYSTEM: &str =
    "You are an expert career advisor. Recommend real online courses from \
    popular platforms. Return only valid JSON arrays.";

/// Course search prompt template.
/// Replace: {target_job}, {current_role}, {experience_years}, {skills},
///          {strengths}, {improvement_areas}
pub const COURSE_SEARCH_PROMPT_TEMPLATE: &str = r#"You are a career advisor helping someone transition to the role of "{target_job}".

CV Analysis:
- Current Role: {current_role}
- Experience: {experience_years} years
- Existing Skills: {skills}
- Strengths: {strengths}
- Areas for Improvement: {improvement_areas}
- TARGET POSITION: {target_job}

CRITICAL: Recommend 10-15 SPECIFIC online courses that are ESSENTIAL for the "{target_job}" role.
These courses must directly prepare the candidate for this specific position.

Research and recommend REAL courses from platforms like:
- Coursera (including professional certificates)
- Udemy
- edX
- Pluralsight
- LinkedIn Learning
- Google Career Certificates
- AWS/Azure training
- Other reputable platforms

Focus on:
1. Core skills REQUIRED for "{target_job}" role
2. Skills that bridge gaps between current role and target role
3. Industry-standard certifications and credentials for this position
4. Practical, hands-on courses that build job-ready skills
5. Courses that address the specific improvement areas identified

Return a JSON array with this EXACT structure (no markdown, pure JSON):
[
    {
        "id": "course-1",
        "title": "Exact Course Title",
        "provider": "Platform Name",
        "url": "https://actual-course-url.com",
        "skills": ["specific", "job-relevant", "skills"],
        "level": "Beginner" or "Intermediate" or "Advanced",
        "duration": "Xh" or "X weeks",
        "rating": 4.5,
        "price": "$XX.XX" or "Free",
        "isFree": true or false,
        "description": "How this course helps achieve the {target_job} role"
    }
]

Requirements:
- ALL courses must be directly relevant to "{target_job}"
- Include courses for core competencies of this role
- Prioritize courses that address skill gaps
- Mix foundational and advanced courses
- Include certification prep courses if relevant
- Return ONLY valid JSON array, no explanations or markdown"#;
