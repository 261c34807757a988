//! Canonical analysis records and dual-shape normalization.
//!
//! The LLM is asked for fully structured strengths and improvement areas but
//! sometimes answers with bare strings. Both shapes deserialize through the
//! untagged input enums below and are resolved by one normalization function
//! per type, so every consumer downstream sees a single canonical record.

use serde::{Deserialize, Serialize};

/// Priority of an improvement area or plan item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

/// A fully structured strength extracted from a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Strength {
    pub title: String,
    pub description: String,
    pub evidence: String,
    pub impact: String,
}

/// A fully structured improvement area extracted from a CV.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImprovementArea {
    pub title: String,
    pub description: String,
    pub current_state: String,
    pub recommendation: String,
    pub priority: Priority,
}

/// Structured result of analyzing a CV. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub education_level: String,
    pub current_role: String,
    pub industries: Vec<String>,
    pub strengths: Vec<Strength>,
    pub areas_for_improvement: Vec<ImprovementArea>,
    pub summary: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Dual-shape inputs
// ────────────────────────────────────────────────────────────────────────────

/// A strength as the LLM returns it: either a bare label or a full record
/// with any subset of fields present.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StrengthInput {
    Full(StrengthRecord),
    Label(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrengthRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub evidence: Option<String>,
    #[serde(default)]
    pub impact: Option<String>,
}

/// An improvement area as the LLM returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AreaInput {
    Full(AreaRecord),
    Label(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub current_state: Option<String>,
    #[serde(default)]
    pub recommendation: Option<String>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

/// Raw LLM analysis output before normalization. All fields optional so a
/// partially filled answer still parses.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisDraft {
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_years: u32,
    #[serde(default = "unknown")]
    pub education_level: String,
    #[serde(default = "unknown")]
    pub current_role: String,
    #[serde(default)]
    pub industries: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<StrengthInput>,
    #[serde(default)]
    pub areas_for_improvement: Vec<AreaInput>,
    #[serde(default)]
    pub summary: String,
}

fn unknown() -> String {
    "Unknown".to_string()
}

impl AnalysisDraft {
    pub fn normalize(self) -> AnalysisResult {
        AnalysisResult {
            skills: self.skills,
            experience_years: self.experience_years,
            education_level: self.education_level,
            current_role: self.current_role,
            industries: self.industries,
            strengths: self.strengths.into_iter().map(normalize_strength).collect(),
            areas_for_improvement: self
                .areas_for_improvement
                .into_iter()
                .map(normalize_area)
                .collect(),
            summary: self.summary,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization
// ────────────────────────────────────────────────────────────────────────────

/// Resolves either strength shape into the canonical record, filling absent
/// fields with fixed placeholder text. Idempotent on already-complete records.
pub fn normalize_strength(input: StrengthInput) -> Strength {
    match input {
        StrengthInput::Label(label) => Strength {
            title: label,
            description: "This is a key strength identified from your CV.".to_string(),
            evidence: "Based on CV content analysis".to_string(),
            impact: "This strength enhances your career prospects.".to_string(),
        },
        StrengthInput::Full(record) => {
            let title_fallback = record.title.clone();
            Strength {
                title: record.title.unwrap_or_else(|| "Strength".to_string()),
                description: record
                    .description
                    .or(title_fallback)
                    .unwrap_or_else(|| "Strength".to_string()),
                evidence: record
                    .evidence
                    .unwrap_or_else(|| "Based on CV analysis".to_string()),
                impact: record
                    .impact
                    .unwrap_or_else(|| "This contributes to your professional profile.".to_string()),
            }
        }
    }
}

/// Resolves either improvement-area shape into the canonical record.
pub fn normalize_area(input: AreaInput) -> ImprovementArea {
    match input {
        AreaInput::Label(label) => ImprovementArea {
            description: "This area was identified as needing improvement based on your CV."
                .to_string(),
            current_state: "Not clearly demonstrated in CV".to_string(),
            recommendation: format!("Focus on developing skills in {label}."),
            priority: Priority::Medium,
            title: label,
        },
        AreaInput::Full(record) => {
            let raw_title = record.title.clone();
            ImprovementArea {
                title: record
                    .title
                    .unwrap_or_else(|| "Area for Improvement".to_string()),
                description: record
                    .description
                    .or_else(|| raw_title.clone())
                    .unwrap_or_else(|| "Area for Improvement".to_string()),
                current_state: record
                    .current_state
                    .unwrap_or_else(|| "Not clearly demonstrated in CV".to_string()),
                recommendation: record.recommendation.unwrap_or_else(|| {
                    format!(
                        "Focus on improving {}.",
                        raw_title.unwrap_or_else(|| "this area".to_string())
                    )
                }),
                priority: record.priority.unwrap_or_default(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_strength_gets_placeholder_fields() {
        let s = normalize_strength(StrengthInput::Label("Team Leadership".to_string()));
        assert_eq!(s.title, "Team Leadership");
        assert_eq!(
            s.description,
            "This is a key strength identified from your CV."
        );
        assert_eq!(s.evidence, "Based on CV content analysis");
        assert_eq!(s.impact, "This strength enhances your career prospects.");
    }

    #[test]
    fn test_partial_strength_record_fills_defaults() {
        let s = normalize_strength(StrengthInput::Full(StrengthRecord {
            title: Some("Cloud Expertise".to_string()),
            ..Default::default()
        }));
        assert_eq!(s.title, "Cloud Expertise");
        // Missing description falls back to the title
        assert_eq!(s.description, "Cloud Expertise");
        assert_eq!(s.evidence, "Based on CV analysis");
    }

    #[test]
    fn test_label_area_gets_placeholder_fields() {
        let a = normalize_area(AreaInput::Label("System Design".to_string()));
        assert_eq!(a.title, "System Design");
        assert_eq!(a.current_state, "Not clearly demonstrated in CV");
        assert_eq!(a.recommendation, "Focus on developing skills in System Design.");
        assert_eq!(a.priority, Priority::Medium);
    }

    #[test]
    fn test_empty_area_record_uses_this_area_in_recommendation() {
        let a = normalize_area(AreaInput::Full(AreaRecord::default()));
        assert_eq!(a.title, "Area for Improvement");
        assert_eq!(a.recommendation, "Focus on improving this area.");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let canonical = ImprovementArea {
            title: "Testing".to_string(),
            description: "No testing experience mentioned in the CV.".to_string(),
            current_state: "No testing experience mentioned".to_string(),
            recommendation: "Learn Jest and Cypress.".to_string(),
            priority: Priority::High,
        };
        let json = serde_json::to_string(&canonical).unwrap();
        let reparsed: AreaInput = serde_json::from_str(&json).unwrap();
        assert_eq!(normalize_area(reparsed), canonical);

        let strength = Strength {
            title: "Python".to_string(),
            description: "Solid Python background.".to_string(),
            evidence: "Five Python projects listed.".to_string(),
            impact: "Broad applicability.".to_string(),
        };
        let json = serde_json::to_string(&strength).unwrap();
        let reparsed: StrengthInput = serde_json::from_str(&json).unwrap();
        assert_eq!(normalize_strength(reparsed), strength);
    }

    #[test]
    fn test_draft_with_mixed_shapes_parses() {
        let json = r#"{
            "skills": ["Python", "Docker"],
            "experience_years": 4,
            "strengths": [
                "Fast learner",
                {"title": "Backend Depth", "description": "Strong API work"}
            ],
            "areas_for_improvement": [
                {"title": "DevOps", "priority": "high"},
                "Public speaking"
            ],
            "summary": "Backend engineer."
        }"#;
        let draft: AnalysisDraft = serde_json::from_str(json).unwrap();
        let result = draft.normalize();
        assert_eq!(result.education_level, "Unknown");
        assert_eq!(result.current_role, "Unknown");
        assert_eq!(result.strengths.len(), 2);
        assert_eq!(result.strengths[0].title, "Fast learner");
        assert_eq!(result.areas_for_improvement[0].priority, Priority::High);
        assert_eq!(
            result.areas_for_improvement[1].title,
            "Public speaking"
        );
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(serde_json::to_string(&Priority::Low).unwrap(), "\"low\"");
    }
}
