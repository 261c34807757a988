//! Deterministic, pattern-based CV analysis used when no AI collaborator is
//! configured or the collaborator fails. Pure and total: every input text,
//! including the empty string, produces a best-effort `AnalysisResult`.

use regex::Regex;

use crate::analysis::models::{AnalysisResult, ImprovementArea, Priority, Strength};

/// Pattern-based analyzer. Regexes are compiled once at construction and the
/// instance is shared read-only for the life of the process.
pub struct FallbackAnalyzer {
    skill_patterns: Vec<Regex>,
    experience_patterns: Vec<Regex>,
}

impl Default for FallbackAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl FallbackAnalyzer {
    pub fn new() -> Self {
        // Ordered pattern groups: frameworks/languages, databases,
        // cloud/DevOps, data science, soft skills.
        let skill_patterns = [
            r"(?i)\b(?:Python|JavaScript|Java|C\+\+|React|Angular|Vue|Node\.js|Django|Flask|Spring|Laravel)\b",
            r"(?i)\b(?:SQL|PostgreSQL|MySQL|MongoDB|Redis|Elasticsearch)\b",
            r"(?i)\b(?:AWS|Azure|GCP|Docker|Kubernetes|Jenkins|Git)\b",
            r"(?i)\b(?:Machine Learning|AI|Data Science|Analytics|Statistics)\b",
            r"(?i)\b(?:Project Management|Leadership|Communication|Teamwork)\b",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid skill pattern"))
        .collect();

        let experience_patterns = [
            r"(?i)(\d+)\+?\s*years?\s*(?:of\s*)?experience",
            r"(?i)experience\s*:?\s*(\d+)\+?\s*years?",
        ]
        .iter()
        .map(|p| Regex::new(p).expect("Invalid experience pattern"))
        .collect();

        Self {
            skill_patterns,
            experience_patterns,
        }
    }

    /// Analyzes raw CV text. Skill tokens keep the casing they matched with;
    /// comparisons downstream are case-insensitive.
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        // Raw matches, pattern order then text order. Duplicates are kept
        // here because the strength prose counts them; the final skill set
        // is deduplicated below.
        let mut matches: Vec<String> = Vec::new();
        for pattern in &self.skill_patterns {
            for m in pattern.find_iter(text) {
                matches.push(m.as_str().to_string());
            }
        }

        let mut experience_years: u32 = 0;
        for pattern in &self.experience_patterns {
            if let Some(caps) = pattern.captures(text) {
                experience_years = caps[1].parse().unwrap_or(0);
                break;
            }
        }

        let skills_lower: Vec<String> = matches.iter().map(|s| s.to_lowercase()).collect();
        let has = |needle: &str| skills_lower.iter().any(|s| s.contains(needle));

        let mut detected_tech: Vec<&str> = Vec::new();
        if has("python") {
            detected_tech.push("Python");
        }
        if has("javascript") || has("js") {
            detected_tech.push("JavaScript");
        }
        if has("react") {
            detected_tech.push("React");
        }
        if has("java") {
            detected_tech.push("Java");
        }
        if has("sql") || has("database") {
            detected_tech.push("Database Management");
        }
        if has("docker") || has("kubernetes") || has("aws") || has("azure") {
            detected_tech.push("Cloud/DevOps");
        }

        let mut strengths: Vec<Strength> = Vec::new();
        let mut areas: Vec<ImprovementArea> = Vec::new();

        if !matches.is_empty() {
            if !detected_tech.is_empty() {
                let top = &detected_tech[..detected_tech.len().min(2)];
                let top_joined = top.join(", ");
                let evidence_skills: Vec<&str> = matches
                    .iter()
                    .filter(|s| {
                        let lower = s.to_lowercase();
                        top.iter().any(|tech| lower.contains(&tech.to_lowercase()))
                    })
                    .take(3)
                    .map(|s| s.as_str())
                    .collect();

                strengths.push(Strength {
                    title: format!("Strong Technical Foundation in {top_joined}"),
                    description: format!(
                        "Your CV demonstrates solid expertise in {top_joined}, which are highly valued in the current job market."
                    ),
                    evidence: format!("Skills listed include: {}", evidence_skills.join(", ")),
                    impact: "These skills position you well for roles requiring modern development practices and technical problem-solving."
                        .to_string(),
                });
                strengths.push(Strength {
                    title: "Problem-Solving and Technical Competence".to_string(),
                    description: "Your technical skill set shows ability to work with complex systems and solve challenging problems."
                        .to_string(),
                    evidence: format!(
                        "Experience with {} different technologies/skills",
                        matches.len()
                    ),
                    impact: "This versatility makes you adaptable to different projects and technical requirements."
                        .to_string(),
                });
            } else {
                strengths.push(Strength {
                    title: format!("Foundation in {}", matches[0]),
                    description: format!(
                        "Your CV shows experience with {} and related technologies.",
                        matches[0]
                    ),
                    evidence: format!(
                        "Skills include: {}",
                        matches.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
                    ),
                    impact: "This provides a solid base for further career development.".to_string(),
                });
            }

            // One template family per CV, selected by marker technology.
            areas = if has("python") {
                python_improvement_areas()
            } else if has("react") || has("javascript") {
                react_improvement_areas()
            } else {
                generic_improvement_areas()
            };
        }

        if strengths.is_empty() {
            strengths.push(Strength {
                title: "Technical Skills".to_string(),
                description: "Your CV demonstrates technical competency in programming and software development."
                    .to_string(),
                evidence: "Skills identified: Various technical skills".to_string(),
                impact: "These skills provide a foundation for career growth in technology."
                    .to_string(),
            });
        }
        if areas.is_empty() {
            areas.push(ImprovementArea {
                title: "Advanced Technical Skills".to_string(),
                description: "Consider developing deeper expertise in specific technologies or frameworks."
                    .to_string(),
                current_state: "Basic to intermediate skills demonstrated".to_string(),
                recommendation: "Focus on mastering one or two technologies deeply, build portfolio projects, and seek advanced courses or certifications."
                    .to_string(),
                priority: Priority::High,
            });
        }

        let summary = if text.chars().count() > 200 {
            let head: String = text.chars().take(200).collect();
            format!("{head}...")
        } else {
            text.to_string()
        };

        AnalysisResult {
            skills: dedup_preserving_order(matches),
            experience_years,
            education_level: "Unknown".to_string(),
            current_role: "Unknown".to_string(),
            industries: Vec::new(),
            strengths,
            areas_for_improvement: areas,
            summary,
        }
    }
}

/// Case-sensitive dedup keeping first occurrence, so repeated runs over the
/// same text always produce the same skill order.
fn dedup_preserving_order(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills.into_iter().filter(|s| seen.insert(s.clone())).collect()
}

fn python_improvement_areas() -> Vec<ImprovementArea> {
    vec![
        ImprovementArea {
            title: "Advanced Python Frameworks and Architecture".to_string(),
            description: "While you have Python skills, your CV doesn't show experience with modern frameworks like Django, FastAPI, or Flask that are essential for backend development roles."
                .to_string(),
            current_state: "Basic to intermediate Python knowledge demonstrated".to_string(),
            recommendation: "Take courses on Django or FastAPI to build production-ready web applications. Build portfolio projects using these frameworks."
                .to_string(),
            priority: Priority::High,
        },
        ImprovementArea {
            title: "System Design and Scalability".to_string(),
            description: "Your CV lacks evidence of experience designing scalable systems or working with distributed architectures."
                .to_string(),
            current_state: "No mention of system design, microservices, or scalability patterns"
                .to_string(),
            recommendation: "Learn system design principles, study distributed systems, and practice designing scalable architectures. Consider courses on system design interviews."
                .to_string(),
            priority: Priority::High,
        },
        ImprovementArea {
            title: "DevOps and Deployment Practices".to_string(),
            description: "Limited evidence of DevOps knowledge or production deployment experience in your CV."
                .to_string(),
            current_state: "No mention of CI/CD, containerization, or cloud deployment".to_string(),
            recommendation: "Learn Docker, Kubernetes basics, and CI/CD pipelines. Get hands-on with AWS, Azure, or GCP. Build projects that demonstrate deployment skills."
                .to_string(),
            priority: Priority::Medium,
        },
    ]
}

fn react_improvement_areas() -> Vec<ImprovementArea> {
    vec![
        ImprovementArea {
            title: "Advanced React Patterns and Performance Optimization".to_string(),
            description: "Your CV shows React knowledge but lacks evidence of advanced patterns, performance optimization, or state management expertise."
                .to_string(),
            current_state: "Basic React skills mentioned".to_string(),
            recommendation: "Master React hooks, context API, performance optimization techniques (memoization, code splitting), and state management libraries (Redux, Zustand). Build complex applications demonstrating these skills."
                .to_string(),
            priority: Priority::High,
        },
        ImprovementArea {
            title: "System Design and Architecture".to_string(),
            description: "Frontend developers benefit from understanding system architecture and how frontend integrates with backend systems."
                .to_string(),
            current_state: "No mention of architecture patterns or system design".to_string(),
            recommendation: "Learn frontend architecture patterns, API design, and how to design scalable frontend applications. Study micro-frontends and module federation."
                .to_string(),
            priority: Priority::Medium,
        },
        ImprovementArea {
            title: "Testing and Quality Assurance".to_string(),
            description: "Your CV doesn't mention testing frameworks or quality assurance practices, which are essential for production applications."
                .to_string(),
            current_state: "No testing experience mentioned".to_string(),
            recommendation: "Learn Jest, React Testing Library, Cypress, or Playwright. Practice writing unit, integration, and E2E tests. Add testing to your projects."
                .to_string(),
            priority: Priority::High,
        },
    ]
}

fn generic_improvement_areas() -> Vec<ImprovementArea> {
    vec![
        ImprovementArea {
            title: "Advanced Programming Patterns and Best Practices".to_string(),
            description: "Your CV shows programming skills but could benefit from demonstrating knowledge of design patterns, clean code principles, and advanced programming concepts."
                .to_string(),
            current_state: "Basic programming skills demonstrated".to_string(),
            recommendation: "Study design patterns, SOLID principles, and clean code practices. Build projects that showcase these concepts."
                .to_string(),
            priority: Priority::High,
        },
        ImprovementArea {
            title: "System Design and Architecture".to_string(),
            description: "Understanding how to design and architect systems is crucial for senior roles."
                .to_string(),
            current_state: "No system design experience mentioned".to_string(),
            recommendation: "Learn system design fundamentals, study how large-scale systems work, and practice designing systems from scratch."
                .to_string(),
            priority: Priority::High,
        },
        ImprovementArea {
            title: "Testing and Quality Assurance".to_string(),
            description: "Professional development requires strong testing practices.".to_string(),
            current_state: "No testing experience mentioned".to_string(),
            recommendation: "Learn testing frameworks relevant to your tech stack. Practice TDD (Test-Driven Development) and add comprehensive tests to your projects."
                .to_string(),
            priority: Priority::Medium,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_yields_generic_placeholders() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("");

        assert!(result.skills.is_empty());
        assert_eq!(result.experience_years, 0);
        assert_eq!(result.summary, "");
        assert_eq!(result.strengths.len(), 1);
        assert_eq!(result.strengths[0].title, "Technical Skills");
        assert_eq!(result.areas_for_improvement.len(), 1);
        assert_eq!(
            result.areas_for_improvement[0].title,
            "Advanced Technical Skills"
        );
    }

    #[test]
    fn test_experience_years_from_prose_pattern() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Software engineer with 5 years of experience in fintech.");
        assert_eq!(result.experience_years, 5);
    }

    #[test]
    fn test_experience_years_from_labeled_pattern() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Experience: 7+ years");
        assert_eq!(result.experience_years, 7);
    }

    #[test]
    fn test_experience_defaults_to_zero() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Recent graduate, eager to learn.");
        assert_eq!(result.experience_years, 0);
    }

    #[test]
    fn test_python_only_selects_python_template_family() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Python developer with 3 years of experience.");

        let titles: Vec<&str> = result
            .areas_for_improvement
            .iter()
            .map(|a| a.title.as_str())
            .collect();
        assert!(titles.contains(&"Advanced Python Frameworks and Architecture"));
        assert!(!titles.contains(&"Advanced React Patterns and Performance Optimization"));
        assert_eq!(result.areas_for_improvement.len(), 3);
    }

    #[test]
    fn test_python_wins_over_react_when_both_present() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Full-stack work in Python and React.");
        assert_eq!(
            result.areas_for_improvement[0].title,
            "Advanced Python Frameworks and Architecture"
        );
    }

    #[test]
    fn test_react_only_selects_react_template_family() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Built single-page apps with React.");
        assert_eq!(
            result.areas_for_improvement[0].title,
            "Advanced React Patterns and Performance Optimization"
        );
        assert_eq!(result.strengths[0].title, "Strong Technical Foundation in React");
    }

    #[test]
    fn test_soft_skills_without_markers_use_generic_family() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Known for Leadership and Communication.");
        assert_eq!(result.strengths.len(), 1);
        assert_eq!(result.strengths[0].title, "Foundation in Leadership");
        assert_eq!(
            result.areas_for_improvement[0].title,
            "Advanced Programming Patterns and Best Practices"
        );
    }

    #[test]
    fn test_skills_are_case_preserved_and_deduplicated() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("python, Python, PYTHON and Docker.");
        // Three distinct casings survive dedup; repeated exact tokens collapse.
        assert_eq!(result.skills, vec!["python", "Python", "PYTHON", "Docker"]);
    }

    #[test]
    fn test_strength_evidence_counts_raw_matches() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Python and Docker and more Python.");
        assert_eq!(
            result.strengths[1].evidence,
            "Experience with 3 different technologies/skills"
        );
    }

    #[test]
    fn test_summary_truncates_at_200_chars_with_ellipsis() {
        let analyzer = FallbackAnalyzer::new();
        let text = "x".repeat(250);
        let result = analyzer.analyze(&text);
        assert_eq!(result.summary.chars().count(), 203);
        assert!(result.summary.ends_with("..."));
        assert!(result.summary.starts_with("xxx"));
    }

    #[test]
    fn test_summary_of_short_text_is_verbatim() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Short CV.");
        assert_eq!(result.summary, "Short CV.");
    }

    #[test]
    fn test_unknown_defaults_and_empty_industries() {
        let analyzer = FallbackAnalyzer::new();
        let result = analyzer.analyze("Python developer.");
        assert_eq!(result.education_level, "Unknown");
        assert_eq!(result.current_role, "Unknown");
        assert!(result.industries.is_empty());
    }

    #[test]
    fn test_determinism_across_calls() {
        let analyzer = FallbackAnalyzer::new();
        let text = "Python, React, AWS, Docker. 8 years of experience.";
        assert_eq!(analyzer.analyze(text), analyzer.analyze(text));
    }
}
