//! Course Matcher — deterministic keyword-relevance scoring over the course
//! catalog.
//!
//! The point weights (5/3/4/2/1/3/2) and the stable tie-break on catalog
//! order are behavioral contract: downstream ranking depends on them, so do
//! not "improve" the heuristic.

use crate::analysis::models::AnalysisResult;
use crate::recommend::catalog::CourseDescriptor;

/// Scores the catalog against the analysis and an optional target job and
/// returns the top matches. Pure and total: absence of matches degrades to
/// catalog-order fallbacks, never to an empty list unless the catalog
/// itself is empty.
pub fn recommend(
    analysis: &AnalysisResult,
    target_job: &str,
    catalog: &[CourseDescriptor],
) -> Vec<CourseDescriptor> {
    // Words worth matching from the improvement areas: title and
    // description, lowercased, length > 3. Duplicates kept — each
    // occurrence scores.
    let mut area_words: Vec<String> = Vec::new();
    for area in &analysis.areas_for_improvement {
        area_words.extend(meaningful_words(&area.title));
        area_words.extend(meaningful_words(&area.description));
    }

    let existing_skills: Vec<String> = analysis.skills.iter().map(|s| s.to_lowercase()).collect();

    let target_lower = target_job.to_lowercase();
    let target_words = meaningful_words(target_job);

    let mut scored: Vec<(i32, &CourseDescriptor)> = catalog
        .iter()
        .map(|course| (score_course(course, &area_words, &existing_skills, target_job, &target_words), course))
        .collect();

    // Stable descending sort: equal scores keep catalog order.
    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let top: Vec<CourseDescriptor> = scored
        .iter()
        .filter(|(score, _)| *score > 0)
        .take(10)
        .map(|(_, course)| (*course).clone())
        .collect();
    if !top.is_empty() {
        return top;
    }

    // No course scored: first try courses whose skill tokens appear inside
    // the target job string, then fall back to the catalog head.
    if !target_job.is_empty() {
        let by_target: Vec<CourseDescriptor> = scored
            .iter()
            .filter(|(_, course)| {
                course
                    .skills
                    .iter()
                    .any(|skill| target_lower.contains(&skill.to_lowercase()))
            })
            .take(6)
            .map(|(_, course)| (*course).clone())
            .collect();
        if !by_target.is_empty() {
            return by_target;
        }
    }

    scored
        .iter()
        .take(6)
        .map(|(_, course)| (*course).clone())
        .collect()
}

fn score_course(
    course: &CourseDescriptor,
    area_words: &[String],
    existing_skills: &[String],
    target_job: &str,
    target_words: &[String],
) -> i32 {
    let title_lower = course.title.to_lowercase();
    let description_lower = course.description.to_lowercase();
    let course_skills: Vec<String> = course.skills.iter().map(|s| s.to_lowercase()).collect();

    let mut score = 0;

    // Highest priority: courses that match improvement areas.
    for word in area_words {
        if course_skills.iter().any(|skill| skill.contains(word.as_str())) {
            score += 5;
        }
        if title_lower.contains(word.as_str()) || description_lower.contains(word.as_str()) {
            score += 3;
        }
    }

    // High priority: courses that build on existing skills.
    for skill in existing_skills {
        if course_skills.iter().any(|cs| cs == skill) {
            score += 4; // exact match
        } else if course_skills
            .iter()
            .any(|cs| skill.contains(cs.as_str()) || cs.contains(skill.as_str()))
        {
            score += 2; // partial match, either direction
        }
        if title_lower.contains(skill.as_str()) || description_lower.contains(skill.as_str()) {
            score += 1;
        }
    }

    // Boost when the target job matches course skills or title.
    if !target_job.is_empty() {
        for word in target_words {
            if course_skills.iter().any(|skill| skill.contains(word.as_str())) {
                score += 3;
            }
            if title_lower.contains(word.as_str()) {
                score += 2;
            }
        }
    }

    score
}

/// Lowercased whitespace-split words longer than three characters.
fn meaningful_words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(|w| w.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::models::{ImprovementArea, Priority};
    use crate::recommend::catalog::builtin_catalog;

    fn analysis_with(skills: Vec<&str>, areas: Vec<ImprovementArea>) -> AnalysisResult {
        AnalysisResult {
            skills: skills.into_iter().map(|s| s.to_string()).collect(),
            experience_years: 0,
            education_level: "Unknown".to_string(),
            current_role: "Unknown".to_string(),
            industries: vec![],
            strengths: vec![],
            areas_for_improvement: areas,
            summary: String::new(),
        }
    }

    fn area(title: &str, description: &str) -> ImprovementArea {
        ImprovementArea {
            title: title.to_string(),
            description: description.to_string(),
            current_state: String::new(),
            recommendation: String::new(),
            priority: Priority::Medium,
        }
    }

    #[test]
    fn test_react_skill_ranks_react_courses_first() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(vec!["react"], vec![]);

        let courses = recommend(&analysis, "", &catalog);
        let titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();

        assert!(titles.contains(&"React for Beginners"));
        assert!(titles.contains(&"Advanced React Patterns"));
        assert!(!titles.contains(&"AWS Cloud Practitioner"));
    }

    #[test]
    fn test_improvement_area_words_outrank_plain_skill_matches() {
        let catalog = builtin_catalog();
        // "performance" is a skill token only on Advanced React Patterns, so
        // the area word pushes it above the beginner course (13 vs 8).
        let analysis = analysis_with(vec![], vec![area("React performance", "")]);

        let courses = recommend(&analysis, "", &catalog);
        assert_eq!(courses[0].title, "Advanced React Patterns");
        assert_eq!(courses[1].title, "React for Beginners");
    }

    #[test]
    fn test_never_more_than_ten_results() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(
            vec![
                "react",
                "python",
                "javascript",
                "docker",
                "aws",
                "typescript",
                "node.js",
                "devops",
                "ml",
                "kubernetes",
            ],
            vec![],
        );

        let courses = recommend(&analysis, "", &catalog);
        assert_eq!(courses.len(), 10);
    }

    #[test]
    fn test_zero_scores_and_empty_target_returns_catalog_head() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(vec![], vec![]);

        let courses = recommend(&analysis, "", &catalog);
        assert_eq!(courses.len(), 6);
        assert_eq!(courses[0].title, "React for Beginners");
        let ids: Vec<&str> = courses.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
    }

    #[test]
    fn test_zero_scores_with_target_prefers_skill_containment() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(vec![], vec![]);

        // "aws" is too short to score as a target word, so scoring stays at
        // zero, but the skill token "aws" appears inside the target string.
        let courses = recommend(&analysis, "aws", &catalog);
        assert_eq!(courses.len(), 1);
        assert_eq!(courses[0].title, "AWS Cloud Practitioner");
    }

    #[test]
    fn test_target_job_words_boost_matching_courses() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(vec![], vec![]);

        let courses = recommend(&analysis, "react developer", &catalog);
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].title, "React for Beginners");
        assert_eq!(courses[1].title, "Advanced React Patterns");
    }

    #[test]
    fn test_stable_order_and_determinism() {
        let catalog = builtin_catalog();
        let analysis = analysis_with(vec!["python"], vec![]);

        let first = recommend(&analysis, "", &catalog);
        let second = recommend(&analysis, "", &catalog);
        assert_eq!(first, second);

        // Exact skill match plus title mention (5) beats exact match alone (4).
        assert_eq!(first[0].title, "Data Structures in Python");
        assert_eq!(first[1].title, "Machine Learning Foundations");
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let analysis = analysis_with(vec!["react"], vec![]);
        assert!(recommend(&analysis, "", &[]).is_empty());
    }

    #[test]
    fn test_meaningful_words_filters_short_words() {
        assert_eq!(
            meaningful_words("Go at web SCALE now"),
            vec!["scale".to_string()]
        );
    }
}
