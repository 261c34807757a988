//! AI-backed course search. Failures and empty answers degrade to the
//! deterministic catalog matcher at the call site, so this function never
//! errors — it returns an empty list when the collaborator has nothing
//! usable.

use tracing::{debug, warn};

use crate::analysis::models::AnalysisResult;
use crate::llm_client::LlmClient;
use crate::recommend::catalog::CourseDescriptor;
use crate::recommend::prompts::{COURSE_SEARCH_PROMPT_TEMPLATE, COURSE_SEARCH_SYSTEM};

const SEARCH_TEMPERATURE: f32 = 0.7;

pub async fn search_courses(
    llm: &LlmClient,
    analysis: &AnalysisResult,
    target_job: &str,
) -> Vec<CourseDescriptor> {
    let prompt = COURSE_SEARCH_PROMPT_TEMPLATE
        .replace("{target_job}", target_job)
        .replace("{current_role}", &analysis.current_role)
        .replace("{experience_years}", &analysis.experience_years.to_string())
        .replace("{skills}", &join_or_unspecified(&analysis.skills, 15))
        .replace(
            "{strengths}",
            &join_or_unspecified(
                &analysis
                    .strengths
                    .iter()
                    .map(|s| s.title.clone())
                    .collect::<Vec<_>>(),
                5,
            ),
        )
        .replace(
            "{improvement_areas}",
            &join_or_unspecified(
                &analysis
                    .areas_for_improvement
                    .iter()
                    .map(|a| a.title.clone())
                    .collect::<Vec<_>>(),
                5,
            ),
        );

    match llm
        .call_json::<Vec<CourseDescriptor>>(&prompt, COURSE_SEARCH_SYSTEM, SEARCH_TEMPERATURE)
        .await
    {
        Ok(courses) if !courses.is_empty() => {
            debug!("AI course search returned {} courses", courses.len());
            courses
        }
        Ok(_) => {
            debug!("AI course search returned an empty list");
            Vec::new()
        }
        Err(e) => {
            warn!("AI course search failed: {e}");
            Vec::new()
        }
    }
}

fn join_or_unspecified(items: &[String], limit: usize) -> String {
    if items.is_empty() {
        "Not specified".to_string()
    } else {
        items
            .iter()
            .take(limit)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_or_unspecified_empty() {
        assert_eq!(join_or_unspecified(&[], 5), "Not specified");
    }

    #[test]
    fn test_join_or_unspecified_respects_limit() {
        let items: Vec<String> = (1..=4).map(|i| format!("s{i}")).collect();
        assert_eq!(join_or_unspecified(&items, 2), "s1, s2");
    }
}
