//! Course catalog — read-only descriptors scored by the matcher.
//!
//! The builtin catalog mirrors what the recommendation UI expects
//! field-for-field (note the `isFree` wire name). It can be replaced
//! wholesale by pointing `COURSE_CATALOG_PATH` at a JSON array of the same
//! shape; either way the catalog is loaded once at startup and shared
//! read-only.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single course offering. `skills` tokens are author-supplied lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseDescriptor {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub url: String,
    pub skills: Vec<String>,
    pub level: String,
    pub duration: String,
    pub rating: f64,
    pub price: String,
    #[serde(rename = "isFree")]
    pub is_free: bool,
    pub description: String,
}

/// Loads the catalog from the given JSON file, or the builtin catalog when
/// no path is configured.
pub fn load_catalog(path: Option<&str>) -> Result<Vec<CourseDescriptor>> {
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read course catalog from '{path}'"))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("Invalid course catalog JSON in '{path}'"))
        }
        None => Ok(builtin_catalog()),
    }
}

#[allow(clippy::too_many_arguments)]
fn course(
    id: &str,
    title: &str,
    provider: &str,
    url: &str,
    skills: &[&str],
    level: &str,
    duration: &str,
    rating: f64,
    price: &str,
    is_free: bool,
    description: &str,
) -> CourseDescriptor {
    CourseDescriptor {
        id: id.to_string(),
        title: title.to_string(),
        provider: provider.to_string(),
        url: url.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        level: level.to_string(),
        duration: duration.to_string(),
        rating,
        price: price.to_string(),
        is_free,
        description: description.to_string(),
    }
}

/// The builtin ten-course catalog. Order matters: ties in the matcher keep
/// this order, and the zero-score fallback serves its head.
pub fn builtin_catalog() -> Vec<CourseDescriptor> {
    vec![
        course(
            "1",
            "React for Beginners",
            "Coursera",
            "https://coursera.org",
            &["react", "javascript", "frontend", "hooks"],
            "Beginner",
            "12h",
            4.8,
            "Free",
            true,
            "Learn React from scratch with hands-on projects and real-world examples.",
        ),
        course(
            "2",
            "Advanced React Patterns",
            "Udemy",
            "https://udemy.com",
            &["react", "hooks", "performance", "patterns"],
            "Advanced",
            "15h",
            4.9,
            "$89.99",
            false,
            "Master advanced React patterns and optimization techniques.",
        ),
        course(
            "3",
            "Data Structures in Python",
            "edX",
            "https://edx.org",
            &["python", "algorithms", "data structures"],
            "Intermediate",
            "8h",
            4.7,
            "Free",
            true,
            "Comprehensive guide to data structures and algorithms in Python.",
        ),
        course(
            "4",
            "Machine Learning Foundations",
            "Coursera",
            "https://coursera.org",
            &["ml", "python", "machine learning"],
            "Beginner",
            "20h",
            4.6,
            "$49.99",
            false,
            "Introduction to machine learning concepts and applications.",
        ),
        course(
            "5",
            "DevOps Essentials",
            "Udacity",
            "https://udacity.com",
            &["devops", "ci/cd", "docker", "deployment"],
            "Intermediate",
            "16h",
            4.5,
            "Free",
            true,
            "Learn DevOps practices and tools for modern software development.",
        ),
        course(
            "6",
            "AWS Cloud Practitioner",
            "AWS Training",
            "https://aws.amazon.com",
            &["aws", "cloud", "certification", "infrastructure"],
            "Beginner",
            "10h",
            4.8,
            "Free",
            true,
            "Prepare for the AWS Cloud Practitioner certification exam.",
        ),
        course(
            "7",
            "JavaScript Mastery",
            "Udemy",
            "https://udemy.com",
            &["javascript", "es6", "async", "programming"],
            "Intermediate",
            "18h",
            4.9,
            "$79.99",
            false,
            "Master modern JavaScript including ES6+, async/await, and advanced patterns.",
        ),
        course(
            "8",
            "TypeScript Fundamentals",
            "Pluralsight",
            "https://pluralsight.com",
            &["typescript", "javascript", "type safety"],
            "Intermediate",
            "10h",
            4.7,
            "Free",
            true,
            "Learn TypeScript from the ground up with practical examples.",
        ),
        course(
            "9",
            "Node.js Backend Development",
            "Coursera",
            "https://coursera.org",
            &["node.js", "backend", "api", "server"],
            "Advanced",
            "25h",
            4.8,
            "$99.99",
            false,
            "Build scalable backend applications with Node.js and Express.",
        ),
        course(
            "10",
            "Docker & Kubernetes",
            "Udemy",
            "https://udemy.com",
            &["docker", "kubernetes", "devops", "containers"],
            "Intermediate",
            "14h",
            4.6,
            "$69.99",
            false,
            "Master containerization and orchestration with Docker and Kubernetes.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_ten_courses() {
        assert_eq!(builtin_catalog().len(), 10);
    }

    #[test]
    fn test_catalog_skills_are_lowercase() {
        for course in builtin_catalog() {
            for skill in &course.skills {
                assert_eq!(skill, &skill.to_lowercase(), "skill in {}", course.title);
            }
        }
    }

    #[test]
    fn test_is_free_serializes_as_camel_case() {
        let json = serde_json::to_value(&builtin_catalog()[0]).unwrap();
        assert_eq!(json["isFree"], serde_json::json!(true));
        assert!(json.get("is_free").is_none());
    }

    #[test]
    fn test_load_catalog_defaults_to_builtin() {
        let catalog = load_catalog(None).unwrap();
        assert_eq!(catalog, builtin_catalog());
    }
}
