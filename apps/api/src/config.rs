use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup when required variables are missing. The AI
/// credentials are deliberately optional — without them the service
/// runs entirely on the deterministic fallback analyzer.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Chat-completions credentials. `None` selects the fallback analyzer.
    pub openai_api_key: Option<String>,
    pub openai_api_base: String,
    pub openai_model: String,
    /// Optional JSON file overriding the builtin course catalog.
    pub course_catalog_path: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|k| !k.is_empty()),
            openai_api_base: std::env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            openai_model: std::env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            course_catalog_path: std::env::var("COURSE_CATALOG_PATH").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
