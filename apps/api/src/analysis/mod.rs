pub mod analyzer;
pub mod fallback;
pub mod handlers;
pub mod models;
pub mod prompts;
