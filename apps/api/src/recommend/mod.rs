pub mod catalog;
pub mod handlers;
pub mod matcher;
pub mod prompts;
pub mod search;
