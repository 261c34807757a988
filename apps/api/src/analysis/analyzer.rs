//! Analyzer — pluggable, trait-based CV analysis.
//!
//! Two backends: `FallbackAnalyzer` (pure-Rust, deterministic, fully
//! testable) and `AiAnalyzer` (chat-completions backed, silently degrades to
//! the fallback on any call or parse failure).
//!
//! `AppState` holds an `Arc<dyn Analyzer>`, selected once at startup from
//! the configured credentials.

use async_trait::async_trait;
use tracing::warn;

use crate::analysis::fallback::FallbackAnalyzer;
use crate::analysis::models::{AnalysisDraft, AnalysisResult};
use crate::analysis::prompts::{CV_ANALYSIS_PROMPT_TEMPLATE, CV_ANALYSIS_SYSTEM};
use crate::llm_client::LlmClient;

const ANALYSIS_TEMPERATURE: f32 = 0.3;

/// The analyzer trait. Total: every backend must return a best-effort
/// result for any input, never an error.
#[async_trait]
pub trait Analyzer: Send + Sync {
    async fn analyze(&self, text: &str) -> AnalysisResult;

    /// Backend label for logging and transparency.
    fn backend(&self) -> &'static str;
}

#[async_trait]
impl Analyzer for FallbackAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        FallbackAnalyzer::analyze(self, text)
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}

/// LLM-backed analyzer. The collaborator's errors never propagate: an
/// unavailable API or unparsable answer degrades to the deterministic
/// fallback analysis.
pub struct AiAnalyzer {
    llm: LlmClient,
    fallback: FallbackAnalyzer,
}

impl AiAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self {
            llm,
            fallback: FallbackAnalyzer::new(),
        }
    }
}

#[async_trait]
impl Analyzer for AiAnalyzer {
    async fn analyze(&self, text: &str) -> AnalysisResult {
        let prompt = CV_ANALYSIS_PROMPT_TEMPLATE.replace("{cv_text}", text);

        match self
            .llm
            .call_json::<AnalysisDraft>(&prompt, CV_ANALYSIS_SYSTEM, ANALYSIS_TEMPERATURE)
            .await
        {
            Ok(draft) => draft.normalize(),
            Err(e) => {
                warn!("AI analysis failed, using fallback analysis: {e}");
                self.fallback.analyze(text)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "ai"
    }
}
