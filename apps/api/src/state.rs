use std::sync::Arc;

use crate::ats::AtsEngine;
use crate::llm_client::CompletionBackend;
use crate::salary::SalaryEstimator;

/// Shared application state injected into all route handlers via Axum
/// extractors. The engines hold only compiled constant data, so every
/// request sees the same immutable tables.
#[derive(Clone)]
pub struct AppState {
    pub ats: Arc<AtsEngine>,
    pub salary: Arc<SalaryEstimator>,
    /// `None` when no API key is configured: handlers skip straight to the
    /// local heuristics.
    pub llm: Option<Arc<dyn CompletionBackend>>,
    /// Outbound client for non-LLM fetches (GitHub profile pages).
    pub http: reqwest::Client,
}

impl AppState {
    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            ats: Arc::new(AtsEngine::new()),
            salary: Arc::new(SalaryEstimator::new()),
            llm: None,
            http: reqwest::Client::new(),
        }
    }
}
