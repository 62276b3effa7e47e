//! Deterministic ATS scoring pipeline and its HTTP surface.
//!
//! The pipeline is pure and synchronous: tokenizer → keyword overlap
//! analyzer → format scorer → score composer. Constant data (stop words,
//! canonical rewrites, format checks) is compiled once into an `AtsEngine`
//! carried in `AppState`; every invocation is independent and re-entrant.

pub mod format;
pub mod handlers;
pub mod overlap;
pub mod profile;
pub mod prompts;
pub mod report;
pub mod text;

use format::{FormatChecks, FormatResult};
use overlap::OverlapResult;
use profile::{ExperienceInfo, ProfileDetector};
use report::AtsReport;
use text::TextAnalyzer;

/// The heuristic scoring engine: all compiled tables in one injectable value.
pub struct AtsEngine {
    text: TextAnalyzer,
    format: FormatChecks,
    profile: ProfileDetector,
}

impl AtsEngine {
    pub fn new() -> Self {
        Self {
            text: TextAnalyzer::new(),
            format: FormatChecks::new(),
            profile: ProfileDetector::new(),
        }
    }

    pub fn text(&self) -> &TextAnalyzer {
        &self.text
    }

    pub fn overlap(&self, cv_text: &str, jd_text: &str) -> OverlapResult {
        overlap::overlap(&self.text, cv_text, jd_text)
    }

    pub fn format_score(&self, cv_text: &str) -> FormatResult {
        self.format.score(&self.text, cv_text)
    }

    pub fn compose(&self, cv_text: &str, jd_text: &str) -> AtsReport {
        report::compose(self, cv_text, jd_text)
    }

    pub fn experience_level(&self, cv_text: &str) -> ExperienceInfo {
        self.profile.experience_level(cv_text)
    }
}

impl Default for AtsEngine {
    fn default() -> Self {
        Self::new()
    }
}
