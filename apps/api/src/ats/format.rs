//! Formatting and completeness heuristics over a raw CV.

use regex::Regex;
use serde::Serialize;

use super::text::TextAnalyzer;

const MAX_LINE_LEN: usize = 160;
const LONG_LINE_THRESHOLD: usize = 3;

#[derive(Debug, Clone, Serialize)]
pub struct FormatResult {
    /// 0–100; starts at 100 and loses fixed penalties per failed check.
    pub score: u32,
    /// One human-readable deficiency per failed check, in check order.
    pub reasons: Vec<String>,
}

/// Section-header and contact-detail detectors, compiled once.
pub struct FormatChecks {
    experience: Regex,
    education: Regex,
    skills: Regex,
    email: Regex,
    phone: Regex,
}

impl FormatChecks {
    pub fn new() -> Self {
        let compile = |pattern: &str| Regex::new(pattern).expect("hardcoded format pattern is valid");
        Self {
            experience: compile(r"(?i)deneyim|experience|work history|employment"),
            education: compile(r"(?i)eğitim|education"),
            skills: compile(r"(?i)beceri|skills|yetenek"),
            email: compile(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9._-]+\.[A-Za-z]{2,}"),
            phone: compile(r"\+?\d[\d\s()\-]{7,}"),
        }
    }

    /// Scores the raw CV text. Blank input (nothing survives normalization)
    /// short-circuits to 0 with a single reason.
    pub fn score(&self, analyzer: &TextAnalyzer, cv_text: &str) -> FormatResult {
        if analyzer.normalize(cv_text).is_empty() {
            return FormatResult {
                score: 0,
                reasons: vec!["CV metni boş.".to_owned()],
            };
        }

        let mut score: i32 = 100;
        let mut reasons = Vec::new();

        let very_long_lines = cv_text
            .split('\n')
            .filter(|line| line.chars().count() > MAX_LINE_LEN)
            .count();
        if very_long_lines >= LONG_LINE_THRESHOLD {
            score -= 12;
            reasons.push("Çok uzun satırlar var (ATS okunabilirliği düşebilir).".to_owned());
        }

        if !self.experience.is_match(cv_text) {
            score -= 8;
            reasons.push("Deneyim bölümü başlığı net değil.".to_owned());
        }
        if !self.education.is_match(cv_text) {
            score -= 6;
            reasons.push("Eğitim bölümü başlığı net değil.".to_owned());
        }
        if !self.skills.is_match(cv_text) {
            score -= 10;
            reasons.push("Beceriler/Skills bölümü başlığı net değil.".to_owned());
        }

        if !self.email.is_match(cv_text) {
            score -= 10;
            reasons.push("E-posta adresi bulunamadı.".to_owned());
        }
        if !self.phone.is_match(cv_text) {
            score -= 6;
            reasons.push("Telefon numarası bulunamadı.".to_owned());
        }

        FormatResult {
            score: score.clamp(0, 100) as u32,
            reasons,
        }
    }
}

impl Default for FormatChecks {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(cv: &str) -> FormatResult {
        FormatChecks::new().score(&TextAnalyzer::new(), cv)
    }

    const COMPLETE_CV: &str = "Murat Okay\n\
        E-posta: murat@example.com\n\
        Telefon: +90 555 000 00 00\n\
        Deneyim\n- React dashboard geliştirdim.\n\
        Eğitim\nBilgisayar Mühendisliği\n\
        Beceriler\nReact, TypeScript";

    #[test]
    fn test_empty_cv_scores_zero_with_single_reason() {
        let result = score("");
        assert_eq!(result.score, 0);
        assert_eq!(result.reasons, vec!["CV metni boş."]);
    }

    #[test]
    fn test_whitespace_only_cv_scores_zero() {
        let result = score("  \n\t  ");
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_complete_cv_scores_100() {
        let result = score(COMPLETE_CV);
        assert_eq!(result.score, 100);
        assert!(result.reasons.is_empty());
    }

    #[test]
    fn test_missing_email_penalty() {
        let cv = COMPLETE_CV.replace("murat@example.com", "yok");
        let result = score(&cv);
        assert_eq!(result.score, 90);
        assert!(result.reasons.iter().any(|r| r.contains("E-posta")));
    }

    #[test]
    fn test_missing_phone_penalty() {
        let cv = COMPLETE_CV.replace("+90 555 000 00 00", "yok");
        let result = score(&cv);
        assert_eq!(result.score, 94);
        assert!(result.reasons.iter().any(|r| r.contains("Telefon")));
    }

    #[test]
    fn test_missing_sections_penalties() {
        // Email and phone present, every section header absent.
        let cv = "murat@example.com +90 555 000 00 00 react ile kod yazdım";
        let result = score(cv);
        // 100 - 8 (experience) - 6 (education) - 10 (skills)
        assert_eq!(result.score, 76);
        assert_eq!(result.reasons.len(), 3);
    }

    #[test]
    fn test_english_section_headers_count() {
        let cv = "a@b.co +1 (555) 123-4567\nExperience\nEducation\nSkills";
        let result = score(cv);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_long_lines_penalty_needs_three_lines() {
        let long = "x".repeat(161);
        let two = format!("{COMPLETE_CV}\n{long}\n{long}");
        assert_eq!(score(&two).score, 100);

        let three = format!("{COMPLETE_CV}\n{long}\n{long}\n{long}");
        let result = score(&three);
        assert_eq!(result.score, 88);
        assert!(result.reasons.iter().any(|r| r.contains("uzun satır")));
    }

    #[test]
    fn test_score_never_negative() {
        // Fails every check at once.
        let result = score("kkkkkkkk");
        assert!(result.score <= 100);
        assert_eq!(result.score, 60); // 100 - 8 - 6 - 10 - 10 - 6
    }
}
