//! Final ATS report assembly: blends keyword and format scores and derives
//! actionable edit suggestions and a skill-gap estimate.

use serde::{Deserialize, Serialize};

use super::text::display_keyword;
use super::AtsEngine;

const KEYWORD_WEIGHT: f64 = 0.7;
const FORMAT_WEIGHT: f64 = 0.3;
const SUGGESTION_CAP: usize = 5;
const GAP_KEYWORD_CAP: usize = 8;
const GAP_BASE_IMPACT: u32 = 18;

/// Which path produced a report. Callers treat both identically; the tag
/// exists for transparency only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreSource {
    Ai,
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword_score: u32,
    pub format_score: u32,
    pub jd_keyword_count: usize,
    pub cv_unique_count: usize,
    /// AI-only dimensions; the local heuristic never fills these.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seniority_fit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_fit: Option<u32>,
}

/// Heuristic scoring result. Constructed fresh per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct AtsReport {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub missing_keywords: Vec<String>,
    pub common_keywords: Vec<String>,
    pub format_reasons: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSuggestion {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub why: Option<String>,
    pub impact_pct: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGap {
    pub summary: String,
    pub courses: Vec<CourseSuggestion>,
    pub chance_increase_pct: u32,
}

/// Blends keyword coverage (70%) and format quality (30%) into the final
/// 0–100 score.
pub fn compose(engine: &AtsEngine, cv_text: &str, jd_text: &str) -> AtsReport {
    let overlap = engine.overlap(cv_text, jd_text);
    let format = engine.format_score(cv_text);

    let keyword_score = clamp_score((overlap.coverage * 100.0).round());
    let format_score = format.score;
    let total = clamp_score(
        (keyword_score as f64 * KEYWORD_WEIGHT + format_score as f64 * FORMAT_WEIGHT).round(),
    );

    AtsReport {
        total,
        breakdown: ScoreBreakdown {
            keyword_score,
            format_score,
            jd_keyword_count: overlap.jd_keyword_count,
            cv_unique_count: overlap.cv_unique_count,
            seniority_fit: None,
            domain_fit: None,
        },
        missing_keywords: overlap.missing_weighted,
        common_keywords: overlap.common_weighted,
        format_reasons: format.reasons,
    }
}

/// Derives up to 5 deduplicated edit suggestions: verbatim-keyword advice
/// for the top missing terms, the leading format deficiencies, then two
/// fixed generic suggestions.
pub fn build_edit_suggestions(
    missing_keywords: &[String],
    format_reasons: &[String],
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if !missing_keywords.is_empty() {
        let top: Vec<String> = missing_keywords
            .iter()
            .take(5)
            .map(|kw| display_keyword(kw))
            .collect();
        suggestions.push(format!(
            "İlanda geçen kritik terimleri CV’de birebir geçir: {}.",
            top.join(", ")
        ));
    }

    suggestions.extend(format_reasons.iter().take(3).cloned());

    suggestions
        .push("Başarılarını ölçülebilir hale getir (örn: % artış, süre, kullanıcı sayısı).".to_owned());
    suggestions.push("İlan diline uygun başlıklar kullan: Experience / Education / Skills.".to_owned());

    dedup_in_order(suggestions, SUGGESTION_CAP)
}

/// Buckets the top missing keywords into two course-suggestion clusters with
/// an estimated improvement percentage per course.
pub fn build_skill_gap(missing_keywords: &[String], target_role: Option<&str>) -> SkillGap {
    let missing: Vec<&String> = missing_keywords.iter().take(GAP_KEYWORD_CAP).collect();
    let role = target_role
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .unwrap_or("hedef rol");

    if missing.is_empty() {
        let courses = vec![
            CourseSuggestion {
                title: format!("({role}) Mülakat Hazırlık: STAR tekniği"),
                why: None,
                impact_pct: 15,
            },
            CourseSuggestion {
                title: format!("({role}) Sistematik CV iyileştirme ve proje anlatımı"),
                why: None,
                impact_pct: 12,
            },
        ];
        return SkillGap {
            summary: "Bu ilana göre kritik anahtar kelimeler açısından iyi durumdasın.".to_owned(),
            chance_increase_pct: chance_increase(&courses),
            courses,
        };
    }

    let cluster = |range: &[&String]| -> String {
        range
            .iter()
            .map(|kw| display_keyword(kw))
            .collect::<Vec<_>>()
            .join(", ")
    };
    let first = cluster(&missing[..missing.len().min(4)]);
    let second = if missing.len() > 4 {
        cluster(&missing[4..])
    } else {
        String::new()
    };

    let extra = (missing.len() as u32 * 3).clamp(10, 28);
    let first = if first.is_empty() {
        "Çekirdek teknik beceriler".to_owned()
    } else {
        first
    };
    let second = if second.is_empty() {
        "İleri seviye araçlar".to_owned()
    } else {
        second
    };

    let courses = vec![
        CourseSuggestion {
            title: format!("Kurs 1: {first} (temel + pratik)"),
            why: None,
            impact_pct: GAP_BASE_IMPACT + (extra as f64 * 0.6).round() as u32,
        },
        CourseSuggestion {
            title: format!("Kurs 2: {second} (proje odaklı)"),
            why: None,
            impact_pct: GAP_BASE_IMPACT + (extra as f64 * 0.4).round() as u32,
        },
    ];

    SkillGap {
        summary: format!(
            "Skill gap tespiti: {role} için ilanda geçen bazı terimler CV’de zayıf görünüyor."
        ),
        chance_increase_pct: chance_increase(&courses),
        courses,
    }
}

/// Aggregate improvement probability: course impacts summed, divided by 4,
/// clamped to [10, 60].
pub fn chance_increase(courses: &[CourseSuggestion]) -> u32 {
    let sum: u32 = courses.iter().map(|c| c.impact_pct).sum();
    (f64::from(sum) / 4.0).clamp(10.0, 60.0).round() as u32
}

pub fn clamp_score(value: f64) -> u32 {
    value.clamp(0.0, 100.0) as u32
}

fn dedup_in_order(items: Vec<String>, cap: usize) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    items
        .into_iter()
        .filter(|s| seen.insert(s.clone()))
        .take(cap)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_compose_blends_70_30() {
        let engine = AtsEngine::new();
        // Identical CV/JD text with full format credit: keyword 100, format 100.
        let cv = "murat@example.com +90 555 000 00 00\nDeneyim Eğitim Beceriler\nreact redux";
        let report = engine.compose(cv, "react redux");
        assert_eq!(report.breakdown.keyword_score, 100);
        assert_eq!(report.breakdown.format_score, 100);
        assert_eq!(report.total, 100);
    }

    #[test]
    fn test_compose_empty_inputs() {
        let engine = AtsEngine::new();
        let report = engine.compose("", "");
        assert_eq!(report.total, 0);
        assert_eq!(report.breakdown.keyword_score, 0);
        assert_eq!(report.breakdown.format_score, 0);
        assert_eq!(report.format_reasons, vec!["CV metni boş."]);
    }

    #[test]
    fn test_compose_is_idempotent() {
        let engine = AtsEngine::new();
        let cv = "React developer, murat@example.com";
        let jd = "React ve TypeScript deneyimi";
        let first = engine.compose(cv, jd);
        let second = engine.compose(cv, jd);
        assert_eq!(first.total, second.total);
        assert_eq!(first.missing_keywords, second.missing_keywords);
        assert_eq!(first.common_keywords, second.common_keywords);
    }

    #[test]
    fn test_compose_total_in_bounds() {
        let engine = AtsEngine::new();
        for (cv, jd) in [
            ("", "react"),
            ("react", ""),
            ("çok kısa", "çok uzun bir ilan metni react typescript"),
        ] {
            let report = engine.compose(cv, jd);
            assert!(report.total <= 100);
            assert!(report.breakdown.keyword_score <= 100);
            assert!(report.breakdown.format_score <= 100);
        }
    }

    #[test]
    fn test_edit_suggestions_capped_at_five() {
        let missing = keywords(&["docker", "kubernetes", "redis", "kafka", "terraform", "aws"]);
        let reasons = vec![
            "Deneyim bölümü başlığı net değil.".to_owned(),
            "Eğitim bölümü başlığı net değil.".to_owned(),
            "Beceriler/Skills bölümü başlığı net değil.".to_owned(),
            "E-posta adresi bulunamadı.".to_owned(),
        ];
        let suggestions = build_edit_suggestions(&missing, &reasons);
        assert_eq!(suggestions.len(), 5);
        // Missing-keyword advice leads and names only the top 5 terms.
        assert!(suggestions[0].contains("docker"));
        assert!(!suggestions[0].contains("aws"));
    }

    #[test]
    fn test_edit_suggestions_without_missing_keywords() {
        let suggestions = build_edit_suggestions(&[], &[]);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("ölçülebilir"));
    }

    #[test]
    fn test_edit_suggestions_display_form() {
        let missing = keywords(&["unit_testing"]);
        let suggestions = build_edit_suggestions(&missing, &[]);
        assert!(suggestions[0].contains("unit testing"));
        assert!(!suggestions[0].contains('_'));
    }

    #[test]
    fn test_skill_gap_eight_missing() {
        let missing = keywords(&["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
        let gap = build_skill_gap(&missing, Some("Frontend Developer"));
        assert_eq!(gap.courses.len(), 2);
        // extra = clamp(8*3, 10, 28) = 24 → impacts 18+14 and 18+10.
        assert_eq!(gap.courses[0].impact_pct, 32);
        assert_eq!(gap.courses[1].impact_pct, 28);
        for course in &gap.courses {
            assert!((18..=46).contains(&course.impact_pct));
        }
        // (32 + 28) / 4 = 15
        assert_eq!(gap.chance_increase_pct, 15);
    }

    #[test]
    fn test_skill_gap_clusters_split_4_and_4() {
        let missing = keywords(&["a1", "b2", "c3", "d4", "e5", "f6", "g7", "h8"]);
        let gap = build_skill_gap(&missing, None);
        assert!(gap.courses[0].title.contains("a1, b2, c3, d4"));
        assert!(gap.courses[1].title.contains("e5, f6, g7, h8"));
    }

    #[test]
    fn test_skill_gap_no_missing_keywords() {
        let gap = build_skill_gap(&[], Some("Backend Developer"));
        assert_eq!(gap.courses.len(), 2);
        assert!(gap.courses[0].title.contains("STAR"));
        assert!(gap.courses[0].title.contains("Backend Developer"));
        assert_eq!(gap.courses[0].impact_pct, 15);
        assert_eq!(gap.courses[1].impact_pct, 12);
    }

    #[test]
    fn test_skill_gap_defaults_role() {
        let gap = build_skill_gap(&[], None);
        assert!(gap.courses[0].title.contains("hedef rol"));
    }

    #[test]
    fn test_chance_increase_clamped() {
        let course = |impact_pct| CourseSuggestion {
            title: String::new(),
            why: None,
            impact_pct,
        };
        assert_eq!(chance_increase(&[course(2), course(2)]), 10);
        assert_eq!(chance_increase(&[course(200), course(200)]), 60);
    }
}
