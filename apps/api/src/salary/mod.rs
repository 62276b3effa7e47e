//! Salary banding and negotiation heuristics: role regex classification →
//! base band → city/experience/skill/work-mode multipliers → templated
//! Turkish negotiation answer.

pub mod handlers;
pub mod prompts;
pub mod tables;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ats::text::TextAnalyzer;

/// Monthly gross TRY band for an unclassified white-collar role.
const DEFAULT_BAND: (u32, u32) = (30_000, 60_000);

/// Skills that push compensation upward when present.
const PREMIUM_SKILLS: &[&str] = &[
    "typescript", "react", "next.js", "aws", "docker", "kubernetes", "python", "java", "c#", "go",
    "flutter",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkMode {
    Remote,
    Onsite,
    #[default]
    Hybrid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub anchor: u32,
}

#[derive(Debug, Clone)]
pub struct Negotiation {
    pub tactic: String,
    pub expected: u32,
    pub answer: String,
}

pub struct EstimateInput<'a> {
    pub role: &'a str,
    pub city: &'a str,
    pub years: f64,
    pub skills: &'a [String],
    pub work_mode: WorkMode,
}

/// Role-category classifier with per-band regexes, compiled once. Bands are
/// checked in declaration order; the first match wins.
pub struct SalaryEstimator {
    bands: Vec<(Regex, (u32, u32))>,
}

impl SalaryEstimator {
    pub fn new() -> Self {
        let compile = |p: &str| Regex::new(p).expect("hardcoded role pattern is valid");
        Self {
            bands: vec![
                // Yazılım & yüksek teknoloji
                (
                    compile(
                        "yazılım|frontend|backend|fullstack|software|developer|mühendis|engineer\
                         |mimarı|lead|cto|veri|data|siber|devops|architect",
                    ),
                    (45_000, 95_000),
                ),
                // Sağlık (hekim/eczacı) & üst düzey yönetim
                (
                    compile("doktor|hekim|eczacı|yönetici|müdür|avukat"),
                    (45_000, 90_000),
                ),
                // Esnaf & zanaat
                (
                    compile("usta|tamirci|tesisat|elektrik|berber|kuaför|terzi|kaynak|boya|şef|aşçı"),
                    (35_000, 85_000),
                ),
                // Eğitim & akademik
                (compile("öğretmen|akademisyen|eğitmen"), (30_000, 55_000)),
                // Hizmet & başlangıç seviyesi
                (
                    compile("kasiyer|garson|komi|kurye|güvenlik|şoför|satış danışmanı|çağrı|sekreter"),
                    (22_000, 38_000),
                ),
            ],
        }
    }

    /// Computes the monthly gross TRY band for the given inputs. Role and
    /// city matching run over normalized text so canonical rewrites apply.
    pub fn estimate(&self, text: &TextAnalyzer, input: &EstimateInput) -> SalaryRange {
        let role = text.normalize(input.role);
        let city = text.normalize(input.city);

        let (base_min, base_max) = self
            .bands
            .iter()
            .find(|(re, _)| re.is_match(&role))
            .map(|(_, band)| *band)
            .unwrap_or(DEFAULT_BAND);

        let city_mult = if city.contains("istanbul") {
            1.15
        } else if city.contains("ankara") || city.contains("izmir") {
            1.08
        } else if city.contains("bursa") || city.contains("kocaeli") || city.contains("antalya") {
            1.02
        } else {
            0.96
        };

        let years = if input.years.is_finite() { input.years } else { 0.0 };
        let exp_mult = (1.0 + years * 0.08).clamp(1.0, 1.9);

        let premium_count = input
            .skills
            .iter()
            .map(|s| text.normalize(s))
            .filter(|s| PREMIUM_SKILLS.contains(&s.as_str()))
            .count();
        let skill_mult = (1.0 + premium_count as f64 * 0.04).clamp(1.0, 1.25);

        let mode_mult = match input.work_mode {
            WorkMode::Remote => 1.03,
            WorkMode::Onsite => 1.0,
            WorkMode::Hybrid => 1.01,
        };

        let factor = city_mult * exp_mult * skill_mult * mode_mult;
        let min = (f64::from(base_min) * factor).round() as u32;
        let max = (f64::from(base_max) * factor).round() as u32;
        let anchor = (f64::from(min + max) / 2.0).round() as u32;

        SalaryRange { min, max, anchor }
    }
}

impl Default for SalaryEstimator {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a negotiation tactic, target figure and ready-to-say Turkish
/// answer from the estimated band and experience level.
pub fn negotiate(role: &str, city: &str, range: SalaryRange, years: f64) -> Negotiation {
    let years = if years.is_finite() { years } else { 0.0 };

    let (tactic, expected) = if years < 2.0 {
        (
            "Aralığın alt-orta bandına yakın, öğrenme hızı ve teslim kalitesi üzerinden pazarlık yap.",
            range.anchor,
        )
    } else if years < 5.0 {
        (
            "Aralığın orta-üst bandına hedef koy; etki/çıktı örneklerinle konuş.",
            (f64::from(range.anchor) * 1.06).round() as u32,
        )
    } else {
        (
            "Üst banda yakın konuş; kapsam, sorumluluk ve piyasa kıyaslarını netleştir.",
            (f64::from(range.anchor) * 1.12).round() as u32,
        )
    };

    let role = if role.trim().is_empty() { "rol" } else { role };
    let city = if city.trim().is_empty() { "şehir" } else { city };

    let answer = format!(
        "Bu rol için ({role}, {city}) piyasada aylık brüt {} - {} TL bandı makul görünüyor. \
         Benim deneyimim ({} yıl) ve katkı alanlarım doğrultusunda {} TL civarını hedefliyorum; \
         toplam paket ve rol kapsamına göre esnekim.",
        format_thousands(range.min),
        format_thousands(range.max),
        format_years(years),
        format_thousands(expected),
    );

    Negotiation {
        tactic: tactic.to_owned(),
        expected,
        answer,
    }
}

/// tr-TR style thousands grouping: 45000 → "45.000".
pub fn format_thousands(n: u32) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

fn format_years(years: f64) -> String {
    if years.fract() == 0.0 {
        format!("{}", years as u32)
    } else {
        format!("{years:.1}")
    }
}
