//! Lightweight CV profiling used by the local fallback path: profession
//! gate, detected technology stack, experience level and the derived
//! suggestions and score bonus.

use regex::Regex;
use serde::Serialize;

/// Substrings that mark a CV as belonging to a software professional.
const TECH_PROFESSION_MARKERS: &[&str] = &[
    "developer",
    "engineer",
    "software",
    "programc",
    "yazılım",
    "geliştirici",
    "mühendis",
    "frontend",
    "backend",
    "full stack",
    "fullstack",
    "full-stack",
    "mobile",
    "android",
    "ios",
    "react",
    "angular",
    "vue",
    "svelte",
    "node",
    "java",
    "python",
    "javascript",
    "typescript",
    "php",
    "ruby",
    "golang",
    "rust",
    "devops",
    "cloud",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "data engineer",
    "ml engineer",
    "machine learning",
    "ai",
    "yapay zeka",
    "qa",
    "test",
    "sdet",
    "automation",
];

const FRONTEND_TECHS: &[&str] = &[
    "react", "vue", "angular", "next.js", "nextjs", "svelte", "html", "css", "sass", "tailwind",
    "bootstrap", "javascript", "typescript", "webpack", "vite",
];
const BACKEND_TECHS: &[&str] = &[
    "node.js", "nodejs", "express", "django", "flask", "spring", "asp.net", "laravel", "rails",
    "fastapi", "nest.js",
];
const MOBILE_TECHS: &[&str] = &[
    "react native", "flutter", "swift", "kotlin", "android", "ios", "xamarin",
];
const DATABASE_TECHS: &[&str] = &[
    "mongodb", "postgresql", "mysql", "redis", "sql", "dynamodb", "cassandra", "elasticsearch",
];
const DEVOPS_TECHS: &[&str] = &[
    "docker", "kubernetes", "aws", "azure", "gcp", "jenkins", "gitlab", "github actions",
    "terraform", "ansible", "ci/cd",
];
const LANGUAGE_TECHS: &[&str] = &[
    "javascript", "typescript", "python", "java", "c#", "go", "rust", "php", "ruby", "kotlin",
    "swift",
];

const TECH_BONUS_CAP: u32 = 20;

/// True when the CV reads like a software professional's. Non-tech CVs are
/// rejected by the scoring endpoint.
pub fn detect_profession(cv_text: &str) -> bool {
    let lower = cv_text.to_lowercase();
    TECH_PROFESSION_MARKERS.iter().any(|kw| lower.contains(kw))
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct TechStack {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub mobile: Vec<String>,
    pub database: Vec<String>,
    pub devops: Vec<String>,
    pub languages: Vec<String>,
}

impl TechStack {
    pub fn total(&self) -> usize {
        self.frontend.len()
            + self.backend.len()
            + self.mobile.len()
            + self.database.len()
            + self.devops.len()
            + self.languages.len()
    }
}

/// Collects technologies mentioned in the CV, bucketed by category.
pub fn detect_tech_stack(cv_text: &str) -> TechStack {
    let lower = cv_text.to_lowercase();
    let matched = |techs: &[&str]| -> Vec<String> {
        techs
            .iter()
            .filter(|tech| lower.contains(*tech))
            .map(|tech| tech.to_string())
            .collect()
    };
    TechStack {
        frontend: matched(FRONTEND_TECHS),
        backend: matched(BACKEND_TECHS),
        mobile: matched(MOBILE_TECHS),
        database: matched(DATABASE_TECHS),
        devops: matched(DEVOPS_TECHS),
        languages: matched(LANGUAGE_TECHS),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    Mid,
    Senior,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ExperienceInfo {
    pub level: ExperienceLevel,
    pub years: u32,
}

/// Year-of-experience extractors, tried in order; the first match wins.
pub struct ProfileDetector {
    year_patterns: Vec<Regex>,
}

impl ProfileDetector {
    pub fn new() -> Self {
        let compile = |p: &str| Regex::new(p).expect("hardcoded year pattern is valid");
        Self {
            year_patterns: vec![
                compile(r"(\d+)\+?\s*(yıl|year)"),
                compile(r"(\d+)\+?\s*yıllık"),
                compile(r"(\d+)\+?\s*yrs"),
            ],
        }
    }

    /// Infers seniority from explicit level words and extracted years.
    pub fn experience_level(&self, cv_text: &str) -> ExperienceInfo {
        let lower = cv_text.to_lowercase();

        let years = self
            .year_patterns
            .iter()
            .find_map(|re| re.captures(&lower))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0);

        let level = if lower.contains("senior")
            || lower.contains("lead")
            || lower.contains("kıdemli")
            || years >= 5
        {
            ExperienceLevel::Senior
        } else if lower.contains("mid")
            || lower.contains("orta")
            || lower.contains("intermediate")
            || years >= 2
        {
            ExperienceLevel::Mid
        } else {
            ExperienceLevel::Junior
        };

        ExperienceInfo { level, years }
    }
}

impl Default for ProfileDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Up to 5 Turkish upskilling suggestions derived from stack gaps.
pub fn tech_suggestions(stack: &TechStack, level: ExperienceLevel) -> Vec<String> {
    let mut suggestions = Vec::new();
    let has = |list: &[String], tech: &str| list.iter().any(|t| t == tech);

    if !stack.frontend.is_empty() {
        if !has(&stack.frontend, "typescript") {
            suggestions
                .push("TypeScript öğren - modern frontend development için kritik".to_owned());
        }
        if has(&stack.frontend, "react")
            && !has(&stack.frontend, "next.js")
            && !has(&stack.frontend, "nextjs")
        {
            suggestions.push("Next.js ile full-stack yeteneklerini güçlendir".to_owned());
        }
        if !stack
            .frontend
            .iter()
            .any(|t| ["tailwind", "sass", "bootstrap"].contains(&t.as_str()))
        {
            suggestions.push("Modern CSS framework ekle (TailwindCSS önerilir)".to_owned());
        }
    }

    if !stack.backend.is_empty() {
        if stack.database.is_empty() {
            suggestions.push("Database yetkinliği ekle (PostgreSQL veya MongoDB öner)".to_owned());
        }
        if level != ExperienceLevel::Junior
            && !stack
                .backend
                .iter()
                .any(|t| t.contains("nest") || t.contains("spring"))
        {
            suggestions.push("Enterprise framework öğren (NestJS veya Spring Boot)".to_owned());
        }
    }

    if stack.devops.is_empty() && level != ExperienceLevel::Junior {
        suggestions.push(
            "Docker/Kubernetes gibi DevOps araçları öğren - modern development için şart"
                .to_owned(),
        );
    }

    if stack.database.is_empty() && (!stack.backend.is_empty() || !stack.frontend.is_empty()) {
        suggestions.push("SQL ve NoSQL database deneyimi ekle".to_owned());
    }

    if !stack
        .devops
        .iter()
        .any(|t| ["aws", "azure", "gcp"].contains(&t.as_str()))
        && level == ExperienceLevel::Senior
    {
        suggestions.push("Cloud platform deneyimi ekle (AWS, Azure veya GCP)".to_owned());
    }

    suggestions.truncate(5);
    suggestions
}

/// Flat score bonus for detected technologies: 2 points each, capped at 20.
pub fn tech_bonus(stack: &TechStack) -> u32 {
    (stack.total() as u32 * 2).min(TECH_BONUS_CAP)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_profession_tech_cv() {
        assert!(detect_profession("3 yıl deneyimli Frontend Developer"));
        assert!(detect_profession("Yazılım mühendisi olarak çalıştım"));
    }

    #[test]
    fn test_detect_profession_non_tech_cv() {
        assert!(!detect_profession("Satış temsilcisi olarak perakende sektöründe çalıştım"));
    }

    #[test]
    fn test_detect_tech_stack_buckets() {
        let stack = detect_tech_stack("React, TypeScript, PostgreSQL ve Docker kullandım");
        assert!(stack.frontend.contains(&"react".to_string()));
        assert!(stack.frontend.contains(&"typescript".to_string()));
        assert!(stack.database.contains(&"postgresql".to_string()));
        assert!(stack.devops.contains(&"docker".to_string()));
        assert!(stack.mobile.is_empty());
    }

    #[test]
    fn test_experience_level_from_years() {
        let detector = ProfileDetector::new();
        let info = detector.experience_level("5 yıl deneyim, React");
        assert_eq!(info.level, ExperienceLevel::Senior);
        assert_eq!(info.years, 5);

        let info = detector.experience_level("3 years experience");
        assert_eq!(info.level, ExperienceLevel::Mid);
        assert_eq!(info.years, 3);

        let info = detector.experience_level("yeni mezun");
        assert_eq!(info.level, ExperienceLevel::Junior);
        assert_eq!(info.years, 0);
    }

    #[test]
    fn test_experience_level_from_keywords() {
        let detector = ProfileDetector::new();
        assert_eq!(
            detector.experience_level("Senior Backend Developer").level,
            ExperienceLevel::Senior
        );
        assert_eq!(
            detector.experience_level("Kıdemli geliştirici").level,
            ExperienceLevel::Senior
        );
        assert_eq!(
            detector.experience_level("intermediate developer").level,
            ExperienceLevel::Mid
        );
    }

    #[test]
    fn test_tech_suggestions_frontend_gaps() {
        let stack = detect_tech_stack("React ile arayüz geliştirdim");
        let suggestions = tech_suggestions(&stack, ExperienceLevel::Mid);
        assert!(suggestions.iter().any(|s| s.contains("TypeScript")));
        assert!(suggestions.iter().any(|s| s.contains("Next.js")));
        assert!(suggestions.len() <= 5);
    }

    #[test]
    fn test_tech_suggestions_capped_at_five() {
        // Backend-only mid profile with no db/devops trips many rules.
        let stack = detect_tech_stack("express django react backend");
        let suggestions = tech_suggestions(&stack, ExperienceLevel::Senior);
        assert!(suggestions.len() <= 5);
    }

    #[test]
    fn test_tech_bonus_capped() {
        let stack = detect_tech_stack(
            "react vue angular svelte html css sass bootstrap javascript typescript \
             node.js express django mongodb postgresql docker kubernetes aws",
        );
        assert_eq!(tech_bonus(&stack), 20);

        let small = detect_tech_stack("react");
        assert_eq!(tech_bonus(&small), 2);
    }
}
