//! Axum route handlers for the ATS scoring API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::{self, CompletionBackend};
use crate::state::AppState;

use super::profile::{self, ExperienceInfo, TechStack};
use super::prompts;
use super::report::{
    self, clamp_score, CourseSuggestion, ScoreBreakdown, ScoreSource, SkillGap,
};

/// Local suggestions may exceed the composer cap by one tech-stack hint.
const ENRICHED_SUGGESTION_CAP: usize = 6;

const PLATFORM_RESTRICTION: &str =
    "CareerFlow AI yazılım mühendisleri ve geliştiriciler için tasarlanmıştır. \
     Lütfen teknik bir pozisyon için hazırlanmış bir CV girin.";

#[derive(Debug, Deserialize)]
pub struct AtsScoreRequest {
    pub cv_text: String,
    pub jd_text: String,
    #[serde(default)]
    pub target_role: Option<String>,
    #[serde(default)]
    pub target_city: Option<String>,
}

/// Unified scoring response. Both the AI and the local heuristic produce this
/// exact shape; `source` records which path ran.
#[derive(Debug, Serialize)]
pub struct AtsScoreResponse {
    pub total: u32,
    pub breakdown: ScoreBreakdown,
    pub missing_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub common_keywords: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub format_reasons: Vec<String>,
    pub edit_suggestions: Vec<String>,
    pub skill_gap: SkillGap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfileInsights>,
    pub source: ScoreSource,
}

/// Local-path enrichment: detected stack, level and the applied bonus.
#[derive(Debug, Serialize)]
pub struct ProfileInsights {
    pub experience: ExperienceInfo,
    pub tech_stack: TechStack,
    pub tech_bonus: u32,
}

// AI payload, parsed leniently: numbers arrive as floats and are clamped
// before entering the unified response.
#[derive(Debug, Deserialize)]
struct AiAtsPayload {
    #[serde(default)]
    total: f64,
    #[serde(default)]
    breakdown: AiBreakdown,
    #[serde(default)]
    missing_keywords: Vec<String>,
    #[serde(default)]
    edit_suggestions: Vec<String>,
    #[serde(default)]
    skill_gap: Option<AiSkillGap>,
}

#[derive(Debug, Default, Deserialize)]
struct AiBreakdown {
    #[serde(default)]
    keyword_score: f64,
    #[serde(default)]
    format_score: f64,
    #[serde(default)]
    seniority_fit: Option<f64>,
    #[serde(default)]
    domain_fit: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct AiSkillGap {
    #[serde(default)]
    summary: String,
    #[serde(default)]
    courses: Vec<AiCourse>,
    #[serde(default)]
    chance_increase_pct: f64,
}

#[derive(Debug, Deserialize)]
struct AiCourse {
    #[serde(default)]
    title: String,
    #[serde(default)]
    why: Option<String>,
    #[serde(default)]
    impact_pct: f64,
}

/// POST /api/v1/ats/score
///
/// Scores a CV against a job description. Prefers the configured AI backend;
/// any failure degrades to the deterministic local pipeline.
pub async fn handle_score(
    State(state): State<AppState>,
    Json(request): Json<AtsScoreRequest>,
) -> Result<Json<AtsScoreResponse>, AppError> {
    if !profile::detect_profession(&request.cv_text) {
        return Err(AppError::UnprocessableEntity(PLATFORM_RESTRICTION.to_owned()));
    }

    if let Some(llm) = &state.llm {
        match score_via_ai(llm.as_ref(), &request).await {
            Ok(response) => return Ok(Json(response)),
            Err(e) => warn!("AI ATS scoring failed, falling back to local heuristic: {e}"),
        }
    }

    Ok(Json(score_locally(&state, &request)))
}

async fn score_via_ai(
    llm: &dyn CompletionBackend,
    request: &AtsScoreRequest,
) -> Result<AtsScoreResponse, AppError> {
    let prompt = prompts::ats_prompt(
        &request.cv_text,
        &request.jd_text,
        request.target_role.as_deref().unwrap_or(""),
        request.target_city.as_deref().unwrap_or(""),
    );
    let payload: AiAtsPayload =
        llm_client::request_json(llm, &prompt, Some(prompts::ATS_SCHEMA_HINT)).await?;

    let missing_keywords: Vec<String> = payload
        .missing_keywords
        .into_iter()
        .take(super::overlap::KEYWORD_LIST_CAP)
        .collect();

    let skill_gap = match payload.skill_gap {
        Some(gap) if gap.courses.len() >= 2 => SkillGap {
            summary: if gap.summary.is_empty() {
                "Skill gap analizi".to_owned()
            } else {
                gap.summary
            },
            courses: gap
                .courses
                .into_iter()
                .take(2)
                .map(|c| CourseSuggestion {
                    title: c.title,
                    why: c.why,
                    impact_pct: clamp_score(c.impact_pct.round()),
                })
                .collect(),
            chance_increase_pct: gap.chance_increase_pct.clamp(10.0, 60.0).round() as u32,
        },
        // Malformed or missing skill gap: rebuild from the AI's own
        // missing-keyword list with the local heuristic.
        _ => report::build_skill_gap(&missing_keywords, request.target_role.as_deref()),
    };

    Ok(AtsScoreResponse {
        total: clamp_score(payload.total.round()),
        breakdown: ScoreBreakdown {
            keyword_score: clamp_score(payload.breakdown.keyword_score.round()),
            format_score: clamp_score(payload.breakdown.format_score.round()),
            jd_keyword_count: missing_keywords.len(),
            cv_unique_count: 0,
            seniority_fit: payload
                .breakdown
                .seniority_fit
                .map(|v| clamp_score(v.round())),
            domain_fit: payload.breakdown.domain_fit.map(|v| clamp_score(v.round())),
        },
        missing_keywords,
        common_keywords: Vec::new(),
        format_reasons: Vec::new(),
        edit_suggestions: payload.edit_suggestions.into_iter().take(5).collect(),
        skill_gap,
        profile: None,
        source: ScoreSource::Ai,
    })
}

fn score_locally(state: &AppState, request: &AtsScoreRequest) -> AtsScoreResponse {
    let engine = &state.ats;
    let report = engine.compose(&request.cv_text, &request.jd_text);

    let tech_stack = profile::detect_tech_stack(&request.cv_text);
    let experience = engine.experience_level(&request.cv_text);
    let tech_bonus = profile::tech_bonus(&tech_stack);
    let total = (report.total + tech_bonus).min(100);

    let mut edit_suggestions =
        report::build_edit_suggestions(&report.missing_keywords, &report.format_reasons);
    for suggestion in profile::tech_suggestions(&tech_stack, experience.level) {
        if !edit_suggestions.contains(&suggestion) {
            edit_suggestions.push(suggestion);
        }
    }
    edit_suggestions.truncate(ENRICHED_SUGGESTION_CAP);

    let skill_gap =
        report::build_skill_gap(&report.missing_keywords, request.target_role.as_deref());

    AtsScoreResponse {
        total,
        breakdown: report.breakdown,
        missing_keywords: report.missing_keywords,
        common_keywords: report.common_keywords,
        format_reasons: report.format_reasons,
        edit_suggestions,
        skill_gap,
        profile: Some(ProfileInsights {
            experience,
            tech_stack,
            tech_bonus,
        }),
        source: ScoreSource::Local,
    }
}
