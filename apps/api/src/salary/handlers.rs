//! Axum route handlers for the salary API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ats::report::ScoreSource;
use crate::errors::AppError;
use crate::llm_client::{self, CompletionBackend};
use crate::state::AppState;

use super::prompts;
use super::tables::{COMMON_ROLES, TURKISH_CITIES};
use super::{negotiate, EstimateInput, WorkMode};

#[derive(Debug, Deserialize)]
pub struct SalaryEstimateRequest {
    pub role: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub years: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub work_mode: WorkMode,
}

#[derive(Debug, Serialize)]
pub struct SalaryEstimateResponse {
    pub min: u32,
    pub max: u32,
    pub expected: u32,
    pub currency: &'static str,
    pub tactic: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
    pub source: ScoreSource,
}

#[derive(Debug, Serialize)]
pub struct SalaryOptionsResponse {
    pub cities: &'static [&'static str],
    pub roles: &'static [&'static str],
}

#[derive(Debug, Deserialize)]
struct AiSalaryPayload {
    #[serde(default)]
    min: f64,
    #[serde(default)]
    max: f64,
    #[serde(default)]
    expected: f64,
    #[serde(default)]
    tactic: String,
    #[serde(default)]
    answer: String,
    #[serde(default)]
    notes: Vec<String>,
}

/// GET /api/v1/salary/options
///
/// Constant dropdown data: the 81 provinces and the common role list.
pub async fn handle_options() -> Json<SalaryOptionsResponse> {
    Json(SalaryOptionsResponse {
        cities: TURKISH_CITIES,
        roles: COMMON_ROLES,
    })
}

/// POST /api/v1/salary/estimate
///
/// Monthly gross TRY band plus a negotiation tactic and ready answer.
/// Prefers the AI backend; degrades to the local banding heuristic.
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(request): Json<SalaryEstimateRequest>,
) -> Result<Json<SalaryEstimateResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_owned()));
    }

    if let Some(llm) = &state.llm {
        match estimate_via_ai(llm.as_ref(), &request).await {
            Ok(response) => return Ok(Json(response)),
            Err(e) => warn!("AI salary estimate failed, falling back to local heuristic: {e}"),
        }
    }

    Ok(Json(estimate_locally(&state, &request)))
}

async fn estimate_via_ai(
    llm: &dyn CompletionBackend,
    request: &SalaryEstimateRequest,
) -> Result<SalaryEstimateResponse, AppError> {
    let work_mode = match request.work_mode {
        WorkMode::Remote => "remote",
        WorkMode::Onsite => "onsite",
        WorkMode::Hybrid => "hybrid",
    };
    let prompt = prompts::salary_prompt(
        &request.role,
        &request.city,
        request.years,
        &request.skills,
        work_mode,
    );
    let payload: AiSalaryPayload =
        llm_client::request_json(llm, &prompt, Some(prompts::SALARY_SCHEMA_HINT)).await?;

    Ok(SalaryEstimateResponse {
        min: to_amount(payload.min),
        max: to_amount(payload.max),
        expected: to_amount(payload.expected),
        currency: "TRY",
        tactic: payload.tactic,
        answer: payload.answer,
        notes: payload.notes,
        source: ScoreSource::Ai,
    })
}

fn estimate_locally(state: &AppState, request: &SalaryEstimateRequest) -> SalaryEstimateResponse {
    let range = state.salary.estimate(
        state.ats.text(),
        &EstimateInput {
            role: &request.role,
            city: &request.city,
            years: request.years,
            skills: &request.skills,
            work_mode: request.work_mode,
        },
    );
    let negotiation = negotiate(&request.role, &request.city, range, request.years);

    SalaryEstimateResponse {
        min: range.min,
        max: range.max,
        expected: negotiation.expected,
        currency: "TRY",
        tactic: negotiation.tactic,
        answer: negotiation.answer,
        notes: Vec::new(),
        source: ScoreSource::Local,
    }
}

fn to_amount(value: f64) -> u32 {
    value.max(0.0).round() as u32
}
