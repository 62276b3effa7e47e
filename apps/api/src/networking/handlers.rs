//! Axum route handlers for the networking API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ats::report::ScoreSource;
use crate::errors::AppError;
use crate::llm_client::{self, CompletionBackend};
use crate::state::AppState;

use super::prompts;
use super::{build_local_plan, ColdMessage, Persona};

#[derive(Debug, Deserialize)]
pub struct NetworkingPlanRequest {
    pub company: String,
    pub role: String,
    #[serde(default)]
    pub profile: String,
}

#[derive(Debug, Serialize)]
pub struct NetworkingPlanResponse {
    pub personas: Vec<Persona>,
    pub messages: Vec<ColdMessage>,
    /// Action list only the local plan produces.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    pub source: ScoreSource,
}

#[derive(Debug, Deserialize)]
struct AiNetworkingPayload {
    #[serde(default)]
    personas: Vec<Persona>,
    #[serde(default)]
    messages: Vec<ColdMessage>,
}

/// POST /api/v1/networking/plan
///
/// Suggests contact personas and cold messages for a target company/role.
pub async fn handle_plan(
    State(state): State<AppState>,
    Json(request): Json<NetworkingPlanRequest>,
) -> Result<Json<NetworkingPlanResponse>, AppError> {
    if request.company.trim().is_empty() || request.role.trim().is_empty() {
        return Err(AppError::Validation(
            "company and role cannot be empty".to_owned(),
        ));
    }

    if let Some(llm) = &state.llm {
        match plan_via_ai(llm.as_ref(), &request).await {
            Ok(response) => return Ok(Json(response)),
            Err(e) => warn!("AI networking plan failed, falling back to template: {e}"),
        }
    }

    let (personas, messages, steps) = build_local_plan(&request.company, &request.role);
    Ok(Json(NetworkingPlanResponse {
        personas,
        messages,
        steps,
        source: ScoreSource::Local,
    }))
}

async fn plan_via_ai(
    llm: &dyn CompletionBackend,
    request: &NetworkingPlanRequest,
) -> Result<NetworkingPlanResponse, AppError> {
    let prompt = prompts::networking_prompt(&request.company, &request.role, &request.profile);
    let payload: AiNetworkingPayload =
        llm_client::request_json(llm, &prompt, Some(prompts::NETWORKING_SCHEMA_HINT)).await?;

    if payload.personas.is_empty() || payload.messages.is_empty() {
        return Err(AppError::Llm(
            "networking payload missing personas or messages".to_owned(),
        ));
    }

    Ok(NetworkingPlanResponse {
        personas: payload.personas.into_iter().take(3).collect(),
        messages: payload.messages.into_iter().take(2).collect(),
        steps: Vec::new(),
        source: ScoreSource::Ai,
    })
}
