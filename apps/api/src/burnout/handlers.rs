//! Axum route handlers for the burnout check-in API.

use axum::{extract::State, Json};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ats::report::ScoreSource;
use crate::errors::AppError;
use crate::llm_client::{self, CompletionBackend};
use crate::state::AppState;

use super::prompts;
use super::{trend_feedback, BurnoutStatus, CheckinEntry, TREND_WINDOW};

#[derive(Debug, Deserialize)]
pub struct CheckinRequest {
    pub satisfaction: u8,
    pub stress: u8,
    pub growth: u8,
    #[serde(default)]
    pub note: String,
    /// Prior entries the client keeps locally; the server stores nothing.
    #[serde(default)]
    pub history: Vec<CheckinEntry>,
}

#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    /// The new entry with its server-stamped date, for the client to append.
    pub entry: CheckinEntry,
    pub text: String,
    pub status: BurnoutStatus,
    pub source: ScoreSource,
}

#[derive(Debug, Deserialize)]
struct AiCoachPayload {
    #[serde(default)]
    text: String,
    #[serde(default)]
    status: Option<BurnoutStatus>,
}

/// POST /api/v1/burnout/checkin
///
/// Validates the 1–10 scores, stamps the entry, and returns trend feedback —
/// from the AI coach when available, the local threshold rules otherwise.
pub async fn handle_checkin(
    State(state): State<AppState>,
    Json(request): Json<CheckinRequest>,
) -> Result<Json<CheckinResponse>, AppError> {
    for value in [request.satisfaction, request.stress, request.growth] {
        if !(1..=10).contains(&value) {
            return Err(AppError::Validation(
                "satisfaction, stress and growth must be between 1 and 10".to_owned(),
            ));
        }
    }

    let entry = CheckinEntry {
        date: Local::now().format("%d.%m.%Y").to_string(),
        satisfaction: request.satisfaction,
        stress: request.stress,
        growth: request.growth,
        note: request.note.clone(),
    };

    let mut entries = request.history.clone();
    entries.push(entry.clone());
    let local = trend_feedback(&entries);

    if let Some(llm) = &state.llm {
        let recent_history: Vec<CheckinEntry> = request
            .history
            .iter()
            .rev()
            .take(TREND_WINDOW)
            .rev()
            .cloned()
            .collect();
        match coach_via_ai(llm.as_ref(), &entry, &recent_history).await {
            Ok((text, status)) => {
                return Ok(Json(CheckinResponse {
                    entry,
                    text,
                    status,
                    source: ScoreSource::Ai,
                }));
            }
            Err(e) => warn!("AI burnout coach failed, falling back to trend feedback: {e}"),
        }
    }

    Ok(Json(CheckinResponse {
        entry,
        text: local.text,
        status: local.status,
        source: ScoreSource::Local,
    }))
}

async fn coach_via_ai(
    llm: &dyn CompletionBackend,
    entry: &CheckinEntry,
    history: &[CheckinEntry],
) -> Result<(String, BurnoutStatus), AppError> {
    let prompt = prompts::coach_prompt(entry, history);
    let payload: AiCoachPayload =
        llm_client::request_json(llm, &prompt, Some(prompts::BURNOUT_SCHEMA_HINT)).await?;

    if payload.text.trim().is_empty() {
        return Err(AppError::Llm("burnout coach returned empty text".to_owned()));
    }

    Ok((payload.text, payload.status.unwrap_or(BurnoutStatus::Neutral)))
}
