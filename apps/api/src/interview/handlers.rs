//! Axum route handlers for the interview simulation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::ats::report::{clamp_score, ScoreSource};
use crate::errors::AppError;
use crate::llm_client::{self, CompletionBackend};
use crate::state::AppState;

use super::prompts;
use super::{fallback_evaluation, fallback_question, DEFAULT_ROLE};

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub question: String,
    pub session_id: Uuid,
    pub source: ScoreSource,
}

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    #[serde(default)]
    pub role: String,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluateResponse {
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub ideal_answer: String,
    pub source: ScoreSource,
}

#[derive(Debug, Deserialize)]
struct AiQuestionPayload {
    question: String,
}

#[derive(Debug, Deserialize)]
struct AiEvaluationPayload {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    ideal_answer: String,
}

/// POST /api/v1/interview/ask
///
/// Generates a Turkish interview question for the role. Every response gets
/// a fresh session id; sessions live only on the client.
pub async fn handle_ask(
    State(state): State<AppState>,
    Json(request): Json<AskRequest>,
) -> Result<Json<AskResponse>, AppError> {
    let role = effective_role(&request.role);
    let session_id = Uuid::new_v4();

    if let Some(llm) = &state.llm {
        let prompt = prompts::ask_prompt(role);
        match llm_client::request_json::<AiQuestionPayload>(
            llm.as_ref(),
            &prompt,
            Some(prompts::ASK_SCHEMA_HINT),
        )
        .await
        {
            Ok(payload) if !payload.question.trim().is_empty() => {
                return Ok(Json(AskResponse {
                    question: payload.question,
                    session_id,
                    source: ScoreSource::Ai,
                }));
            }
            Ok(_) => warn!("AI interview question was empty, using fallback"),
            Err(e) => warn!("AI interview question failed, using fallback: {e}"),
        }
    }

    Ok(Json(AskResponse {
        question: fallback_question(role),
        session_id,
        source: ScoreSource::Local,
    }))
}

/// POST /api/v1/interview/evaluate
///
/// Scores a candidate answer against the asked question.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluateResponse>, AppError> {
    if request.question.trim().is_empty() || request.answer.trim().is_empty() {
        return Err(AppError::Validation(
            "question and answer cannot be empty".to_owned(),
        ));
    }

    let role = effective_role(&request.role);

    if let Some(llm) = &state.llm {
        match evaluate_via_ai(llm.as_ref(), role, &request).await {
            Ok(response) => return Ok(Json(response)),
            Err(e) => warn!("AI interview evaluation failed, using fallback: {e}"),
        }
    }

    let fallback = fallback_evaluation();
    Ok(Json(EvaluateResponse {
        score: fallback.score,
        strengths: fallback.strengths,
        weaknesses: fallback.weaknesses,
        ideal_answer: fallback.ideal_answer,
        source: ScoreSource::Local,
    }))
}

async fn evaluate_via_ai(
    llm: &dyn CompletionBackend,
    role: &str,
    request: &EvaluateRequest,
) -> Result<EvaluateResponse, AppError> {
    let prompt = prompts::evaluate_prompt(role, &request.question, &request.answer);
    let payload: AiEvaluationPayload =
        llm_client::request_json(llm, &prompt, Some(prompts::EVALUATE_SCHEMA_HINT)).await?;

    Ok(EvaluateResponse {
        score: clamp_score(payload.score.round()),
        strengths: payload.strengths,
        weaknesses: payload.weaknesses,
        ideal_answer: payload.ideal_answer,
        source: ScoreSource::Ai,
    })
}

fn effective_role(role: &str) -> &str {
    let trimmed = role.trim();
    if trimmed.is_empty() {
        DEFAULT_ROLE
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_role_defaults() {
        assert_eq!(effective_role("  "), DEFAULT_ROLE);
        assert_eq!(effective_role("QA Engineer"), "QA Engineer");
    }

    #[test]
    fn test_ai_evaluation_payload_lenient_parse() {
        let payload: AiEvaluationPayload =
            serde_json::from_str(r#"{"score": 88, "strengths": ["Derinlik"]}"#).unwrap();
        assert_eq!(payload.score, 88.0);
        assert!(payload.weaknesses.is_empty());
        assert!(payload.ideal_answer.is_empty());
    }
}
