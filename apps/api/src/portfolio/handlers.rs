//! Axum route handlers for the portfolio review API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::ats::report::clamp_score;
use crate::errors::AppError;
use crate::llm_client;
use crate::state::AppState;

use super::prompts;
use super::{extract_username, fetch_profile_html, fetch_profile_readme};

#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub github: String,
}

#[derive(Debug, Serialize)]
pub struct ReviewResponse {
    pub score: u32,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
struct AiReviewPayload {
    #[serde(default)]
    score: f64,
    #[serde(default)]
    strengths: Vec<String>,
    #[serde(default)]
    weaknesses: Vec<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

/// POST /api/v1/portfolio/review
///
/// Fetches the GitHub profile page plus the profile README and runs the
/// AI rubric over them. Requires a configured AI backend.
pub async fn handle_review(
    State(state): State<AppState>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    if request.github.trim().is_empty() {
        return Err(AppError::Validation("github link required".to_owned()));
    }

    let Some(llm) = &state.llm else {
        return Err(AppError::LlmUnavailable);
    };

    let username = extract_username(&request.github);

    let html = fetch_profile_html(&state.http, request.github.trim()).await?;
    let readme = match &username {
        Some(name) => fetch_profile_readme(&state.http, name).await,
        None => None,
    };
    info!(
        "portfolio review: {} HTML chars, README {}",
        html.len(),
        if readme.is_some() { "found" } else { "absent" }
    );

    let prompt = prompts::review_prompt(&html, readme.as_deref());
    let payload: AiReviewPayload =
        llm_client::request_json(llm.as_ref(), &prompt, Some(prompts::REVIEW_SCHEMA_HINT)).await?;

    Ok(Json(ReviewResponse {
        score: clamp_score(payload.score.round()),
        strengths: payload.strengths,
        weaknesses: payload.weaknesses,
        suggestions: payload.suggestions,
        username,
    }))
}
