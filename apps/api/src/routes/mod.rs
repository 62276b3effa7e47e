pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::{ats, burnout, interview, networking, portfolio, salary};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // ATS scoring
        .route("/api/v1/ats/score", post(ats::handlers::handle_score))
        // Salary estimation
        .route(
            "/api/v1/salary/estimate",
            post(salary::handlers::handle_estimate),
        )
        .route(
            "/api/v1/salary/options",
            get(salary::handlers::handle_options),
        )
        // Networking plans
        .route(
            "/api/v1/networking/plan",
            post(networking::handlers::handle_plan),
        )
        // Portfolio review
        .route(
            "/api/v1/portfolio/review",
            post(portfolio::handlers::handle_review),
        )
        // Interview simulation
        .route("/api/v1/interview/ask", post(interview::handlers::handle_ask))
        .route(
            "/api/v1/interview/evaluate",
            post(interview::handlers::handle_evaluate),
        )
        // Burnout check-ins
        .route(
            "/api/v1/burnout/checkin",
            post(burnout::handlers::handle_checkin),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_router_builds_with_heuristic_only_state() {
        let _router = build_router(AppState::for_tests());
    }
}
