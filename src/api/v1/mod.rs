//! v1 API endpoints

pub mod scenarios;

use axum::{routing::post, Router};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/scenarios", post(scenarios::create_scenario))
        .route("/scenarios/submit", post(scenarios::submit_scenario))
}
