//! Axum router configuration for team endpoints.

use axum::{routing::post, Router};

use super::handlers::assess_team_risk;
use crate::adapters::http::state::AppState;

/// - `POST /teams/risk` - Team composition and risk flags
pub fn team_routes() -> Router<AppState> {
    Router::new().route("/teams/risk", post(assess_team_risk))
}
