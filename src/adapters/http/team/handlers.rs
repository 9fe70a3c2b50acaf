//! HTTP handlers for team endpoints.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::AssessTeamRiskQuery;

use super::dto::TeamRiskRequest;

/// POST /api/teams/risk - Aggregate composition and risk for a team.
pub async fn assess_team_risk(
    State(state): State<AppState>,
    body: Result<Json<TeamRiskRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let members = request.into_members()?;

    let assessment = state
        .assess_team_risk_handler()
        .handle(AssessTeamRiskQuery { members })
        .await?;

    Ok(Json(assessment))
}
