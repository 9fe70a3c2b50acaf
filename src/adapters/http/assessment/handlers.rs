//! HTTP handlers for assessment endpoints.
//!
//! These handlers connect Axum routes to application layer command/query handlers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::handlers::{
    ClassifyScoresQuery, GetAssessmentResultQuery, SubmitAssessmentCommand,
};
use crate::domain::foundation::{AssessmentId, ValidationError};

use super::dto::{AssessmentResultResponse, ScoresRequest, SubmitAssessmentRequest};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;

/// POST /api/classify - Classify raw dimension scores without storing them.
pub async fn classify_scores(
    State(state): State<AppState>,
    body: Result<Json<ScoresRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let scores = request.into_scores()?;

    let result = state
        .classify_scores_handler()
        .handle(ClassifyScoresQuery { scores })?;

    Ok(Json(result))
}

/// POST /api/assessments - Score answers, classify, and store the result.
pub async fn submit_assessment(
    State(state): State<AppState>,
    body: Result<Json<SubmitAssessmentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body?;
    let (respondent, answers) = request.into_parts()?;

    let result = state
        .submit_assessment_handler()
        .handle(SubmitAssessmentCommand {
            respondent,
            answers,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AssessmentResultResponse::from(result)),
    ))
}

/// GET /api/assessments/:id - Fetch a stored result.
pub async fn get_assessment(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(raw_id) = path?;
    let id = parse_assessment_id(&raw_id)?;

    let result = state
        .get_assessment_result_handler()
        .handle(GetAssessmentResultQuery { id })
        .await?;

    Ok(Json(AssessmentResultResponse::from(result)))
}

pub(crate) fn parse_assessment_id(raw: &str) -> Result<AssessmentId, ValidationError> {
    raw.parse()
        .map_err(|e: uuid::Error| ValidationError::invalid_format("assessment_id", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_uuid_assessment_ids() {
        let id = AssessmentId::new();
        assert_eq!(parse_assessment_id(&id.to_string()).unwrap(), id);
    }

    #[test]
    fn rejects_malformed_assessment_ids() {
        assert!(matches!(
            parse_assessment_id("not-a-uuid"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }
}
