//! Axum router configuration for assessment endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{classify_scores, get_assessment, submit_assessment};
use crate::adapters::http::state::AppState;

/// Create the assessment API router.
///
/// # Routes
///
/// - `POST /classify` - Classify raw scores (stateless)
/// - `POST /assessments` - Submit answers and store the result
/// - `GET /assessments/:id` - Fetch a stored result
pub fn assessment_routes() -> Router<AppState> {
    Router::new()
        .route("/classify", post(classify_scores))
        .route("/assessments", post(submit_assessment))
        .route("/assessments/:id", get(get_assessment))
}
