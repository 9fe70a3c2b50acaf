//! Axum router configuration for catalog endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_questionnaire, list_personas};
use crate::adapters::http::state::AppState;

/// - `GET /questionnaire` - Questions and answer scale
/// - `GET /personas` - The persona catalog
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/questionnaire", get(get_questionnaire))
        .route("/personas", get(list_personas))
}
