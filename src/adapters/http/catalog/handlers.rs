//! Read-only catalog endpoints: the questionnaire and the personas.

use axum::extract::{Json, State};
use axum::response::IntoResponse;
use serde::Serialize;

use crate::adapters::http::state::AppState;
use crate::domain::assessment::{Answer, Question};
use crate::domain::persona::Persona;

/// Answer scale advertised with the questionnaire.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerScale {
    pub min: u8,
    pub max: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionnaireResponse {
    pub scale: AnswerScale,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonasResponse {
    pub personas: Vec<Persona>,
}

/// GET /api/questionnaire
pub async fn get_questionnaire(State(state): State<AppState>) -> impl IntoResponse {
    Json(QuestionnaireResponse {
        scale: AnswerScale {
            min: Answer::MIN,
            max: Answer::MAX,
        },
        questions: state.questionnaire.questions().to_vec(),
    })
}

/// GET /api/personas
pub async fn list_personas(State(state): State<AppState>) -> impl IntoResponse {
    Json(PersonasResponse {
        personas: state.catalog.personas().to_vec(),
    })
}
