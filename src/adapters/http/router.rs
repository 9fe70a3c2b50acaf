//! Top-level router: health probe, API routes, and the tower middleware stack.
//!
//! # Routes
//!
//! - `GET  /health`
//! - `GET  /api/questionnaire`
//! - `GET  /api/personas`
//! - `POST /api/classify`
//! - `POST /api/assessments`
//! - `GET  /api/assessments/:id`
//! - `POST /api/teams/risk`

use axum::extract::Json;
use axum::http::{header, HeaderValue, Method};
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::assessment::assessment_routes;
use super::catalog::catalog_routes;
use super::state::AppState;
use super::team::team_routes;
use crate::config::{Environment, ServerConfig};

/// Build the full application router.
pub fn app_router(state: AppState, server: &ServerConfig) -> Router {
    let api = Router::new()
        .merge(catalog_routes())
        .merge(assessment_routes())
        .merge(team_routes());

    Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api)
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET /health - liveness probe.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Development without configured origins is permissive; otherwise only the
/// configured origins are allowed.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins = server.cors_origins_list();
    if origins.is_empty() && server.environment == Environment::Development {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryResultRepository;
    use crate::domain::assessment::Questionnaire;
    use crate::domain::persona::PersonaCatalog;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::new(
            Questionnaire::standard().clone(),
            PersonaCatalog::standard().clone(),
            Arc::new(InMemoryResultRepository::new()),
            None,
        );
        app_router(state, &ServerConfig::default())
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), 1024)
            .await
            .unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/nope")
            .body(Body::empty())
            .unwrap();

        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_configured_origin_is_echoed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let state = AppState::new(
            Questionnaire::standard().clone(),
            PersonaCatalog::standard().clone(),
            Arc::new(InMemoryResultRepository::new()),
            None,
        );
        let request = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap();

        let response = app_router(state, &server).oneshot(request).await.unwrap();
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "http://localhost:5173"
        );
    }
}
