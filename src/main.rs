//! VALID assessment HTTP server binary.
//!
//! # Environment Variables
//!
//! - `VALID__SERVER__HOST` / `VALID__SERVER__PORT` - bind address (default 0.0.0.0:8080)
//! - `VALID__SERVER__ENVIRONMENT` - development | staging | production
//! - `VALID__WEBHOOK__URL` / `VALID__WEBHOOK__SECRET` - completed-assessment webhook
//! - `VALID__ASSESSMENT__QUESTIONNAIRE_PATH` - questionnaire YAML file
//! - `RUST_LOG` - tracing filter, overrides `VALID__SERVER__LOG_LEVEL`

use std::sync::Arc;

use valid_assessment::adapters::http::{app_router, AppState};
use valid_assessment::adapters::notification::WebhookNotifier;
use valid_assessment::adapters::questionnaire::load_questionnaire;
use valid_assessment::adapters::storage::InMemoryResultRepository;
use valid_assessment::config::AppConfig;
use valid_assessment::domain::persona::PersonaCatalog;
use valid_assessment::logging::init_logging;
use valid_assessment::ports::ResultNotifier;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_logging(&config.server)?;

    let catalog = PersonaCatalog::standard();
    catalog.validate()?;

    let questionnaire = load_questionnaire(config.assessment.questionnaire_path.as_deref()).await?;
    tracing::info!(questions = questionnaire.len(), "Questionnaire loaded");

    let notifier: Option<Arc<dyn ResultNotifier>> = match &config.webhook.url {
        Some(url) => {
            let notifier =
                WebhookNotifier::new(url, config.webhook.secret.clone(), config.webhook.timeout())?;
            tracing::info!(url = %url, signed = notifier.is_signed(), "Webhook notification enabled");
            Some(Arc::new(notifier) as Arc<dyn ResultNotifier>)
        }
        None => {
            tracing::info!("Webhook notification disabled");
            None
        }
    };

    let state = AppState::new(
        questionnaire,
        catalog.clone(),
        Arc::new(InMemoryResultRepository::new()),
        notifier,
    );
    let app = app_router(state, &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "VALID server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
