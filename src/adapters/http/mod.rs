//! HTTP adapter - REST API over the application handlers.
//!
//! Each area has its own dto/handlers/routes triple; [`app_router`] mounts
//! them under `/api` with the shared middleware stack.

pub mod assessment;
pub mod catalog;
pub mod error;
pub mod router;
pub mod state;
pub mod team;

pub use error::{ApiError, ErrorResponse};
pub use router::app_router;
pub use state::AppState;
