//! Team HTTP adapter.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::TeamRiskRequest;
pub use routes::team_routes;
