//! Adapters - implementations of ports and the HTTP surface.

pub mod http;
pub mod notification;
pub mod questionnaire;
pub mod storage;
