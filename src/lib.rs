//! VALID Assessment Engine
//!
//! Scores answers to the VALID questionnaire (Verity, Association, Lived
//! experience, Institutional, Desire), classifies the resulting profile into
//! a persona, flags pure-type risk archetypes and aggregates team risk.
//!
//! The classification core in [`domain`] is synchronous and side-effect
//! free. The service shell (HTTP, storage, webhook notification) sits in
//! [`adapters`] behind the traits in [`ports`].

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
