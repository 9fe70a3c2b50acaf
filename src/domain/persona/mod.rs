//! Persona module - pattern strengths, the persona catalog, classification
//! and risk identification.
//!
//! # Flow
//!
//! ```text
//! DimensionScores -> PatternCalculator -> PatternStrengths
//!                                         |-> PersonaClassifier -> primary Persona
//!                                         `-> RiskIdentifier    -> Vec<RiskFlag>
//! ```
//!
//! Everything here is synchronous and side-effect free. The catalog is
//! static data built once per process.

pub mod catalog;
pub mod classifier;
pub mod pattern;
pub mod risk;

pub use catalog::{Persona, PersonaCatalog, PersonaId, PersonaType, RiskThresholds};
pub use classifier::{
    dominant_pattern, ClassificationResult, PersonaClassifier, BALANCED_BAND_HIGH,
    BALANCED_BAND_LOW,
};
pub use pattern::{PatternCalculator, PatternKey, PatternStrengths};
pub use risk::{RiskFlag, RiskIdentifier, RiskSeverity};
