//! Team module - aggregates individual classifications into team-level
//! composition and risk.

pub mod aggregator;

pub use aggregator::{
    TeamAggregator, TeamComposition, TeamRiskAssessment, TeamRiskFlag, TeamRiskType,
    HOMOGENEITY_CRITICAL_PERCENT, HOMOGENEITY_WARNING_PERCENT, MONOCULTURE_DIVERSITY_THRESHOLD,
    MONOCULTURE_MIN_MEMBERS,
};
