//! Risk Identifier - flags risk archetypes from pure-type scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{PatternStrengths, PersonaCatalog, PersonaId, RiskThresholds};
use crate::domain::foundation::DomainError;

/// How far past its thresholds a pure-type score sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSeverity {
    Warning,
    Critical,
}

impl RiskSeverity {
    /// Severity for a score, or `None` below the warning threshold.
    pub fn for_score(score: f64, thresholds: &RiskThresholds) -> Option<Self> {
        if score >= thresholds.critical {
            Some(Self::Critical)
        } else if score >= thresholds.warning {
            Some(Self::Warning)
        } else {
            None
        }
    }
}

impl fmt::Display for RiskSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

/// A triggered risk archetype.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskFlag {
    #[serde(rename = "type")]
    pub risk_type: PersonaId,
    pub severity: RiskSeverity,
    pub score: f64,
}

/// Evaluates each pure type independently against its risk persona.
pub struct RiskIdentifier;

impl RiskIdentifier {
    /// Flags are returned in pure-type evaluation order (I, A, L) and may
    /// co-occur.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` if a risk persona is missing from the catalog or
    /// has no thresholds.
    pub fn identify(
        patterns: &PatternStrengths,
        catalog: &PersonaCatalog,
    ) -> Result<Vec<RiskFlag>, DomainError> {
        let mut flags = Vec::new();

        for (key, score) in patterns.pure() {
            let persona = catalog.require(PersonaId::for_pattern(key))?;
            let thresholds = persona.thresholds.as_ref().ok_or_else(|| {
                DomainError::configuration(format!(
                    "risk persona '{}' has no thresholds",
                    persona.id
                ))
            })?;

            if let Some(severity) = RiskSeverity::for_score(score.value(), thresholds) {
                flags.push(RiskFlag {
                    risk_type: persona.id,
                    severity,
                    score: score.value(),
                });
            }
        }

        Ok(flags)
    }
}
