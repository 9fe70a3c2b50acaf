//! Team Aggregator - composition, diversity and homogeneity risk across
//! a set of individual classification results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::domain::foundation::{DomainError, ValidationError};
use crate::domain::persona::{ClassificationResult, PatternKey, PersonaId, RiskSeverity};

/// Pure-type share above which a team is flagged as homogeneous.
pub const HOMOGENEITY_WARNING_PERCENT: f64 = 30.0;

/// Pure-type share above which homogeneity becomes critical.
pub const HOMOGENEITY_CRITICAL_PERCENT: f64 = 50.0;

/// Smallest team the monoculture check applies to.
pub const MONOCULTURE_MIN_MEMBERS: usize = 3;

/// Diversity index below which a team is a persona monoculture.
pub const MONOCULTURE_DIVERSITY_THRESHOLD: f64 = 0.3;

/// Kind of team-level risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamRiskType {
    Homogeneity,
    PersonaMonoculture,
    BureaucraticParalysis,
    EchoChamber,
    AnecdotalTrap,
}

impl TeamRiskType {
    /// Team risk named after an individual risk archetype.
    pub fn for_archetype(id: PersonaId) -> Option<Self> {
        match id {
            PersonaId::BureaucraticParalysis => Some(Self::BureaucraticParalysis),
            PersonaId::EchoChamber => Some(Self::EchoChamber),
            PersonaId::AnecdotalTrap => Some(Self::AnecdotalTrap),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Homogeneity => "homogeneity",
            Self::PersonaMonoculture => "persona_monoculture",
            Self::BureaucraticParalysis => "bureaucratic_paralysis",
            Self::EchoChamber => "echo_chamber",
            Self::AnecdotalTrap => "anecdotal_trap",
        }
    }
}

impl fmt::Display for TeamRiskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A triggered team-level risk.
///
/// `score` is the metric that crossed its threshold: a member percentage
/// for homogeneity and archetype flags, the diversity index for
/// monoculture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeamRiskFlag {
    #[serde(rename = "type")]
    pub risk_type: TeamRiskType,
    pub severity: RiskSeverity,
    pub score: f64,
}

/// Who is on the team, by primary persona and pure-type membership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamComposition {
    /// Members whose result carries at least one risk flag.
    pub pure_type_count: usize,
    pub pure_type_percentage: f64,
    /// Member count per primary persona, ordered by persona id.
    pub persona_distribution: BTreeMap<PersonaId, usize>,
}

/// Team-level risk assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRiskAssessment {
    pub member_count: usize,
    pub composition: TeamComposition,
    /// Simpson's diversity index over primary personas, in [0, 1).
    pub diversity_index: f64,
    pub risks: Vec<TeamRiskFlag>,
}

impl TeamRiskAssessment {
    pub fn has_risk(&self, risk_type: TeamRiskType) -> bool {
        self.risks.iter().any(|r| r.risk_type == risk_type)
    }

    pub fn risk(&self, risk_type: TeamRiskType) -> Option<&TeamRiskFlag> {
        self.risks.iter().find(|r| r.risk_type == risk_type)
    }
}

/// Aggregates individual results into a [`TeamRiskAssessment`].
pub struct TeamAggregator;

impl TeamAggregator {
    /// Evaluates composition and team risks.
    ///
    /// Flags are ordered: homogeneity, persona monoculture, then one per
    /// risk archetype in pure-type order (I, A, L).
    ///
    /// # Errors
    ///
    /// `EmptyField` validation error when `results` is empty.
    pub fn aggregate_team_risk(
        results: &[ClassificationResult],
    ) -> Result<TeamRiskAssessment, DomainError> {
        if results.is_empty() {
            return Err(ValidationError::empty_field("members").into());
        }

        let member_count = results.len();
        let composition = Self::composition(results);
        let diversity_index = Self::diversity_index(&composition.persona_distribution, member_count);

        let mut risks = Vec::new();

        if let Some(severity) = Self::homogeneity_severity(composition.pure_type_percentage) {
            risks.push(TeamRiskFlag {
                risk_type: TeamRiskType::Homogeneity,
                severity,
                score: composition.pure_type_percentage,
            });
        }

        if member_count >= MONOCULTURE_MIN_MEMBERS
            && diversity_index < MONOCULTURE_DIVERSITY_THRESHOLD
        {
            risks.push(TeamRiskFlag {
                risk_type: TeamRiskType::PersonaMonoculture,
                severity: RiskSeverity::Warning,
                score: diversity_index,
            });
        }

        for key in PatternKey::PURE {
            let archetype = PersonaId::for_pattern(key);
            if let Some(flag) = Self::archetype_flag(results, archetype) {
                risks.push(flag);
            }
        }

        Ok(TeamRiskAssessment {
            member_count,
            composition,
            diversity_index,
            risks,
        })
    }

    fn composition(results: &[ClassificationResult]) -> TeamComposition {
        let pure_type_count = results.iter().filter(|r| r.has_risks()).count();

        let mut persona_distribution = BTreeMap::new();
        for result in results {
            *persona_distribution.entry(result.primary_id()).or_insert(0) += 1;
        }

        TeamComposition {
            pure_type_count,
            pure_type_percentage: percent_of(pure_type_count, results.len()),
            persona_distribution,
        }
    }

    /// Simpson's index: `1 - sum(p_i^2)`.
    fn diversity_index(distribution: &BTreeMap<PersonaId, usize>, member_count: usize) -> f64 {
        let total = member_count as f64;
        let concentration: f64 = distribution
            .values()
            .map(|&count| {
                let p = count as f64 / total;
                p * p
            })
            .sum();
        (1.0 - concentration).max(0.0)
    }

    fn homogeneity_severity(pure_type_percentage: f64) -> Option<RiskSeverity> {
        if pure_type_percentage > HOMOGENEITY_CRITICAL_PERCENT {
            Some(RiskSeverity::Critical)
        } else if pure_type_percentage > HOMOGENEITY_WARNING_PERCENT {
            Some(RiskSeverity::Warning)
        } else {
            None
        }
    }

    /// Flag for an archetype carried by more than half the team.
    fn archetype_flag(results: &[ClassificationResult], archetype: PersonaId) -> Option<TeamRiskFlag> {
        let risk_type = TeamRiskType::for_archetype(archetype)?;

        let severities: Vec<RiskSeverity> = results
            .iter()
            .filter_map(|r| r.risks.iter().find(|f| f.risk_type == archetype))
            .map(|f| f.severity)
            .collect();

        if severities.len() * 2 <= results.len() {
            return None;
        }

        let severity = severities
            .iter()
            .copied()
            .max()
            .unwrap_or(RiskSeverity::Warning);

        Some(TeamRiskFlag {
            risk_type,
            severity,
            score: percent_of(severities.len(), results.len()),
        })
    }
}

fn percent_of(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
