//! Persona catalog - immutable archetype definitions.
//!
//! The catalog is static data built once per process. Positive personas are
//! reached through a dominant combined pattern (or the balanced band); risk
//! personas are reached through a pure-type score crossing its thresholds.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::PatternKey;
use crate::domain::foundation::DomainError;

/// Identifier of a catalog persona.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaId {
    DataDrivenVisionary,
    TrustedConnector,
    InstitutionalDiplomat,
    SeasonedSteward,
    GroundedRealist,
    InspiringMobilizer,
    AdaptiveIntegrator,
    BureaucraticParalysis,
    EchoChamber,
    AnecdotalTrap,
}

impl PersonaId {
    pub const ALL: [PersonaId; 10] = [
        PersonaId::DataDrivenVisionary,
        PersonaId::TrustedConnector,
        PersonaId::InstitutionalDiplomat,
        PersonaId::SeasonedSteward,
        PersonaId::GroundedRealist,
        PersonaId::InspiringMobilizer,
        PersonaId::AdaptiveIntegrator,
        PersonaId::BureaucraticParalysis,
        PersonaId::EchoChamber,
        PersonaId::AnecdotalTrap,
    ];

    /// The reserved persona for profiles inside the balanced band.
    pub const BALANCED: PersonaId = PersonaId::AdaptiveIntegrator;

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataDrivenVisionary => "data_driven_visionary",
            Self::TrustedConnector => "trusted_connector",
            Self::InstitutionalDiplomat => "institutional_diplomat",
            Self::SeasonedSteward => "seasoned_steward",
            Self::GroundedRealist => "grounded_realist",
            Self::InspiringMobilizer => "inspiring_mobilizer",
            Self::AdaptiveIntegrator => "adaptive_integrator",
            Self::BureaucraticParalysis => "bureaucratic_paralysis",
            Self::EchoChamber => "echo_chamber",
            Self::AnecdotalTrap => "anecdotal_trap",
        }
    }

    /// The persona a pattern maps to.
    ///
    /// Combined patterns map to positive personas, pure types to risk
    /// personas.
    pub fn for_pattern(key: PatternKey) -> PersonaId {
        match key {
            PatternKey::VerityDesire => Self::DataDrivenVisionary,
            PatternKey::VerityAssociation => Self::TrustedConnector,
            PatternKey::AssociationInstitutional => Self::InstitutionalDiplomat,
            PatternKey::LivedInstitutional => Self::SeasonedSteward,
            PatternKey::VerityLived => Self::GroundedRealist,
            PatternKey::AssociationDesire => Self::InspiringMobilizer,
            PatternKey::PureInstitutional => Self::BureaucraticParalysis,
            PatternKey::PureAssociation => Self::EchoChamber,
            PatternKey::PureLived => Self::AnecdotalTrap,
        }
    }
}

impl fmt::Display for PersonaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonaType {
    Positive,
    Risk,
}

/// Score thresholds at which a risk persona is flagged.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub warning: f64,
    pub critical: f64,
}

/// An immutable catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub persona_type: PersonaType,
    /// Validation-pattern code this persona represents ("VD", "pureI", "balanced").
    pub pattern: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub recommendations: &'static [&'static str],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thresholds: Option<RiskThresholds>,
}

impl Persona {
    pub fn is_risk(&self) -> bool {
        self.persona_type == PersonaType::Risk
    }
}

/// Lookup over a fixed set of personas.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// Wraps a persona list without validating it.
    ///
    /// Call [`PersonaCatalog::validate`] before classifying against a
    /// hand-built catalog.
    pub fn from_personas(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// The process-wide VALID catalog.
    pub fn standard() -> &'static PersonaCatalog {
        &STANDARD_CATALOG
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn get(&self, id: PersonaId) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// Looks up a persona the classifier depends on.
    ///
    /// A miss means the catalog and the classifier disagree; it is reported
    /// as a configuration error.
    pub fn require(&self, id: PersonaId) -> Result<&Persona, DomainError> {
        self.get(id).ok_or_else(|| {
            DomainError::configuration(format!("persona '{}' is not in the catalog", id))
                .with_detail("persona", id.as_str())
        })
    }

    /// Checks that every persona the classifier can reach is present and
    /// well-formed.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut seen = HashSet::new();
        for persona in &self.personas {
            if !seen.insert(persona.id) {
                return Err(DomainError::configuration(format!(
                    "persona '{}' is defined more than once",
                    persona.id
                )));
            }
        }

        for key in PatternKey::COMBINED {
            let persona = self.require(PersonaId::for_pattern(key))?;
            if persona.is_risk() {
                return Err(DomainError::configuration(format!(
                    "pattern {} maps to risk persona '{}'",
                    key, persona.id
                )));
            }
        }

        let balanced = self.require(PersonaId::BALANCED)?;
        if balanced.is_risk() {
            return Err(DomainError::configuration("balanced persona must be positive"));
        }

        for key in PatternKey::PURE {
            let persona = self.require(PersonaId::for_pattern(key))?;
            match persona.thresholds {
                Some(t) if persona.is_risk() && t.warning <= t.critical => {}
                _ => {
                    return Err(DomainError::configuration(format!(
                        "risk persona '{}' needs warning <= critical thresholds",
                        persona.id
                    )))
                }
            }
        }

        Ok(())
    }
}

const STANDARD_RISK_THRESHOLDS: RiskThresholds = RiskThresholds {
    warning: 60.0,
    critical: 75.0,
};

static STANDARD_CATALOG: Lazy<PersonaCatalog> = Lazy::new(|| PersonaCatalog {
    personas: vec![
        Persona {
            id: PersonaId::DataDrivenVisionary,
            name: "Data-Driven Visionary",
            persona_type: PersonaType::Positive,
            pattern: "VD",
            tagline: "Ambition anchored in evidence.",
            description: "Pairs a strong pull toward a desired future with a habit of testing \
                          it against the facts. Sets bold direction and keeps it honest.",
            strengths: &[
                "Turns vision into measurable goals",
                "Challenges hype with data",
                "Keeps long-term direction while adjusting tactics",
            ],
            challenges: &[
                "Can discount relationships and lived context",
                "May move faster than the organization can follow",
            ],
            recommendations: &[
                "Bring front-line voices into goal setting",
                "Pace change with explicit checkpoints",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::TrustedConnector,
            name: "Trusted Connector",
            persona_type: PersonaType::Positive,
            pattern: "VA",
            tagline: "Credible facts carried through strong networks.",
            description: "Validates information with evidence and spreads it through trusted \
                          relationships. The person others call to find out what is true.",
            strengths: &[
                "Builds coalitions around verified information",
                "Corrects rumours before they spread",
            ],
            challenges: &[
                "May soften hard truths to protect relationships",
                "Can over-rely on a familiar circle of sources",
            ],
            recommendations: &[
                "Seek out sources outside the usual network",
                "Separate the message from the messenger when stakes are high",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::InstitutionalDiplomat,
            name: "Institutional Diplomat",
            persona_type: PersonaType::Positive,
            pattern: "AI",
            tagline: "Moves decisions through people and process.",
            description: "Understands both the formal structure and the informal network, \
                          and uses each to get sanctioned decisions adopted.",
            strengths: &[
                "Navigates approval paths efficiently",
                "Builds durable cross-team agreements",
            ],
            challenges: &[
                "Can favour consensus over correctness",
                "May resist changes that bypass official channels",
            ],
            recommendations: &[
                "Ask for the evidence behind sanctioned positions",
                "Create space for dissent before consensus forms",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::SeasonedSteward,
            name: "Seasoned Steward",
            persona_type: PersonaType::Positive,
            pattern: "LI",
            tagline: "Experience in service of the institution.",
            description: "Combines long first-hand experience with respect for how the \
                          organization works. Protects continuity and institutional memory.",
            strengths: &[
                "Knows why current practices exist",
                "Spots operational risk early",
            ],
            challenges: &[
                "Can treat past success as proof for the future",
                "May slow down novel initiatives",
            ],
            recommendations: &[
                "Pilot new ideas before judging them on precedent",
                "Pair with data-oriented colleagues on major calls",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::GroundedRealist,
            name: "Grounded Realist",
            persona_type: PersonaType::Positive,
            pattern: "VL",
            tagline: "What the data says, checked against what works.",
            description: "Tests claims against both evidence and practical experience. \
                          Hard to fool and quick to notice when a plan will not survive \
                          contact with reality.",
            strengths: &[
                "Catches flawed assumptions early",
                "Balances analysis with practical judgement",
            ],
            challenges: &[
                "Can come across as sceptical of new ideas",
                "May under-invest in stakeholder buy-in",
            ],
            recommendations: &[
                "Frame critiques alongside alternatives",
                "Invest time in bringing others along",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::InspiringMobilizer,
            name: "Inspiring Mobilizer",
            persona_type: PersonaType::Positive,
            pattern: "AD",
            tagline: "Rallies people around a shared ambition.",
            description: "Channels aspiration through relationships. Energises teams and \
                          turns a vision into collective momentum.",
            strengths: &[
                "Builds enthusiasm and commitment",
                "Mobilises networks quickly",
            ],
            challenges: &[
                "Can mistake enthusiasm for validation",
                "May overlook inconvenient evidence",
            ],
            recommendations: &[
                "Define evidence milestones for every initiative",
                "Invite a designated sceptic into planning",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::AdaptiveIntegrator,
            name: "Adaptive Integrator",
            persona_type: PersonaType::Positive,
            pattern: "balanced",
            tagline: "Draws on every way of knowing.",
            description: "No single dimension dominates. Weighs evidence, relationships, \
                          experience, institutional guidance and aspiration according to \
                          the situation.",
            strengths: &[
                "Adapts approach to context",
                "Translates between colleagues with different styles",
            ],
            challenges: &[
                "Can appear indecisive",
                "May lack a distinctive voice in strongly polarised teams",
            ],
            recommendations: &[
                "Make the reasoning behind each decision explicit",
                "Commit visibly once a decision is made",
            ],
            thresholds: None,
        },
        Persona {
            id: PersonaId::BureaucraticParalysis,
            name: "Bureaucratic Paralysis",
            persona_type: PersonaType::Risk,
            pattern: "pureI",
            tagline: "Process becomes the purpose.",
            description: "Institutional approval replaces independent judgement. Decisions \
                          stall waiting for sanction and evidence that contradicts policy \
                          is set aside.",
            strengths: &["Consistency", "Compliance"],
            challenges: &[
                "Slow response to change",
                "Accountability diffused into procedure",
            ],
            recommendations: &[
                "Delegate decision rights with clear boundaries",
                "Review policies against outcomes, not adherence",
            ],
            thresholds: Some(STANDARD_RISK_THRESHOLDS),
        },
        Persona {
            id: PersonaId::EchoChamber,
            name: "Echo Chamber",
            persona_type: PersonaType::Risk,
            pattern: "pureA",
            tagline: "Agreement mistaken for truth.",
            description: "Beliefs are validated by who holds them rather than by evidence. \
                          Dissent is filtered out and group loyalty shapes conclusions.",
            strengths: &["Cohesion", "Fast alignment"],
            challenges: &["Groupthink", "Blind spots shared across the team"],
            recommendations: &[
                "Rotate a devil's advocate role",
                "Bring in external reviewers for key decisions",
            ],
            thresholds: Some(STANDARD_RISK_THRESHOLDS),
        },
        Persona {
            id: PersonaId::AnecdotalTrap,
            name: "Anecdotal Trap",
            persona_type: PersonaType::Risk,
            pattern: "pureL",
            tagline: "The exception becomes the rule.",
            description: "Personal experience outweighs all other signals. Vivid individual \
                          cases drive decisions that broader evidence would not support.",
            strengths: &["Practical grounding", "Pattern recognition in familiar settings"],
            challenges: &[
                "Overgeneralising from small samples",
                "Resistance to unfamiliar evidence",
            ],
            recommendations: &[
                "Test anecdotes against aggregate data",
                "Seek experiences from different contexts",
            ],
            thresholds: Some(STANDARD_RISK_THRESHOLDS),
        },
    ],
});
