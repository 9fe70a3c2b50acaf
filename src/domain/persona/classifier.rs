//! Persona Classifier - maps dimension scores to a primary persona.

use serde::Serialize;

use super::{
    PatternCalculator, PatternKey, PatternStrengths, Persona, PersonaCatalog, PersonaId,
    RiskFlag, RiskIdentifier,
};
use crate::domain::assessment::DimensionScores;
use crate::domain::foundation::{DomainError, Percentage};

/// Lower bound of the balanced band (inclusive).
pub const BALANCED_BAND_LOW: f64 = 40.0;

/// Upper bound of the balanced band (inclusive).
pub const BALANCED_BAND_HIGH: f64 = 60.0;

/// Outcome of one classification call. Owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub primary: Persona,
    /// True when the balanced band short-circuited pattern matching.
    pub balanced: bool,
    /// Winning combined pattern; `None` for balanced profiles.
    pub dominant_pattern: Option<PatternKey>,
    pub risks: Vec<RiskFlag>,
    pub patterns: PatternStrengths,
    pub scores: DimensionScores,
}

impl ClassificationResult {
    pub fn primary_id(&self) -> PersonaId {
        self.primary.id
    }

    pub fn has_risks(&self) -> bool {
        !self.risks.is_empty()
    }

    pub fn has_risk(&self, id: PersonaId) -> bool {
        self.risks.iter().any(|r| r.risk_type == id)
    }
}

/// Classifies scores against a persona catalog.
///
/// Holds no state besides the catalog reference; every call is a pure
/// function of its input.
#[derive(Debug, Clone, Copy)]
pub struct PersonaClassifier<'a> {
    catalog: &'a PersonaCatalog,
}

impl PersonaClassifier<'static> {
    /// Classifier over the standard catalog.
    pub fn standard() -> Self {
        Self::new(PersonaCatalog::standard())
    }
}

impl<'a> PersonaClassifier<'a> {
    pub fn new(catalog: &'a PersonaCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a PersonaCatalog {
        self.catalog
    }

    /// Classifies one set of dimension scores.
    ///
    /// 1. Every dimension in [40,60] selects the balanced persona.
    /// 2. Otherwise the highest combined pattern wins, ties going to the
    ///    pattern listed first in [`PatternKey::COMBINED`].
    ///
    /// Risk flags are identified in both cases.
    ///
    /// # Errors
    ///
    /// `ConfigurationError` when a persona the algorithm reaches is missing
    /// from the catalog.
    pub fn classify(&self, scores: &DimensionScores) -> Result<ClassificationResult, DomainError> {
        let patterns = PatternCalculator::calculate(scores);
        let risks = RiskIdentifier::identify(&patterns, self.catalog)?;

        if scores.all_within(BALANCED_BAND_LOW, BALANCED_BAND_HIGH) {
            let primary = self.catalog.require(PersonaId::BALANCED)?.clone();
            return Ok(ClassificationResult {
                primary,
                balanced: true,
                dominant_pattern: None,
                risks,
                patterns,
                scores: *scores,
            });
        }

        let (dominant, _) = dominant_pattern(&patterns);
        let primary = self
            .catalog
            .require(PersonaId::for_pattern(dominant))?
            .clone();

        Ok(ClassificationResult {
            primary,
            balanced: false,
            dominant_pattern: Some(dominant),
            risks,
            patterns,
            scores: *scores,
        })
    }
}

/// The strictly-highest combined pattern, scanning in declared order.
///
/// A later pattern only replaces the current best when its score is
/// strictly greater, so ties keep the earlier pattern. With all patterns at
/// zero the first pattern (VD) is returned.
pub fn dominant_pattern(patterns: &PatternStrengths) -> (PatternKey, Percentage) {
    let mut combined = patterns.combined();
    let first = combined
        .next()
        .unwrap_or((PatternKey::VerityDesire, patterns.verity_desire));

    combined.fold(first, |best, current| {
        if current.1 > best.1 {
            current
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::persona::RiskSeverity;

    fn classify(v: f64, a: f64, l: f64, i: f64, d: f64) -> ClassificationResult {
        let scores = DimensionScores::try_new(v, a, l, i, d).unwrap();
        PersonaClassifier::standard().classify(&scores).unwrap()
    }

    #[test]
    fn mid_band_profile_is_balanced() {
        let result = classify(50.0, 50.0, 50.0, 50.0, 50.0);
        assert_eq!(result.primary_id(), PersonaId::AdaptiveIntegrator);
        assert!(result.balanced);
        assert_eq!(result.dominant_pattern, None);
        assert!(result.risks.is_empty());
    }

    #[test]
    fn balanced_band_edges_are_inclusive() {
        assert!(classify(40.0, 60.0, 40.0, 60.0, 40.0).balanced);
        assert!(!classify(39.0, 60.0, 40.0, 60.0, 40.0).balanced);
        assert!(!classify(40.0, 61.0, 40.0, 60.0, 40.0).balanced);
    }

    #[test]
    fn balanced_takes_priority_over_patterns() {
        // LI = 60 is the highest pattern, but the band check wins.
        let result = classify(40.0, 40.0, 60.0, 60.0, 40.0);
        assert_eq!(result.primary_id(), PersonaId::AdaptiveIntegrator);
    }

    #[test]
    fn balanced_profile_still_reports_warning_at_threshold() {
        let result = classify(50.0, 50.0, 50.0, 60.0, 50.0);
        assert!(result.balanced);
        assert_eq!(result.risks.len(), 1);
        assert_eq!(result.risks[0].risk_type, PersonaId::BureaucraticParalysis);
        assert_eq!(result.risks[0].severity, RiskSeverity::Warning);
    }

    #[test]
    fn verity_desire_profile_is_data_driven_visionary() {
        let result = classify(90.0, 40.0, 30.0, 20.0, 90.0);
        assert_eq!(result.primary_id(), PersonaId::DataDrivenVisionary);
        assert_eq!(result.dominant_pattern, Some(PatternKey::VerityDesire));
        assert_eq!(result.patterns.verity_desire.value(), 90.0);
        assert!(result.risks.is_empty());
    }

    #[test]
    fn institutional_heavy_profile_flags_critical_risk() {
        let result = classify(10.0, 20.0, 15.0, 78.0, 10.0);
        // AI = 49, LI = 46.5 -> AI wins
        assert_eq!(result.primary_id(), PersonaId::InstitutionalDiplomat);
        assert_eq!(result.risks.len(), 1);
        assert_eq!(result.risks[0].risk_type, PersonaId::BureaucraticParalysis);
        assert_eq!(result.risks[0].severity, RiskSeverity::Critical);
        assert_eq!(result.risks[0].score, 78.0);
    }

    #[test]
    fn each_combined_pattern_reaches_its_persona() {
        let cases = [
            ((90.0, 10.0, 10.0, 10.0, 90.0), PersonaId::DataDrivenVisionary),
            ((90.0, 90.0, 10.0, 10.0, 10.0), PersonaId::TrustedConnector),
            ((10.0, 70.0, 10.0, 70.0, 10.0), PersonaId::InstitutionalDiplomat),
            ((10.0, 10.0, 70.0, 70.0, 10.0), PersonaId::SeasonedSteward),
            ((90.0, 10.0, 90.0, 10.0, 10.0), PersonaId::GroundedRealist),
            ((10.0, 90.0, 10.0, 10.0, 90.0), PersonaId::InspiringMobilizer),
        ];
        for ((v, a, l, i, d), expected) in cases {
            assert_eq!(classify(v, a, l, i, d).primary_id(), expected, "{:?}", (v, a, l, i, d));
        }
    }

    #[test]
    fn ties_go_to_the_earlier_pattern() {
        // VD = AD = 40, everything else 0.
        let result = classify(0.0, 0.0, 0.0, 0.0, 80.0);
        assert_eq!(result.dominant_pattern, Some(PatternKey::VerityDesire));
        assert_eq!(result.primary_id(), PersonaId::DataDrivenVisionary);
        assert!(result.risks.is_empty());

        // VA = AI = 50: VA is listed first.
        let result = classify(0.0, 100.0, 0.0, 0.0, 0.0);
        assert_eq!(result.dominant_pattern, Some(PatternKey::VerityAssociation));
    }

    #[test]
    fn all_zero_scores_fall_back_to_first_pattern() {
        let result = classify(0.0, 0.0, 0.0, 0.0, 0.0);
        assert_eq!(result.primary_id(), PersonaId::DataDrivenVisionary);
        assert!(!result.balanced);
        assert!(result.risks.is_empty());
    }

    #[test]
    fn classify_is_idempotent() {
        let scores = DimensionScores::try_new(33.0, 71.0, 12.5, 64.0, 80.0).unwrap();
        let classifier = PersonaClassifier::standard();
        assert_eq!(
            classifier.classify(&scores).unwrap(),
            classifier.classify(&scores).unwrap()
        );
    }

    #[test]
    fn missing_pattern_persona_is_configuration_error() {
        let personas = PersonaCatalog::standard()
            .personas()
            .iter()
            .filter(|p| p.id != PersonaId::DataDrivenVisionary)
            .cloned()
            .collect();
        let catalog = PersonaCatalog::from_personas(personas);
        let scores = DimensionScores::try_new(90.0, 40.0, 30.0, 20.0, 90.0).unwrap();

        let err = PersonaClassifier::new(&catalog).classify(&scores).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigurationError);
    }

    #[test]
    fn result_serializes_for_renderers() {
        let result = classify(90.0, 40.0, 30.0, 20.0, 90.0);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["primary"]["id"], "data_driven_visionary");
        assert_eq!(json["primary"]["type"], "positive");
        assert_eq!(json["dominant_pattern"], "VD");
        assert_eq!(json["patterns"]["VD"], 90.0);
        assert_eq!(json["scores"]["V"], 90.0);
        assert!(json["risks"].as_array().unwrap().is_empty());
    }
}
