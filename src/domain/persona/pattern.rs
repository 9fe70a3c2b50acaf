//! Pattern Calculator - pairwise pattern strengths and pure-type scores.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::assessment::{Dimension, DimensionScores};
use crate::domain::foundation::Percentage;

/// Classification key: a pairwise combination of two dimensions or a
/// single pure-type dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PatternKey {
    #[serde(rename = "VD")]
    VerityDesire,
    #[serde(rename = "VA")]
    VerityAssociation,
    #[serde(rename = "AI")]
    AssociationInstitutional,
    #[serde(rename = "LI")]
    LivedInstitutional,
    #[serde(rename = "VL")]
    VerityLived,
    #[serde(rename = "AD")]
    AssociationDesire,
    #[serde(rename = "pureI")]
    PureInstitutional,
    #[serde(rename = "pureA")]
    PureAssociation,
    #[serde(rename = "pureL")]
    PureLived,
}

impl PatternKey {
    /// The six combined patterns in classification order.
    ///
    /// This order is the tie-break: when two patterns share the highest
    /// score, the one listed first wins.
    pub const COMBINED: [PatternKey; 6] = [
        PatternKey::VerityDesire,
        PatternKey::VerityAssociation,
        PatternKey::AssociationInstitutional,
        PatternKey::LivedInstitutional,
        PatternKey::VerityLived,
        PatternKey::AssociationDesire,
    ];

    /// Pure types in risk-evaluation order.
    pub const PURE: [PatternKey; 3] = [
        PatternKey::PureInstitutional,
        PatternKey::PureAssociation,
        PatternKey::PureLived,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::VerityDesire => "VD",
            Self::VerityAssociation => "VA",
            Self::AssociationInstitutional => "AI",
            Self::LivedInstitutional => "LI",
            Self::VerityLived => "VL",
            Self::AssociationDesire => "AD",
            Self::PureInstitutional => "pureI",
            Self::PureAssociation => "pureA",
            Self::PureLived => "pureL",
        }
    }

    /// The two dimensions averaged by a combined pattern.
    pub fn pair(&self) -> Option<(Dimension, Dimension)> {
        use Dimension::*;
        match self {
            Self::VerityDesire => Some((Verity, Desire)),
            Self::VerityAssociation => Some((Verity, Association)),
            Self::AssociationInstitutional => Some((Association, Institutional)),
            Self::LivedInstitutional => Some((LivedExperience, Institutional)),
            Self::VerityLived => Some((Verity, LivedExperience)),
            Self::AssociationDesire => Some((Association, Desire)),
            _ => None,
        }
    }

    /// The dimension passed through by a pure-type pattern.
    pub fn pure_dimension(&self) -> Option<Dimension> {
        match self {
            Self::PureInstitutional => Some(Dimension::Institutional),
            Self::PureAssociation => Some(Dimension::Association),
            Self::PureLived => Some(Dimension::LivedExperience),
            _ => None,
        }
    }

    pub fn is_pure(&self) -> bool {
        self.pure_dimension().is_some()
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Derived pattern strengths for one set of dimension scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PatternStrengths {
    #[serde(rename = "VD")]
    pub verity_desire: Percentage,
    #[serde(rename = "VA")]
    pub verity_association: Percentage,
    #[serde(rename = "AI")]
    pub association_institutional: Percentage,
    #[serde(rename = "LI")]
    pub lived_institutional: Percentage,
    #[serde(rename = "VL")]
    pub verity_lived: Percentage,
    #[serde(rename = "AD")]
    pub association_desire: Percentage,
    #[serde(rename = "pureI")]
    pub pure_institutional: Percentage,
    #[serde(rename = "pureA")]
    pub pure_association: Percentage,
    #[serde(rename = "pureL")]
    pub pure_lived: Percentage,
}

impl PatternStrengths {
    pub fn get(&self, key: PatternKey) -> Percentage {
        match key {
            PatternKey::VerityDesire => self.verity_desire,
            PatternKey::VerityAssociation => self.verity_association,
            PatternKey::AssociationInstitutional => self.association_institutional,
            PatternKey::LivedInstitutional => self.lived_institutional,
            PatternKey::VerityLived => self.verity_lived,
            PatternKey::AssociationDesire => self.association_desire,
            PatternKey::PureInstitutional => self.pure_institutional,
            PatternKey::PureAssociation => self.pure_association,
            PatternKey::PureLived => self.pure_lived,
        }
    }

    /// Combined patterns in classification order.
    pub fn combined(&self) -> impl Iterator<Item = (PatternKey, Percentage)> + '_ {
        PatternKey::COMBINED.iter().map(move |k| (*k, self.get(*k)))
    }

    /// Pure-type scores in risk-evaluation order.
    pub fn pure(&self) -> impl Iterator<Item = (PatternKey, Percentage)> + '_ {
        PatternKey::PURE.iter().map(move |k| (*k, self.get(*k)))
    }
}

/// Computes [`PatternStrengths`] from dimension scores.
pub struct PatternCalculator;

impl PatternCalculator {
    /// Pure and total over any valid [`DimensionScores`].
    pub fn calculate(scores: &DimensionScores) -> PatternStrengths {
        let v = scores.get(Dimension::Verity);
        let a = scores.get(Dimension::Association);
        let l = scores.get(Dimension::LivedExperience);
        let i = scores.get(Dimension::Institutional);
        let d = scores.get(Dimension::Desire);

        PatternStrengths {
            verity_desire: Percentage::mean(v, d),
            verity_association: Percentage::mean(v, a),
            association_institutional: Percentage::mean(a, i),
            lived_institutional: Percentage::mean(l, i),
            verity_lived: Percentage::mean(v, l),
            association_desire: Percentage::mean(a, d),
            pure_institutional: i,
            pure_association: a,
            pure_lived: l,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(v: f64, a: f64, l: f64, i: f64, d: f64) -> DimensionScores {
        DimensionScores::try_new(v, a, l, i, d).unwrap()
    }

    #[test]
    fn combined_patterns_are_pairwise_means() {
        let patterns = PatternCalculator::calculate(&scores(90.0, 40.0, 30.0, 20.0, 90.0));

        assert_eq!(patterns.get(PatternKey::VerityDesire).value(), 90.0);
        assert_eq!(patterns.get(PatternKey::VerityAssociation).value(), 65.0);
        assert_eq!(patterns.get(PatternKey::AssociationInstitutional).value(), 30.0);
        assert_eq!(patterns.get(PatternKey::LivedInstitutional).value(), 25.0);
        assert_eq!(patterns.get(PatternKey::VerityLived).value(), 60.0);
        assert_eq!(patterns.get(PatternKey::AssociationDesire).value(), 65.0);
    }

    #[test]
    fn pure_types_pass_through() {
        let patterns = PatternCalculator::calculate(&scores(10.0, 20.0, 15.0, 78.0, 10.0));

        assert_eq!(patterns.get(PatternKey::PureInstitutional).value(), 78.0);
        assert_eq!(patterns.get(PatternKey::PureAssociation).value(), 20.0);
        assert_eq!(patterns.get(PatternKey::PureLived).value(), 15.0);
    }

    #[test]
    fn every_combined_pattern_has_a_pair() {
        for key in PatternKey::COMBINED {
            assert!(key.pair().is_some(), "{}", key);
            assert!(!key.is_pure());
        }
        for key in PatternKey::PURE {
            assert!(key.pair().is_none(), "{}", key);
            assert!(key.is_pure());
        }
    }

    #[test]
    fn combined_iterates_in_declared_order() {
        let patterns = PatternCalculator::calculate(&scores(50.0, 50.0, 50.0, 50.0, 50.0));
        let keys: Vec<&str> = patterns.combined().map(|(k, _)| k.code()).collect();
        assert_eq!(keys, vec!["VD", "VA", "AI", "LI", "VL", "AD"]);
    }

    #[test]
    fn serializes_with_pattern_codes() {
        let patterns = PatternCalculator::calculate(&scores(90.0, 40.0, 30.0, 20.0, 90.0));
        let json = serde_json::to_value(patterns).unwrap();
        assert_eq!(json["VD"], 90.0);
        assert_eq!(json["pureI"], 20.0);
    }
}
