//! Dimension scores: one percentage per VALID dimension.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Dimension;
use crate::domain::foundation::{Percentage, ValidationError};

/// Percentages for all five dimensions.
///
/// All five keys are always present and each value lies in [0,100]. The
/// values are independent and need not sum to 100. Serialized with the
/// single-letter dimension codes as keys; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DimensionScores {
    #[serde(rename = "V")]
    verity: Percentage,
    #[serde(rename = "A")]
    association: Percentage,
    #[serde(rename = "L")]
    lived_experience: Percentage,
    #[serde(rename = "I")]
    institutional: Percentage,
    #[serde(rename = "D")]
    desire: Percentage,
}

impl DimensionScores {
    /// Creates scores from raw values in V, A, L, I, D order.
    pub fn try_new(v: f64, a: f64, l: f64, i: f64, d: f64) -> Result<Self, ValidationError> {
        Ok(Self {
            verity: Percentage::try_for_field("V", v)?,
            association: Percentage::try_for_field("A", a)?,
            lived_experience: Percentage::try_for_field("L", l)?,
            institutional: Percentage::try_for_field("I", i)?,
            desire: Percentage::try_for_field("D", d)?,
        })
    }

    /// Creates scores from a dimension-code mapping such as `{"V": 90.0, ...}`.
    ///
    /// Missing and unrecognized keys are both validation errors.
    pub fn from_map(map: &HashMap<String, f64>) -> Result<Self, ValidationError> {
        let mut values: HashMap<Dimension, f64> = HashMap::with_capacity(5);
        for (key, value) in map {
            let dimension = match key.as_str() {
                "V" => Dimension::Verity,
                "A" => Dimension::Association,
                "L" => Dimension::LivedExperience,
                "I" => Dimension::Institutional,
                "D" => Dimension::Desire,
                other => return Err(ValidationError::unknown_dimension(other)),
            };
            values.insert(dimension, *value);
        }

        let value_of = |dimension: Dimension| {
            values
                .get(&dimension)
                .copied()
                .ok_or_else(|| ValidationError::missing_dimension(dimension.code()))
        };

        Self::try_new(
            value_of(Dimension::Verity)?,
            value_of(Dimension::Association)?,
            value_of(Dimension::LivedExperience)?,
            value_of(Dimension::Institutional)?,
            value_of(Dimension::Desire)?,
        )
    }

    pub(crate) fn from_percentages(
        verity: Percentage,
        association: Percentage,
        lived_experience: Percentage,
        institutional: Percentage,
        desire: Percentage,
    ) -> Self {
        Self {
            verity,
            association,
            lived_experience,
            institutional,
            desire,
        }
    }

    pub fn get(&self, dimension: Dimension) -> Percentage {
        match dimension {
            Dimension::Verity => self.verity,
            Dimension::Association => self.association,
            Dimension::LivedExperience => self.lived_experience,
            Dimension::Institutional => self.institutional,
            Dimension::Desire => self.desire,
        }
    }

    /// Iterates in canonical V, A, L, I, D order.
    pub fn iter(&self) -> impl Iterator<Item = (Dimension, Percentage)> + '_ {
        Dimension::ALL.iter().map(move |d| (*d, self.get(*d)))
    }

    /// True when every dimension lies in `[low, high]` inclusive.
    pub fn all_within(&self, low: f64, high: f64) -> bool {
        self.iter().all(|(_, score)| score.within(low, high))
    }
}
