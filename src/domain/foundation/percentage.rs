//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A finite value between 0 and 100 inclusive.
///
/// Dimension scores and pattern strengths are fractional, so the value is
/// kept as `f64`. Deserialization goes through [`Percentage::try_new`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Percentage(f64);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a Percentage, returning error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        Self::try_for_field("percentage", value)
    }

    /// Same as [`Percentage::try_new`] but names the offending field.
    pub fn try_for_field(field: &str, value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(field, "must be a finite number"));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range(field, 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Mean of two percentages. Always in range.
    pub fn mean(a: Percentage, b: Percentage) -> Self {
        Self((a.0 + b.0) / 2.0)
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns true if the value lies in `[low, high]`.
    pub fn within(&self, low: f64, high: f64) -> bool {
        self.0 >= low && self.0 <= high
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<f64> for Percentage {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<Percentage> for f64 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
