//! The five VALID dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the five scored traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Reliance on evidence and verified facts
    #[serde(rename = "V")]
    Verity,
    /// Reliance on relationships and trusted networks
    #[serde(rename = "A")]
    Association,
    /// Reliance on personal, lived experience
    #[serde(rename = "L")]
    LivedExperience,
    /// Reliance on institutional authority and process
    #[serde(rename = "I")]
    Institutional,
    /// Reliance on aspiration and desired outcomes
    #[serde(rename = "D")]
    Desire,
}

impl Dimension {
    /// All dimensions in canonical V, A, L, I, D order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Verity,
        Dimension::Association,
        Dimension::LivedExperience,
        Dimension::Institutional,
        Dimension::Desire,
    ];

    /// Single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Verity => "V",
            Self::Association => "A",
            Self::LivedExperience => "L",
            Self::Institutional => "I",
            Self::Desire => "D",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Verity => "Verity",
            Self::Association => "Association",
            Self::LivedExperience => "Lived Experience",
            Self::Institutional => "Institutional",
            Self::Desire => "Desire",
        }
    }
}

impl FromStr for Dimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "V" | "v" => Ok(Self::Verity),
            "A" | "a" => Ok(Self::Association),
            "L" | "l" => Ok(Self::LivedExperience),
            "I" | "i" => Ok(Self::Institutional),
            "D" | "d" => Ok(Self::Desire),
            other => Err(ValidationError::unknown_dimension(other)),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
