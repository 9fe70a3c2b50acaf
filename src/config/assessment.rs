//! Assessment configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;

/// Assessment content configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssessmentConfig {
    /// YAML questionnaire replacing the built-in standard one
    pub questionnaire_path: Option<PathBuf>,
}

impl AssessmentConfig {
    /// Validate assessment configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.questionnaire_path {
            if !path.is_file() {
                return Err(ValidationError::QuestionnaireNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}
