//! YAML file loader for questionnaires.

use std::path::{Path, PathBuf};
use tokio::fs;

use crate::domain::assessment::Questionnaire;
use crate::domain::foundation::DomainError;

/// A questionnaire definition on disk.
#[derive(Debug, Clone)]
pub struct YamlQuestionnaireFile {
    path: PathBuf,
}

impl YamlQuestionnaireFile {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the questionnaire.
    ///
    /// Both unreadable files and invalid definitions are configuration
    /// errors: the service cannot score answers without a questionnaire.
    pub async fn load(&self) -> Result<Questionnaire, DomainError> {
        let display = self.path.display().to_string();

        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::configuration(format!("Failed to read questionnaire: {}", e))
                .with_detail("path", display.clone())
        })?;

        Questionnaire::from_yaml_str(&content).map_err(|e| {
            DomainError::configuration(format!("Invalid questionnaire: {}", e))
                .with_detail("path", display)
        })
    }
}

/// Loads the questionnaire at `path`, or the built-in standard one.
pub async fn load_questionnaire(path: Option<&Path>) -> Result<Questionnaire, DomainError> {
    match path {
        Some(path) => {
            let questionnaire = YamlQuestionnaireFile::new(path).load().await?;
            tracing::info!(
                path = %path.display(),
                questions = questionnaire.len(),
                "Loaded questionnaire from file"
            );
            Ok(questionnaire)
        }
        None => Ok(Questionnaire::standard().clone()),
    }
}
