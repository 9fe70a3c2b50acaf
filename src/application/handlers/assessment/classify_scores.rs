//! ClassifyScores - Query handler classifying raw dimension scores.

use std::sync::Arc;

use crate::domain::assessment::DimensionScores;
use crate::domain::foundation::DomainError;
use crate::domain::persona::{ClassificationResult, PersonaCatalog, PersonaClassifier};

/// Query to classify already-computed dimension scores.
#[derive(Debug, Clone)]
pub struct ClassifyScoresQuery {
    pub scores: DimensionScores,
}

/// Handler for ad-hoc classification. Nothing is stored.
pub struct ClassifyScoresHandler {
    catalog: Arc<PersonaCatalog>,
}

impl ClassifyScoresHandler {
    pub fn new(catalog: Arc<PersonaCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self, query: ClassifyScoresQuery) -> Result<ClassificationResult, DomainError> {
        PersonaClassifier::new(&self.catalog).classify(&query.scores)
    }
}
