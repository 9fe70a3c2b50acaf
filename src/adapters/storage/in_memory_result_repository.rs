//! In-Memory Assessment Result Repository
//!
//! Keeps completed assessments in a process-local map. Contents are lost on
//! restart; durable storage is left to deployments that need it.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};
use crate::ports::AssessmentResultRepository;

/// In-memory storage for assessment results
#[derive(Debug, Clone, Default)]
pub struct InMemoryResultRepository {
    results: Arc<RwLock<HashMap<AssessmentId, AssessmentResult>>>,
}

impl InMemoryResultRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored results
    pub async fn len(&self) -> usize {
        self.results.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.results.read().await.is_empty()
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.results.write().await.clear();
    }
}

#[async_trait]
impl AssessmentResultRepository for InMemoryResultRepository {
    async fn save(&self, result: &AssessmentResult) -> Result<(), DomainError> {
        let mut results = self.results.write().await;
        if results.contains_key(&result.id) {
            return Err(DomainError::new(
                ErrorCode::StorageError,
                format!("Assessment {} already stored", result.id),
            ));
        }
        results.insert(result.id, result.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentResult>, DomainError> {
        Ok(self.results.read().await.get(id).cloned())
    }

    async fn find_many(&self, ids: &[AssessmentId]) -> Result<Vec<AssessmentResult>, DomainError> {
        let results = self.results.read().await;
        Ok(ids.iter().filter_map(|id| results.get(id).cloned()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::DimensionScores;
    use crate::domain::foundation::RespondentId;
    use crate::domain::persona::PersonaClassifier;

    fn result(respondent: &str) -> AssessmentResult {
        AssessmentResult::complete(
            RespondentId::new(respondent).unwrap(),
            DimensionScores::try_new(50.0, 50.0, 50.0, 50.0, 50.0).unwrap(),
            &PersonaClassifier::standard(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn save_and_find() {
        let repo = InMemoryResultRepository::new();
        let stored = result("alice");

        repo.save(&stored).await.unwrap();

        assert_eq!(repo.find_by_id(&stored.id).await.unwrap(), Some(stored));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryResultRepository::new();
        assert!(repo.find_by_id(&AssessmentId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn saving_twice_is_rejected() {
        let repo = InMemoryResultRepository::new();
        let stored = result("alice");
        repo.save(&stored).await.unwrap();

        let err = repo.save(&stored).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::StorageError);
    }

    #[tokio::test]
    async fn find_many_keeps_request_order_and_skips_missing() {
        let repo = InMemoryResultRepository::new();
        let a = result("alice");
        let b = result("bob");
        repo.save(&a).await.unwrap();
        repo.save(&b).await.unwrap();

        let found = repo
            .find_many(&[b.id, AssessmentId::new(), a.id])
            .await
            .unwrap();

        let respondents: Vec<&str> = found.iter().map(|r| r.respondent.as_str()).collect();
        assert_eq!(respondents, vec!["bob", "alice"]);
    }

    #[tokio::test]
    async fn clones_share_storage() {
        let repo = InMemoryResultRepository::new();
        let clone = repo.clone();
        repo.save(&result("alice")).await.unwrap();
        assert_eq!(clone.len().await, 1);

        clone.clear().await;
        assert!(repo.is_empty().await);
    }
}
