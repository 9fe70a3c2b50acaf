//! AssessmentResultRepository port for result persistence.

use async_trait::async_trait;

use crate::domain::assessment::AssessmentResult;
use crate::domain::foundation::{AssessmentId, DomainError};

/// Storage for completed assessments.
///
/// Results are immutable: `save` inserts, and saving an id that already
/// exists is a `StorageError`.
#[async_trait]
pub trait AssessmentResultRepository: Send + Sync {
    /// Persist a newly completed result.
    async fn save(&self, result: &AssessmentResult) -> Result<(), DomainError>;

    /// Find a result by id.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<AssessmentResult>, DomainError>;

    /// Find several results at once.
    ///
    /// Returned in the order of `ids`. Ids with no stored result are
    /// skipped; callers compare lengths when every id must exist.
    async fn find_many(&self, ids: &[AssessmentId]) -> Result<Vec<AssessmentResult>, DomainError>;
}
