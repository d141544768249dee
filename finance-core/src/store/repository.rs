use thiserror::Error;
use uuid::Uuid;

use crate::models::{FinancePlan, PlanValidationError, SavedPlan};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Plan {0} not found")]
    NotFound(Uuid),

    #[error("Plan cannot be saved: {0}")]
    Validation(#[from] PlanValidationError),
}

/// Storage for saved finance plans.
///
/// Plans live for the session only; implementations are owned by a single
/// caller and take `&mut self` for writes.
pub trait PlanRepository {
    /// Validates `plan` and stores a snapshot of it under a new id.
    fn save(
        &mut self,
        plan: &FinancePlan,
    ) -> Result<SavedPlan, RepositoryError>;

    fn get(
        &self,
        id: Uuid,
    ) -> Result<SavedPlan, RepositoryError>;

    /// All saved plans, oldest first.
    fn list(&self) -> Vec<SavedPlan>;

    /// Saved plans for one member number, oldest first.
    fn list_for_member(
        &self,
        member_number: &str,
    ) -> Vec<SavedPlan>;

    fn delete(
        &mut self,
        id: Uuid,
    ) -> Result<(), RepositoryError>;
}
