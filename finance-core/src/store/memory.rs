use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use super::repository::{PlanRepository, RepositoryError};
use crate::models::{FinancePlan, SavedPlan};

/// Session-scoped [`PlanRepository`] backed by a `Vec`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryPlanRepository {
    plans: Vec<SavedPlan>,
}

impl InMemoryPlanRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl PlanRepository for InMemoryPlanRepository {
    fn save(
        &mut self,
        plan: &FinancePlan,
    ) -> Result<SavedPlan, RepositoryError> {
        plan.validate_for_save()?;

        let saved = SavedPlan::snapshot(Uuid::new_v4(), plan, Utc::now());
        info!(
            id = %saved.id,
            member = %saved.member_number,
            crops = saved.crops.len(),
            "saved scale of finance"
        );
        self.plans.push(saved.clone());
        Ok(saved)
    }

    fn get(
        &self,
        id: Uuid,
    ) -> Result<SavedPlan, RepositoryError> {
        self.plans
            .iter()
            .find(|plan| plan.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    fn list(&self) -> Vec<SavedPlan> {
        self.plans.clone()
    }

    fn list_for_member(
        &self,
        member_number: &str,
    ) -> Vec<SavedPlan> {
        let member_number = member_number.trim();
        self.plans
            .iter()
            .filter(|plan| plan.member_number.trim() == member_number)
            .cloned()
            .collect()
    }

    fn delete(
        &mut self,
        id: Uuid,
    ) -> Result<(), RepositoryError> {
        let position = self
            .plans
            .iter()
            .position(|plan| plan.id == id)
            .ok_or(RepositoryError::NotFound(id))?;
        self.plans.remove(position);
        Ok(())
    }
}
