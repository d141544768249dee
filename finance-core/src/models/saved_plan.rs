use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::calculations::crop_finance::PlanTotals;
use crate::models::{CropEntry, FinancePlan};

/// Snapshot of a plan taken when it was saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: Uuid,
    pub member_number: String,
    pub member_name: String,
    pub village: String,
    pub total_land_area: String,
    pub crops: Vec<CropEntry>,

    // Calculated at save time
    pub totals: PlanTotals,

    pub timestamp: DateTime<Utc>,
}

impl SavedPlan {
    /// Copies the plan's details and entries, fixing its totals as of now.
    pub fn snapshot(
        id: Uuid,
        plan: &FinancePlan,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            member_number: plan.member_number.clone(),
            member_name: plan.member_name.clone(),
            village: plan.village.clone(),
            total_land_area: plan.total_land_area.clone(),
            crops: plan.entries().to_vec(),
            totals: plan.totals(),
            timestamp,
        }
    }
}
