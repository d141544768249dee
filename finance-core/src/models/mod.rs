mod crop;
mod crop_entry;
mod finance_plan;
mod saved_plan;

pub use crop::{CropName, Season};
pub use crop_entry::{CropEntry, CropField};
pub use finance_plan::{FinancePlan, PlanValidationError};
pub use saved_plan::SavedPlan;
