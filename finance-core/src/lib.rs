pub mod calculations;
pub mod models;
pub mod store;

pub use calculations::{CropFinanceResult, PlanTotals, aggregate, coerce_amount, recompute};
pub use models::*;
pub use store::{InMemoryPlanRepository, PlanRepository, RepositoryError};
