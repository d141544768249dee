pub mod memory;
pub mod repository;

pub use memory::InMemoryPlanRepository;
pub use repository::{PlanRepository, RepositoryError};
