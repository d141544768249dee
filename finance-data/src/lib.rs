pub mod config;
pub mod format;
pub mod loader;
pub mod report;

pub use config::{ConfigError, DigitGrouping, ReportConfig};
pub use format::format_amount;
pub use loader::{CropCsvError, CropCsvLoader, CropRecord};
pub use report::{PlanReport, render_report};
