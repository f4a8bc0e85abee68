pub mod config;
pub mod cost;
pub mod error;
pub mod input;
pub mod observability;
pub mod reference;
pub mod report;

pub use config::{CalculatorConfig, ComponentToggles};
pub use cost::{compute_costs, CostBreakdown, CostComponent, CostEngine, FilamentType, JobInput, PrintDuration};
pub use error::{CostError, Result};
pub use reference::ReferenceData;
