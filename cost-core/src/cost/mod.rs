pub mod breakdown;
pub mod calculator;
pub mod filament;
pub mod job;

pub use breakdown::{CostBreakdown, CostComponent};
pub use calculator::{compute_costs, suggested_depreciation_rate, CostEngine, DEPRECIATION_SERVICE_HOURS};
pub use filament::FilamentType;
pub use job::{JobInput, PrintDuration};
