use super::{CostBreakdown, FilamentType, JobInput};
use crate::reference::ReferenceData;
use std::collections::BTreeSet;
use tracing::debug;

/// Service life used to amortize a printer's purchase price.
pub const DEPRECIATION_SERVICE_HOURS: f64 = 3000.0;

pub fn suggested_depreciation_rate(printer_price: f64) -> f64 {
    printer_price / DEPRECIATION_SERVICE_HOURS
}

pub struct CostEngine {
    reference: ReferenceData,
}

impl CostEngine {
    pub fn new(reference: ReferenceData) -> Self {
        Self { reference }
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    pub fn compute(&self, input: &JobInput) -> CostBreakdown {
        compute_costs(input, &self.reference)
    }
}

pub fn compute_costs(input: &JobInput, reference: &ReferenceData) -> CostBreakdown {
    let total_hours = input.total_hours();

    let breakdown = CostBreakdown::from_components(
        material_cost(
            input.weight_grams,
            input.filament_price_per_kg,
            input.failure_rate_percent,
        ),
        electricity_cost(input, reference, total_hours),
        input.depreciation_rate_per_hour * total_hours,
        input.maintenance_rate_per_hour * total_hours,
        input.labor_rate_per_hour * total_hours,
    );

    debug!(
        printer = input.printer.as_deref().unwrap_or("none"),
        total_hours,
        total = breakdown.total,
        "Computed print cost"
    );

    breakdown
}

/// Raw filament cost plus the failure rate applied as a percentage surcharge.
fn material_cost(weight_grams: f64, price_per_kg: f64, failure_rate_percent: f64) -> f64 {
    let base_cost = (weight_grams / 1000.0) * price_per_kg;
    let wastage = base_cost * (failure_rate_percent / 100.0);
    base_cost + wastage
}

fn electricity_cost(input: &JobInput, reference: &ReferenceData, total_hours: f64) -> f64 {
    let Some(printer_id) = input.printer.as_deref() else {
        return 0.0;
    };

    let watts = match combined_watts(reference, printer_id, input.filament, &input.accessories) {
        Some(watts) => watts,
        None => {
            debug!(printer = printer_id, "Printer not in reference data, skipping electricity");
            return 0.0;
        }
    };

    (watts / 1000.0) * total_hours * input.electricity_rate_per_kwh
}

/// Printer draw for the filament plus every accessory at working power for
/// the whole print.
fn combined_watts(
    reference: &ReferenceData,
    printer_id: &str,
    filament: FilamentType,
    accessories: &BTreeSet<String>,
) -> Option<f64> {
    let printer = reference.printer(printer_id)?;
    let accessory_watts: f64 = accessories
        .iter()
        .filter_map(|id| reference.accessory(id))
        .map(|accessory| accessory.working_watts)
        .sum();
    Some(printer.power_for(filament) + accessory_watts)
}
