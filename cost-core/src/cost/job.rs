use super::FilamentType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrintDuration {
    pub hours: f64,
    pub minutes: f64,
}

impl PrintDuration {
    pub fn new(hours: f64, minutes: f64) -> Self {
        Self { hours, minutes }
    }

    pub fn total_hours(&self) -> f64 {
        self.hours + self.minutes / 60.0
    }
}

/// One print job as entered by the user.
///
/// Numeric fields are expected to be finite and non-negative; the input
/// layer substitutes zero for anything else before a `JobInput` is built.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct JobInput {
    pub printer: Option<String>,
    #[serde(default)]
    pub accessories: BTreeSet<String>,
    #[serde(default)]
    pub filament: FilamentType,
    #[serde(default)]
    pub duration: PrintDuration,
    #[serde(default)]
    pub weight_grams: f64,
    #[serde(default)]
    pub filament_price_per_kg: f64,
    #[serde(default)]
    pub electricity_rate_per_kwh: f64,
    #[serde(default)]
    pub depreciation_rate_per_hour: f64,
    #[serde(default)]
    pub maintenance_rate_per_hour: f64,
    #[serde(default)]
    pub failure_rate_percent: f64,
    #[serde(default)]
    pub labor_rate_per_hour: f64,
}

impl JobInput {
    pub fn with_printer(mut self, printer: impl Into<String>) -> Self {
        self.printer = Some(printer.into());
        self
    }

    pub fn with_accessory(mut self, accessory: impl Into<String>) -> Self {
        self.accessories.insert(accessory.into());
        self
    }

    pub fn with_filament(mut self, filament: FilamentType) -> Self {
        self.filament = filament;
        self
    }

    pub fn with_duration(mut self, hours: f64, minutes: f64) -> Self {
        self.duration = PrintDuration::new(hours, minutes);
        self
    }

    pub fn total_hours(&self) -> f64 {
        self.duration.total_hours()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_hours() {
        assert_eq!(PrintDuration::new(1.0, 30.0).total_hours(), 1.5);
        assert_eq!(PrintDuration::new(0.0, 0.0).total_hours(), 0.0);
        assert_eq!(PrintDuration::new(2.0, 90.0).total_hours(), 3.5);
    }

    #[test]
    fn test_accessories_are_a_set() {
        let input = JobInput::default()
            .with_accessory("AMS")
            .with_accessory("AMS")
            .with_accessory("AMS_HT");
        assert_eq!(input.accessories.len(), 2);
    }
}
