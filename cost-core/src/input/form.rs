use super::normalize::{parse_amount, parse_optional_amount};
use crate::cost::{FilamentType, JobInput, PrintDuration};
use crate::error::{CostError, Result};
use crate::reference::ReferenceData;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tracing::debug;

/// Job parameters exactly as typed into the calculator form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawJobForm {
    pub printer: String,
    pub accessories: Vec<String>,
    pub filament: String,
    pub hours: String,
    pub minutes: String,
    pub weight_grams: String,
    pub filament_price_per_kg: String,
    pub electricity_rate: String,
    pub depreciation_rate: String,
    pub maintenance_rate: String,
    pub failure_rate: String,
    pub labor_rate: String,
}

impl RawJobForm {
    /// Resolve the form against the reference table.
    ///
    /// Numeric fields never fail: anything that is not a usable amount is
    /// read as zero. Printer and accessory ids must exist in `reference`.
    /// A blank depreciation field with a printer selected takes the
    /// printer's suggested hourly rate.
    pub fn into_job_input(self, reference: &ReferenceData) -> Result<JobInput> {
        let printer = match self.printer.trim() {
            "" => None,
            id if reference.printer(id).is_some() => Some(id.to_string()),
            id => return Err(CostError::UnknownPrinter(id.to_string())),
        };

        let mut accessories = BTreeSet::new();
        for id in self.accessories.iter().map(|a| a.trim()).filter(|a| !a.is_empty()) {
            if reference.accessory(id).is_none() {
                return Err(CostError::UnknownAccessory(id.to_string()));
            }
            accessories.insert(id.to_string());
        }

        let filament = if self.filament.trim().is_empty() {
            FilamentType::default()
        } else {
            self.filament.parse()?
        };

        let depreciation_rate_per_hour = match parse_optional_amount(&self.depreciation_rate) {
            Some(rate) => rate,
            None => printer
                .as_deref()
                .and_then(|id| reference.suggested_depreciation(id))
                .unwrap_or(0.0),
        };

        let input = JobInput {
            printer,
            accessories,
            filament,
            duration: PrintDuration::new(parse_amount(&self.hours), parse_amount(&self.minutes)),
            weight_grams: parse_amount(&self.weight_grams),
            filament_price_per_kg: parse_amount(&self.filament_price_per_kg),
            electricity_rate_per_kwh: parse_amount(&self.electricity_rate),
            depreciation_rate_per_hour,
            maintenance_rate_per_hour: parse_amount(&self.maintenance_rate),
            failure_rate_percent: parse_amount(&self.failure_rate),
            labor_rate_per_hour: parse_amount(&self.labor_rate),
        };

        debug!(
            printer = input.printer.as_deref().unwrap_or("none"),
            accessories = input.accessories.len(),
            filament = %input.filament,
            "Normalized job form"
        );

        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceData {
        ReferenceData::bambu_lab().unwrap()
    }

    #[test]
    fn test_blank_form() {
        let input = RawJobForm::default().into_job_input(&reference()).unwrap();
        assert_eq!(input, JobInput::default());
    }

    #[test]
    fn test_invalid_numbers_become_zero() {
        let form = RawJobForm {
            hours: "two".to_string(),
            minutes: "30".to_string(),
            weight_grams: "-12".to_string(),
            labor_rate: "50".to_string(),
            ..RawJobForm::default()
        };

        let input = form.into_job_input(&reference()).unwrap();
        assert_eq!(input.duration, PrintDuration::new(0.0, 30.0));
        assert_eq!(input.weight_grams, 0.0);
        assert_eq!(input.labor_rate_per_hour, 50.0);
    }

    #[test]
    fn test_depreciation_defaults_from_printer_price() {
        let form = RawJobForm {
            printer: "X1C".to_string(),
            ..RawJobForm::default()
        };
        let input = form.into_job_input(&reference()).unwrap();
        assert_eq!(input.depreciation_rate_per_hour, 0.47);

        let form = RawJobForm {
            printer: "X1C".to_string(),
            depreciation_rate: "1.25".to_string(),
            ..RawJobForm::default()
        };
        let input = form.into_job_input(&reference()).unwrap();
        assert_eq!(input.depreciation_rate_per_hour, 1.25);
    }

    #[test]
    fn test_unknown_identifiers() {
        let form = RawJobForm {
            printer: "Ender3".to_string(),
            ..RawJobForm::default()
        };
        assert!(matches!(
            form.into_job_input(&reference()),
            Err(CostError::UnknownPrinter(id)) if id == "Ender3"
        ));

        let form = RawJobForm {
            accessories: vec!["AMS".to_string(), "Dryer".to_string()],
            ..RawJobForm::default()
        };
        assert!(matches!(
            form.into_job_input(&reference()),
            Err(CostError::UnknownAccessory(id)) if id == "Dryer"
        ));

        let form = RawJobForm {
            filament: "TPU".to_string(),
            ..RawJobForm::default()
        };
        assert!(matches!(
            form.into_job_input(&reference()),
            Err(CostError::UnknownFilament(_))
        ));
    }

    #[test]
    fn test_accessories_deduplicated() {
        let form = RawJobForm {
            printer: "P1S".to_string(),
            accessories: vec!["AMS".to_string(), " AMS ".to_string(), "".to_string()],
            filament: "abs".to_string(),
            ..RawJobForm::default()
        };
        let input = form.into_job_input(&reference()).unwrap();
        assert_eq!(input.accessories.len(), 1);
        assert_eq!(input.filament, FilamentType::Abs);
    }
}
