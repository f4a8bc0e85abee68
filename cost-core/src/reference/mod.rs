/// Printer and accessory reference tables
pub mod profile;

pub use profile::{AccessoryProfile, FilamentWatts, PrinterProfile, RatedWatts, Voltage};

use crate::cost::suggested_depreciation_rate;
use crate::error::{CostError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, info};

const BAMBU_LAB_TABLE: &str = include_str!("bambu_lab.toml");

/// Read-only power and price data the engine is evaluated against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    #[serde(default)]
    pub printers: BTreeMap<String, PrinterProfile>,
    #[serde(default)]
    pub accessories: BTreeMap<String, AccessoryProfile>,
}

impl ReferenceData {
    /// The built-in Bambu Lab table.
    pub fn bambu_lab() -> Result<Self> {
        Self::from_toml_str(BAMBU_LAB_TABLE)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let data: ReferenceData = toml::from_str(content)?;
        data.validate()?;
        debug!(
            printers = data.printers.len(),
            accessories = data.accessories.len(),
            "Parsed reference data"
        );
        Ok(data)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let data = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "Loaded reference data");
        Ok(data)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self)
            .map_err(|e| CostError::InvalidReference(format!("cannot serialize table: {}", e)))
    }

    pub fn printer(&self, id: &str) -> Option<&PrinterProfile> {
        self.printers.get(id)
    }

    pub fn accessory(&self, id: &str) -> Option<&AccessoryProfile> {
        self.accessories.get(id)
    }

    pub fn printer_ids(&self) -> impl Iterator<Item = &str> {
        self.printers.keys().map(String::as_str)
    }

    pub fn accessory_ids(&self) -> impl Iterator<Item = &str> {
        self.accessories.keys().map(String::as_str)
    }

    /// Hourly depreciation suggested for a printer, rounded to cents the way
    /// the rate field is pre-filled.
    pub fn suggested_depreciation(&self, printer_id: &str) -> Option<f64> {
        self.printer(printer_id)
            .map(|profile| (suggested_depreciation_rate(profile.price) * 100.0).round() / 100.0)
    }

    fn validate(&self) -> Result<()> {
        if let Some(id) = self
            .printers
            .iter()
            .find(|(_, p)| p.filament_watts.pla.is_none())
            .map(|(id, _)| id)
        {
            return Err(CostError::InvalidReference(format!(
                "{}.filament_watts.PLA is required",
                id
            )));
        }

        let printer_figures = self
            .printers
            .iter()
            .flat_map(|(id, p)| p.figures().into_iter().map(move |(field, v)| (id, field, v)));
        let accessory_figures = self
            .accessories
            .iter()
            .flat_map(|(id, a)| a.figures().into_iter().map(move |(field, v)| (id, field, v)));

        for (id, field, value) in printer_figures.chain(accessory_figures) {
            if !value.is_finite() || value < 0.0 {
                return Err(CostError::InvalidReference(format!(
                    "{}.{} must be a non-negative number, got {}",
                    id, field, value
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::FilamentType;

    #[test]
    fn test_bambu_lab_table() {
        let data = ReferenceData::bambu_lab().unwrap();
        assert_eq!(data.printers.len(), 7);
        assert_eq!(data.accessories.len(), 4);

        let x1c = data.printer("X1C").unwrap();
        assert_eq!(x1c.power_for(FilamentType::Pla), 105.0);
        assert_eq!(x1c.rated_watts.at(Voltage::V110), 350.0);
        assert_eq!(x1c.price, 1400.0);

        let ams_ht = data.accessory("AMS_HT").unwrap();
        assert_eq!(ams_ht.working_watts, 12.0);
        assert_eq!(ams_ht.drying_watts, Some(170.0));
        assert_eq!(data.accessory("AMS").unwrap().drying_watts, None);
    }

    #[test]
    fn test_ids_are_sorted() {
        let data = ReferenceData::bambu_lab().unwrap();
        let ids: Vec<&str> = data.accessory_ids().collect();
        assert_eq!(ids, vec!["AMS", "AMS_2_Pro", "AMS_HT", "AMS_lite"]);
    }

    #[test]
    fn test_missing_filament_falls_back_to_pla() {
        let data = ReferenceData::from_toml_str(
            r#"
            [printers.Basic]
            price = 300
            standby_watts = 4
            rated_watts = { "220V" = 200, "110V" = 200 }
            filament_watts = { PLA = 90 }
            "#,
        )
        .unwrap();

        let basic = data.printer("Basic").unwrap();
        assert_eq!(basic.filament_watts.dedicated(FilamentType::Abs), None);
        assert_eq!(basic.power_for(FilamentType::Abs), 90.0);
        assert_eq!(basic.power_for(FilamentType::Pc), 90.0);
    }

    #[test]
    fn test_negative_figures_rejected() {
        let result = ReferenceData::from_toml_str(
            r#"
            [accessories.Broken]
            standby_watts = 1
            working_watts = -3
            "#,
        );
        assert!(matches!(result, Err(CostError::InvalidReference(_))));
    }

    #[test]
    fn test_missing_pla_figure_rejected() {
        let result = ReferenceData::from_toml_str(
            r#"
            [printers.NoPla]
            price = 300
            standby_watts = 4
            rated_watts = { "220V" = 200, "110V" = 200 }
            filament_watts = { ABS = 90 }
            "#,
        );
        assert!(matches!(
            result,
            Err(CostError::InvalidReference(msg)) if msg == "NoPla.filament_watts.PLA is required"
        ));
    }

    #[test]
    fn test_zero_filament_figure_falls_back_to_pla() {
        let data = ReferenceData::from_toml_str(
            r#"
            [printers.Odd]
            price = 300
            standby_watts = 4
            rated_watts = { "220V" = 200, "110V" = 200 }
            filament_watts = { PLA = 90, PC = 0 }
            "#,
        )
        .unwrap();

        let odd = data.printer("Odd").unwrap();
        assert_eq!(odd.filament_watts.dedicated(FilamentType::Pc), Some(0.0));
        assert_eq!(odd.power_for(FilamentType::Pc), 90.0);
    }

    #[test]
    fn test_toml_round_trip() {
        let data = ReferenceData::bambu_lab().unwrap();
        let text = data.to_toml_string().unwrap();
        assert_eq!(ReferenceData::from_toml_str(&text).unwrap(), data);
    }

    #[test]
    fn test_suggested_depreciation() {
        let data = ReferenceData::bambu_lab().unwrap();
        assert_eq!(data.suggested_depreciation("X1C"), Some(0.47));
        assert_eq!(data.suggested_depreciation("A1_mini"), Some(0.1));
        assert_eq!(data.suggested_depreciation("Ender"), None);
    }
}
