use crate::cost::FilamentType;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Voltage {
    #[default]
    #[serde(rename = "220V")]
    V220,
    #[serde(rename = "110V")]
    V110,
}

impl Voltage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Voltage::V220 => "220V",
            Voltage::V110 => "110V",
        }
    }
}

impl fmt::Display for Voltage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rated (maximum) wattage at each supported mains voltage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatedWatts {
    #[serde(rename = "220V")]
    pub v220: f64,
    #[serde(rename = "110V")]
    pub v110: f64,
}

impl RatedWatts {
    pub fn at(&self, voltage: Voltage) -> f64 {
        match voltage {
            Voltage::V220 => self.v220,
            Voltage::V110 => self.v110,
        }
    }
}

/// Average draw while printing each filament. Materials without a usable
/// figure (absent or zero) fall back to the PLA figure. Loaded tables must
/// carry PLA; `ReferenceData` rejects printers without it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FilamentWatts {
    #[serde(rename = "PLA", default, skip_serializing_if = "Option::is_none")]
    pub pla: Option<f64>,
    #[serde(rename = "PETG", default, skip_serializing_if = "Option::is_none")]
    pub petg: Option<f64>,
    #[serde(rename = "ABS", default, skip_serializing_if = "Option::is_none")]
    pub abs: Option<f64>,
    #[serde(rename = "PC", default, skip_serializing_if = "Option::is_none")]
    pub pc: Option<f64>,
}

impl FilamentWatts {
    pub fn dedicated(&self, filament: FilamentType) -> Option<f64> {
        match filament {
            FilamentType::Pla => self.pla,
            FilamentType::Petg => self.petg,
            FilamentType::Abs => self.abs,
            FilamentType::Pc => self.pc,
        }
    }

    pub fn for_filament(&self, filament: FilamentType) -> f64 {
        self.dedicated(filament)
            .filter(|watts| *watts > 0.0)
            .or(self.pla)
            .unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrinterProfile {
    pub price: f64,
    pub standby_watts: f64,
    pub rated_watts: RatedWatts,
    pub filament_watts: FilamentWatts,
}

impl PrinterProfile {
    pub fn power_for(&self, filament: FilamentType) -> f64 {
        self.filament_watts.for_filament(filament)
    }

    pub(crate) fn figures(&self) -> Vec<(&'static str, f64)> {
        let mut figures = vec![
            ("price", self.price),
            ("standby_watts", self.standby_watts),
            ("rated_watts.220V", self.rated_watts.v220),
            ("rated_watts.110V", self.rated_watts.v110),
        ];
        figures.extend(self.filament_watts.pla.map(|w| ("filament_watts.PLA", w)));
        figures.extend(self.filament_watts.petg.map(|w| ("filament_watts.PETG", w)));
        figures.extend(self.filament_watts.abs.map(|w| ("filament_watts.ABS", w)));
        figures.extend(self.filament_watts.pc.map(|w| ("filament_watts.PC", w)));
        figures
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessoryProfile {
    pub standby_watts: f64,
    pub working_watts: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drying_watts: Option<f64>,
}

impl AccessoryProfile {
    pub(crate) fn figures(&self) -> Vec<(&'static str, f64)> {
        let mut figures = vec![
            ("standby_watts", self.standby_watts),
            ("working_watts", self.working_watts),
        ];
        figures.extend(self.drying_watts.map(|w| ("drying_watts", w)));
        figures
    }
}
