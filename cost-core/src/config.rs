use crate::cost::{CostComponent, FilamentType, JobInput};
use crate::error::{CostError, Result};
use crate::reference::{ReferenceData, Voltage};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    pub electricity_rate: f64,
    pub filament_price_per_kg: f64,
    pub failure_rate: f64,
    pub labor_rate: f64,
    pub maintenance_rate: f64,
    pub filament: FilamentType,
    pub voltage: Voltage,
    pub currency_symbol: String,
    pub reference_path: Option<PathBuf>,
    pub display: ComponentToggles,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            electricity_rate: 3.50,
            filament_price_per_kg: 329.0,
            failure_rate: 5.0,
            labor_rate: 0.0,
            maintenance_rate: 0.20,
            filament: FilamentType::Pla,
            voltage: Voltage::V220,
            currency_symbol: "R".to_string(),
            reference_path: None,
            display: ComponentToggles::default(),
        }
    }
}

impl CalculatorConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CalculatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file. Relative `reference_path` entries are resolved
    /// against the config file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;

        if let (Some(reference), Some(dir)) = (config.reference_path.as_ref(), path.parent()) {
            if reference.is_relative() {
                config.reference_path = Some(dir.join(reference));
            }
        }

        info!(path = %path.display(), "Loaded calculator config");
        Ok(config)
    }

    /// The configured reference table, or the built-in one when none is set.
    pub fn reference_data(&self) -> Result<ReferenceData> {
        match &self.reference_path {
            Some(path) => ReferenceData::load(path),
            None => ReferenceData::bambu_lab(),
        }
    }

    /// A job preloaded with the configured default rates.
    pub fn default_job(&self) -> JobInput {
        JobInput {
            filament: self.filament,
            filament_price_per_kg: self.filament_price_per_kg,
            electricity_rate_per_kwh: self.electricity_rate,
            maintenance_rate_per_hour: self.maintenance_rate,
            failure_rate_percent: self.failure_rate,
            labor_rate_per_hour: self.labor_rate,
            ..JobInput::default()
        }
    }

    fn validate(&self) -> Result<()> {
        let rates = [
            ("electricity_rate", self.electricity_rate),
            ("filament_price_per_kg", self.filament_price_per_kg),
            ("failure_rate", self.failure_rate),
            ("labor_rate", self.labor_rate),
            ("maintenance_rate", self.maintenance_rate),
        ];

        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(CostError::InvalidConfig(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Which cost rows are shown. Hiding a row never changes the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentToggles {
    pub material: bool,
    pub electricity: bool,
    pub equipment: bool,
    pub maintenance: bool,
    pub labor: bool,
}

impl Default for ComponentToggles {
    fn default() -> Self {
        Self {
            material: true,
            electricity: true,
            equipment: true,
            maintenance: true,
            labor: true,
        }
    }
}

impl ComponentToggles {
    pub fn is_visible(&self, component: CostComponent) -> bool {
        match component {
            CostComponent::Material => self.material,
            CostComponent::Electricity => self.electricity,
            CostComponent::Equipment => self.equipment,
            CostComponent::Maintenance => self.maintenance,
            CostComponent::Labor => self.labor,
        }
    }

    pub fn set(&mut self, component: CostComponent, visible: bool) {
        let flag = match component {
            CostComponent::Material => &mut self.material,
            CostComponent::Electricity => &mut self.electricity,
            CostComponent::Equipment => &mut self.equipment,
            CostComponent::Maintenance => &mut self.maintenance,
            CostComponent::Labor => &mut self.labor,
        };
        *flag = visible;
    }
}
