use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostComponent {
    Material,
    Electricity,
    Equipment,
    Maintenance,
    Labor,
}

impl CostComponent {
    /// Components in summation order.
    pub const ALL: [CostComponent; 5] = [
        CostComponent::Material,
        CostComponent::Electricity,
        CostComponent::Equipment,
        CostComponent::Maintenance,
        CostComponent::Labor,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            CostComponent::Material => "material",
            CostComponent::Electricity => "electricity",
            CostComponent::Equipment => "equipment",
            CostComponent::Maintenance => "maintenance",
            CostComponent::Labor => "labor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostComponent::Material => "Material cost",
            CostComponent::Electricity => "Electricity cost",
            CostComponent::Equipment => "Equipment depreciation",
            CostComponent::Maintenance => "Maintenance cost",
            CostComponent::Labor => "Labor cost",
        }
    }
}

impl fmt::Display for CostComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl std::str::FromStr for CostComponent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown cost component: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub material: f64,
    pub electricity: f64,
    pub equipment: f64,
    pub maintenance: f64,
    pub labor: f64,
    pub total: f64,
}

impl CostBreakdown {
    /// Builds a breakdown whose total is the sum of the components, added in
    /// `CostComponent::ALL` order.
    pub fn from_components(
        material: f64,
        electricity: f64,
        equipment: f64,
        maintenance: f64,
        labor: f64,
    ) -> Self {
        let total = material + electricity + equipment + maintenance + labor;
        Self {
            material,
            electricity,
            equipment,
            maintenance,
            labor,
            total,
        }
    }

    pub fn get(&self, component: CostComponent) -> f64 {
        match component {
            CostComponent::Material => self.material,
            CostComponent::Electricity => self.electricity,
            CostComponent::Equipment => self.equipment,
            CostComponent::Maintenance => self.maintenance,
            CostComponent::Labor => self.labor,
        }
    }

    pub fn components(&self) -> impl Iterator<Item = (CostComponent, f64)> + '_ {
        CostComponent::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
