use crate::error::CostError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilamentType {
    #[default]
    Pla,
    Petg,
    Abs,
    Pc,
}

impl FilamentType {
    pub const ALL: [FilamentType; 4] = [
        FilamentType::Pla,
        FilamentType::Petg,
        FilamentType::Abs,
        FilamentType::Pc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilamentType::Pla => "PLA",
            FilamentType::Petg => "PETG",
            FilamentType::Abs => "ABS",
            FilamentType::Pc => "PC",
        }
    }
}

impl fmt::Display for FilamentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilamentType {
    type Err = CostError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|filament| filament.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CostError::UnknownFilament(s.to_string()))
    }
}
