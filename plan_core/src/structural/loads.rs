//! Floor loads by occupancy.
//!
//! Surface loads in kN/m²: a fixed slab dead load and light-partition
//! allowance, plus an imposed (live) load that depends on the building type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::settings::StructuralSettings;

/// Building occupancy, which selects the imposed floor load.
///
/// Deserializes from the lowercase keyword. An unknown keyword falls back to
/// [`BuildingType::Habitation`] with a warning instead of failing.
///
/// # Example
/// ```
/// use plan_core::structural::BuildingType;
///
/// assert_eq!(BuildingType::from("bureaux").live_load(), 2.5);
/// assert_eq!(BuildingType::from("entrepot"), BuildingType::Habitation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BuildingType {
    /// Housing
    #[default]
    Habitation,
    /// Offices
    Bureaux,
    /// Retail
    Commerce,
}

impl BuildingType {
    pub const ALL: [BuildingType; 3] = [
        BuildingType::Habitation,
        BuildingType::Bureaux,
        BuildingType::Commerce,
    ];

    pub fn keyword(&self) -> &'static str {
        match self {
            BuildingType::Habitation => "habitation",
            BuildingType::Bureaux => "bureaux",
            BuildingType::Commerce => "commerce",
        }
    }

    /// Imposed floor load (kN/m²)
    pub fn live_load(&self) -> f64 {
        match self {
            BuildingType::Habitation => 1.5,
            BuildingType::Bureaux => 2.5,
            BuildingType::Commerce => 5.0,
        }
    }

    /// Exact keyword match, `None` for anything else
    pub fn parse(keyword: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.keyword() == keyword)
    }

    /// Resolve an optional keyword, defaulting when missing or unknown.
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            None => BuildingType::default(),
            Some(k) => Self::parse(k).unwrap_or_else(|| {
                log::warn!("Unknown building type '{}', using habitation loads", k);
                BuildingType::default()
            }),
        }
    }
}

impl From<&str> for BuildingType {
    fn from(s: &str) -> Self {
        BuildingType::from_keyword(Some(s))
    }
}

impl From<String> for BuildingType {
    fn from(s: String) -> Self {
        BuildingType::from(s.as_str())
    }
}

impl From<BuildingType> for String {
    fn from(t: BuildingType) -> Self {
        t.keyword().to_string()
    }
}

impl fmt::Display for BuildingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Surface load breakdown (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceLoads {
    pub dead: f64,
    pub live: f64,
    pub partitions: f64,
}

impl SurfaceLoads {
    pub fn for_building(building_type: BuildingType, settings: &StructuralSettings) -> Self {
        SurfaceLoads {
            dead: settings.dead_load_floor,
            live: building_type.live_load(),
            partitions: settings.partition_load,
        }
    }

    /// Unfactored total (kN/m²)
    pub fn total(&self) -> f64 {
        self.dead + self.live + self.partitions
    }
}
