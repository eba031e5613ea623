//! # Settings
//!
//! Tunable constants for the three engines, grouped per engine and
//! aggregated in [`Settings`]. Every struct deserializes with
//! `#[serde(default)]`, so a settings file only needs the values it changes.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::settings::Settings;
//!
//! let settings: Settings = serde_json::from_str(r#"{"layout": {"window_width": 1.0}}"#).unwrap();
//! assert_eq!(settings.layout.window_width, 1.0);
//! assert_eq!(settings.layout.wall_thickness, 0.20);
//! ```

use serde::{Deserialize, Serialize};

/// Standard wall thickness (m)
pub const DEFAULT_WALL_THICKNESS_M: f64 = 0.20;

/// All engine settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutSettings,
    pub cad: CadSettings,
    pub structural: StructuralSettings,
}

/// Row-packing and opening parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Gap between rooms and between rows; also the plan's wall thickness (m)
    pub wall_thickness: f64,
    /// Main entrance door width (m)
    pub main_door_width: f64,
    /// Interior door width (m)
    pub interior_door_width: f64,
    /// Window width (m)
    pub window_width: f64,
    /// Distance under which two edges count as aligned (m)
    pub adjacency_tolerance: f64,
    /// Interior door offset above the higher room's base (m)
    pub interior_door_offset: f64,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        LayoutSettings {
            wall_thickness: DEFAULT_WALL_THICKNESS_M,
            main_door_width: 1.00,
            interior_door_width: 0.90,
            window_width: 1.20,
            adjacency_tolerance: 0.5,
            interior_door_offset: 0.5,
        }
    }
}

/// Drawing parameters for the DXF encoder.
///
/// The interchange revision is fixed (R12); there is intentionally no
/// version field here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadSettings {
    /// Upper-right drawing limit; lower-left is always the origin
    pub limits_max: (f64, f64),
    /// Outward offset of the terrain outline (m)
    pub terrain_margin: f64,
    /// First line of the title block
    pub title: String,
    /// Scale shown in the title block, e.g. "1/100"
    pub scale: String,
}

impl Default for CadSettings {
    fn default() -> Self {
        CadSettings {
            limits_max: (50.0, 50.0),
            terrain_margin: 1.0,
            title: "Floorplan - Plan Architectural".to_string(),
            scale: "1/100".to_string(),
        }
    }
}

/// Beam pre-sizing parameters (reinforced concrete, simply supported).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuralSettings {
    /// Beam web width (m)
    pub beam_width: f64,
    /// Smallest recommended beam height (m)
    pub min_beam_height: f64,
    /// Recommended heights are rounded up to this step (m)
    pub height_step: f64,
    /// Height = span / this ratio before clamping
    pub span_to_height_ratio: f64,
    /// Longest span acceptable for ordinary reinforced concrete (m)
    pub max_span: f64,
    /// Concrete elastic modulus (MPa)
    pub elastic_modulus_mpa: f64,
    /// Admissible deflection = span / this ratio
    pub deflection_limit_ratio: f64,
    /// Floor slab dead load (kN/m²)
    pub dead_load_floor: f64,
    /// Light partition load (kN/m²)
    pub partition_load: f64,
    /// Factor applied to the recommended height in the "increase section" hint
    pub height_hint_factor: f64,
}

impl Default for StructuralSettings {
    fn default() -> Self {
        StructuralSettings {
            beam_width: 0.25,
            min_beam_height: 0.30,
            height_step: 0.05,
            span_to_height_ratio: 12.0,
            max_span: 8.0,
            elastic_modulus_mpa: 31_000.0,
            deflection_limit_ratio: 500.0,
            dead_load_floor: 5.0,
            partition_load: 1.0,
            height_hint_factor: 1.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.layout.wall_thickness, 0.20);
        assert_eq!(settings.layout.main_door_width, 1.00);
        assert_eq!(settings.cad.limits_max, (50.0, 50.0));
        assert_eq!(settings.structural.elastic_modulus_mpa, 31_000.0);
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings::default();
        let json = serde_json::to_string_pretty(&settings).unwrap();
        assert!(json.contains("deflection_limit_ratio"));

        let roundtrip: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, settings);
    }

    #[test]
    fn test_partial_override() {
        let settings: Settings =
            serde_json::from_str(r#"{"structural": {"max_span": 7.0}}"#).unwrap();
        assert_eq!(settings.structural.max_span, 7.0);
        assert_eq!(settings.structural.beam_width, 0.25);
        assert_eq!(settings.cad, CadSettings::default());
    }
}
