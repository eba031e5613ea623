//! # Reinforced-Concrete Beam Pre-Sizing
//!
//! One simply-supported beam per room, spanning the room's longer side and
//! carrying half of the shorter side as tributary floor.
//!
//! ## Method
//!
//! - Height: `max(L / 12, 0.30 m)`, rounded up to the next 0.05 m
//! - Section: rectangular, fixed 0.25 m width
//! - Demand: `M = qL²/8`, `V = qL/2`, `δ = 5qL⁴/(384EI)`
//! - Serviceability: `δ ≤ L/500`
//! - Span limit: 8.0 m for ordinary reinforced concrete
//!
//! ## Example
//!
//! ```rust
//! use plan_core::settings::StructuralSettings;
//! use plan_core::structural::beam::{analyze_beam, BeamInput};
//!
//! let input = BeamInput::new("Salon", 5.5, 15.375);
//! let result = analyze_beam(&input, &StructuralSettings::default());
//!
//! assert_eq!(result.element_id, "Beam-Salon");
//! assert!((result.recommended_height_m - 0.50).abs() < 1e-9);
//! assert!(result.valid);
//! ```

use serde::{Deserialize, Serialize};

use crate::equations::{
    rectangular_moment_of_inertia, uniform_load_max_deflection, uniform_load_max_moment,
    uniform_load_max_shear,
};
use crate::plan::Room;
use crate::settings::StructuralSettings;
use crate::units::{ceil_to_step, KnPerSquareMeter, MegaPascals, Meters, Millimeters};

/// Kind of structural element checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[default]
    Beam,
}

/// A beam to check: its span and the line load it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamInput {
    /// Name of the room the beam belongs to
    pub label: String,
    pub span_m: f64,
    /// Floor width carried by the beam (m); informational
    #[serde(default)]
    pub tributary_width_m: f64,
    pub linear_load_kn_m: f64,
}

impl BeamInput {
    pub fn new(label: impl Into<String>, span_m: f64, linear_load_kn_m: f64) -> Self {
        BeamInput {
            label: label.into(),
            span_m,
            tributary_width_m: 0.0,
            linear_load_kn_m,
        }
    }

    /// Beam along the longer side of a room, loaded by half the shorter side.
    pub fn for_room(room: &Room, surface_load_kn_m2: f64) -> Self {
        let span_m = room.width.max(room.height);
        let tributary_width_m = room.width.min(room.height) / 2.0;
        BeamInput {
            label: room.name.clone(),
            span_m,
            tributary_width_m,
            linear_load_kn_m: surface_load_kn_m2 * tributary_width_m,
        }
    }
}

/// Result for one element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuralElementResult {
    /// `Beam-<room name>`
    pub element_id: String,
    pub element_kind: ElementKind,
    pub span_m: f64,
    pub tributary_width_m: f64,
    pub linear_load_kn_m: f64,
    pub moment_knm: f64,
    pub shear_kn: f64,
    pub deflection_mm: f64,
    pub admissible_deflection_mm: f64,
    pub beam_width_m: f64,
    pub recommended_height_m: f64,
    pub valid: bool,
    pub message: String,
}

/// Recommended section height for a span (m)
pub fn recommended_height(span_m: f64, settings: &StructuralSettings) -> f64 {
    let raw = (span_m / settings.span_to_height_ratio).max(settings.min_beam_height);
    ceil_to_step(raw, settings.height_step)
}

/// Size and check one beam.
pub fn analyze_beam(input: &BeamInput, settings: &StructuralSettings) -> StructuralElementResult {
    let span = input.span_m;
    let q = input.linear_load_kn_m;
    let width = settings.beam_width;
    let height = recommended_height(span, settings);

    let moment_knm = uniform_load_max_moment(q, span);
    let shear_kn = uniform_load_max_shear(q, span);

    let e_kn_m2 = KnPerSquareMeter::from(MegaPascals(settings.elastic_modulus_mpa)).0;
    let inertia_m4 = rectangular_moment_of_inertia(width, height);
    let deflection_mm = Millimeters::from(Meters(uniform_load_max_deflection(q, span, e_kn_m2, inertia_m4))).0;
    let admissible_deflection_mm = Millimeters::from(Meters(span)).0 / settings.deflection_limit_ratio;

    let span_ok = span <= settings.max_span;
    let deflection_ok = deflection_mm <= admissible_deflection_mm;
    let valid = deflection_ok && span_ok;

    let message = if !span_ok {
        format!(
            "Span {:.1}m excessive (max {:.0}m for reinforced concrete). Use a prestressed beam or a steel structure.",
            span, settings.max_span
        )
    } else if !deflection_ok {
        format!(
            "Deflection {:.1}mm > admissible {:.1}mm. Increase the section (h={:.0}cm recommended).",
            deflection_mm,
            admissible_deflection_mm,
            height * settings.height_hint_factor * 100.0
        )
    } else {
        format!(
            "OK - Beam {:.0}x{:.0}cm, deflection {:.1}mm < {:.1}mm",
            width * 100.0,
            height * 100.0,
            deflection_mm,
            admissible_deflection_mm
        )
    };

    if !valid {
        log::debug!("Beam-{} fails: {}", input.label, message);
    }

    StructuralElementResult {
        element_id: format!("Beam-{}", input.label),
        element_kind: ElementKind::Beam,
        span_m: span,
        tributary_width_m: input.tributary_width_m,
        linear_load_kn_m: q,
        moment_knm,
        shear_kn,
        deflection_mm,
        admissible_deflection_mm,
        beam_width_m: width,
        recommended_height_m: height,
        valid,
        message,
    }
}
