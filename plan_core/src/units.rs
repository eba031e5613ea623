//! # Unit Types
//!
//! Lightweight metric wrappers and deterministic rounding helpers.
//!
//! Plan geometry is stored as plain `f64` meters (that is what the JSON
//! interchange carries), so the newtypes here are used at the points where
//! a conversion factor is applied: elastic modulus to kN/m², span to
//! millimeters for deflection output.
//!
//! ## Example
//!
//! ```rust
//! use plan_core::units::{Meters, Millimeters, MegaPascals, KnPerSquareMeter};
//!
//! let span = Meters(5.5);
//! let span_mm: Millimeters = span.into();
//! assert_eq!(span_mm.0, 5500.0);
//!
//! let e: KnPerSquareMeter = MegaPascals(31_000.0).into();
//! assert_eq!(e.0, 31_000_000.0);
//! ```

use serde::{Deserialize, Serialize};

// ============================================================================
// Length Units
// ============================================================================

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

// ============================================================================
// Stress / Pressure Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MegaPascals(pub f64);

/// Pressure or surface load in kN/m² (kPa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnPerSquareMeter(pub f64);

impl From<MegaPascals> for KnPerSquareMeter {
    fn from(mpa: MegaPascals) -> Self {
        KnPerSquareMeter(mpa.0 * 1000.0)
    }
}

// ============================================================================
// Rounding
// ============================================================================

// Absorbs representation error such as 0.3 * 20.0 = 6.000000000000001
const STEP_EPSILON: f64 = 1e-9;

/// Round half-up to `decimals` decimal places.
///
/// `round_half_up(2.345, 2)` is `2.35`; ties always go toward +∞.
pub fn round_half_up(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

/// Round up to the next multiple of `step` (values already on a step stay put).
///
/// `step` must divide 1.0 evenly (0.05, 0.1, 0.25, ...).
pub fn ceil_to_step(value: f64, step: f64) -> f64 {
    let per_unit = (1.0 / step).round();
    (value * per_unit - STEP_EPSILON).ceil() / per_unit
}
