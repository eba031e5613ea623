//! # Structural Equations
//!
//! Closed-form mechanics used by the beam pre-sizing. Keeping them in one
//! place makes them easy to check against a reference table.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam under full-span uniform load
//! - [`section`] - Rectangular cross-section properties
//!
//! ## Units
//!
//! The functions are unit-agnostic; callers in this crate pass SI values
//! (kN, m, kN/m², m⁴) so moments come out in kN·m and deflections in m.

pub mod beam;
pub mod section;

pub use beam::{
    uniform_load_max_deflection,
    uniform_load_max_moment,
    uniform_load_max_shear,
    uniform_load_reactions,
};

pub use section::rectangular_moment_of_inertia;
