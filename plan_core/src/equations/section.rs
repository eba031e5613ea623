//! Rectangular cross-section properties. `b` is the width, `d` the depth,
//! bending about the strong axis.

/// Moment of inertia about the centroidal axis
///
/// # Formula
/// I = bd³/12
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, d: f64) -> f64 {
    b * d.powi(3) / 12.0
}
