//! # Simply-Supported Beam Formulas
//!
//! Pin support at x = 0, roller at x = L, uniform load `q` over the full span.
//!
//! ## Notation
//!
//! - `q` = Uniform load intensity (kN/m)
//! - `l` = Span length (m)
//! - `e` = Modulus of elasticity (kN/m²)
//! - `i` = Moment of inertia (m⁴)
//!
//! Loads and deflections are positive downward, sagging moment positive.
//!
//! ## Reference
//!
//! Roark's Formulas for Stress and Strain, Table 8.1, Case 2a

/// Support reactions (R1, R2) = (qL/2, qL/2)
#[inline]
pub fn uniform_load_reactions(q: f64, l: f64) -> (f64, f64) {
    let r = q * l / 2.0;
    (r, r)
}

/// Maximum shear, at either support
///
/// # Formula
/// V_max = qL/2
#[inline]
pub fn uniform_load_max_shear(q: f64, l: f64) -> f64 {
    uniform_load_reactions(q, l).0
}

/// Maximum moment, at midspan
///
/// # Formula
/// M_max = qL²/8
#[inline]
pub fn uniform_load_max_moment(q: f64, l: f64) -> f64 {
    q * l * l / 8.0
}

/// Maximum deflection, at midspan
///
/// # Formula
/// δ_max = 5qL⁴ / (384EI)
#[inline]
pub fn uniform_load_max_deflection(q: f64, l: f64, e: f64, i: f64) -> f64 {
    5.0 * q * l.powi(4) / (384.0 * e * i)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_reactions_sum_to_total_load() {
        let (r1, r2) = uniform_load_reactions(25.625, 5.5);
        assert!((r1 + r2 - 25.625 * 5.5).abs() < EPSILON);
        assert_eq!(r1, r2);
        assert_eq!(uniform_load_max_shear(25.625, 5.5), r1);
    }

    #[test]
    fn test_max_moment() {
        // 25.625 * 30.25 / 8
        assert!((uniform_load_max_moment(25.625, 5.5) - 96.89453125).abs() < 1e-6);
    }

    #[test]
    fn test_max_deflection() {
        // 5 * 20 * 256 / (384 * 31e6 * 1e-3)
        let delta = uniform_load_max_deflection(20.0, 4.0, 31.0e6, 1e-3);
        assert!((delta - 25_600.0 / 11_904_000.0).abs() < 1e-12, "delta = {}", delta);
    }

    #[test]
    fn test_deflection_scales_with_span_to_the_fourth() {
        let short = uniform_load_max_deflection(10.0, 3.0, 31.0e6, 1e-3);
        let long = uniform_load_max_deflection(10.0, 6.0, 31.0e6, 1e-3);
        assert!((long / short - 16.0).abs() < EPSILON);
    }
}
