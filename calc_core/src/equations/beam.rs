//! # Simply-Supported Beam Formulas (Center Point Load)
//!
//! Closed-form results for a prismatic beam on a pin and a roller with a
//! single concentrated load P at midspan.
//!
//! ```text
//!              P
//!              ↓
//!    ──────────┬──────────
//!    △        L/2         △
//!   R1  ←───────L───────→ R2
//! ```
//!
//! ## Notation
//!
//! - `P` = Point load magnitude (N)
//! - `L` = Span length (m)
//! - `M` = Bending moment (N·m)
//! - `E` = Young's modulus (Pa)
//! - `I` = Second moment of area (m⁴)
//! - `c` = Extreme-fiber distance (m)
//! - `σ` = Bending stress (Pa)
//! - `δ` = Deflection (m, positive downward)
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table 8.1, Case 1a (a = L/2)

/// Maximum bending moment, at midspan
///
/// # Formula
/// M_max = PL/4
///
/// # Example
/// ```rust
/// use calc_core::equations::beam::point_load_midspan_moment;
///
/// assert_eq!(point_load_midspan_moment(1000.0, 2.0), 500.0);
/// ```
#[inline]
pub fn point_load_midspan_moment(p: f64, l: f64) -> f64 {
    p * l / 4.0
}

/// Extreme-fiber bending stress (flexure formula)
///
/// # Formula
/// σ = Mc/I
#[inline]
pub fn bending_stress(m: f64, c: f64, i: f64) -> f64 {
    m * c / i
}

/// Maximum deflection, at midspan
///
/// # Formula
/// δ_max = PL³/(48EI)
///
/// # Arguments
/// * `p` - Point load (positive downward)
/// * `l` - Span length
/// * `e` - Young's modulus
/// * `i` - Second moment of area
#[inline]
pub fn point_load_midspan_deflection(p: f64, l: f64, e: f64, i: f64) -> f64 {
    p * l.powi(3) / (48.0 * e * i)
}
