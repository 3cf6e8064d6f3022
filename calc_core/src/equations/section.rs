//! # Cross-Section Property Formulas
//!
//! Geometric properties of solid cross-sections used in bending stress and
//! deflection calculations. Inputs and outputs are in consistent SI units
//! (m, m⁴, m³).
//!
//! ## Notation
//!
//! - `I` = Second moment of area about the centroidal bending axis
//! - `c` = Extreme-fiber distance (neutral axis to outermost fiber)
//! - `S` = Elastic section modulus (I/c)
//! - `b` = Width of section
//! - `h` = Height (depth) of section
//! - `d` = Diameter of circular section
//!
//! ## References
//!
//! - Roark's Formulas for Stress and Strain, 8th Edition, Table A.1

use std::f64::consts::PI;

// =============================================================================
// RECTANGULAR SECTION
// =============================================================================

/// Second moment of area for a solid rectangle about its strong axis
///
/// ```text
///     ┌─────────┐
///     │         │
///   h │ ════════│ ← neutral axis at h/2
///     │         │
///     └─────────┘
///          b
/// ```
///
/// # Formula
/// I = bh³/12
///
/// # Example
/// ```rust
/// use calc_core::equations::section::rectangular_moment_of_inertia;
///
/// let i = rectangular_moment_of_inertia(0.1, 0.2);
/// assert!((i - 6.6667e-5).abs() < 1e-8);
/// ```
#[inline]
pub fn rectangular_moment_of_inertia(b: f64, h: f64) -> f64 {
    b * h.powi(3) / 12.0
}

/// Extreme-fiber distance for a rectangle: c = h/2
#[inline]
pub fn rectangular_extreme_fiber(h: f64) -> f64 {
    h / 2.0
}

// =============================================================================
// CIRCULAR SECTION
// =============================================================================

/// Second moment of area for a solid circle about any diameter
///
/// # Formula
/// I = πd⁴/64
///
/// # Example
/// ```rust
/// use calc_core::equations::section::circular_moment_of_inertia;
///
/// // 50 mm round bar
/// let i = circular_moment_of_inertia(0.05);
/// assert!((i - 3.068e-7).abs() < 1e-10);
/// ```
#[inline]
pub fn circular_moment_of_inertia(d: f64) -> f64 {
    PI * d.powi(4) / 64.0
}

/// Extreme-fiber distance for a circle: c = d/2
#[inline]
pub fn circular_extreme_fiber(d: f64) -> f64 {
    d / 2.0
}

// =============================================================================
// GENERAL
// =============================================================================

/// Elastic section modulus S = I/c
///
/// Relates moment to extreme-fiber stress: σ = M/S.
#[inline]
pub fn section_modulus(i: f64, c: f64) -> f64 {
    i / c
}
