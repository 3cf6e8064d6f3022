//! # Simply-Supported Beam, Center Point Load
//!
//! Bending stress and deflection for a prismatic beam on a pin and a roller
//! carrying one concentrated load at midspan.
//!
//! ## Assumptions
//!
//! - Simply-supported (pin-roller) boundary conditions
//! - Single point load at midspan
//! - Solid rectangular or circular section
//! - Linear-elastic material, small deflections
//! - Base SI units throughout (N, m, Pa); scaling from MPa/GPa is done by the caller
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::beam::{analyze, BeamSpec, CrossSection};
//!
//! let spec = BeamSpec {
//!     label: "B-1".to_string(),
//!     load_n: 1000.0,
//!     span_m: 2.0,
//!     youngs_modulus_pa: 200.0e9,
//!     yield_strength_pa: 250.0e6,
//!     section: CrossSection::Rectangular { width_m: 0.1, height_m: 0.2 },
//! };
//!
//! let result = analyze(&spec).unwrap();
//! assert!((result.max_bending_stress_pa - 750_000.0).abs() < 1e-3);
//! assert!(result.within_yield);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::equations::{beam as beam_eq, section as section_eq};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Megapascals, Meters, Millimeters, Pascals};

/// Solid cross-section shape.
///
/// ## JSON Examples
///
/// ```json
/// { "type": "Rectangular", "width_m": 0.1, "height_m": 0.2 }
/// { "type": "Circular", "diameter_m": 0.05 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CrossSection {
    /// Rectangle bending about its strong axis (height is the depth)
    Rectangular { width_m: f64, height_m: f64 },
    /// Solid round bar
    Circular { diameter_m: f64 },
}

impl CrossSection {
    /// Validate every section dimension is finite and strictly positive.
    pub fn validate(&self) -> CalcResult<()> {
        match *self {
            CrossSection::Rectangular { width_m, height_m } => {
                require_positive("width_m", width_m, "Width")?;
                require_positive("height_m", height_m, "Height")
            }
            CrossSection::Circular { diameter_m } => {
                require_positive("diameter_m", diameter_m, "Diameter")
            }
        }
    }

    /// Second moment of area I (m⁴)
    pub fn moment_of_inertia_m4(&self) -> f64 {
        match *self {
            CrossSection::Rectangular { width_m, height_m } => {
                section_eq::rectangular_moment_of_inertia(width_m, height_m)
            }
            CrossSection::Circular { diameter_m } => section_eq::circular_moment_of_inertia(diameter_m),
        }
    }

    /// Extreme-fiber distance c (m)
    pub fn extreme_fiber_m(&self) -> f64 {
        match *self {
            CrossSection::Rectangular { height_m, .. } => section_eq::rectangular_extreme_fiber(height_m),
            CrossSection::Circular { diameter_m } => section_eq::circular_extreme_fiber(diameter_m),
        }
    }

    /// Elastic section modulus S = I/c (m³)
    pub fn section_modulus_m3(&self) -> f64 {
        section_eq::section_modulus(self.moment_of_inertia_m4(), self.extreme_fiber_m())
    }

    /// Short name of the shape
    pub fn kind(&self) -> &'static str {
        match self {
            CrossSection::Rectangular { .. } => "Rectangular",
            CrossSection::Circular { .. } => "Circular",
        }
    }
}

/// Input parameters for the beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "B-1",
///   "load_n": 1000.0,
///   "span_m": 2.0,
///   "youngs_modulus_pa": 200000000000.0,
///   "yield_strength_pa": 250000000.0,
///   "section": { "type": "Rectangular", "width_m": 0.1, "height_m": 0.2 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamSpec {
    /// User label (e.g., "B-1"); optional in JSON
    #[serde(default)]
    pub label: String,

    /// Point load at midspan in newtons
    pub load_n: f64,

    /// Span between supports in meters
    pub span_m: f64,

    /// Young's modulus E in pascals
    pub youngs_modulus_pa: f64,

    /// Yield strength in pascals
    pub yield_strength_pa: f64,

    /// Cross-section shape and dimensions (meters)
    pub section: CrossSection,
}

impl BeamSpec {
    /// Validate input parameters.
    ///
    /// Fields are checked in order (load, span, modulus, yield strength,
    /// then section dimensions); the first offending field is reported.
    pub fn validate(&self) -> CalcResult<()> {
        require_positive("load_n", self.load_n, "Load")?;
        require_positive("span_m", self.span_m, "Span")?;
        require_positive("youngs_modulus_pa", self.youngs_modulus_pa, "Young's modulus")?;
        require_positive("yield_strength_pa", self.yield_strength_pa, "Yield strength")?;
        self.section.validate()
    }
}

fn require_positive(field: &str, value: f64, what: &str) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{what} must be a finite number"),
        ));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("{what} must be positive"),
        ));
    }
    Ok(())
}

/// Results from the beam calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "max_bending_stress_pa": 750000.0,
///   "max_deflection_m": 1.25e-5,
///   "within_yield": true,
///   "max_moment_nm": 500.0,
///   "moment_of_inertia_m4": 6.6667e-5,
///   "extreme_fiber_m": 0.1,
///   "section_modulus_m3": 6.6667e-4,
///   "yield_ratio": 0.003
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    /// Extreme-fiber bending stress σ = Mc/I at midspan (Pa)
    pub max_bending_stress_pa: f64,

    /// Midspan deflection δ = PL³/(48EI) (m)
    pub max_deflection_m: f64,

    /// σ ≤ yield strength
    pub within_yield: bool,

    // === For reference ===
    /// Maximum moment M = PL/4 (N·m)
    pub max_moment_nm: f64,

    /// Second moment of area I (m⁴)
    pub moment_of_inertia_m4: f64,

    /// Extreme-fiber distance c (m)
    pub extreme_fiber_m: f64,

    /// Section modulus S = I/c (m³)
    pub section_modulus_m3: f64,

    /// σ / yield strength; at most 1.0 when within yield
    pub yield_ratio: f64,
}

impl BeamResult {
    /// Bending stress in MPa
    pub fn stress_mpa(&self) -> Megapascals {
        Pascals(self.max_bending_stress_pa).into()
    }

    /// Deflection in millimeters
    pub fn deflection_mm(&self) -> Millimeters {
        Meters(self.max_deflection_m).into()
    }

}

/// Calculate bending stress and deflection.
///
/// # Errors
///
/// * `InvalidInput` - a field is zero, negative, NaN, or infinite
/// * `CalculationFailed` - inputs are valid but a result overflows or underflows
pub fn analyze(spec: &BeamSpec) -> CalcResult<BeamResult> {
    spec.validate()?;

    let section = &spec.section;
    let i = section.moment_of_inertia_m4();
    let c = section.extreme_fiber_m();

    let m = beam_eq::point_load_midspan_moment(spec.load_n, spec.span_m);
    let sigma = beam_eq::bending_stress(m, c, i);
    let delta = beam_eq::point_load_midspan_deflection(spec.load_n, spec.span_m, spec.youngs_modulus_pa, i);

    let s = section.section_modulus_m3();
    let yield_ratio = sigma / spec.yield_strength_pa;

    // Tiny sections can underflow I to zero even when every input is positive.
    for (name, value) in [
        ("max_moment", m),
        ("moment_of_inertia", i),
        ("section_modulus", s),
        ("bending_stress", sigma),
        ("deflection", delta),
        ("yield_ratio", yield_ratio),
    ] {
        if !value.is_finite() || value <= 0.0 {
            warn!(label = %spec.label, name, value, "Beam result out of range");
            return Err(CalcError::calculation_failed(
                "Beam",
                format!("{name} is not representable ({value}); check input magnitudes"),
            ));
        }
    }

    let result = BeamResult {
        max_bending_stress_pa: sigma,
        max_deflection_m: delta,
        within_yield: sigma <= spec.yield_strength_pa,
        max_moment_nm: m,
        moment_of_inertia_m4: i,
        extreme_fiber_m: c,
        section_modulus_m3: s,
        yield_ratio,
    };

    debug!(
        label = %spec.label,
        section = section.kind(),
        sigma,
        delta,
        within_yield = result.within_yield,
        "Beam analyzed"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, rel: f64) -> bool {
        (a - b).abs() <= rel * b.abs()
    }

    /// 0.1 m x 0.2 m steel section, 1 kN at midspan of a 2 m span
    fn test_beam() -> BeamSpec {
        BeamSpec {
            label: "Test Beam".to_string(),
            load_n: 1000.0,
            span_m: 2.0,
            youngs_modulus_pa: 200.0e9,
            yield_strength_pa: 250.0e6,
            section: CrossSection::Rectangular {
                width_m: 0.1,
                height_m: 0.2,
            },
        }
    }

    #[test]
    fn test_rectangular_reference_case() {
        let result = analyze(&test_beam()).unwrap();

        // I = 0.1 * 0.2³ / 12 = 6.667e-5 m⁴
        assert!(approx_eq(result.moment_of_inertia_m4, 6.6667e-5, 1e-4));
        // M = PL/4 = 500 N·m
        assert!(approx_eq(result.max_moment_nm, 500.0, 1e-12));
        assert!(approx_eq(result.extreme_fiber_m, 0.1, 1e-12));
        // σ = 500 * 0.1 / 6.667e-5 = 0.75 MPa
        assert!(approx_eq(result.max_bending_stress_pa, 750_000.0, 1e-9));
        // δ = 1000 * 8 / (48 * 200e9 * 6.667e-5) = 1.25e-5 m
        assert!(approx_eq(result.max_deflection_m, 1.25e-5, 1e-9));
        assert!(result.within_yield);
        assert!(approx_eq(result.yield_ratio, 0.003, 1e-9));
    }

    #[test]
    fn test_circular_section() {
        let mut beam = test_beam();
        beam.section = CrossSection::Circular { diameter_m: 0.05 };
        let result = analyze(&beam).unwrap();

        // I = π * 0.05⁴ / 64 = 3.068e-7 m⁴, c = 0.025 m
        let i = std::f64::consts::PI * 0.05_f64.powi(4) / 64.0;
        assert!(approx_eq(result.moment_of_inertia_m4, i, 1e-12));
        assert!(approx_eq(result.extreme_fiber_m, 0.025, 1e-12));
        // σ = 500 * 0.025 / 3.068e-7 ≈ 40.7 MPa
        assert!(approx_eq(result.max_bending_stress_pa, 500.0 * 0.025 / i, 1e-12));
        assert!(result.within_yield);
    }

    #[test]
    fn test_overstressed_beam() {
        let mut beam = test_beam();
        beam.load_n = 50_000.0;
        beam.span_m = 6.0;
        beam.section = CrossSection::Circular { diameter_m: 0.03 };
        let result = analyze(&beam).unwrap();
        assert!(result.max_bending_stress_pa > beam.yield_strength_pa);
        assert!(!result.within_yield);
        assert!(result.yield_ratio > 1.0);
    }

    #[test]
    fn test_stress_equal_to_yield_is_within() {
        let mut beam = test_beam();
        beam.yield_strength_pa = analyze(&beam).unwrap().max_bending_stress_pa;
        assert!(analyze(&beam).unwrap().within_yield);
    }

    #[test]
    fn test_zero_diameter_rejected() {
        let mut beam = test_beam();
        beam.section = CrossSection::Circular { diameter_m: 0.0 };
        let err = analyze(&beam).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "diameter_m"));
    }

    #[test]
    fn test_zero_width_and_height_rejected() {
        let mut beam = test_beam();
        beam.section = CrossSection::Rectangular {
            width_m: 0.0,
            height_m: 0.2,
        };
        assert_eq!(analyze(&beam).unwrap_err().field(), Some("width_m"));

        beam.section = CrossSection::Rectangular {
            width_m: 0.1,
            height_m: 0.0,
        };
        assert_eq!(analyze(&beam).unwrap_err().field(), Some("height_m"));
    }

    #[test]
    fn test_first_offending_field_reported() {
        let mut beam = test_beam();
        beam.span_m = -2.0;
        beam.youngs_modulus_pa = 0.0;
        assert_eq!(analyze(&beam).unwrap_err().field(), Some("span_m"));
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        let mut beam = test_beam();
        beam.load_n = f64::NAN;
        assert_eq!(analyze(&beam).unwrap_err().field(), Some("load_n"));

        let mut beam = test_beam();
        beam.yield_strength_pa = f64::INFINITY;
        assert_eq!(analyze(&beam).unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_overflow_reported_not_returned() {
        let mut beam = test_beam();
        beam.load_n = 1.0e300;
        beam.span_m = 1.0e10;
        let err = analyze(&beam).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_underflowed_section_reported() {
        let mut beam = test_beam();
        beam.section = CrossSection::Circular { diameter_m: 1.0e-100 };
        assert_eq!(analyze(&beam).unwrap_err().error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_tiny_yield_strength_reported() {
        let mut beam = test_beam();
        beam.yield_strength_pa = 1.0e-320;
        let err = analyze(&beam).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
        assert!(err.to_string().contains("yield_ratio"), "{err}");
    }

    #[test]
    fn test_display_conversions() {
        let result = analyze(&test_beam()).unwrap();
        assert!(approx_eq(result.stress_mpa().value(), 0.75, 1e-9));
        assert!(approx_eq(result.deflection_mm().value(), 0.0125, 1e-9));
    }

    #[test]
    fn test_section_modulus() {
        let section = CrossSection::Rectangular {
            width_m: 0.1,
            height_m: 0.2,
        };
        // S = bh²/6
        assert!(approx_eq(section.section_modulus_m3(), 0.1 * 0.04 / 6.0, 1e-12));
    }

    #[test]
    fn test_spec_json_roundtrip() {
        let json = r#"{
            "load_n": 1000.0,
            "span_m": 2.0,
            "youngs_modulus_pa": 200000000000.0,
            "yield_strength_pa": 250000000.0,
            "section": { "type": "Circular", "diameter_m": 0.05 }
        }"#;
        let spec: BeamSpec = serde_json::from_str(json).unwrap();
        assert_eq!(spec.label, "");
        assert_eq!(spec.section, CrossSection::Circular { diameter_m: 0.05 });

        let back: BeamSpec = serde_json::from_str(&serde_json::to_string(&spec).unwrap()).unwrap();
        assert_eq!(spec, back);
    }

    #[test]
    fn test_result_serialization() {
        let result = analyze(&test_beam()).unwrap();
        let json = serde_json::to_string_pretty(&result).unwrap();
        assert!(json.contains("\"within_yield\": true"));

        let back: BeamResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
