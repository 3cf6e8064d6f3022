//! # Unit Conversion
//!
//! Converts a value between two units of the same [`Dimension`].
//!
//! Linear dimensions (length, weight, torque) go through the base unit:
//! `result = value * factor(from) / factor(to)`. Temperature is affine and
//! handled separately (see [`TemperatureUnit::convert`]).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::calculations::conversion::convert;
//! use calc_core::units::Dimension;
//!
//! let cm = convert(Dimension::Length, 1.0, "m", "cm").unwrap();
//! assert_eq!(cm, 100.0);
//!
//! let f = convert(Dimension::Temperature, 0.0, "c", "f").unwrap();
//! assert_eq!(f, 32.0);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{require_finite, CalcError, CalcResult};
use crate::units::{Dimension, LinearUnit, TemperatureUnit, Unit};

/// A single conversion request.
///
/// ## JSON Example
///
/// ```json
/// { "dimension": "weight", "from_unit": "kg", "to_unit": "lb", "value": 1.0 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub dimension: Dimension,
    pub from_unit: String,
    pub to_unit: String,
    pub value: f64,
}

impl ConversionRequest {
    pub fn new(dimension: Dimension, value: f64, from_unit: impl Into<String>, to_unit: impl Into<String>) -> Self {
        ConversionRequest {
            dimension,
            from_unit: from_unit.into(),
            to_unit: to_unit.into(),
            value,
        }
    }

    /// Run the conversion.
    pub fn calculate(&self) -> CalcResult<ConversionResult> {
        let from = self.dimension.parse_unit(&self.from_unit)?;
        let to = self.dimension.parse_unit(&self.to_unit)?;
        let value = require_finite("value", self.value)?;
        let result = convert_units(value, from, to)?;
        Ok(ConversionResult {
            dimension: self.dimension,
            value,
            from_unit: from.symbol().to_string(),
            to_unit: to.symbol().to_string(),
            result,
        })
    }
}

/// Outcome of a conversion, with canonical unit symbols.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub dimension: Dimension,
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
    pub result: f64,
}

/// Convert `value` from `from_unit` to `to_unit` within `dimension`.
///
/// # Errors
///
/// * `UnknownUnit` - either symbol is not in the dimension's unit set
/// * `InvalidNumber` - `value` is NaN or infinite
/// * `CalculationFailed` - the result overflows to infinity
pub fn convert(dimension: Dimension, value: f64, from_unit: &str, to_unit: &str) -> CalcResult<f64> {
    ConversionRequest::new(dimension, value, from_unit, to_unit)
        .calculate()
        .map(|r| r.result)
}

/// Convert between two catalogue units.
///
/// Units from different dimensions fail with `UnknownUnit`: the target unit is
/// not a member of the source unit's dimension.
///
/// ```rust
/// use calc_core::calculations::conversion::convert_units;
/// use calc_core::units::{Unit, WeightUnit, LengthUnit};
///
/// let lb = convert_units(1.0, Unit::Weight(WeightUnit::Kilogram), Unit::Weight(WeightUnit::Pound)).unwrap();
/// assert!((lb - 2.20462).abs() < 1e-5);
///
/// assert!(convert_units(1.0, Unit::Length(LengthUnit::Meter), Unit::Weight(WeightUnit::Pound)).is_err());
/// ```
pub fn convert_units(value: f64, from: Unit, to: Unit) -> CalcResult<f64> {
    let value = require_finite("value", value)?;
    let result = match (from, to) {
        (Unit::Length(a), Unit::Length(b)) => convert_linear(value, a, b),
        (Unit::Weight(a), Unit::Weight(b)) => convert_linear(value, a, b),
        (Unit::Torque(a), Unit::Torque(b)) => convert_linear(value, a, b),
        (Unit::Temperature(a), Unit::Temperature(b)) => convert_temperature(value, a, b),
        _ => {
            return Err(CalcError::unknown_unit(
                to.symbol(),
                from.dimension().as_str(),
            ))
        }
    };

    if !result.is_finite() {
        return Err(CalcError::calculation_failed(
            "Conversion",
            format!("{value} {from} is out of range in {to}"),
        ));
    }

    debug!(value, %from, %to, result, "Converted value");
    Ok(result)
}

/// Convert through the base unit of a linear dimension.
///
/// Both units share a type, so mixing dimensions does not compile.
/// Same-unit conversions return `value` bit-for-bit.
#[inline]
pub fn convert_linear<U: LinearUnit>(value: f64, from: U, to: U) -> f64 {
    if from == to {
        return value;
    }
    value * from.to_base_factor() / to.to_base_factor()
}

#[inline]
fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from.convert(value, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{LengthUnit, TorqueUnit};

    const TOLERANCE: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() <= TOLERANCE * b.abs().max(1.0)
    }

    #[test]
    fn test_meter_to_centimeter() {
        assert_eq!(convert(Dimension::Length, 1.0, "m", "cm").unwrap(), 100.0);
    }

    #[test]
    fn test_inches_to_feet() {
        let ft = convert(Dimension::Length, 12.0, "in", "ft").unwrap();
        assert!(approx_eq(ft, 1.0), "ft = {}", ft);
    }

    #[test]
    fn test_kilogram_to_pound() {
        let lb = convert(Dimension::Weight, 1.0, "kg", "lb").unwrap();
        assert!((lb - 2.20462).abs() < 1e-5, "lb = {}", lb);
    }

    #[test]
    fn test_torque() {
        let nm = convert(Dimension::Torque, 100.0, "lbft", "nm").unwrap();
        assert!(approx_eq(nm, 135.582), "nm = {}", nm);
    }

    #[test]
    fn test_temperature() {
        assert_eq!(convert(Dimension::Temperature, 0.0, "c", "f").unwrap(), 32.0);
        assert_eq!(convert(Dimension::Temperature, 212.0, "f", "c").unwrap(), 100.0);
        assert_eq!(convert(Dimension::Temperature, -40.0, "c", "f").unwrap(), -40.0);
        assert_eq!(convert(Dimension::Temperature, 21.5, "f", "f").unwrap(), 21.5);
    }

    #[test]
    fn test_identity_for_linear_units() {
        for dim in Dimension::ALL.into_iter().filter(|d| d.is_linear()) {
            for unit in dim.units() {
                let v = 123.456;
                assert_eq!(convert(dim, v, unit.symbol(), unit.symbol()).unwrap(), v);
            }
        }
    }

    #[test]
    fn test_unknown_from_unit() {
        let err = convert(Dimension::Length, 1.0, "yd", "m").unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("yd", "length"));
    }

    #[test]
    fn test_unknown_to_unit() {
        let err = convert(Dimension::Weight, 1.0, "kg", "ft").unwrap_err();
        assert_eq!(err.error_code(), "UNKNOWN_UNIT");
    }

    #[test]
    fn test_unknown_temperature_unit() {
        // Kelvin is not part of the temperature set
        let err = convert(Dimension::Temperature, 1.0, "k", "c").unwrap_err();
        assert!(matches!(err, CalcError::UnknownUnit { .. }));
    }

    #[test]
    fn test_non_finite_value() {
        for v in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = convert(Dimension::Length, v, "m", "cm").unwrap_err();
            assert!(matches!(err, CalcError::InvalidNumber { .. }), "{v}: {err}");
        }
    }

    #[test]
    fn test_overflow_is_reported() {
        let err = convert(Dimension::Length, f64::MAX, "m", "cm").unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_mixed_dimension_units() {
        let err = convert_units(
            1.0,
            Unit::Torque(TorqueUnit::NewtonMeter),
            Unit::Length(LengthUnit::Meter),
        )
        .unwrap_err();
        assert_eq!(err, CalcError::unknown_unit("m", "torque"));
    }

    #[test]
    fn test_request_reports_canonical_symbols() {
        let result = ConversionRequest::new(Dimension::Length, 3.0, " FT", "In")
            .calculate()
            .unwrap();
        assert_eq!(result.from_unit, "ft");
        assert_eq!(result.to_unit, "in");
        assert!(approx_eq(result.result, 36.0));
    }

    #[test]
    fn test_request_json() {
        let json = r#"{ "dimension": "weight", "from_unit": "kg", "to_unit": "lb", "value": 2.0 }"#;
        let request: ConversionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.dimension, Dimension::Weight);
        assert!(request.calculate().is_ok());
    }

    #[test]
    fn test_convert_linear() {
        let m = convert_linear(250.0, LengthUnit::Centimeter, LengthUnit::Meter);
        assert!(approx_eq(m, 2.5));
    }
}
