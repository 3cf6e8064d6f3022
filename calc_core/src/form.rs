//! # Form Handling
//!
//! Turns raw form strings into calculation requests and renders results as
//! short text reports. Front ends (the CLI, a web page) hold a form, fill in
//! the strings the user typed, and call `submit` to get the text to display.
//!
//! Beam forms take Young's modulus in GPa and yield strength in MPa, the way
//! engineers usually quote them, and scale to pascals before calling
//! [`analyze`](crate::calculations::beam::analyze).
//!
//! ## Example
//!
//! ```rust
//! use calc_core::form::{ConversionForm, DisplaySettings};
//! use calc_core::units::Dimension;
//!
//! let mut form = ConversionForm::new(Dimension::Length);
//! form.value = "1".to_string();
//! assert_eq!(form.submit(&DisplaySettings::default()), "1 m = 100.0000 cm");
//!
//! form.value = "abc".to_string();
//! assert_eq!(form.submit(&DisplaySettings::default()), "Please enter a valid number.");
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::beam::{analyze, BeamResult, BeamSpec, CrossSection};
use crate::calculations::conversion::{ConversionRequest, ConversionResult};
use crate::errors::{CalcError, CalcResult};
use crate::units::{Dimension, Gigapascals, Megapascals, Pascals};

pub const MSG_INVALID_NUMBER: &str = "Please enter a valid number.";
pub const MSG_CONVERSION_ERROR: &str = "Conversion error.";
pub const MSG_BEAM_FIELDS: &str = "Please fill all required fields with valid numbers.";
pub const MSG_RECTANGULAR_FIELDS: &str = "Please enter width and height for rectangular section.";
pub const MSG_CIRCULAR_FIELDS: &str = "Please enter diameter for circular section.";
pub const MSG_WITHIN_YIELD: &str = "Stress is within safe limits.";
pub const MSG_EXCEEDS_YIELD: &str = "Warning: Stress exceeds yield strength! Beam may fail.";

/// Number of decimals shown in text reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Decimals for converted values
    pub conversion_decimals: usize,
    /// Decimals for bending stress (MPa)
    pub stress_decimals: usize,
    /// Decimals for deflection (mm)
    pub deflection_decimals: usize,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        DisplaySettings {
            conversion_decimals: 4,
            stress_decimals: 2,
            deflection_decimals: 2,
        }
    }
}

/// Parse a form field.
///
/// Surrounding whitespace is ignored. Blank input is `MissingField`;
/// anything that is not a finite number (including "NaN" and "inf") is
/// `InvalidNumber`.
///
/// ```rust
/// use calc_core::form::parse_number;
///
/// assert_eq!(parse_number("load", " 1500 ").unwrap(), 1500.0);
/// assert_eq!(parse_number("load", "").unwrap_err().error_code(), "MISSING_FIELD");
/// assert_eq!(parse_number("load", "inf").unwrap_err().error_code(), "INVALID_NUMBER");
/// ```
pub fn parse_number(field: &str, raw: &str) -> CalcResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CalcError::missing_field(field));
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CalcError::invalid_number(field, trimmed)),
    }
}

// ============================================================================
// Unit conversion form
// ============================================================================

/// Raw state of a conversion form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionForm {
    pub dimension: Dimension,
    pub value: String,
    pub from_unit: String,
    pub to_unit: String,
}

impl ConversionForm {
    /// Empty form for `dimension`, preselecting its first two units.
    pub fn new(dimension: Dimension) -> Self {
        let (from, to) = dimension.default_units();
        ConversionForm {
            dimension,
            value: String::new(),
            from_unit: from.symbol().to_string(),
            to_unit: to.symbol().to_string(),
        }
    }

    /// Switch dimension and reset the unit selection.
    pub fn set_dimension(&mut self, dimension: Dimension) {
        let value = std::mem::take(&mut self.value);
        *self = ConversionForm { value, ..ConversionForm::new(dimension) };
    }

    /// Parse the form into a request.
    pub fn to_request(&self) -> CalcResult<ConversionRequest> {
        let value = parse_number("value", &self.value)?;
        Ok(ConversionRequest::new(
            self.dimension,
            value,
            self.from_unit.as_str(),
            self.to_unit.as_str(),
        ))
    }

    /// Parse and convert.
    pub fn calculate(&self) -> CalcResult<ConversionResult> {
        self.to_request()?.calculate()
    }

    /// Parse, convert, and render the text to display.
    pub fn submit(&self, settings: &DisplaySettings) -> String {
        match self.calculate() {
            Ok(result) => render_conversion(&result, settings),
            Err(e) => {
                debug!(error = %e, "Conversion form rejected");
                conversion_error_message(&e)
            }
        }
    }
}

/// `"{value} {from} = {result} {to}"`
pub fn render_conversion(result: &ConversionResult, settings: &DisplaySettings) -> String {
    format!(
        "{} {} = {:.*} {}",
        result.value, result.from_unit, settings.conversion_decimals, result.result, result.to_unit
    )
}

/// User-facing text for a failed conversion.
pub fn conversion_error_message(err: &CalcError) -> String {
    match err {
        CalcError::InvalidNumber { .. } | CalcError::MissingField { .. } => MSG_INVALID_NUMBER.to_string(),
        _ => MSG_CONVERSION_ERROR.to_string(),
    }
}

// ============================================================================
// Beam form
// ============================================================================

/// Section-specific fields of the beam form (meters).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionForm {
    Rectangular { width: String, height: String },
    Circular { diameter: String },
}

impl SectionForm {
    fn parse(&self) -> CalcResult<CrossSection> {
        match self {
            SectionForm::Rectangular { width, height } => Ok(CrossSection::Rectangular {
                width_m: parse_number("width", width)?,
                height_m: parse_number("height", height)?,
            }),
            SectionForm::Circular { diameter } => Ok(CrossSection::Circular {
                diameter_m: parse_number("diameter", diameter)?,
            }),
        }
    }
}

/// Raw state of a beam form.
///
/// Load in N, length in m, modulus in GPa, yield strength in MPa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamForm {
    pub load: String,
    pub length: String,
    pub youngs_modulus_gpa: String,
    pub yield_strength_mpa: String,
    pub section: SectionForm,
}

impl BeamForm {
    /// Parse and scale the form into a [`BeamSpec`] in base SI units.
    ///
    /// General fields are parsed before the section fields.
    pub fn to_spec(&self) -> CalcResult<BeamSpec> {
        let load_n = parse_number("load", &self.load)?;
        let span_m = parse_number("length", &self.length)?;
        let e: Pascals = Gigapascals(parse_number("youngs_modulus_gpa", &self.youngs_modulus_gpa)?).into();
        let e = require_scaled("youngs_modulus_gpa", &self.youngs_modulus_gpa, e)?;
        let fy: Pascals = Megapascals(parse_number("yield_strength_mpa", &self.yield_strength_mpa)?).into();
        let fy = require_scaled("yield_strength_mpa", &self.yield_strength_mpa, fy)?;
        let section = self.section.parse()?;

        Ok(BeamSpec {
            label: String::new(),
            load_n,
            span_m,
            youngs_modulus_pa: e,
            yield_strength_pa: fy,
            section,
        })
    }

    /// Parse and analyze.
    pub fn calculate(&self) -> CalcResult<BeamResult> {
        analyze(&self.to_spec()?)
    }

    /// Parse, analyze, and render the text to display.
    pub fn submit(&self, settings: &DisplaySettings) -> String {
        match self.calculate() {
            Ok(result) => render_beam(&result, settings),
            Err(e) => {
                debug!(error = %e, "Beam form rejected");
                beam_error_message(&e)
            }
        }
    }
}

/// A finite form value can still overflow once scaled to pascals.
fn require_scaled(field: &str, raw: &str, scaled: Pascals) -> CalcResult<f64> {
    if scaled.value().is_finite() {
        Ok(scaled.value())
    } else {
        Err(CalcError::invalid_input(field, raw.trim(), "value is too large to convert to pascals"))
    }
}

/// Three-line beam report: stress (MPa), deflection (mm), yield check.
pub fn render_beam(result: &BeamResult, settings: &DisplaySettings) -> String {
    let verdict = if result.within_yield {
        MSG_WITHIN_YIELD
    } else {
        MSG_EXCEEDS_YIELD
    };
    format!(
        "Max Bending Stress: {:.*} MPa\nMax Deflection: {:.*} mm\n{}",
        settings.stress_decimals,
        result.stress_mpa().value(),
        settings.deflection_decimals,
        result.deflection_mm().value(),
        verdict
    )
}

/// User-facing text for a failed beam calculation.
pub fn beam_error_message(err: &CalcError) -> String {
    match err {
        CalcError::InvalidNumber { field, .. } | CalcError::MissingField { field } => match field.as_str() {
            "width" | "height" => MSG_RECTANGULAR_FIELDS.to_string(),
            "diameter" => MSG_CIRCULAR_FIELDS.to_string(),
            _ => MSG_BEAM_FIELDS.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_form() -> BeamForm {
        BeamForm {
            load: "1000".to_string(),
            length: "2".to_string(),
            youngs_modulus_gpa: "200".to_string(),
            yield_strength_mpa: "250".to_string(),
            section: SectionForm::Rectangular {
                width: "0.1".to_string(),
                height: "0.2".to_string(),
            },
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("v", "-3.5").unwrap(), -3.5);
        assert_eq!(parse_number("v", "1e3").unwrap(), 1000.0);
        assert_eq!(parse_number("v", "   ").unwrap_err(), CalcError::missing_field("v"));
        assert_eq!(parse_number("v", "12abc").unwrap_err(), CalcError::invalid_number("v", "12abc"));
        assert!(parse_number("v", "NaN").is_err());
    }

    #[test]
    fn test_new_form_defaults() {
        let form = ConversionForm::new(Dimension::Torque);
        assert_eq!(form.from_unit, "nm");
        assert_eq!(form.to_unit, "lbft");
        assert!(form.value.is_empty());
    }

    #[test]
    fn test_set_dimension_resets_units_keeps_value() {
        let mut form = ConversionForm::new(Dimension::Length);
        form.value = "5".to_string();
        form.to_unit = "ft".to_string();
        form.set_dimension(Dimension::Weight);
        assert_eq!(form.from_unit, "kg");
        assert_eq!(form.to_unit, "lb");
        assert_eq!(form.value, "5");
    }

    #[test]
    fn test_conversion_submit() {
        let settings = DisplaySettings::default();
        let form = ConversionForm {
            dimension: Dimension::Temperature,
            value: "212".to_string(),
            from_unit: "f".to_string(),
            to_unit: "c".to_string(),
        };
        assert_eq!(form.submit(&settings), "212 f = 100.0000 c");
    }

    #[test]
    fn test_conversion_submit_precision() {
        let settings = DisplaySettings {
            conversion_decimals: 1,
            ..DisplaySettings::default()
        };
        let form = ConversionForm {
            dimension: Dimension::Weight,
            value: "1".to_string(),
            from_unit: "kg".to_string(),
            to_unit: "lb".to_string(),
        };
        assert_eq!(form.submit(&settings), "1 kg = 2.2 lb");
    }

    #[test]
    fn test_conversion_errors() {
        let settings = DisplaySettings::default();
        let mut form = ConversionForm::new(Dimension::Length);
        assert_eq!(form.submit(&settings), MSG_INVALID_NUMBER);

        form.value = "3".to_string();
        form.to_unit = "yd".to_string();
        assert_eq!(form.submit(&settings), MSG_CONVERSION_ERROR);
    }

    #[test]
    fn test_beam_form_scales_units() {
        let spec = rect_form().to_spec().unwrap();
        assert_eq!(spec.youngs_modulus_pa, 200.0e9);
        assert_eq!(spec.yield_strength_pa, 250.0e6);
        assert_eq!(
            spec.section,
            CrossSection::Rectangular {
                width_m: 0.1,
                height_m: 0.2
            }
        );
    }

    #[test]
    fn test_beam_submit_within_yield() {
        let text = rect_form().submit(&DisplaySettings::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Max Bending Stress: 0.75 MPa");
        assert!(lines[1].starts_with("Max Deflection: "));
        assert!(lines[1].ends_with(" mm"));
        assert_eq!(lines[2], MSG_WITHIN_YIELD);
    }

    #[test]
    fn test_beam_submit_exceeds_yield() {
        let mut form = rect_form();
        form.yield_strength_mpa = "0.5".to_string();
        let text = form.submit(&DisplaySettings::default());
        assert!(text.ends_with(MSG_EXCEEDS_YIELD));
    }

    #[test]
    fn test_beam_general_field_message() {
        let mut form = rect_form();
        form.youngs_modulus_gpa = "".to_string();
        assert_eq!(form.submit(&DisplaySettings::default()), MSG_BEAM_FIELDS);
    }

    #[test]
    fn test_beam_section_field_messages() {
        let mut form = rect_form();
        form.section = SectionForm::Rectangular {
            width: "0.1".to_string(),
            height: "tall".to_string(),
        };
        assert_eq!(form.submit(&DisplaySettings::default()), MSG_RECTANGULAR_FIELDS);

        form.section = SectionForm::Circular {
            diameter: String::new(),
        };
        assert_eq!(form.submit(&DisplaySettings::default()), MSG_CIRCULAR_FIELDS);
    }

    #[test]
    fn test_beam_zero_diameter_message() {
        let mut form = rect_form();
        form.section = SectionForm::Circular {
            diameter: "0".to_string(),
        };
        assert!(matches!(form.calculate(), Err(CalcError::InvalidInput { .. })));
        let text = form.submit(&DisplaySettings::default());
        assert!(text.contains("diameter_m"), "{text}");
        assert!(!text.contains("NaN") && !text.contains("inf"));
    }

    #[test]
    fn test_beam_scaling_overflow_names_form_field() {
        let mut form = rect_form();
        form.youngs_modulus_gpa = "1e300".to_string();
        let err = form.to_spec().unwrap_err();
        assert_eq!(err.field(), Some("youngs_modulus_gpa"));
        let text = beam_error_message(&err);
        assert_eq!(
            text,
            "Invalid input for 'youngs_modulus_gpa': 1e300 - value is too large to convert to pascals"
        );

        let mut form = rect_form();
        form.yield_strength_mpa = " 1e305 ".to_string();
        assert_eq!(form.to_spec().unwrap_err().field(), Some("yield_strength_mpa"));
    }

    #[test]
    fn test_display_settings_partial_json() {
        let settings: DisplaySettings = serde_json::from_str(r#"{ "stress_decimals": 3 }"#).unwrap();
        assert_eq!(settings.stress_decimals, 3);
        assert_eq!(settings.conversion_decimals, 4);
    }
}
