//! # Calculations
//!
//! Each calculation follows the pattern:
//!
//! - `*Request` / `*Spec` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - a pure function from input to `CalcResult<*Result>`
//!
//! ## Available Calculations
//!
//! - [`conversion`] - Unit conversion within a dimension
//! - [`beam`] - Simply-supported beam with a center point load

pub mod beam;
pub mod conversion;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::CalcResult;

// Re-export commonly used types
pub use beam::{BeamResult, BeamSpec, CrossSection};
pub use conversion::{ConversionRequest, ConversionResult};

/// Enum wrapper for all calculation types.
///
/// Lets a batch of mixed requests live in one JSON array.
///
/// ## JSON Example
///
/// ```json
/// [
///   { "type": "Conversion", "dimension": "length", "from_unit": "in", "to_unit": "ft", "value": 12.0 },
///   { "type": "Beam", "load_n": 1000.0, "span_m": 2.0,
///     "youngs_modulus_pa": 2.0e11, "yield_strength_pa": 2.5e8,
///     "section": { "type": "Circular", "diameter_m": 0.05 } }
/// ]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Unit conversion
    Conversion(ConversionRequest),
    /// Center-loaded simply-supported beam
    Beam(BeamSpec),
}

/// Result of running a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutput {
    Conversion(ConversionResult),
    Beam(BeamResult),
}

impl CalculationItem {
    /// Get the user-provided label (conversions have none)
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Conversion(_) => "",
            CalculationItem::Beam(b) => &b.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Conversion(_) => "Conversion",
            CalculationItem::Beam(_) => "Beam",
        }
    }

    /// Evaluate the item.
    pub fn run(&self) -> CalcResult<CalculationOutput> {
        match self {
            CalculationItem::Conversion(req) => req.calculate().map(CalculationOutput::Conversion),
            CalculationItem::Beam(spec) => beam::analyze(spec).map(CalculationOutput::Beam),
        }
    }
}

/// Parse a JSON array of calculation items.
pub fn parse_items(json: &str) -> CalcResult<Vec<CalculationItem>> {
    let items: Vec<CalculationItem> = serde_json::from_str(json)?;
    info!(count = items.len(), "Parsed calculation items");
    Ok(items)
}

/// Evaluate every item independently; one failure does not stop the rest.
pub fn run_all(items: &[CalculationItem]) -> Vec<CalcResult<CalculationOutput>> {
    items.iter().map(CalculationItem::run).collect()
}
