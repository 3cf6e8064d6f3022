//! # calc_core - Unit Conversion and Beam Calculation Engine
//!
//! `calc_core` is the numeric core of Fieldcalc: a unit converter for
//! length, weight, temperature and torque, and a bending stress / deflection
//! calculator for a simply-supported beam with a center point load.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All request and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Closed Types**: Units and cross-sections are enums, not string tags
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{analyze_beam, convert, BeamSpec, CrossSection, Dimension};
//!
//! let lb = convert(Dimension::Weight, 1.0, "kg", "lb").unwrap();
//! assert!((lb - 2.20462).abs() < 1e-5);
//!
//! let result = analyze_beam(&BeamSpec {
//!     label: String::new(),
//!     load_n: 1000.0,
//!     span_m: 2.0,
//!     youngs_modulus_pa: 200.0e9,
//!     yield_strength_pa: 250.0e6,
//!     section: CrossSection::Circular { diameter_m: 0.05 },
//! }).unwrap();
//! assert!(result.within_yield);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Conversion and beam calculations, plus JSON batch items
//! - [`equations`] - Closed-form mechanics formulas
//! - [`units`] - Unit catalogue and SI scale newtypes
//! - [`form`] - Raw string form handling and text reports
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod equations;
pub mod errors;
pub mod form;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::beam::analyze as analyze_beam;
pub use calculations::conversion::convert;
pub use calculations::{
    BeamResult, BeamSpec, CalculationItem, CalculationOutput, ConversionRequest, ConversionResult,
    CrossSection,
};
pub use errors::{CalcError, CalcResult};
pub use form::{BeamForm, ConversionForm, DisplaySettings, SectionForm};
pub use units::{Dimension, Unit, UnitDefinition};
