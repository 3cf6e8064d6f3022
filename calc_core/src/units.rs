//! # Units
//!
//! The unit catalogue used by the converter, plus lightweight newtype
//! wrappers for the SI scales that beam inputs and outputs pass through.
//!
//! ## Catalogue
//!
//! Every [`Dimension`] owns a closed set of units. Linear dimensions convert
//! through a base unit by a scalar factor:
//!
//! | Dimension   | Base | Units (factor to base)                          |
//! |-------------|------|-------------------------------------------------|
//! | length      | m    | m (1), cm (0.01), in (0.0254), ft (0.3048)      |
//! | weight      | kg   | kg (1), lb (0.453592)                           |
//! | torque      | nm   | nm (1), lbft (1.35582)                          |
//! | temperature | -    | c, f (affine, no base factor)                   |
//!
//! ## Example
//!
//! ```rust
//! use calc_core::units::{Dimension, Gigapascals, Pascals, Unit, LengthUnit};
//!
//! let unit = Dimension::Length.parse_unit("ft").unwrap();
//! assert_eq!(unit, Unit::Length(LengthUnit::Foot));
//! assert_eq!(unit.to_base_factor(), Some(0.3048));
//!
//! let e: Pascals = Gigapascals(200.0).into();
//! assert_eq!(e.0, 200.0e9);
//! ```

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Dimensions
// ============================================================================

/// Physical quantity category with its own unit set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Length,
    Weight,
    Temperature,
    Torque,
}

static LENGTH_UNITS: [Unit; 4] = [
    Unit::Length(LengthUnit::Meter),
    Unit::Length(LengthUnit::Centimeter),
    Unit::Length(LengthUnit::Inch),
    Unit::Length(LengthUnit::Foot),
];

static WEIGHT_UNITS: [Unit; 2] = [
    Unit::Weight(WeightUnit::Kilogram),
    Unit::Weight(WeightUnit::Pound),
];

static TEMPERATURE_UNITS: [Unit; 2] = [
    Unit::Temperature(TemperatureUnit::Celsius),
    Unit::Temperature(TemperatureUnit::Fahrenheit),
];

static TORQUE_UNITS: [Unit; 2] = [
    Unit::Torque(TorqueUnit::NewtonMeter),
    Unit::Torque(TorqueUnit::PoundFoot),
];

impl Dimension {
    /// All dimensions, in display order
    pub const ALL: [Dimension; 4] = [
        Dimension::Length,
        Dimension::Weight,
        Dimension::Temperature,
        Dimension::Torque,
    ];

    /// Lowercase name used in JSON and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Weight => "weight",
            Dimension::Temperature => "temperature",
            Dimension::Torque => "torque",
        }
    }

    /// The dimension's unit set, base unit first
    pub fn units(self) -> &'static [Unit] {
        match self {
            Dimension::Length => &LENGTH_UNITS,
            Dimension::Weight => &WEIGHT_UNITS,
            Dimension::Temperature => &TEMPERATURE_UNITS,
            Dimension::Torque => &TORQUE_UNITS,
        }
    }

    /// True when units convert by a scalar factor through a base unit
    pub fn is_linear(self) -> bool {
        !matches!(self, Dimension::Temperature)
    }

    /// Look up a unit symbol in this dimension's set.
    ///
    /// Matching ignores ASCII case and surrounding whitespace.
    ///
    /// ```rust
    /// use calc_core::units::{Dimension, TemperatureUnit, Unit};
    ///
    /// let c = Dimension::Temperature.parse_unit(" C ").unwrap();
    /// assert_eq!(c, Unit::Temperature(TemperatureUnit::Celsius));
    /// assert!(Dimension::Weight.parse_unit("m").is_err());
    /// ```
    pub fn parse_unit(self, symbol: &str) -> CalcResult<Unit> {
        let wanted = symbol.trim();
        self.units()
            .iter()
            .copied()
            .find(|u| u.symbol().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalcError::unknown_unit(symbol, self.as_str()))
    }

    /// The (from, to) pair a fresh conversion form starts with:
    /// the first and second units of the set.
    pub fn default_units(self) -> (Unit, Unit) {
        let units = self.units();
        (units[0], units[1])
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Dimension::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                CalcError::invalid_input(
                    "dimension",
                    s,
                    "Expected one of: length, weight, temperature, torque",
                )
            })
    }
}

// ============================================================================
// Units per dimension
// ============================================================================

/// A unit that converts to its dimension's base unit by a scalar factor.
pub trait LinearUnit: Copy + PartialEq {
    /// Multiply a value in this unit by this factor to get base units
    fn to_base_factor(self) -> f64;
}

/// Length units (base: meter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    Meter,
    #[serde(rename = "cm")]
    Centimeter,
    #[serde(rename = "in")]
    Inch,
    #[serde(rename = "ft")]
    Foot,
}

impl LinearUnit for LengthUnit {
    fn to_base_factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
        }
    }
}

/// Weight units (base: kilogram)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeightUnit {
    #[serde(rename = "kg")]
    Kilogram,
    #[serde(rename = "lb")]
    Pound,
}

impl LinearUnit for WeightUnit {
    fn to_base_factor(self) -> f64 {
        match self {
            WeightUnit::Kilogram => 1.0,
            WeightUnit::Pound => 0.453592,
        }
    }
}

/// Torque units (base: newton-meter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TorqueUnit {
    #[serde(rename = "nm")]
    NewtonMeter,
    #[serde(rename = "lbft")]
    PoundFoot,
}

impl LinearUnit for TorqueUnit {
    fn to_base_factor(self) -> f64 {
        match self {
            TorqueUnit::NewtonMeter => 1.0,
            TorqueUnit::PoundFoot => 1.35582,
        }
    }
}

/// Temperature units. Conversions are affine, so there is no base factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureUnit {
    #[serde(rename = "c")]
    Celsius,
    #[serde(rename = "f")]
    Fahrenheit,
}

impl TemperatureUnit {
    /// Convert a temperature reading from `self` to `to`.
    ///
    /// ```rust
    /// use calc_core::units::TemperatureUnit::{Celsius, Fahrenheit};
    ///
    /// assert_eq!(Celsius.convert(100.0, Fahrenheit), 212.0);
    /// assert_eq!(Fahrenheit.convert(32.0, Celsius), 0.0);
    /// ```
    pub fn convert(self, value: f64, to: TemperatureUnit) -> f64 {
        match (self, to) {
            (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => value * 9.0 / 5.0 + 32.0,
            (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => (value - 32.0) * 5.0 / 9.0,
            _ => value,
        }
    }
}

/// Any unit in the catalogue, tagged by its dimension.
///
/// Serializes as `{"dimension": "length", "unit": "ft"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "dimension", content = "unit", rename_all = "lowercase")]
pub enum Unit {
    Length(LengthUnit),
    Weight(WeightUnit),
    Temperature(TemperatureUnit),
    Torque(TorqueUnit),
}

impl Unit {
    /// Dimension this unit belongs to
    pub fn dimension(self) -> Dimension {
        match self {
            Unit::Length(_) => Dimension::Length,
            Unit::Weight(_) => Dimension::Weight,
            Unit::Temperature(_) => Dimension::Temperature,
            Unit::Torque(_) => Dimension::Torque,
        }
    }

    /// Short symbol, as accepted by [`Dimension::parse_unit`]
    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Length(LengthUnit::Meter) => "m",
            Unit::Length(LengthUnit::Centimeter) => "cm",
            Unit::Length(LengthUnit::Inch) => "in",
            Unit::Length(LengthUnit::Foot) => "ft",
            Unit::Weight(WeightUnit::Kilogram) => "kg",
            Unit::Weight(WeightUnit::Pound) => "lb",
            Unit::Temperature(TemperatureUnit::Celsius) => "c",
            Unit::Temperature(TemperatureUnit::Fahrenheit) => "f",
            Unit::Torque(TorqueUnit::NewtonMeter) => "nm",
            Unit::Torque(TorqueUnit::PoundFoot) => "lbft",
        }
    }

    /// Human-readable label
    pub fn name(self) -> &'static str {
        match self {
            Unit::Length(LengthUnit::Meter) => "Meter (m)",
            Unit::Length(LengthUnit::Centimeter) => "Centimeter (cm)",
            Unit::Length(LengthUnit::Inch) => "Inch (in)",
            Unit::Length(LengthUnit::Foot) => "Foot (ft)",
            Unit::Weight(WeightUnit::Kilogram) => "Kilogram (kg)",
            Unit::Weight(WeightUnit::Pound) => "Pound (lb)",
            Unit::Temperature(TemperatureUnit::Celsius) => "Celsius (°C)",
            Unit::Temperature(TemperatureUnit::Fahrenheit) => "Fahrenheit (°F)",
            Unit::Torque(TorqueUnit::NewtonMeter) => "Newton meter (Nm)",
            Unit::Torque(TorqueUnit::PoundFoot) => "Pound-foot (lb-ft)",
        }
    }

    /// Factor to the dimension's base unit; `None` for temperature
    pub fn to_base_factor(self) -> Option<f64> {
        match self {
            Unit::Length(u) => Some(u.to_base_factor()),
            Unit::Weight(u) => Some(u.to_base_factor()),
            Unit::Torque(u) => Some(u.to_base_factor()),
            Unit::Temperature(_) => None,
        }
    }

    /// Serializable description of this unit
    pub fn definition(self) -> UnitDefinition {
        UnitDefinition {
            symbol: self.symbol().to_string(),
            name: self.name().to_string(),
            dimension: self.dimension(),
            to_base_factor: self.to_base_factor(),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Serializable description of a catalogue unit.
///
/// ## JSON Example
///
/// ```json
/// { "symbol": "ft", "name": "Foot (ft)", "dimension": "length", "to_base_factor": 0.3048 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub symbol: String,
    pub name: String,
    pub dimension: Dimension,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_base_factor: Option<f64>,
}

// ============================================================================
// SI scale newtypes
// ============================================================================

/// Stress or modulus in pascals
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pascals(pub f64);

/// Stress in megapascals (1 MPa = 1e6 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Megapascals(pub f64);

/// Modulus in gigapascals (1 GPa = 1e9 Pa)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gigapascals(pub f64);

/// Length in meters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

impl From<Megapascals> for Pascals {
    fn from(mpa: Megapascals) -> Self {
        Pascals(mpa.0 * 1.0e6)
    }
}

impl From<Pascals> for Megapascals {
    fn from(pa: Pascals) -> Self {
        Megapascals(pa.0 / 1.0e6)
    }
}

impl From<Gigapascals> for Pascals {
    fn from(gpa: Gigapascals) -> Self {
        Pascals(gpa.0 * 1.0e9)
    }
}

impl From<Pascals> for Gigapascals {
    fn from(pa: Pascals) -> Self {
        Gigapascals(pa.0 / 1.0e9)
    }
}

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Pascals);
impl_arithmetic!(Megapascals);
impl_arithmetic!(Gigapascals);
impl_arithmetic!(Meters);
impl_arithmetic!(Millimeters);
