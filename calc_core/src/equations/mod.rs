//! # Mechanics Equations
//!
//! The closed-form formulas behind the beam calculation, kept in one place so
//! they can be checked against references independently of input handling.
//!
//! ## Modules
//!
//! - [`beam`] - Simply-supported beam with a center point load
//! - [`section`] - Cross-section properties (I, c, S)
//!
//! ## Sign Conventions
//!
//! - **Loads**: Positive downward (gravity direction)
//! - **Moment**: Positive causes tension on bottom fiber (sagging)
//! - **Deflection**: Positive downward

pub mod beam;
pub mod section;

pub use beam::{
    bending_stress,
    point_load_midspan_deflection,
    point_load_midspan_moment,
};

pub use section::{
    circular_extreme_fiber,
    circular_moment_of_inertia,
    rectangular_extreme_fiber,
    rectangular_moment_of_inertia,
    section_modulus,
};
