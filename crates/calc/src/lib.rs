//! Monitor unit calculations
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod geometry;
mod inputs;
mod mu;
mod sensitivity;

// inline the important types for a nice public API
#[doc(inline)]
pub use geometry::{tissue_maximum_ratio, Geometry};

#[doc(inline)]
pub use inputs::DoseInputs;

#[doc(inline)]
pub use mu::{calculate, monitor_units, CalculationResult};

#[doc(inline)]
pub use sensitivity::{sensitivity, sweep, Shift, SweepPoint, Variable};

#[doc(inline)]
pub use error::{Error, Result};
