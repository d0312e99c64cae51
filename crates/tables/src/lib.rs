//! Clinical lookup tables and interpolation
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod beam;
mod energy;
mod error;
mod pdd;
mod table;

// inline the important types for a nice public API
#[doc(inline)]
pub use table::LookupTable;

#[doc(inline)]
pub use energy::Energy;

#[doc(inline)]
pub use pdd::{DepthDoseSet, FieldTable, PddTable};

#[doc(inline)]
pub use beam::{read_beam_data, reference, BeamData};

#[doc(inline)]
pub use error::{Error, Result};
