//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! For example, reporting a monitor unit value to a fixed number of decimal
//! places or checking that table keys are strictly ordered are useful
//! everywhere.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod slice_ext;
mod value_ext;

// Flatten
pub use slice_ext::SliceExt;
pub use value_ext::ValueExt;
