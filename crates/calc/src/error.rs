//! Result and Error types for dosetools-calc

/// Type alias for Result<T, calc::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `dosetools-calc` crate
///
/// An undefined MU is not an error, it is carried as data in
/// [CalculationResult](crate::CalculationResult). Errors here are the
/// configuration failures propagated up from the reference data layer.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("beam data lookup failed")]
    TablesError(#[from] dosetools_tables::Error),
}
