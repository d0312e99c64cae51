//! Result and Error types for dosetools-tables

/// Type alias for Result<T, tables::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `dosetools-tables` crate
///
/// Every variant is a configuration error. Malformed reference data is a
/// deployment bug rather than a user input problem, so construction and
/// lookup fail immediately instead of limping on mid-calculation.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to deserialise beam data")]
    JsonError(#[from] serde_json::Error),

    #[error("lookup table must contain at least one entry")]
    EmptyTable,

    #[error("duplicate key {0} in sorted table")]
    DuplicateKey(f64),

    #[error("non-finite table entry ({key}, {value})")]
    NonFiniteEntry { key: f64, value: f64 },

    #[error("non-finite field size {0} in depth dose table")]
    NonFiniteFieldSize(f64),

    #[error("depth dose set contains no energies")]
    EmptyDepthDoseSet,

    #[error("no depth dose data for \"{0}\"")]
    MissingEnergy(crate::Energy),

    #[error("failed to infer energy from \"{0}\"")]
    FailedToInferEnergy(String),
}
