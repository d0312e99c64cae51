//! Photon beam quality designators

// crate modules
use crate::error::Error;

// dosetools modules
use dosetools_utils::f;

use serde::{Deserialize, Serialize};

/// Nominal accelerating potential of a photon beam
///
/// Beam data are keyed by a discrete, enumerated beam quality. An unknown
/// energy label is a configuration error and fails fast, it is never
/// coerced to a default.
///
/// [Energy] implements `TryFrom<&str>` and `FromStr` so labels from a
/// configuration file or form field can be handled explicitly.
///
/// ```rust
/// # use dosetools_tables::Energy;
/// // From the conventional label
/// assert_eq!(Energy::Mv6, Energy::try_from("6 MV").unwrap());
///
/// // Case and spacing are forgiven
/// assert_eq!(Energy::Mv10, Energy::try_from("10mv").unwrap());
/// assert_eq!(Energy::Mv15, "15 mv".parse().unwrap());
///
/// // Anything else is rejected
/// assert!(Energy::try_from("4 MeV").is_err());
/// ```
///
/// For reference, the accepted identifiers:
///
/// | Variant | Label   | Also accepted      |
/// | ------- | ------- | ------------------ |
/// | Mv6     | `6 MV`  | `6`, `6mv`, `6 mv` |
/// | Mv10    | `10 MV` | `10`, `10mv`       |
/// | Mv15    | `15 MV` | `15`, `15mv`       |
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Energy {
    /// 6 MV photons
    Mv6,
    /// 10 MV photons
    Mv10,
    /// 15 MV photons
    Mv15,
}

impl Energy {
    /// Nominal accelerating potential in megavolts
    ///
    /// ```rust
    /// # use dosetools_tables::Energy;
    /// assert_eq!(Energy::Mv6.megavoltage(), 6);
    /// ```
    pub const fn megavoltage(&self) -> u8 {
        match self {
            Self::Mv6 => 6,
            Self::Mv10 => 10,
            Self::Mv15 => 15,
        }
    }
}

impl TryFrom<&str> for Energy {
    type Error = Error;

    fn try_from(label: &str) -> core::result::Result<Self, Self::Error> {
        let name = label.trim().to_lowercase();
        let name = name.strip_suffix("mv").unwrap_or(&name).trim();
        match name {
            "6" => Ok(Self::Mv6),
            "10" => Ok(Self::Mv10),
            "15" => Ok(Self::Mv15),
            _ => Err(Error::FailedToInferEnergy(label.to_string())),
        }
    }
}

impl TryFrom<String> for Energy {
    type Error = Error;

    fn try_from(label: String) -> core::result::Result<Self, Self::Error> {
        Self::try_from(label.as_str())
    }
}

impl std::str::FromStr for Energy {
    type Err = Error;

    fn from_str(label: &str) -> core::result::Result<Self, Self::Err> {
        Self::try_from(label)
    }
}

impl From<Energy> for String {
    fn from(energy: Energy) -> Self {
        f!("{energy}")
    }
}

impl std::fmt::Display for Energy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} MV", self.megavoltage())
    }
}
