//! The treatment unit beam data model

// standard library
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

// crate modules
use crate::energy::Energy;
use crate::error::Result;
use crate::pdd::DepthDoseSet;
use crate::table::LookupTable;

// external crates
use log::debug;
use serde::{Deserialize, Serialize};

/// Reference dosimetry data for a single treatment unit
///
/// Bundles every commissioned lookup the calculation pipeline needs: the
/// output factor and wedge transmission tables, the depth dose set, and the
/// machine source-axis distance. Built once at startup, either from the
/// [embedded reference set](reference) or [from a JSON file](read_beam_data),
/// and shared read-only between calculations.
///
/// ```rust
/// # use dosetools_tables::{reference, Energy};
/// let beam = reference();
///
/// // exact table hits
/// assert_eq!(beam.output_factor(7.5), 0.98);
/// assert_eq!(beam.percent_depth_dose(Energy::Mv6, 10.0, 5.0).unwrap(), 83.0);
///
/// // field sizes between keys interpolate linearly
/// let of = beam.output_factor(12.0);
/// assert!((of - 1.02).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamData {
    /// Source-axis distance of the unit (cm)
    #[serde(default = "default_sad")]
    pub sad: f64,
    /// Output factor against field size (cm)
    pub output_factors: LookupTable,
    /// Wedge transmission against wedge angle (degrees)
    pub wedge_factors: LookupTable,
    /// Percent depth dose for every commissioned energy
    pub depth_dose: DepthDoseSet,
}

/// The fixed 100 cm SAD of the standard unit model
fn default_sad() -> f64 {
    100.0
}

impl BeamData {
    /// Field size output correction
    pub fn output_factor(&self, field_size: f64) -> f64 {
        self.output_factors.interpolate(field_size)
    }

    /// Wedge transmission for a wedge angle in degrees
    ///
    /// Only meaningful when a wedge is actually mounted. Open fields take a
    /// factor of exactly 1.0 and never reach this lookup.
    pub fn wedge_factor(&self, angle: f64) -> f64 {
        self.wedge_factors.interpolate(angle)
    }

    /// Resolve %DD for an (energy, field size, depth) triple
    ///
    /// Fails fast with [MissingEnergy](crate::Error::MissingEnergy) when the
    /// unit has no commissioned data for `energy`.
    pub fn percent_depth_dose(&self, energy: Energy, field_size: f64, depth: f64) -> Result<f64> {
        self.depth_dose.percent_depth_dose(energy, field_size, depth)
    }
}

/// Read a beam data configuration from a JSON file
///
/// Site-specific commissioning data use the same validation as the embedded
/// set, so a malformed file is rejected at load time rather than surfacing
/// as a bad number mid-calculation.
///
/// ```rust, no_run
/// # use dosetools_tables::read_beam_data;
/// let beam = read_beam_data("./data/clinic_trs398.json").unwrap();
/// ```
pub fn read_beam_data<P: AsRef<Path>>(path: P) -> Result<BeamData> {
    debug!("Reading beam data from {}", path.as_ref().display());
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

// Only ever deserialise the embedded data once on first use
static REFERENCE: OnceLock<BeamData> = OnceLock::new();

/// Embedded reference beam data
///
/// A generic 6/10 MV photon unit with a 100 cm SAD, suitable for sanity
/// checks and tests. Clinical use should load site commissioning data with
/// [read_beam_data] instead.
pub fn reference() -> &'static BeamData {
    REFERENCE.get_or_init(|| {
        serde_json::from_str(include_str!("../data/reference.json"))
            .expect("embedded reference beam data is malformed")
    })
}
