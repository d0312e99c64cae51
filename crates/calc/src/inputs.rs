//! Per-calculation input parameters

// crate modules
use crate::geometry::Geometry;

// dosetools modules
use dosetools_tables::Energy;

/// The complete parameter set for a single MU calculation
///
/// Created fresh for each request and owned by the calculation it is passed
/// to. Nothing here outlives the request, the sensitivity analyser clones
/// the set for perturbation and never mutates the original.
///
/// The wedge, inverse square, and tray entries are the resolved
/// dimensionless multipliers. Open fields carry a wedge factor of exactly
/// 1.0, a mounted wedge is resolved beforehand with
/// [BeamData::wedge_factor](dosetools_tables::BeamData::wedge_factor).
#[derive(Debug, Clone, PartialEq)]
pub struct DoseInputs {
    /// Prescribed dose (cGy)
    pub dose: f64,
    /// Side of the square treatment field (cm)
    pub field_size: f64,
    /// Machine calibration dose rate (cGy/MU)
    pub mu_rate: f64,
    /// Photon beam quality
    pub energy: Energy,
    /// Prescription depth (cm)
    pub depth: f64,
    /// Wedge transmission factor, 1.0 for open fields
    pub wedge_factor: f64,
    /// Inverse square factor
    pub inverse_square: f64,
    /// Tray transmission factor
    pub tray_factor: f64,
    /// Treatment setup geometry
    pub geometry: Geometry,
    /// Bolus thickness on the surface (cm), if any
    pub bolus: Option<f64>,
}

impl DoseInputs {
    /// Lookup depth including any bolus on the surface
    ///
    /// Bolus is added here, before any %DD or TMR resolution, never inside
    /// the geometry conversion.
    ///
    /// ```rust
    /// # use dosetools_calc::DoseInputs;
    /// let inputs = DoseInputs {
    ///     depth: 4.0,
    ///     bolus: Some(1.0),
    ///     ..Default::default()
    /// };
    /// assert_eq!(inputs.effective_depth(), 5.0);
    /// ```
    pub fn effective_depth(&self) -> f64 {
        self.depth + self.bolus.unwrap_or(0.0)
    }
}

impl Default for DoseInputs {
    /// A conventional open-field prescription, matching the defaults a
    /// checking form would present
    fn default() -> Self {
        Self {
            dose: 200.0,
            field_size: 10.0,
            mu_rate: 1.0,
            energy: Energy::Mv6,
            depth: 10.0,
            wedge_factor: 1.0,
            inverse_square: 1.0,
            tray_factor: 1.0,
            geometry: Geometry::Sad,
            bolus: None,
        }
    }
}
