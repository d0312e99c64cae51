//! Input sensitivity of the monitor unit calculation

// crate modules
use crate::error::Result;
use crate::inputs::DoseInputs;
use crate::mu::calculate;

// dosetools modules
use dosetools_tables::BeamData;

/// Smallest value a decreased input may take
///
/// Negative doses, depths, or rates are physically meaningless, so the
/// decreased copy is floored here to keep the pipeline well defined.
const PERTURBATION_FLOOR: f64 = 0.01;

/// Inputs that can be perturbed or swept
///
/// One entry per numeric input of [DoseInputs] that the analysis can vary
/// a calculation over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variable {
    /// Prescribed dose (cGy)
    Dose,
    /// Field size (cm)
    FieldSize,
    /// Machine calibration dose rate (cGy/MU)
    MuRate,
    /// Prescription depth (cm)
    Depth,
    /// Wedge transmission factor
    WedgeFactor,
    /// Inverse square factor
    InverseSquare,
    /// Tray transmission factor
    TrayFactor,
}

impl Variable {
    /// Current value of this variable in an input set
    pub fn value(&self, inputs: &DoseInputs) -> f64 {
        match self {
            Self::Dose => inputs.dose,
            Self::FieldSize => inputs.field_size,
            Self::MuRate => inputs.mu_rate,
            Self::Depth => inputs.depth,
            Self::WedgeFactor => inputs.wedge_factor,
            Self::InverseSquare => inputs.inverse_square,
            Self::TrayFactor => inputs.tray_factor,
        }
    }

    /// Copy of an input set with this variable replaced
    fn with_value(&self, inputs: &DoseInputs, value: f64) -> DoseInputs {
        let mut perturbed = inputs.clone();
        match self {
            Self::Dose => perturbed.dose = value,
            Self::FieldSize => perturbed.field_size = value,
            Self::MuRate => perturbed.mu_rate = value,
            Self::Depth => perturbed.depth = value,
            Self::WedgeFactor => perturbed.wedge_factor = value,
            Self::InverseSquare => perturbed.inverse_square = value,
            Self::TrayFactor => perturbed.tray_factor = value,
        };
        perturbed
    }
}

/// Percent change in MU for a perturbation in each direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shift {
    /// Percent change after increasing the variable
    pub up: f64,
    /// Percent change after decreasing the variable
    pub down: f64,
}

/// One-at-a-time sensitivity of MU around a baseline
///
/// Runs the full pipeline on the baseline, then on two perturbed copies
/// with `variable` moved up and down by `increment`, and reports the
/// percent change in MU for each direction. The decreased copy is floored
/// at a small positive value so the pipeline stays well defined.
///
/// Returns `None` when the baseline MU is undefined or exactly zero, the
/// percentage change has no meaning there. The baseline inputs are cloned
/// for perturbation and never mutated.
///
/// ```rust
/// # use dosetools_calc::{sensitivity, DoseInputs, Variable};
/// # use dosetools_tables::reference;
/// let baseline = DoseInputs::default();
///
/// let shift = sensitivity(reference(), &baseline, Variable::MuRate, 0.1)
///     .unwrap()
///     .unwrap();
///
/// // MU falls when the calibration dose rate rises
/// assert!(shift.up < 0.0);
/// assert!(shift.down > 0.0);
/// ```
pub fn sensitivity(
    beam: &BeamData,
    baseline: &DoseInputs,
    variable: Variable,
    increment: f64,
) -> Result<Option<Shift>> {
    let base_mu = match calculate(beam, baseline)?.mu {
        Some(mu) if mu != 0.0 => mu,
        _ => return Ok(None),
    };

    let value = variable.value(baseline);
    let up = mu_at(beam, baseline, variable, value + increment)?;
    let down = mu_at(
        beam,
        baseline,
        variable,
        (value - increment).max(PERTURBATION_FLOOR),
    )?;

    let (Some(up), Some(down)) = (up, down) else {
        return Ok(None);
    };

    Ok(Some(Shift {
        up: 100.0 * (up - base_mu) / base_mu,
        down: 100.0 * (down - base_mu) / base_mu,
    }))
}

/// A single point of a sweep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Value the swept variable was set to
    pub value: f64,
    /// MU at that value, `None` where undefined
    pub mu: Option<f64>,
}

/// Evaluate MU across a range of one variable
///
/// Support for plotting layers that draw an MU response curve around the
/// current inputs. Each value is substituted into a clone of the baseline
/// and run through the identical pipeline. Points where the MU is
/// undefined are carried as `None` rather than dropped, so a curve keeps
/// its x positions.
///
/// ```rust
/// # use dosetools_calc::{sweep, DoseInputs, Variable};
/// # use dosetools_tables::reference;
/// let baseline = DoseInputs::default();
///
/// let points = sweep(reference(), &baseline, Variable::Depth, &[0.0, 5.0, 10.0]).unwrap();
/// assert_eq!(points.len(), 3);
///
/// // shallower targets need fewer monitor units
/// assert!(points[0].mu.unwrap() < points[2].mu.unwrap());
/// ```
pub fn sweep(
    beam: &BeamData,
    baseline: &DoseInputs,
    variable: Variable,
    values: &[f64],
) -> Result<Vec<SweepPoint>> {
    values
        .iter()
        .map(|&value| {
            Ok(SweepPoint {
                value,
                mu: mu_at(beam, baseline, variable, value)?,
            })
        })
        .collect()
}

/// MU for a baseline with one variable replaced
fn mu_at(
    beam: &BeamData,
    baseline: &DoseInputs,
    variable: Variable,
    value: f64,
) -> Result<Option<f64>> {
    Ok(calculate(beam, &variable.with_value(baseline, value))?.mu)
}
