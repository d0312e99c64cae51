//! The monitor unit calculation pipeline

// crate modules
use crate::error::Result;
use crate::geometry::tissue_maximum_ratio;
use crate::inputs::DoseInputs;

// dosetools modules
use dosetools_tables::BeamData;
use dosetools_utils::ValueExt;

// external crates
use log::{debug, warn};

/// Derived factors and final MU for one calculation
///
/// Read-only output of [calculate], everything the rendering layer needs to
/// report the result and show its working. An undefined MU is carried as
/// `None` so callers can present a "check your inputs" diagnostic instead
/// of an infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationResult {
    /// Field size output correction
    pub output_factor: f64,
    /// Resolved %DD at the effective depth
    pub percent_dd: f64,
    /// Tissue-maximum ratio
    pub tmr: f64,
    /// Product of the six dose-rate factors (cGy/MU)
    pub denominator: f64,
    /// Monitor units, `None` when the denominator is exactly zero
    pub mu: Option<f64>,
}

impl std::fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.mu {
            Some(mu) => write!(
                f,
                "{} MU (OF {}, %DD {}, TMR {})",
                mu.dp(2),
                self.output_factor.dp(3),
                self.percent_dd.dp(1),
                self.tmr.dp(3)
            ),
            None => write!(f, "undefined MU (zero dose rate denominator)"),
        }
    }
}

/// Combine dose and the six dose-rate factors into monitor units
///
/// The denominator is the product of all six factors, none is privileged
/// or dropped. A denominator of exactly zero makes the result undefined, a
/// diverging MU is clinically meaningless and must surface as an input
/// problem rather than a number.
///
/// ```rust
/// # use dosetools_calc::monitor_units;
/// // 200 cGy against a combined dose rate of 50 cGy/MU
/// let mu = monitor_units(200.0, 1.0, 100.0, 0.5, 1.0, 1.0, 1.0);
/// assert_eq!(mu, Some(4.0));
///
/// // any zero factor makes the result undefined, never infinite
/// let mu = monitor_units(200.0, 1.0, 100.0, 0.5, 0.0, 1.0, 1.0);
/// assert_eq!(mu, None);
/// ```
pub fn monitor_units(
    dose: f64,
    output_factor: f64,
    mu_rate: f64,
    tmr: f64,
    wedge_factor: f64,
    inverse_square: f64,
    tray_factor: f64,
) -> Option<f64> {
    let denominator = output_factor * mu_rate * tmr * wedge_factor * inverse_square * tray_factor;
    mu_from_denominator(dose, denominator)
}

/// The division itself, undefined on an exactly-zero denominator
fn mu_from_denominator(dose: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        warn!("MU undefined: dose rate denominator is zero");
        return None;
    }
    Some(dose / denominator)
}

/// Run the full dose-to-MU pipeline for one input set
///
/// Resolves the output factor and %DD from the beam data, converts %DD to
/// TMR for the requested geometry, and combines the result with the wedge,
/// inverse square, and tray multipliers into the final MU.
///
/// The only failure mode is a configuration error from the reference data
/// layer (an uncommissioned energy). An undefined MU is not an error and
/// comes back as data inside the [CalculationResult].
///
/// ```rust
/// # use dosetools_calc::{calculate, DoseInputs};
/// # use dosetools_tables::reference;
/// # use dosetools_utils::ValueExt;
/// let inputs = DoseInputs {
///     dose: 200.0,
///     mu_rate: 100.0,
///     depth: 5.0,
///     ..Default::default()
/// };
///
/// let result = calculate(reference(), &inputs).unwrap();
/// assert_eq!(result.percent_dd, 83.0);
/// assert_eq!(result.mu.unwrap().dp(2), "2.41");
/// ```
pub fn calculate(beam: &BeamData, inputs: &DoseInputs) -> Result<CalculationResult> {
    let depth = inputs.effective_depth();

    let output_factor = beam.output_factor(inputs.field_size);
    let percent_dd = beam.percent_depth_dose(inputs.energy, inputs.field_size, depth)?;
    let tmr = tissue_maximum_ratio(percent_dd, depth, inputs.geometry, beam.sad);

    debug!("Output factor : {}", output_factor.dp(3));
    debug!("Percent DD    : {}", percent_dd.dp(1));
    debug!("TMR           : {}", tmr.dp(3));

    let denominator = output_factor
        * inputs.mu_rate
        * tmr
        * inputs.wedge_factor
        * inputs.inverse_square
        * inputs.tray_factor;

    Ok(CalculationResult {
        output_factor,
        percent_dd,
        tmr,
        denominator,
        mu: mu_from_denominator(inputs.dose, denominator),
    })
}
