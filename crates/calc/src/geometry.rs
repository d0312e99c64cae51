//! Treatment geometry and tissue-maximum ratio conversion

/// Treatment setup geometry
///
/// Isocentric setups place the target at the machine axis, so the %DD
/// converts to TMR directly. Fixed-distance setups carry their
/// source-surface distance with them, an SSD geometry cannot be built
/// without one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// Isocentric setup at the machine source-axis distance
    Sad,
    /// Fixed source-surface distance setup
    Ssd {
        /// Source-surface distance (cm)
        ssd: f64,
    },
}

/// Convert %DD into a tissue-maximum ratio
///
/// Isocentric (SAD) setups take the %DD as-is. Fixed-distance (SSD) setups
/// apply an inverse square correction to convert the SSD-measured %DD into
/// an SAD-equivalent ratio.
///
/// `depth` is the *effective* depth, prescription depth plus any bolus,
/// which the caller must add before this conversion. `sad` is a fixed
/// constant of the unit model, 100 cm for the standard unit.
///
/// ```rust
/// # use dosetools_calc::{tissue_maximum_ratio, Geometry};
/// // isocentric setups take TMR directly from the %DD
/// assert_eq!(tissue_maximum_ratio(83.0, 5.0, Geometry::Sad, 100.0), 0.83);
///
/// // at 95 cm SSD and 5 cm deep the correction factor is exactly one
/// let tmr = tissue_maximum_ratio(83.0, 5.0, Geometry::Ssd { ssd: 95.0 }, 100.0);
/// assert_eq!(tmr, 0.83);
/// ```
pub fn tissue_maximum_ratio(percent_dd: f64, depth: f64, geometry: Geometry, sad: f64) -> f64 {
    match geometry {
        Geometry::Sad => percent_dd / 100.0,
        Geometry::Ssd { ssd } => (percent_dd / 100.0) * ((ssd + depth) / sad).powi(2),
    }
}
