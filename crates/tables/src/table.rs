//! Sorted key/value tables with linear interpolation

// crate modules
use crate::error::{Error, Result};

// dosetools modules
use dosetools_utils::SliceExt;

// external crates
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// An immutable table of sorted `(key, value)` pairs
///
/// The building block for every clinical lookup in the toolkit: output
/// factor against field size, %DD against depth, wedge transmission against
/// wedge angle. Tables are tiny (order 10 entries), so lookups are a simple
/// adjacent-pair scan.
///
/// ### Construction
///
/// Entries may be given in any order and are sorted by key. Construction
/// fails on an empty table, duplicate keys, or non-finite entries, which
/// also guarantees the interpolation denominator can never be zero.
///
/// ### Lookup contract
///
/// - An exact key hit returns the stored value verbatim, no arithmetic.
/// - Keys outside the table range clamp flat to the nearest edge value.
///   Out-of-range inputs are expected, not an error.
/// - Anything else is linearly interpolated between the bracketing pair.
///
/// ```rust
/// # use dosetools_tables::LookupTable;
/// let table = LookupTable::new([(5.0, 0.95), (10.0, 1.0), (15.0, 1.05)]).unwrap();
///
/// // exact keys are returned verbatim
/// assert_eq!(table.interpolate(10.0), 1.0);
///
/// // values outside the key range clamp to the nearest edge
/// assert_eq!(table.interpolate(2.0), 0.95);
/// assert_eq!(table.interpolate(40.0), 1.05);
///
/// // anything else is linearly interpolated
/// assert_eq!(table.interpolate(12.5), 1.025);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<[f64; 2]>", into = "Vec<[f64; 2]>")]
pub struct LookupTable {
    points: Vec<(f64, f64)>,
}

impl LookupTable {
    /// Build a validated table from `(key, value)` pairs
    ///
    /// Pairs are sorted by key. Returns an [Error](crate::Error) for an
    /// empty list, duplicate keys, or non-finite entries.
    pub fn new<P>(points: P) -> Result<Self>
    where
        P: Into<Vec<(f64, f64)>>,
    {
        let mut points = points.into();

        if points.is_empty() {
            return Err(Error::EmptyTable);
        }

        for &(key, value) in &points {
            if !key.is_finite() || !value.is_finite() {
                return Err(Error::NonFiniteEntry { key, value });
            }
        }

        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        let keys = points.iter().map(|point| point.0).collect::<Vec<f64>>();
        if !keys.is_strictly_increasing() {
            // sorted, so any ordering violation is a duplicate pair
            let duplicate = keys.windows(2).find(|pair| pair[0] >= pair[1]).unwrap()[0];
            return Err(Error::DuplicateKey(duplicate));
        }

        Ok(Self { points })
    }

    /// Smallest stored key
    pub fn min_key(&self) -> f64 {
        self.points[0].0
    }

    /// Largest stored key
    pub fn max_key(&self) -> f64 {
        self.points[self.points.len() - 1].0
    }

    /// Piecewise-linear lookup of the value at `x`
    ///
    /// Total over all finite inputs. Exact hits return the stored value,
    /// keys beyond the table range clamp flat to the edge values, and
    /// everything in between is linearly interpolated.
    pub fn interpolate(&self, x: f64) -> f64 {
        // exact hits are returned verbatim, no arithmetic
        if let Some(&(_, value)) = self.points.iter().find(|&&(key, _)| key == x) {
            return value;
        }

        // flat clamp at the range edges, no extrapolation
        let (x_min, y_min) = self.points[0];
        if x <= x_min {
            return y_min;
        }
        let (x_max, y_max) = self.points[self.points.len() - 1];
        if x >= x_max {
            return y_max;
        }

        // a bracket always exists for finite x inside the key range
        self.points
            .iter()
            .copied()
            .tuple_windows()
            .find(|&((x0, _), (x1, _))| x0 <= x && x <= x1)
            .map(|((x0, y0), (x1, y1))| lerp(x, x0, y0, x1, y1))
            .unwrap_or(y_max)
    }
}

impl TryFrom<Vec<[f64; 2]>> for LookupTable {
    type Error = Error;

    fn try_from(points: Vec<[f64; 2]>) -> Result<Self> {
        Self::new(
            points
                .into_iter()
                .map(|[key, value]| (key, value))
                .collect::<Vec<_>>(),
        )
    }
}

impl From<LookupTable> for Vec<[f64; 2]> {
    fn from(table: LookupTable) -> Self {
        table
            .points
            .into_iter()
            .map(|(key, value)| [key, value])
            .collect()
    }
}

/// Linear interpolation of `x` between `(x0, y0)` and `(x1, y1)`
///
/// Callers must guarantee `x0 != x1`, which table construction does by
/// rejecting duplicate keys.
pub(crate) fn lerp(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}
