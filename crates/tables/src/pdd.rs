//! Percent depth dose over energy, field size, and depth

// standard library
use std::collections::HashMap;

// crate modules
use crate::energy::Energy;
use crate::error::{Error, Result};
use crate::table::{lerp, LookupTable};

// dosetools modules
use dosetools_utils::SliceExt;

// external crates
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Depth dose curve for a single field size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldTable {
    /// Side of the square field at the reference distance (cm)
    pub field_size: f64,
    /// Depth (cm) against %DD for this field size
    pub table: LookupTable,
}

/// Field-size-bucketed depth dose curves for one energy
///
/// Resolution is a two-stage interpolation. The depth is interpolated
/// within each of the two field-size buckets bracketing the requested
/// field size, then the two %DD values are interpolated across field size
/// with the same linear formula. Field sizes outside the commissioned
/// range clamp to the nearest bucket, exactly as depths clamp within each
/// [LookupTable].
///
/// A 1D depth-only data set is simply a [PddTable] with a single bucket.
///
/// ```rust
/// # use dosetools_tables::{FieldTable, LookupTable, PddTable};
/// let small = FieldTable {
///     field_size: 5.0,
///     table: LookupTable::new([(0.0, 100.0), (10.0, 65.0)]).unwrap(),
/// };
/// let large = FieldTable {
///     field_size: 10.0,
///     table: LookupTable::new([(0.0, 100.0), (10.0, 67.0)]).unwrap(),
/// };
/// let pdd = PddTable::new(vec![small, large]).unwrap();
///
/// // exact bucket, depth interpolated within it
/// assert_eq!(pdd.percent_depth_dose(10.0, 10.0), 67.0);
///
/// // between buckets, %DD interpolated across field size
/// assert_eq!(pdd.percent_depth_dose(7.5, 10.0), 66.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<FieldTable>", into = "Vec<FieldTable>")]
pub struct PddTable {
    fields: Vec<FieldTable>,
}

impl PddTable {
    /// Build a validated set of field-size buckets
    ///
    /// Buckets may be given in any order and are sorted by field size.
    /// Returns an [Error](crate::Error) for an empty list, duplicate field
    /// sizes, or a non-finite field size.
    pub fn new(fields: Vec<FieldTable>) -> Result<Self> {
        let mut fields = fields;

        if fields.is_empty() {
            return Err(Error::EmptyTable);
        }

        for field in &fields {
            if !field.field_size.is_finite() {
                return Err(Error::NonFiniteFieldSize(field.field_size));
            }
        }

        fields.sort_by(|a, b| a.field_size.total_cmp(&b.field_size));

        let sizes = fields.iter().map(|f| f.field_size).collect::<Vec<f64>>();
        if !sizes.is_strictly_increasing() {
            // sorted, so any ordering violation is a duplicate pair
            let duplicate = sizes.windows(2).find(|pair| pair[0] >= pair[1]).unwrap()[0];
            return Err(Error::DuplicateKey(duplicate));
        }

        Ok(Self { fields })
    }

    /// Commissioned field sizes, ascending
    pub fn field_sizes(&self) -> impl Iterator<Item = f64> + '_ {
        self.fields.iter().map(|f| f.field_size)
    }

    /// Resolve %DD for a field size and depth
    ///
    /// A field size of 0 is legal and routes through the ordinary clamp to
    /// the smallest bucket, as does a depth of 0 within each depth table.
    pub fn percent_depth_dose(&self, field_size: f64, depth: f64) -> f64 {
        // an exact bucket hit skips the cross-field interpolation
        if let Some(bucket) = self.fields.iter().find(|f| f.field_size == field_size) {
            return bucket.table.interpolate(depth);
        }

        // flat clamp to the commissioned field size range
        let first = &self.fields[0];
        if field_size <= first.field_size {
            return first.table.interpolate(depth);
        }
        let last = &self.fields[self.fields.len() - 1];
        if field_size >= last.field_size {
            return last.table.interpolate(depth);
        }

        // bracketing buckets always exist for finite sizes inside the range
        self.fields
            .iter()
            .tuple_windows()
            .find(|(lower, upper)| lower.field_size <= field_size && field_size <= upper.field_size)
            .map(|(lower, upper)| {
                let below = lower.table.interpolate(depth);
                let above = upper.table.interpolate(depth);
                lerp(field_size, lower.field_size, below, upper.field_size, above)
            })
            .unwrap_or_else(|| last.table.interpolate(depth))
    }
}

impl TryFrom<Vec<FieldTable>> for PddTable {
    type Error = Error;

    fn try_from(fields: Vec<FieldTable>) -> Result<Self> {
        Self::new(fields)
    }
}

impl From<PddTable> for Vec<FieldTable> {
    fn from(table: PddTable) -> Self {
        table.fields
    }
}

/// Depth dose curves for every commissioned energy
///
/// The top level of the %DD data, keyed by the discrete [Energy]. Asking
/// for an energy with no commissioned data is a configuration error and
/// fails immediately, the caller must only pass enumerated energies that
/// the unit was commissioned for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HashMap<Energy, PddTable>", into = "HashMap<Energy, PddTable>")]
pub struct DepthDoseSet {
    tables: HashMap<Energy, PddTable>,
}

impl DepthDoseSet {
    /// Build a depth dose set covering at least one energy
    pub fn new(tables: HashMap<Energy, PddTable>) -> Result<Self> {
        if tables.is_empty() {
            return Err(Error::EmptyDepthDoseSet);
        }
        Ok(Self { tables })
    }

    /// Energies with commissioned depth dose data
    pub fn energies(&self) -> impl Iterator<Item = Energy> + '_ {
        self.tables.keys().copied()
    }

    /// Depth dose table for one energy, if commissioned
    pub fn table(&self, energy: Energy) -> Option<&PddTable> {
        self.tables.get(&energy)
    }

    /// Resolve %DD for an (energy, field size, depth) triple
    pub fn percent_depth_dose(&self, energy: Energy, field_size: f64, depth: f64) -> Result<f64> {
        self.tables
            .get(&energy)
            .map(|table| table.percent_depth_dose(field_size, depth))
            .ok_or(Error::MissingEnergy(energy))
    }
}

impl TryFrom<HashMap<Energy, PddTable>> for DepthDoseSet {
    type Error = Error;

    fn try_from(tables: HashMap<Energy, PddTable>) -> Result<Self> {
        Self::new(tables)
    }
}

impl From<DepthDoseSet> for HashMap<Energy, PddTable> {
    fn from(set: DepthDoseSet) -> Self {
        set.tables
    }
}
