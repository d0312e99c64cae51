use crate::f;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Fixed decimal-place formatting
    ///
    /// Clinical quantities are reported to a fixed number of decimal places
    /// rather than the shortest representation that `Display` would pick.
    ///
    /// ```rust
    /// # use dosetools_utils::ValueExt;
    /// let mu = 2.4096385542168673;
    /// assert_eq!(mu.dp(2), "2.41");
    /// assert_eq!((0.83).dp(3), "0.830");
    /// ```
    fn dp(&self, precision: usize) -> String;
}

impl ValueExt for f64 {
    fn dp(&self, precision: usize) -> String {
        f!("{:.precision$}", self, precision = precision)
    }
}
