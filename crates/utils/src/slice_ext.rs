/// Extension trait for ordering checks on numeric slices
pub trait SliceExt {
    /// True when every element is strictly greater than the previous
    ///
    /// Empty and single-element slices are trivially ordered. Equal
    /// neighbours fail the check, which is how duplicate table keys are
    /// caught after sorting.
    ///
    /// ```rust
    /// # use dosetools_utils::SliceExt;
    /// assert!([4.0, 7.5, 10.0].is_strictly_increasing());
    /// assert!(![10.0, 10.0].is_strictly_increasing());
    /// ```
    fn is_strictly_increasing(&self) -> bool;
}

impl SliceExt for [f64] {
    fn is_strictly_increasing(&self) -> bool {
        self.windows(2).all(|pair| pair[0] < pair[1])
    }
}
