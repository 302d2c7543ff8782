/// Returns `true` if queens on two distinct columns attack each other.
///
/// Two queens attack along a shared row or along a diagonal, where the
/// column distance equals the row distance. Columns are assumed distinct:
/// the solvers decide columns strictly left to right and never place two
/// queens on the same column, so no column-equality test is made here.
///
/// # Examples
///
/// ```
/// use queenstep_core::attacks;
///
/// assert!(attacks(0, 3, 5, 3)); // same row
/// assert!(attacks(2, 1, 4, 3)); // diagonal
/// assert!(!attacks(0, 0, 2, 1)); // knight distance is safe
/// ```
#[must_use]
#[inline]
pub fn attacks(col_a: usize, row_a: usize, col_b: usize, row_b: usize) -> bool {
    row_a == row_b || col_a.abs_diff(col_b) == row_a.abs_diff(row_b)
}
