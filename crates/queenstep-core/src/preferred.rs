use crate::RowList;

/// Errors produced when validating caller-supplied preferred rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PreferredRowsError {
    /// The input vector does not have one entry per column.
    #[display("expected {expected} preferred rows, got {actual}")]
    WrongLength {
        /// Board size, one entry per column.
        expected: usize,
        /// Number of entries actually supplied.
        actual: usize,
    },
    /// An entry is outside the 1-based range `[1, size]`.
    #[display("preferred row {row} for column {column} out of range 1..={size}")]
    RowOutOfRange {
        /// Zero-based column of the offending entry.
        column: usize,
        /// The 1-based row value as supplied.
        row: usize,
        /// Board size.
        size: usize,
    },
}

/// The caller's starting guess for each column's row.
///
/// Each solver tries a column's preferred row first; the linear-probe
/// solver then cycles downward from it and the backtracking solver
/// front-loads it into the column's domain. The vector is immutable for
/// the lifetime of a solve, and stays readable so a frontend can render
/// undecided columns as ghost placements.
///
/// Input is 1-based (the coordinates a user types); storage and every
/// other API are zero-based.
///
/// # Examples
///
/// ```
/// use queenstep_core::PreferredRows;
///
/// let preferred = PreferredRows::from_one_based(4, &[2, 4, 1, 3])?;
/// assert_eq!(preferred.row(0), 1);
/// assert_eq!(preferred.rows(), &[1, 3, 0, 2]);
///
/// assert!(PreferredRows::from_one_based(4, &[1, 2, 3]).is_err());
/// assert!(PreferredRows::from_one_based(4, &[1, 2, 3, 5]).is_err());
/// # Ok::<(), queenstep_core::PreferredRowsError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreferredRows {
    size: usize,
    rows: RowList,
}

impl PreferredRows {
    /// Creates the default preference of row 0 for every column.
    ///
    /// This is the state a freshly constructed or reset solver starts
    /// from, before any user input arrives.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn all_zero(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            rows: std::iter::repeat_n(0, size).collect(),
        }
    }

    /// Validates 1-based user input and converts it to zero-based rows.
    ///
    /// # Errors
    ///
    /// Returns [`PreferredRowsError::WrongLength`] unless `rows` has
    /// exactly `size` entries, or [`PreferredRowsError::RowOutOfRange`]
    /// if any entry falls outside `1..=size`. Out-of-range input is
    /// rejected rather than clamped: domain construction downstream
    /// assumes every preferred row is a real board row.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    pub fn from_one_based(size: usize, rows: &[usize]) -> Result<Self, PreferredRowsError> {
        assert!(size > 0, "board size must be positive");
        if rows.len() != size {
            return Err(PreferredRowsError::WrongLength {
                expected: size,
                actual: rows.len(),
            });
        }
        for (column, &row) in rows.iter().enumerate() {
            if row == 0 || row > size {
                return Err(PreferredRowsError::RowOutOfRange { column, row, size });
            }
        }
        Ok(Self {
            size,
            rows: rows.iter().map(|&row| row - 1).collect(),
        })
    }

    /// Returns the board size.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the zero-based preferred row for `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= size`.
    #[must_use]
    pub fn row(&self, col: usize) -> usize {
        self.rows[col]
    }

    /// Returns all zero-based preferred rows in column order.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }
}
