use std::fmt;

use crate::{RowList, attacks};

/// The committed prefix of a queen placement, one row per decided column.
///
/// Index `0` holds column 0's row, index `1` column 1's row, and so on.
/// The vector grows by one when a solver commits a column and shrinks by
/// one when backtracking removes the most recently committed column, so
/// its length always equals the solver's search cursor.
///
/// A `Placement` does not enforce consistency on [`push`](Self::push);
/// solvers check [`conflicts`](Self::conflicts) before committing, and
/// tests can audit a snapshot with [`is_consistent`](Self::is_consistent).
///
/// # Examples
///
/// ```
/// use queenstep_core::Placement;
///
/// let mut placement = Placement::new(4);
/// placement.push(1);
/// placement.push(3);
/// placement.push(0);
/// placement.push(2);
/// assert!(placement.is_full());
/// assert!(placement.is_consistent());
/// assert_eq!(placement.rows(), &[1, 3, 0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    size: usize,
    rows: RowList,
}

impl Placement {
    /// Creates an empty placement for an `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "board size must be positive");
        Self {
            size,
            rows: RowList::new(),
        }
    }

    /// Returns the board size this placement was created for.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of committed columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if no column has been committed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns `true` if every column has been committed.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.rows.len() == self.size
    }

    /// Returns the committed rows in column order.
    #[must_use]
    pub fn rows(&self) -> &[usize] {
        &self.rows
    }

    /// Commits `row` for the next undecided column.
    ///
    /// # Panics
    ///
    /// Panics if the placement is already full or `row` is out of range.
    pub fn push(&mut self, row: usize) {
        assert!(!self.is_full(), "placement is already full");
        assert!(row < self.size, "row {row} out of range for size {}", self.size);
        self.rows.push(row);
    }

    /// Removes and returns the most recently committed row, if any.
    pub fn pop(&mut self) -> Option<usize> {
        self.rows.pop()
    }

    /// Removes all committed rows, keeping the board size.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Returns `true` if a queen at `(col, row)` would be attacked by any
    /// committed queen.
    ///
    /// Committed columns are strictly to the left of `col`, so only row
    /// and diagonal constraints are tested.
    ///
    /// # Examples
    ///
    /// ```
    /// use queenstep_core::Placement;
    ///
    /// let mut placement = Placement::new(8);
    /// placement.push(0);
    /// assert!(placement.conflicts(3, 0)); // shares row 0
    /// assert!(placement.conflicts(3, 3)); // shares the main diagonal
    /// assert!(!placement.conflicts(3, 5));
    /// ```
    #[must_use]
    pub fn conflicts(&self, col: usize, row: usize) -> bool {
        self.rows
            .iter()
            .enumerate()
            .any(|(c, &r)| attacks(c, r, col, row))
    }

    /// Returns `true` if no two committed queens attack each other.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.rows.iter().enumerate().all(|(c, &r)| {
            self.rows[..c]
                .iter()
                .enumerate()
                .all(|(c2, &r2)| !attacks(c2, r2, c, r))
        })
    }
}

impl fmt::Display for Placement {
    /// Formats the committed rows as 1-based numbers separated by spaces,
    /// the same coordinates the caller supplied.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for &row in &self.rows {
            if !first {
                write!(f, " ")?;
            }
            write!(f, "{}", row + 1)?;
            first = false;
        }
        Ok(())
    }
}
