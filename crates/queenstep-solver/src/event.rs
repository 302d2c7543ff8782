use std::fmt;

use queenstep_core::Placement;

/// One rendered unit of solver progress.
///
/// Every [`StepSolver::step`](crate::StepSolver::step) call returns
/// exactly one event. Variants carry only the fields their kind needs;
/// placement-carrying variants hold a snapshot taken at the moment the
/// event was produced, so a frontend can render it while the solver
/// moves on.
///
/// [`Solution`](Self::Solution), [`Invalid`](Self::Invalid), and
/// [`Done`](Self::Done) are terminal: repeated stepping after one of
/// them keeps returning the same terminal information without mutating
/// search state. `Done` is produced only by the probe solver, which
/// reports its terminal state through it once `Solution` or `Invalid`
/// has already been delivered.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum StepEvent {
    /// A queen was committed for `col`.
    Fixed {
        /// Column that was just decided.
        col: usize,
        /// Row the queen was committed to.
        row: usize,
        /// Snapshot of the placement including the new queen.
        placement: Placement,
    },
    /// A candidate row was tried and rejected; the search continues in
    /// the same column.
    Searching {
        /// Column being probed.
        col: usize,
        /// The rejected candidate row.
        row: usize,
    },
    /// The most recent commit was undone (backtracking solver only).
    Backtracking {
        /// Column the search returned to.
        col: usize,
        /// Row of the queen that was removed.
        row: usize,
    },
    /// The search is exhausted with no solution.
    Invalid {
        /// Column at which the dead end was established.
        col: usize,
    },
    /// A full consistent placement was found.
    Solution {
        /// The complete placement.
        placement: Placement,
    },
    /// Terminal echo after `Solution` or `Invalid` (probe solver only).
    Done {
        /// Snapshot of the placement as the search left it.
        placement: Placement,
    },
}

impl StepEvent {
    /// Returns the placement snapshot, for variants that carry one.
    #[must_use]
    pub fn placement(&self) -> Option<&Placement> {
        match self {
            Self::Fixed { placement, .. }
            | Self::Solution { placement }
            | Self::Done { placement } => Some(placement),
            Self::Searching { .. } | Self::Backtracking { .. } | Self::Invalid { .. } => None,
        }
    }

    /// Returns `true` for events after which the driver should stop
    /// stepping.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Invalid { .. } | Self::Solution { .. } | Self::Done { .. }
        )
    }
}

impl fmt::Display for StepEvent {
    /// Formats the event as a short log line with 1-based coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed { col, row, .. } => {
                write!(f, "fixed column {} at row {}", col + 1, row + 1)
            }
            Self::Searching { col, row } => {
                write!(f, "searching column {}, rejected row {}", col + 1, row + 1)
            }
            Self::Backtracking { col, row } => {
                write!(f, "backtracking to column {}, undoing row {}", col + 1, row + 1)
            }
            Self::Invalid { col } => write!(f, "no solution, stuck at column {}", col + 1),
            Self::Solution { placement } => write!(f, "solution: {placement}"),
            Self::Done { placement } => write!(f, "done: {placement}"),
        }
    }
}
