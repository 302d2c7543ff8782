use std::{fmt::Debug, time::Instant};

use queenstep_core::{Placement, PreferredRows};

use crate::{SolverError, StepEvent};

/// The step-by-step contract both solving strategies expose.
///
/// A driver owns exactly one solver at a time, seeds it with
/// [`set_initial`](Self::set_initial), and calls [`step`](Self::step) in
/// a loop, rendering each returned [`StepEvent`] before requesting the
/// next. Every call performs one bounded, synchronous unit of work;
/// there is nothing to cancel beyond not calling `step` again.
///
/// The read-only accessors expose the state a frontend renders between
/// steps: the committed placement, the column under decision, the
/// terminal flags, and the advisory node/timing instrumentation.
pub trait StepSolver: Debug + Send + Sync {
    /// Returns a short human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the solver with its full search state.
    fn clone_box(&self) -> BoxedStepSolver;

    /// Returns the board size `n`.
    fn size(&self) -> usize;

    /// Clears all search state back to construction-time defaults.
    ///
    /// The board size is kept; preferred rows revert to the all-zero
    /// default.
    fn reset(&mut self);

    /// Resets, then seeds the preferred row for each column.
    ///
    /// `rows` is 1-based with one entry per column, the coordinates a
    /// user supplies. The backtracking solver additionally rebuilds its
    /// per-column domains with each preferred row front-loaded.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::InvalidPreferredRows`] if `rows` has the
    /// wrong length or contains an out-of-range entry. The solver is
    /// left in its freshly reset state in that case.
    fn set_initial(&mut self, rows: &[usize]) -> Result<(), SolverError>;

    /// Advances the search by one unit of work.
    ///
    /// Safe to call after a terminal event: terminal states are
    /// idempotent and report the same outcome without mutating search
    /// state (only the node counter keeps ticking).
    fn step(&mut self) -> StepEvent;

    /// Returns the committed placement prefix.
    fn placement(&self) -> &Placement;

    /// Returns the column currently being decided (`n` once all columns
    /// are decided).
    fn cursor(&self) -> usize;

    /// Returns `false` once the search is proven unsatisfiable.
    fn is_valid(&self) -> bool;

    /// Returns `true` once a full consistent placement exists.
    fn is_finished(&self) -> bool;

    /// Returns the number of `step` calls since the last reset.
    fn nodes(&self) -> u64;

    /// Returns the instant of the first `step` call since the last
    /// reset, for elapsed-time display.
    fn started_at(&self) -> Option<Instant>;

    /// Returns the preferred-row vector, so undecided columns can be
    /// rendered as ghost placements.
    fn preferred(&self) -> &PreferredRows;
}

/// A boxed stepwise solver.
pub type BoxedStepSolver = Box<dyn StepSolver>;

impl Clone for BoxedStepSolver {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

#[cfg(test)]
mod tests {
    use crate::{CspSolver, ProbeSolver};

    use super::*;

    #[test]
    fn test_boxed_solvers_are_interchangeable() {
        let solvers: Vec<BoxedStepSolver> =
            vec![Box::new(ProbeSolver::new(4)), Box::new(CspSolver::new(4))];
        for mut solver in solvers {
            solver.set_initial(&[1, 1, 1, 1]).unwrap();
            let event = solver.step();
            assert!(event.is_fixed());
            assert_eq!(solver.placement().rows(), &[0]);
            assert_eq!(solver.cursor(), 1);
        }
    }

    #[test]
    fn test_boxed_clone_preserves_state() {
        let mut solver: BoxedStepSolver = Box::new(CspSolver::new(4));
        solver.set_initial(&[2, 1, 1, 1]).unwrap();
        let _ = solver.step();

        let clone = solver.clone();
        assert_eq!(clone.placement().rows(), solver.placement().rows());
        assert_eq!(clone.cursor(), solver.cursor());
        assert_eq!(clone.nodes(), solver.nodes());
    }
}
