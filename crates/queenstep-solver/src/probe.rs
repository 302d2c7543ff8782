use std::time::Instant;

use queenstep_core::{DEFAULT_BOARD_SIZE, Placement, PreferredRows};

use crate::{BoxedStepSolver, SolverError, StepEvent, StepSolver};

/// The linear-probe solver: per-column row cycling with wraparound.
///
/// For each column in turn, the solver tries rows starting at the
/// caller's preferred row and wrapping around the board, committing the
/// first row that does not conflict with already-fixed queens. One row
/// is examined per [`step`](StepSolver::step).
///
/// This solver never backtracks. When every row of a column conflicts,
/// the run is declared invalid even though reordering earlier columns
/// might have found a solution. The incompleteness is deliberate: the
/// strategy exists as a greedy foil to [`CspSolver`](crate::CspSolver),
/// and the two diverging on the same input is expected behavior.
///
/// # Examples
///
/// ```
/// use queenstep_solver::{ProbeSolver, StepSolver};
///
/// let mut solver = ProbeSolver::new(4);
/// solver.set_initial(&[2, 4, 2, 3])?;
///
/// let event = solver.step();
/// assert!(event.is_fixed());
/// assert_eq!(solver.placement().rows(), &[1]);
/// # Ok::<(), queenstep_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProbeSolver {
    size: usize,
    preferred: PreferredRows,
    fixed: Placement,
    cursor: usize,
    valid: bool,
    finished: bool,
    trial_step: usize,
    nodes: u64,
    started_at: Option<Instant>,
}

impl ProbeSolver {
    /// Creates a solver for a `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            preferred: PreferredRows::all_zero(size),
            fixed: Placement::new(size),
            cursor: 0,
            valid: true,
            finished: false,
            trial_step: 0,
            nodes: 0,
            started_at: None,
        }
    }

    /// Row to examine next at the current column: the preferred row
    /// offset by the number of rejections so far, wrapping around.
    fn current_trial_row(&self) -> usize {
        (self.preferred.row(self.cursor) + self.trial_step) % self.size
    }
}

impl Default for ProbeSolver {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl StepSolver for ProbeSolver {
    fn name(&self) -> &'static str {
        "linear probe"
    }

    fn clone_box(&self) -> BoxedStepSolver {
        Box::new(self.clone())
    }

    fn size(&self) -> usize {
        self.size
    }

    fn reset(&mut self) {
        *self = Self::new(self.size);
    }

    fn set_initial(&mut self, rows: &[usize]) -> Result<(), SolverError> {
        self.reset();
        self.preferred = PreferredRows::from_one_based(self.size, rows)?;
        Ok(())
    }

    fn step(&mut self) -> StepEvent {
        self.started_at.get_or_insert_with(Instant::now);
        self.nodes += 1;

        // Terminal echo; the driver normally stops after solution/invalid.
        if !self.valid || self.finished {
            return StepEvent::Done {
                placement: self.fixed.clone(),
            };
        }

        if self.cursor >= self.size {
            self.finished = true;
            return StepEvent::Solution {
                placement: self.fixed.clone(),
            };
        }

        if self.trial_step < self.size {
            let row = self.current_trial_row();
            if self.fixed.conflicts(self.cursor, row) {
                self.trial_step += 1;
                StepEvent::Searching {
                    col: self.cursor,
                    row,
                }
            } else {
                self.fixed.push(row);
                self.trial_step = 0;
                self.cursor += 1;
                StepEvent::Fixed {
                    col: self.cursor - 1,
                    row,
                    placement: self.fixed.clone(),
                }
            }
        } else {
            // Every row of this column conflicts; no backtracking here.
            self.valid = false;
            StepEvent::Invalid { col: self.cursor }
        }
    }

    fn placement(&self) -> &Placement {
        &self.fixed
    }

    fn cursor(&self) -> usize {
        self.cursor
    }

    fn is_valid(&self) -> bool {
        self.valid
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn nodes(&self) -> u64 {
        self.nodes
    }

    fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    fn preferred(&self) -> &PreferredRows {
        &self.preferred
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_terminal(solver: &mut ProbeSolver, budget: usize) -> StepEvent {
        for _ in 0..budget {
            let event = solver.step();
            if event.is_terminal() {
                return event;
            }
        }
        panic!("no terminal event within {budget} steps");
    }

    #[test]
    fn test_first_step_commits_preferred_row() {
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[1, 1, 1, 1]).unwrap();

        let event = solver.step();
        assert_eq!(
            event,
            StepEvent::Fixed {
                col: 0,
                row: 0,
                placement: solver.placement().clone()
            }
        );
        assert_eq!(solver.placement().rows(), &[0]);
        assert_eq!(solver.cursor(), 1);
    }

    #[test]
    fn test_all_ones_4x4_declared_invalid() {
        // Greedy probing paints itself into a corner at column 2 and
        // cannot recover: column 0 takes row 0, column 1 settles on
        // row 2, and every row of column 2 then conflicts.
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[1, 1, 1, 1]).unwrap();

        let event = run_to_terminal(&mut solver, 30);
        assert_eq!(event, StepEvent::Invalid { col: 2 });
        assert!(!solver.is_valid());
        assert!(!solver.is_finished());
        assert_eq!(solver.placement().rows(), &[0, 2]);
    }

    #[test]
    fn test_near_solution_preference_succeeds() {
        // [2, 4, 2, 3] differs from the solution [2, 4, 1, 3] only at
        // column 2; the probe scans past three rejects and lands it.
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[2, 4, 2, 3]).unwrap();

        let mut searching = 0;
        let event = loop {
            let event = solver.step();
            if event.is_searching() {
                searching += 1;
            }
            if event.is_terminal() {
                break event;
            }
        };
        let StepEvent::Solution { placement } = event else {
            panic!("expected solution, got {event:?}");
        };
        assert_eq!(placement.rows(), &[1, 3, 0, 2]);
        assert!(placement.is_consistent());
        assert_eq!(searching, 3);
        assert_eq!(solver.nodes(), 8);
    }

    #[test]
    fn test_default_preference_5x5_staircase() {
        let mut solver = ProbeSolver::new(5);
        solver.set_initial(&[1, 1, 1, 1, 1]).unwrap();

        let event = run_to_terminal(&mut solver, 40);
        let StepEvent::Solution { placement } = event else {
            panic!("expected solution, got {event:?}");
        };
        assert_eq!(placement.rows(), &[0, 2, 4, 1, 3]);
    }

    #[test]
    fn test_wraparound_probes_row_zero_after_last_row() {
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[4, 4, 4, 4]).unwrap();

        // Column 0 takes row 3; column 1 rejects row 3, wraps to row 0.
        assert!(solver.step().is_fixed());
        assert_eq!(
            solver.step(),
            StepEvent::Searching { col: 1, row: 3 }
        );
        assert_eq!(
            solver.step(),
            StepEvent::Fixed {
                col: 1,
                row: 0,
                placement: solver.placement().clone()
            }
        );
    }

    #[test]
    fn test_solution_terminal_is_idempotent() {
        let mut solver = ProbeSolver::new(1);
        solver.set_initial(&[1]).unwrap();

        assert!(solver.step().is_fixed());
        let solution = solver.step();
        assert!(solution.is_solution());
        assert!(solver.is_finished());

        let nodes = solver.nodes();
        for _ in 0..3 {
            let event = solver.step();
            let StepEvent::Done { placement } = event else {
                panic!("expected done, got {event:?}");
            };
            assert_eq!(placement.rows(), &[0]);
        }
        assert_eq!(solver.placement().rows(), &[0]);
        assert_eq!(solver.cursor(), 1);
        // Only the node counter keeps moving in the terminal state.
        assert_eq!(solver.nodes(), nodes + 3);
    }

    #[test]
    fn test_invalid_terminal_is_idempotent() {
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[1, 1, 1, 1]).unwrap();
        let _ = run_to_terminal(&mut solver, 30);

        let placement = solver.placement().clone();
        let cursor = solver.cursor();
        for _ in 0..3 {
            assert!(solver.step().is_done());
        }
        assert_eq!(solver.placement(), &placement);
        assert_eq!(solver.cursor(), cursor);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut solver = ProbeSolver::new(4);
        solver.set_initial(&[2, 4, 2, 3]).unwrap();
        let _ = solver.step();
        let _ = solver.step();

        solver.reset();
        assert_eq!(solver.size(), 4);
        assert!(solver.placement().is_empty());
        assert_eq!(solver.cursor(), 0);
        assert!(solver.is_valid());
        assert!(!solver.is_finished());
        assert_eq!(solver.nodes(), 0);
        assert!(solver.started_at().is_none());
        assert_eq!(solver.preferred(), &PreferredRows::all_zero(4));
    }

    #[test]
    fn test_set_initial_rejects_bad_input() {
        let mut solver = ProbeSolver::new(4);
        assert!(solver.set_initial(&[1, 2, 3]).is_err());
        assert!(solver.set_initial(&[1, 2, 3, 5]).is_err());
        assert!(solver.set_initial(&[0, 1, 1, 1]).is_err());

        // Failed seeding leaves the solver freshly reset.
        assert_eq!(solver.preferred(), &PreferredRows::all_zero(4));
        assert!(solver.placement().is_empty());
    }

    #[test]
    fn test_started_at_set_on_first_step() {
        let mut solver = ProbeSolver::default();
        assert!(solver.started_at().is_none());
        let _ = solver.step();
        let started = solver.started_at();
        assert!(started.is_some());
        let _ = solver.step();
        assert_eq!(solver.started_at(), started);
    }

    #[test]
    fn test_determinism_across_reseeding() {
        let mut solver = ProbeSolver::new(4);

        solver.set_initial(&[2, 4, 2, 3]).unwrap();
        let first: Vec<_> = (0..10).map(|_| solver.step()).collect();

        solver.reset();
        solver.set_initial(&[2, 4, 2, 3]).unwrap();
        let second: Vec<_> = (0..10).map(|_| solver.step()).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_every_fixed_placement_is_consistent() {
        let mut solver = ProbeSolver::new(6);
        solver.set_initial(&[3, 1, 4, 1, 5, 2]).unwrap();
        for _ in 0..200 {
            let event = solver.step();
            if let Some(placement) = event.placement() {
                assert!(placement.is_consistent(), "inconsistent after {event:?}");
            }
            if event.is_terminal() {
                break;
            }
        }
    }
}
