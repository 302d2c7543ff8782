//! Test utilities for stepwise solvers.
//!
//! This module provides [`SolverTester`], a harness for driving a
//! [`StepSolver`] through its event sequence and asserting on each step
//! with fluent chaining.
//!
//! # Example
//!
//! ```
//! use queenstep_solver::{CspSolver, testing::SolverTester};
//!
//! SolverTester::new(CspSolver::new(4))
//!     .set_initial(&[2, 4, 1, 3])
//!     .step_fixed(0, 1)
//!     .step_fixed(1, 3)
//!     .step_fixed(2, 0)
//!     .step_fixed(3, 2)
//!     .step_solution(&[1, 3, 0, 2]);
//! ```

use crate::{StepEvent, StepSolver};

/// A test harness for verifying stepwise solver behavior.
///
/// `SolverTester` owns a solver, records the events it produces, and
/// asserts on them as the search advances. Every exposed placement
/// snapshot is audited for row/diagonal consistency as a side effect of
/// stepping, so a test that only checks the event kinds still verifies
/// the core invariant.
///
/// # Method Chaining
///
/// All methods consume and return `self`, enabling fluent chaining.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct SolverTester<S> {
    solver: S,
    events: Vec<StepEvent>,
}

impl<S: StepSolver> SolverTester<S> {
    /// Creates a new tester around a freshly constructed solver.
    #[must_use]
    pub fn new(solver: S) -> Self {
        Self {
            solver,
            events: Vec::new(),
        }
    }

    /// Seeds the solver with 1-based preferred rows.
    ///
    /// # Panics
    ///
    /// Panics if the input fails validation.
    #[track_caller]
    #[must_use]
    pub fn set_initial(mut self, rows: &[usize]) -> Self {
        self.solver
            .set_initial(rows)
            .unwrap_or_else(|err| panic!("set_initial({rows:?}) rejected: {err}"));
        self.events.clear();
        self
    }

    /// Advances one step without asserting on the event kind.
    #[must_use]
    pub fn step(mut self) -> Self {
        let _ = self.advance();
        self
    }

    /// Advances one step and asserts a [`StepEvent::Fixed`] for
    /// `(col, row)` (zero-based).
    #[track_caller]
    #[must_use]
    pub fn step_fixed(mut self, col: usize, row: usize) -> Self {
        let event = self.advance();
        match event {
            StepEvent::Fixed {
                col: c, row: r, ..
            } if (c, r) == (col, row) => self,
            other => panic!("expected fixed at col {col} row {row}, got {other:?}"),
        }
    }

    /// Advances one step and asserts a [`StepEvent::Searching`] for
    /// `(col, row)`.
    #[track_caller]
    #[must_use]
    pub fn step_searching(mut self, col: usize, row: usize) -> Self {
        let event = self.advance();
        match event {
            StepEvent::Searching { col: c, row: r } if (c, r) == (col, row) => self,
            other => panic!("expected searching at col {col} row {row}, got {other:?}"),
        }
    }

    /// Advances one step and asserts a [`StepEvent::Backtracking`] for
    /// `(col, row)`.
    #[track_caller]
    #[must_use]
    pub fn step_backtracking(mut self, col: usize, row: usize) -> Self {
        let event = self.advance();
        match event {
            StepEvent::Backtracking { col: c, row: r } if (c, r) == (col, row) => self,
            other => panic!("expected backtracking to col {col} row {row}, got {other:?}"),
        }
    }

    /// Advances one step and asserts a [`StepEvent::Solution`] with the
    /// given zero-based rows.
    #[track_caller]
    pub fn step_solution(mut self, rows: &[usize]) -> Self {
        let event = self.advance();
        match event {
            StepEvent::Solution { ref placement } if placement.rows() == rows => self,
            other => panic!("expected solution {rows:?}, got {other:?}"),
        }
    }

    /// Advances one step and asserts a [`StepEvent::Invalid`] at `col`.
    #[track_caller]
    pub fn step_invalid(mut self, col: usize) -> Self {
        let event = self.advance();
        match event {
            StepEvent::Invalid { col: c } if c == col => self,
            other => panic!("expected invalid at col {col}, got {other:?}"),
        }
    }

    /// Steps until a terminal event, panicking if `budget` runs out.
    #[track_caller]
    #[must_use]
    pub fn run_to_terminal(mut self, budget: usize) -> Self {
        for _ in 0..budget {
            if self.advance().is_terminal() {
                return self;
            }
        }
        panic!(
            "{} produced no terminal event within {budget} steps",
            self.solver.name()
        );
    }

    /// Asserts the last event was a solution with a full, consistent
    /// placement.
    #[track_caller]
    pub fn assert_solved(self) -> Self {
        match self.events.last() {
            Some(StepEvent::Solution { placement }) => {
                assert!(placement.is_full(), "solution placement not full");
                assert!(placement.is_consistent(), "solution placement conflicts");
            }
            other => panic!("expected solution, got {other:?}"),
        }
        self
    }

    /// Asserts the last event declared the search invalid.
    #[track_caller]
    pub fn assert_invalid(self) -> Self {
        assert!(
            matches!(self.events.last(), Some(StepEvent::Invalid { .. })),
            "expected invalid, got {:?}",
            self.events.last()
        );
        self
    }

    /// Asserts the total number of steps taken since seeding.
    #[track_caller]
    pub fn assert_steps(self, expected: usize) -> Self {
        assert_eq!(
            self.events.len(),
            expected,
            "step count mismatch, events: {:?}",
            self.events
        );
        self
    }

    /// Returns the recorded events, consuming the tester.
    #[must_use]
    pub fn into_events(self) -> Vec<StepEvent> {
        self.events
    }

    /// Returns the solver, consuming the tester.
    #[must_use]
    pub fn into_solver(self) -> S {
        self.solver
    }

    #[track_caller]
    fn advance(&mut self) -> StepEvent {
        let event = self.solver.step();
        if let Some(placement) = event.placement() {
            assert!(
                placement.is_consistent(),
                "inconsistent placement exposed by {event:?}"
            );
        }
        assert_eq!(
            self.solver.placement().len(),
            self.solver.cursor(),
            "placement length diverged from cursor after {event:?}"
        );
        self.events.push(event.clone());
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CspSolver, ProbeSolver};

    #[test]
    fn test_probe_first_commit() {
        SolverTester::new(ProbeSolver::new(4))
            .set_initial(&[1, 1, 1, 1])
            .step_fixed(0, 0);
    }

    #[test]
    fn test_divergence_on_identical_input() {
        // The complete backtracking search solves the all-ones 4×4
        // instance; the greedy probe gives up. Same seed, opposite
        // outcomes, both correct for their strategy.
        SolverTester::new(CspSolver::new(4))
            .set_initial(&[1, 1, 1, 1])
            .run_to_terminal(30)
            .assert_solved();

        SolverTester::new(ProbeSolver::new(4))
            .set_initial(&[1, 1, 1, 1])
            .run_to_terminal(30)
            .assert_invalid();
    }

    #[test]
    fn test_csp_full_scripted_run() {
        SolverTester::new(CspSolver::new(4))
            .set_initial(&[1, 1, 1, 1])
            .step_fixed(0, 0)
            .step_searching(1, 2)
            .step_fixed(1, 3)
            .step_searching(2, 1)
            .step_backtracking(1, 3)
            .step_backtracking(0, 0)
            .step_fixed(0, 1)
            .step_fixed(1, 3)
            .step_fixed(2, 0)
            .step_fixed(3, 2)
            .step_solution(&[1, 3, 0, 2])
            .assert_steps(11);
    }

    #[test]
    fn test_probe_scripted_rejections() {
        SolverTester::new(ProbeSolver::new(4))
            .set_initial(&[1, 1, 1, 1])
            .step_fixed(0, 0)
            .step_searching(1, 0)
            .step_searching(1, 1)
            .step_fixed(1, 2)
            .step_searching(2, 0)
            .step_searching(2, 1)
            .step_searching(2, 2)
            .step_searching(2, 3)
            .step_invalid(2);
    }

    #[test]
    #[should_panic(expected = "expected fixed")]
    fn test_mismatched_expectation_panics() {
        let _ = SolverTester::new(CspSolver::new(2))
            .set_initial(&[1, 1])
            .step_fixed(0, 0);
    }
}
