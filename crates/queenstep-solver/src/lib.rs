//! Stepwise N-Queens solvers.
//!
//! This crate provides two interchangeable solving strategies, each
//! advancing exactly one bounded unit of work per [`StepSolver::step`]
//! call so a frontend can render every intermediate state:
//!
//! - [`ProbeSolver`] — for each column in turn, tries rows starting at
//!   the caller's preferred row and wrapping around the board, accepting
//!   the first non-conflicting row. It never backtracks: when every row
//!   of a column conflicts, the run is declared invalid. Intentionally
//!   greedy and incomplete.
//! - [`CspSolver`] — maintains per-column candidate domains with the
//!   preferred row front-loaded, forward-checks every tentative commit
//!   against all later columns, and backtracks through a checkpoint
//!   trail when a column's domain runs dry. Complete: it always ends in
//!   a solution or a proven dead end.
//!
//! Both implement the [`StepSolver`] trait, so a driver can hold either
//! behind a [`BoxedStepSolver`] and treat the returned [`StepEvent`]s
//! uniformly.
//!
//! # Examples
//!
//! ```
//! use queenstep_solver::{CspSolver, StepEvent, StepSolver};
//!
//! let mut solver = CspSolver::new(4);
//! solver.set_initial(&[1, 1, 1, 1])?;
//!
//! loop {
//!     match solver.step() {
//!         StepEvent::Solution { placement } => {
//!             assert!(placement.is_consistent());
//!             break;
//!         }
//!         StepEvent::Invalid { .. } => unreachable!("4-queens has solutions"),
//!         _ => {}
//!     }
//! }
//! # Ok::<(), queenstep_solver::SolverError>(())
//! ```

mod csp;
mod event;
mod probe;
pub mod testing;
mod traits;

pub use queenstep_core::{DEFAULT_BOARD_SIZE, Placement, PreferredRows, PreferredRowsError};

pub use self::{
    csp::CspSolver,
    event::StepEvent,
    probe::ProbeSolver,
    traits::{BoxedStepSolver, StepSolver},
};

/// Errors returned by the solver API.
///
/// Unsatisfiability is not an error: a dead end is reported through
/// [`StepEvent::Invalid`]. The only fallible boundary is input
/// validation in [`StepSolver::set_initial`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The preferred-row vector failed validation.
    #[display("invalid preferred rows: {_0}")]
    InvalidPreferredRows(#[from] PreferredRowsError),
}
