use std::time::Instant;

use queenstep_core::{DEFAULT_BOARD_SIZE, Placement, PreferredRows, RowList, attacks};

use crate::{BoxedStepSolver, SolverError, StepEvent, StepSolver};

/// One undo record, pushed whenever a column is committed.
///
/// `domains` is the snapshot taken after the committed row was popped
/// from its own column but before forward checking pruned the later
/// columns. Restoring it on backtrack therefore resumes the column with
/// exactly the candidates that remained after the failed row, so no row
/// is ever retried for the same column on the same path.
#[derive(Debug, Clone)]
struct Checkpoint {
    col: usize,
    domains: Vec<RowList>,
    row: usize,
}

/// The backtracking solver with forward checking.
///
/// Each column keeps a domain of candidate rows, seeded as `0..n` with
/// the caller's preferred row moved to the front. A step pops the front
/// candidate and forward-checks it: every later column's domain is
/// pruned of rows the candidate attacks, and if any later domain would
/// become empty the candidate is rejected on the spot. Accepted
/// candidates push a [`Checkpoint`] so a later dead end can restore the
/// exact pre-commit domain state.
///
/// Unlike [`ProbeSolver`](crate::ProbeSolver), this search is complete:
/// it always terminates in [`StepEvent::Solution`] or, with the trail
/// exhausted, [`StepEvent::Invalid`].
///
/// # Examples
///
/// ```
/// use queenstep_solver::{CspSolver, StepEvent, StepSolver};
///
/// let mut solver = CspSolver::new(4);
/// solver.set_initial(&[1, 1, 1, 1])?;
///
/// let placement = loop {
///     if let StepEvent::Solution { placement } = solver.step() {
///         break placement;
///     }
/// };
/// assert_eq!(placement.rows(), &[1, 3, 0, 2]);
/// # Ok::<(), queenstep_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CspSolver {
    size: usize,
    preferred: PreferredRows,
    fixed: Placement,
    cursor: usize,
    valid: bool,
    finished: bool,
    domains: Vec<RowList>,
    trail: Vec<Checkpoint>,
    nodes: u64,
    started_at: Option<Instant>,
}

impl CspSolver {
    /// Creates a solver for a `size`×`size` board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    #[must_use]
    pub fn new(size: usize) -> Self {
        let preferred = PreferredRows::all_zero(size);
        let domains = build_domains(&preferred);
        Self {
            size,
            preferred,
            fixed: Placement::new(size),
            cursor: 0,
            valid: true,
            finished: false,
            domains,
            trail: Vec::new(),
            nodes: 0,
            started_at: None,
        }
    }

    /// Prunes every later column's domain against a queen at
    /// `(col, row)`.
    ///
    /// Returns `None` as soon as some later domain would become empty;
    /// otherwise returns the pruned copy. The input domains are never
    /// mutated, which is what keeps trail restoration exact.
    fn forward_check(&self, col: usize, row: usize, domains: &[RowList]) -> Option<Vec<RowList>> {
        let mut pruned = domains.to_vec();
        for c in (col + 1)..self.size {
            pruned[c].retain(|&r| !attacks(col, row, c, r));
            if pruned[c].is_empty() {
                return None;
            }
        }
        Some(pruned)
    }
}

/// Builds each column's candidate list: `0..n` with the preferred row
/// moved to the front, the rest in ascending order.
fn build_domains(preferred: &PreferredRows) -> Vec<RowList> {
    let size = preferred.size();
    (0..size)
        .map(|col| {
            let front = preferred.row(col);
            std::iter::once(front)
                .chain((0..size).filter(|&row| row != front))
                .collect()
        })
        .collect()
}

impl Default for CspSolver {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

impl StepSolver for CspSolver {
    fn name(&self) -> &'static str {
        "backtracking with forward check"
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
        self.domains = build_domains(&self.preferred);
        Ok(())
    }

    fn step(&mut self) -> StepEvent {
        self.started_at.get_or_insert_with(Instant::now);
        self.nodes += 1;

        if self.finished || self.cursor >= self.size {
            self.finished = true;
            return StepEvent::Solution {
                placement: self.fixed.clone(),
            };
        }

        if self.domains[self.cursor].is_empty() {
            let Some(checkpoint) = self.trail.pop() else {
                // Exhausted with nothing left to undo.
                self.valid = false;
                return StepEvent::Invalid { col: self.cursor };
            };
            self.cursor = checkpoint.col;
            self.fixed.pop();
            self.domains = checkpoint.domains;
            return StepEvent::Backtracking {
                col: checkpoint.col,
                row: checkpoint.row,
            };
        }

        let row = self.domains[self.cursor].remove(0);
        match self.forward_check(self.cursor, row, &self.domains) {
            Some(pruned) => {
                self.trail.push(Checkpoint {
                    col: self.cursor,
                    domains: self.domains.clone(),
                    row,
                });
                self.fixed.push(row);
                self.domains = pruned;
                self.cursor += 1;
                StepEvent::Fixed {
                    col: self.cursor - 1,
                    row,
                    placement: self.fixed.clone(),
                }
            }
            // Candidate already popped; the next step tries the next one.
            None => StepEvent::Searching {
                col: self.cursor,
                row,
            },
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
