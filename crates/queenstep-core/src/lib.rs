//! Core board vocabulary for the Queenstep solvers.
//!
//! This crate defines the types both stepwise solvers share: a validated
//! [`PreferredRows`] vector built from the caller's 1-based input, the
//! committed [`Placement`] prefix with its conflict checks, and the
//! [`attacks`] geometry predicate they are built on.
//!
//! Rows and columns are zero-based everywhere except the
//! [`PreferredRows::from_one_based`] boundary, which is the single place
//! user-facing 1-based coordinates enter the system.
//!
//! # Examples
//!
//! ```
//! use queenstep_core::{Placement, PreferredRows};
//!
//! let preferred = PreferredRows::from_one_based(4, &[1, 3, 2, 4])?;
//! assert_eq!(preferred.rows(), &[0, 2, 1, 3]);
//!
//! let mut placement = Placement::new(4);
//! placement.push(0);
//! assert!(placement.conflicts(1, 0)); // same row
//! assert!(placement.conflicts(1, 1)); // diagonal
//! assert!(!placement.conflicts(1, 2));
//! # Ok::<(), queenstep_core::PreferredRowsError>(())
//! ```

mod attack;
mod placement;
mod preferred;

pub use self::{
    attack::attacks,
    placement::Placement,
    preferred::{PreferredRows, PreferredRowsError},
};

/// Default board size used when a solver is constructed without an
/// explicit size.
pub const DEFAULT_BOARD_SIZE: usize = 8;

/// Inline-capacity row vector sized for the default 8×8 board.
///
/// Boards up to [`DEFAULT_BOARD_SIZE`] columns stay allocation-free;
/// larger boards spill to the heap transparently.
pub type RowList = tinyvec::TinyVec<[usize; 8]>;
