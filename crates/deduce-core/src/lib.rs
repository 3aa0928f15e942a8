//! Human-style Sudoku deduction engine.
//!
//! Given a partially filled 9x9 board with pencil-mark candidates, the
//! engine repeatedly applies a catalogue of human-recognisable techniques,
//! from Full House up to Forcing Chains, and reports every deduction as an
//! explainable [`Action`] attributed to a named [`Technique`].
//!
//! ```
//! use deduce_core::{Board, Solver};
//!
//! let puzzle =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
//! let mut board = Board::from_values(puzzle)?;
//! board.initialize_candidates();
//!
//! let solver = Solver::new();
//! if let Some(action) = solver.find_step(&board)? {
//!     println!("{action}");
//! }
//! # Ok::<(), deduce_core::SolverError>(())
//! ```

pub mod board;
mod cellset;
mod combinations;
mod error;
pub mod houses;
pub mod solver;

pub use board::{cell_name, Board};
pub use cellset::{CellSet, DigitSet};
pub use error::SolverError;
pub use solver::{Action, Solve, Solver, SolverConfig, Step, Technique};
