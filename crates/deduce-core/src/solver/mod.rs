//! The solve loop: an ordered technique registry, a first-hit dispatcher,
//! and action application with invariant checking.

mod chain;
mod explain;
mod fish;
mod intersections;
mod single_digit;
mod singles;
mod subsets;
mod types;
mod wings;

pub mod backtrack;

pub use types::{Action, Step, Technique};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, trace};

use crate::board::Board;
use crate::error::SolverError;

/// Tunables for the bounded searches.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Maximum placements per forcing-chain branch.
    pub chain_depth: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig { chain_depth: 64 }
    }
}

/// Per-search view of the solver's config and abort flag, handed to the
/// techniques that need to poll mid-search.
pub struct SearchContext<'a> {
    config: &'a SolverConfig,
    abort: &'a AtomicBool,
}

impl<'a> SearchContext<'a> {
    pub fn new(config: &'a SolverConfig, abort: &'a AtomicBool) -> Self {
        SearchContext { config, abort }
    }

    #[inline]
    pub fn aborted(&self) -> bool {
        self.abort.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn chain_depth(&self) -> usize {
        self.config.chain_depth
    }
}

impl Technique {
    /// The default registry, easiest first. NakedSingle precedes
    /// HiddenSingle, matching the reference solver's step traces.
    pub fn default_order() -> Vec<Technique> {
        vec![
            Technique::FullHouse,
            Technique::NakedSingle,
            Technique::HiddenSingle,
            Technique::LockedCandidates,
            Technique::NakedSubset,
            Technique::HiddenSubset,
            Technique::BasicFish,
            Technique::Skyscraper,
            Technique::TwoStringKite,
            Technique::RectangleElimination,
            Technique::XYWing,
            Technique::XYZWing,
            Technique::WWing,
            Technique::FinnedFish,
            Technique::FrankenFish,
            Technique::MutantFish,
            Technique::ForcingChain,
            // Catalogued but not implemented, in case regression data ever
            // asks for them: KrakenFish, AlmostLockedCandidates, TurbotFish,
            // ForcingNet.
        ]
    }

    fn find(self, board: &Board, ctx: &SearchContext) -> Option<Action> {
        match self {
            Technique::FullHouse => singles::find_full_house(board),
            Technique::NakedSingle => singles::find_naked_single(board),
            Technique::HiddenSingle => singles::find_hidden_single(board),
            Technique::LockedCandidates => intersections::find_locked_candidates(board),
            Technique::NakedSubset => subsets::find_naked_subset(board),
            Technique::HiddenSubset => subsets::find_hidden_subset(board),
            Technique::BasicFish => fish::find_basic_fish(board),
            Technique::FinnedFish => fish::find_finned_fish(board),
            Technique::FrankenFish => fish::find_franken_fish(board),
            Technique::MutantFish => fish::find_mutant_fish(board),
            Technique::Skyscraper => single_digit::find_skyscraper(board),
            Technique::TwoStringKite => single_digit::find_two_string_kite(board),
            Technique::RectangleElimination => single_digit::find_rectangle_elimination(board),
            Technique::XYWing => wings::find_xy_wing(board),
            Technique::XYZWing => wings::find_xyz_wing(board),
            Technique::WWing => wings::find_w_wing(board),
            Technique::ForcingChain => chain::find_forcing_chain(board, ctx),
        }
    }
}

/// The outcome of a full solve run.
#[derive(Debug, Clone)]
pub struct Solve {
    /// Actions in the order they were applied.
    pub actions: Vec<Action>,
    /// Whether every cell received a value.
    pub solved: bool,
}

/// Applies an ordered catalogue of techniques to a [`Board`].
///
/// The solver never mutates a board on its own: `find_step` proposes an
/// action, the caller decides to `apply_step` it. `solve` runs the loop to
/// completion.
pub struct Solver {
    techniques: Vec<Technique>,
    config: SolverConfig,
    abort: Arc<AtomicBool>,
}

impl Default for Solver {
    fn default() -> Self {
        Solver::new()
    }
}

impl Solver {
    pub fn new() -> Self {
        Solver::with_techniques(Technique::default_order())
    }

    pub fn with_techniques(techniques: Vec<Technique>) -> Self {
        Solver {
            techniques,
            config: SolverConfig::default(),
            abort: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    pub fn techniques(&self) -> &[Technique] {
        &self.techniques
    }

    /// Cooperative cancellation flag; set it from another thread to make the
    /// solver return [`SolverError::Aborted`] at the next poll point.
    pub fn abort_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.abort)
    }

    /// Ask each technique in registry order for an action; the first
    /// non-empty answer wins. The board is not mutated.
    pub fn find_step(&self, board: &Board) -> Result<Option<Action>, SolverError> {
        let ctx = SearchContext::new(&self.config, &self.abort);
        for &technique in &self.techniques {
            if ctx.aborted() {
                return Err(SolverError::Aborted);
            }
            if let Some(action) = technique.find(board, &ctx) {
                trace!(
                    "{:?} fired with {} step(s)",
                    technique,
                    action.steps.len()
                );
                return Ok(Some(action));
            }
        }
        if ctx.aborted() {
            return Err(SolverError::Aborted);
        }
        Ok(None)
    }

    /// Apply an action and verify the board invariants still hold.
    pub fn apply_step(&self, board: &mut Board, action: &Action) -> Result<(), SolverError> {
        board.apply(action)?;
        if let Some(reason) = board.find_contradiction() {
            return Err(SolverError::Contradiction(reason));
        }
        Ok(())
    }

    /// Run `find_step`/`apply_step` until the board is solved, no technique
    /// fires, or `max_steps` actions were applied. An exhausted registry is
    /// a normal unsolved result, not an error.
    pub fn solve(&self, board: &mut Board, max_steps: usize) -> Result<Solve, SolverError> {
        let mut actions = Vec::new();
        while actions.len() < max_steps && !board.is_solved() {
            let Some(action) = self.find_step(board)? else {
                break;
            };
            debug!("applying {}", action);
            self.apply_step(board, &action)?;
            actions.push(action);
        }
        Ok(Solve {
            solved: board.is_solved(),
            actions,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_solve_classic() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        let solver = Solver::new();
        let result = solver.solve(&mut board, 200).unwrap();
        assert!(result.solved);
        assert!(board.find_contradiction().is_none());
        assert!(!result.actions.is_empty());
    }

    #[test]
    fn test_first_step_is_the_naked_single() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        let solver = Solver::new();
        let action = solver.find_step(&board).unwrap().unwrap();
        assert_eq!(
            action.to_string(),
            "[NakedSingle] 5 is the only possible value to fill r5c5 => r5c5=5"
        );
    }

    #[test]
    fn test_stuck_board_is_not_an_error() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        let solver = Solver::with_techniques(vec![Technique::FullHouse]);
        let result = solver.solve(&mut board, 200).unwrap();
        assert!(!result.solved);
        assert!(result.actions.is_empty());
    }

    #[test]
    fn test_abort_surfaces() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        let solver = Solver::new();
        solver.abort_handle().store(true, std::sync::atomic::Ordering::Relaxed);
        assert_eq!(solver.find_step(&board), Err(SolverError::Aborted));
    }

    #[test]
    fn test_determinism() {
        let run = || {
            let mut board = Board::from_values(CLASSIC).unwrap();
            board.initialize_candidates();
            let solver = Solver::new();
            let result = solver.solve(&mut board, 200).unwrap();
            result
                .actions
                .iter()
                .map(|a| a.to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(run(), run());
    }
}
