//! Forcing chains over cloned trial boards.
//!
//! A basis is a disjunction that must hold: the candidates of a cell, or the
//! candidate cells of a digit in a house. Each branch is assumed on a cloned
//! board and propagated through naked and hidden singles up to the depth
//! cap. A branch that defeats itself is eliminated; when every branch but
//! one contradicts, the survivor is placed. Contradictions inside a trial
//! are evidence, never errors.

use crate::board::Board;
use crate::cellset::DigitSet;
use crate::houses::{house_cells, HOUSE_COUNT};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};
use crate::solver::SearchContext;

enum Outcome {
    /// The assumption forces an impossible board.
    Contradiction,
    /// Propagation stopped (fixpoint, depth cap, or solved) without conflict.
    Open,
    Aborted,
}

/// Assume `digit` in `cell` and cascade singles on a cloned board.
fn propagate(board: &Board, cell: u8, digit: u8, ctx: &SearchContext) -> Outcome {
    let mut trial = board.clone();
    if trial.place(cell, digit).is_err() {
        return Outcome::Contradiction;
    }

    let mut depth = 0;
    while depth < ctx.chain_depth() {
        if ctx.aborted() {
            return Outcome::Aborted;
        }
        let Some((next_cell, next_digit)) = next_single(&trial) else {
            break;
        };
        if trial.place(next_cell, next_digit).is_err() {
            return Outcome::Contradiction;
        }
        depth += 1;
    }

    if trial.find_contradiction().is_some() {
        Outcome::Contradiction
    } else {
        Outcome::Open
    }
}

/// The next naked or hidden single of the trial board, if any.
fn next_single(board: &Board) -> Option<(u8, u8)> {
    for cell in board.unfilled_cells().iter() {
        if let Some(digit) = board.candidates(cell).single_digit() {
            return Some((cell, digit));
        }
    }
    for house in 0..HOUSE_COUNT {
        if (house_cells(house) & board.unfilled_cells()).is_empty() {
            continue;
        }
        for digit in 1..=9 {
            let possible = board.house_candidate_cells(house, digit);
            if possible.len() == 1 {
                return Some((possible.first().unwrap(), digit));
            }
        }
    }
    None
}

pub fn find_forcing_chain(board: &Board, ctx: &SearchContext) -> Option<Action> {
    // Cell bases: one of the cell's candidates is true.
    for cell in board.unfilled_cells().iter() {
        let candidates = board.candidates(cell);
        if candidates.len() < 2 {
            continue;
        }
        if ctx.aborted() {
            return None;
        }

        let mut contradicted = DigitSet::EMPTY;
        for digit in candidates.iter() {
            match propagate(board, cell, digit, ctx) {
                Outcome::Contradiction => contradicted = contradicted.with(digit),
                Outcome::Open => {}
                Outcome::Aborted => return None,
            }
        }
        if contradicted.is_empty() {
            continue;
        }

        let survivors = candidates - contradicted;
        if let Some(digit) = survivors.single_digit() {
            let mut action = Action::new(
                Technique::ForcingChain,
                explain::chain_survivor(cell, digit),
            );
            for gone in contradicted.iter() {
                action.push_eliminate(cell, gone);
            }
            action.push_place(cell, digit);
            return Some(action);
        }
        let digit = contradicted.first().unwrap();
        return Some(
            Action::new(
                Technique::ForcingChain,
                explain::chain_contradiction(cell, digit),
            )
            .eliminate(cell, digit),
        );
    }

    // House bases: the digit lands on one of its candidate cells.
    for house in 0..HOUSE_COUNT {
        for digit in 1..=9 {
            let cells = board.house_candidate_cells(house, digit);
            if cells.len() < 2 {
                continue;
            }
            if ctx.aborted() {
                return None;
            }

            let mut contradicted = Vec::new();
            let mut survivor = None;
            for cell in cells.iter() {
                match propagate(board, cell, digit, ctx) {
                    Outcome::Contradiction => contradicted.push(cell),
                    Outcome::Open => survivor = Some(cell),
                    Outcome::Aborted => return None,
                }
            }
            if contradicted.is_empty() {
                continue;
            }

            if contradicted.len() + 1 == cells.len() {
                let cell = survivor.expect("one open branch remains");
                let mut action = Action::new(
                    Technique::ForcingChain,
                    explain::hidden_single(cell, digit, house),
                );
                for gone in &contradicted {
                    action.push_eliminate(*gone, digit);
                }
                action.push_place(cell, digit);
                return Some(action);
            }
            let cell = contradicted[0];
            return Some(
                Action::new(
                    Technique::ForcingChain,
                    explain::chain_house_contradiction(cell, digit, house),
                )
                .eliminate(cell, digit),
            );
        }
    }
    None
}
