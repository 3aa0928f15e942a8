//! Singles: the direct placements.

use crate::board::Board;
use crate::houses::{house_cells, HOUSE_COUNT};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

/// A house with exactly one empty cell receives its missing digit.
pub fn find_full_house(board: &Board) -> Option<Action> {
    for house in 0..HOUSE_COUNT {
        let empty = house_cells(house) & board.unfilled_cells();
        if empty.len() != 1 {
            continue;
        }
        let cell = empty.first().unwrap();
        let digit = board.candidates(cell).first()?;
        return Some(
            Action::new(Technique::FullHouse, explain::full_house(cell, house)).place(cell, digit),
        );
    }
    None
}

/// A cell whose mask holds a single digit.
pub fn find_naked_single(board: &Board) -> Option<Action> {
    for cell in board.unfilled_cells().iter() {
        if let Some(digit) = board.candidates(cell).single_digit() {
            return Some(
                Action::new(Technique::NakedSingle, explain::naked_single(cell, digit))
                    .place(cell, digit),
            );
        }
    }
    None
}

/// A digit with a single possible cell in a house.
pub fn find_hidden_single(board: &Board) -> Option<Action> {
    for house in 0..HOUSE_COUNT {
        if (house_cells(house) & board.unfilled_cells()).is_empty() {
            continue;
        }
        for digit in 1..=9 {
            let possible = board.house_candidate_cells(house, digit);
            if possible.len() == 1 {
                let cell = possible.first().unwrap();
                return Some(
                    Action::new(
                        Technique::HiddenSingle,
                        explain::hidden_single(cell, digit, house),
                    )
                    .place(cell, digit),
                );
            }
        }
    }
    None
}
