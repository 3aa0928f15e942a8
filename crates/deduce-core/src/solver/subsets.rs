//! Naked and hidden subsets of sizes 2 to 4.

use crate::board::Board;
use crate::cellset::{CellSet, DigitSet};
use crate::combinations::combinations;
use crate::houses::{house_cells, HOUSE_COUNT};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

/// n cells of a house whose masks union to exactly those n digits lock the
/// digits to the cells: every other cell of every house shared by all n
/// cells loses them.
pub fn find_naked_subset(board: &Board) -> Option<Action> {
    for house in 0..HOUSE_COUNT {
        for size in 2..=4usize {
            let members: Vec<u8> = (house_cells(house) & board.unfilled_cells())
                .iter()
                .filter(|&cell| {
                    let mask = board.candidates(cell);
                    !mask.is_empty() && mask.len() <= size
                })
                .collect();
            if members.len() < size {
                continue;
            }

            for combo in combinations(members.len(), size) {
                let mut cells = CellSet::EMPTY;
                let mut digits = DigitSet::EMPTY;
                for &i in combo.iter() {
                    cells = cells.with(members[i]);
                    digits |= board.candidates(members[i]);
                }
                if digits.len() > size {
                    continue;
                }

                // Every house shared by all subset cells is cleaned at once.
                let mut eliminated = CellSet::EMPTY;
                for shared in 0..HOUSE_COUNT {
                    if cells.is_subset_of(house_cells(shared)) {
                        eliminated |= house_cells(shared);
                    }
                }
                eliminated -= cells;

                let mut action = Action::new(
                    Technique::NakedSubset,
                    explain::naked_subset(house, cells, digits),
                );
                for cell in eliminated.iter() {
                    for digit in (digits & board.candidates(cell)).iter() {
                        action.push_eliminate(cell, digit);
                    }
                }
                if !action.is_empty() {
                    return Some(action);
                }
            }
        }
    }
    None
}

/// n digits of a house whose candidate cells union to at most n cells lock
/// the cells to the digits: the cells lose every other digit.
pub fn find_hidden_subset(board: &Board) -> Option<Action> {
    for house in 0..HOUSE_COUNT {
        let present: Vec<(u8, CellSet)> = (1..=9)
            .filter_map(|digit| {
                let cells = board.house_candidate_cells(house, digit);
                (!cells.is_empty()).then_some((digit, cells))
            })
            .collect();

        for size in 2..=4usize {
            let members: Vec<&(u8, CellSet)> = present
                .iter()
                .filter(|(_, cells)| cells.len() <= size)
                .collect();
            if members.len() < size {
                continue;
            }

            for combo in combinations(members.len(), size) {
                let mut cells = CellSet::EMPTY;
                let mut digits = DigitSet::EMPTY;
                for &i in combo.iter() {
                    let (digit, digit_cells) = members[i];
                    cells |= *digit_cells;
                    digits = digits.with(*digit);
                }
                if cells.len() > size {
                    continue;
                }

                let mut action = Action::new(
                    Technique::HiddenSubset,
                    explain::hidden_subset(house, digits, cells),
                );
                for cell in cells.iter() {
                    for digit in (board.candidates(cell) - digits).iter() {
                        action.push_eliminate(cell, digit);
                    }
                }
                if !action.is_empty() {
                    return Some(action);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::types::Step;

    #[test]
    fn test_naked_pair_cleans_both_shared_houses() {
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        // r1c1 and r1c2 hold exactly {4,5}; they share r1 and b1.
        for cell in [0u8, 1] {
            for digit in [1, 2, 3, 6, 7, 8, 9] {
                board.eliminate(cell, digit).unwrap();
            }
        }

        let action = find_naked_subset(&board).unwrap();
        assert_eq!(action.explanation, "in r1, r1c1,r1c2 only contains 4,5");

        let mut expected = Vec::new();
        for cell in [2u8, 3, 4, 5, 6, 7, 8, 9, 10, 11, 18, 19, 20] {
            for digit in [4u8, 5] {
                expected.push(Step::Eliminate { cell, digit });
            }
        }
        assert_eq!(action.steps, expected);
    }

    #[test]
    fn test_hidden_pair() {
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        // 4 and 5 appear in r1 only at r1c1 and r1c2.
        for cell in 2..9u8 {
            board.eliminate(cell, 4).unwrap();
            board.eliminate(cell, 5).unwrap();
        }

        let action = find_hidden_subset(&board).unwrap();
        assert_eq!(action.explanation, "in r1, 4,5 only appears in r1c1,r1c2");
        assert_eq!(action.steps.len(), 14);
        assert!(action
            .steps
            .iter()
            .all(|s| matches!(s, Step::Eliminate { cell, digit } if *cell <= 1 && ![4, 5].contains(digit))));
    }

    #[test]
    fn test_no_subset_on_blank_board() {
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        assert!(find_naked_subset(&board).is_none());
        assert!(find_hidden_subset(&board).is_none());
    }
}
