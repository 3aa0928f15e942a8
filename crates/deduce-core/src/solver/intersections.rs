//! Locked Candidates: pointing and claiming as one box<->line rule.

use crate::board::Board;
use crate::houses::{house_cells, BOX_BASE, HOUSE_COUNT, ROW_BASE};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

/// When every candidate of a digit in house A lies inside A & B, the digit
/// cannot appear elsewhere in B.
pub fn find_locked_candidates(board: &Board) -> Option<Action> {
    for bx in BOX_BASE..HOUSE_COUNT {
        for line in ROW_BASE..BOX_BASE {
            if let Some(action) = check(board, bx, line) {
                return Some(action);
            }
            if let Some(action) = check(board, line, bx) {
                return Some(action);
            }
        }
    }
    None
}

fn check(board: &Board, house_a: usize, house_b: usize) -> Option<Action> {
    let intersection = house_cells(house_a) & house_cells(house_b);
    if intersection.is_empty() {
        return None;
    }

    for digit in 1..=9 {
        let possible_in_a = board.house_candidate_cells(house_a, digit);
        if possible_in_a.is_empty() || !possible_in_a.is_subset_of(intersection) {
            continue;
        }
        let eliminated = board.house_candidate_cells(house_b, digit) - intersection;
        if eliminated.is_empty() {
            continue;
        }
        let mut action = Action::new(
            Technique::LockedCandidates,
            explain::locked_candidates(digit, house_a, house_b),
        );
        for cell in eliminated.iter() {
            action.push_eliminate(cell, digit);
        }
        return Some(action);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::singles::{find_hidden_single, find_naked_single};

    #[test]
    fn test_pointing_candidates() {
        // Confine 5 within b1 to row 1: the rest of row 1 loses 5.
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        for cell in [9u8, 10, 11, 18, 19, 20] {
            board.eliminate(cell, 5).unwrap();
        }

        assert!(find_naked_single(&board).is_none());
        assert!(find_hidden_single(&board).is_none());

        let action = find_locked_candidates(&board).unwrap();
        assert_eq!(action.technique, Technique::LockedCandidates);
        assert_eq!(
            action.explanation,
            "in b1, 5 can only be in b1 & r1"
        );
        let cells: Vec<u8> = action.steps.iter().map(|s| s.cell()).collect();
        assert_eq!(cells, vec![3, 4, 5, 6, 7, 8]);
        assert!(action.steps.iter().all(|s| s.digit() == 5));
    }

    #[test]
    fn test_claiming_candidates() {
        // Confine 3 within r4 to b4: the rest of b4 loses 3.
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        for col in 3..9u8 {
            board.eliminate(27 + col, 3).unwrap();
        }

        let action = find_locked_candidates(&board).unwrap();
        assert_eq!(
            action.explanation,
            "in r4, 3 can only be in r4 & b4"
        );
        let cells: Vec<u8> = action.steps.iter().map(|s| s.cell()).collect();
        assert_eq!(cells, vec![36, 37, 38, 45, 46, 47]);
    }
}
