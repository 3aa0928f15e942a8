//! Wings: XY-Wing, XYZ-Wing, and W-Wing.

use crate::board::Board;
use crate::cellset::CellSet;
use crate::combinations::combinations;
use crate::houses::{col_of, peers, row_of, COL_BASE, ROW_BASE};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

fn cells_with_mask_len(board: &Board, len: usize) -> CellSet {
    board
        .unfilled_cells()
        .iter()
        .filter(|&cell| board.candidates(cell).len() == len)
        .collect()
}

/// Pivot {x,y} with pincers {x,z} and {y,z}: one pincer holds z, so cells
/// seeing both pincers lose z.
pub fn find_xy_wing(board: &Board) -> Option<Action> {
    let bivalue = cells_with_mask_len(board, 2);
    if bivalue.len() < 3 {
        return None;
    }

    for pivot in bivalue.iter() {
        let pincers = bivalue & peers(pivot);
        if pincers.is_empty() {
            continue;
        }
        let xy = board.candidates(pivot);

        for cell_xz in pincers.iter() {
            let xz = board.candidates(cell_xz);
            let xyz = xy | xz;
            let x = xy & xz;
            if xy == xz || x.is_empty() {
                continue;
            }

            for cell_yz in pincers.iter() {
                let yz = board.candidates(cell_yz);
                let z = xz & yz;
                if !yz.is_subset_of(xyz) || yz == xz || yz == xy || z.is_empty() {
                    continue;
                }

                let z = z.single_digit()?;
                let eliminated =
                    board.cells_with_candidate(z) & peers(cell_xz) & peers(cell_yz);
                if eliminated.is_empty() {
                    continue;
                }

                let mut action = Action::new(
                    Technique::XYWing,
                    explain::xy_wing(
                        pivot,
                        cell_xz,
                        cell_yz,
                        x.single_digit()?,
                        (xy & yz).single_digit()?,
                        z,
                    ),
                );
                for cell in eliminated.iter() {
                    action.push_eliminate(cell, z);
                }
                return Some(action);
            }
        }
    }
    None
}

/// Pivot {x,y,z} with pincers {x,z} and {y,z}: z is pinned to the three
/// cells, so cells seeing all of them lose z.
pub fn find_xyz_wing(board: &Board) -> Option<Action> {
    let bivalue = cells_with_mask_len(board, 2);
    if bivalue.len() < 2 {
        return None;
    }
    let pivots = cells_with_mask_len(board, 3);

    for pivot in pivots.iter() {
        let pincers = bivalue & peers(pivot);
        if pincers.is_empty() {
            continue;
        }
        let xyz = board.candidates(pivot);

        for cell_xz in pincers.iter() {
            let xz = board.candidates(cell_xz);
            if !xz.is_subset_of(xyz) {
                continue;
            }

            for cell_yz in pincers.iter() {
                let yz = board.candidates(cell_yz);
                if !yz.is_subset_of(xyz) || yz == xz {
                    continue;
                }
                let z = (xz & yz).single_digit()?;

                let eliminated = board.cells_with_candidate(z)
                    & peers(cell_xz)
                    & peers(cell_yz)
                    & peers(pivot);
                if eliminated.is_empty() {
                    continue;
                }

                let mut action = Action::new(
                    Technique::XYZWing,
                    explain::xyz_wing(
                        pivot,
                        cell_xz,
                        cell_yz,
                        (xyz - yz).single_digit()?,
                        (yz - (xz & yz)).single_digit()?,
                        z,
                    ),
                );
                for cell in eliminated.iter() {
                    action.push_eliminate(cell, z);
                }
                return Some(action);
            }
        }
    }
    None
}

/// Two bivalue cells with the same pair {x,y}, joined by a strong link on x:
/// one of them is y, so their common peers lose y.
pub fn find_w_wing(board: &Board) -> Option<Action> {
    let bivalue: Vec<u8> = cells_with_mask_len(board, 2).iter().collect();

    for pair in combinations(bivalue.len(), 2) {
        let cell_a = bivalue[pair[0]];
        let cell_b = bivalue[pair[1]];

        // Sharing a line would make them a naked pair, not a W-Wing.
        if row_of(cell_a) == row_of(cell_b) || col_of(cell_a) == col_of(cell_b) {
            continue;
        }
        if board.candidates(cell_a) != board.candidates(cell_b) {
            continue;
        }
        let mut digits = board.candidates(cell_a).iter();
        let first = digits.next()?;
        let second = digits.next()?;

        for (linked, other) in [(first, second), (second, first)] {
            if let Some(action) = w_wing_link(board, cell_a, cell_b, linked, other) {
                return Some(action);
            }
        }
    }
    None
}

fn w_wing_link(
    board: &Board,
    cell_a: u8,
    cell_b: u8,
    linked: u8,
    other: u8,
) -> Option<Action> {
    let eliminated = board.cells_with_candidate(other) & peers(cell_a) & peers(cell_b);
    if eliminated.is_empty() {
        return None;
    }

    for house in ROW_BASE..COL_BASE + 9 {
        let link_cells = board.house_candidate_cells(house, linked);
        if link_cells.len() != 2 {
            continue;
        }
        let mut iter = link_cells.iter();
        let link_a = iter.next()?;
        let link_b = iter.next()?;
        if link_a == cell_a || link_b == cell_b {
            continue;
        }
        let matches = if house < COL_BASE {
            col_of(link_a) == col_of(cell_a) && col_of(link_b) == col_of(cell_b)
        } else {
            row_of(link_a) == row_of(cell_a) && row_of(link_b) == row_of(cell_b)
        };
        if !matches {
            continue;
        }

        let mut action = Action::new(
            Technique::WWing,
            explain::w_wing(cell_a, cell_b, link_a, link_b, linked, other),
        );
        for cell in eliminated.iter() {
            action.push_eliminate(cell, other);
        }
        return Some(action);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell_name;
    use crate::houses::cell_index;

    fn blank_board() -> Board {
        let mut board = Board::from_values(&".".repeat(81)).unwrap();
        board.initialize_candidates();
        board
    }

    fn set_mask(board: &mut Board, cell: u8, digits: &[u8]) {
        for digit in 1..=9 {
            if !digits.contains(&digit) {
                board.eliminate(cell, digit).unwrap();
            }
        }
    }

    #[test]
    fn test_xy_wing() {
        let mut board = blank_board();
        set_mask(&mut board, cell_index(0, 0), &[1, 2]); // pivot
        set_mask(&mut board, cell_index(0, 3), &[1, 3]);
        set_mask(&mut board, cell_index(2, 2), &[2, 3]);

        let action = find_xy_wing(&board).unwrap();
        assert_eq!(
            action.explanation,
            "the pivot r1c1 and the pincers r1c4 and r3c3 form an XY-Wing with xyz=123"
        );
        let cells: Vec<String> = action.steps.iter().map(|s| cell_name(s.cell())).collect();
        assert_eq!(cells, vec!["r1c2", "r1c3", "r3c4", "r3c5", "r3c6"]);
        assert!(action.steps.iter().all(|s| s.digit() == 3));
    }

    #[test]
    fn test_xyz_wing() {
        let mut board = blank_board();
        set_mask(&mut board, cell_index(4, 4), &[1, 2, 3]); // pivot
        set_mask(&mut board, cell_index(4, 0), &[1, 3]);
        set_mask(&mut board, cell_index(5, 5), &[2, 3]);

        let action = find_xyz_wing(&board).unwrap();
        assert_eq!(
            action.explanation,
            "the pivot r5c5 and the pincers r5c1 and r6c6 form an XYZ-Wing with xyz=123"
        );
        let cells: Vec<String> = action.steps.iter().map(|s| cell_name(s.cell())).collect();
        assert_eq!(cells, vec!["r5c4", "r5c6"]);
        assert!(action.steps.iter().all(|s| s.digit() == 3));
    }

    #[test]
    fn test_w_wing() {
        let mut board = blank_board();
        set_mask(&mut board, cell_index(0, 0), &[4, 7]);
        set_mask(&mut board, cell_index(5, 4), &[4, 7]);
        // Strong link on 4 in row 9 between c1 and c5.
        for col in 0..9 {
            if col != 0 && col != 4 {
                board.eliminate(cell_index(8, col), 4).unwrap();
            }
        }

        let action = find_w_wing(&board).unwrap();
        assert_eq!(
            action.explanation,
            "r1c1 -7- r9c1 =4= r9c5 -7- r6c5 form a W-Wing"
        );
        let cells: Vec<String> = action.steps.iter().map(|s| cell_name(s.cell())).collect();
        assert_eq!(cells, vec!["r1c5", "r6c1"]);
        assert!(action.steps.iter().all(|s| s.digit() == 7));
    }
}
