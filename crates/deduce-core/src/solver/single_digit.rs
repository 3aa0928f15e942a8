//! Single-digit patterns built on strong links: Skyscraper, 2-String Kite,
//! and Rectangle Elimination.
//!
//! All three start from lines holding exactly two candidate cells of the
//! digit (conjugate pairs).

use crate::board::Board;
use crate::cellset::CellSet;
use crate::combinations::combinations;
use crate::houses::{
    box_of, cell_index, col_of, house_cells, peers, row_of, BOX_BASE, COL_BASE, ROW_BASE,
};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

/// A line with exactly two candidate cells for a digit, cells ascending.
#[derive(Debug, Clone, Copy)]
struct TwoPlaceLine {
    house: usize,
    cells: [u8; 2],
}

fn lines_with_two_places(board: &Board, digit: u8, base: usize) -> Vec<TwoPlaceLine> {
    (base..base + 9)
        .filter_map(|house| {
            let cells = board.house_candidate_cells(house, digit);
            if cells.len() != 2 {
                return None;
            }
            let mut iter = cells.iter();
            Some(TwoPlaceLine {
                house,
                cells: [iter.next().unwrap(), iter.next().unwrap()],
            })
        })
        .collect()
}

pub fn find_skyscraper(board: &Board) -> Option<Action> {
    for digit in 1..=9 {
        let rows = lines_with_two_places(board, digit, ROW_BASE);
        let cols = lines_with_two_places(board, digit, COL_BASE);
        if let Some(action) = skyscraper_in(board, digit, &rows, col_of, COL_BASE) {
            return Some(action);
        }
        if let Some(action) = skyscraper_in(board, digit, &cols, row_of, ROW_BASE) {
            return Some(action);
        }
    }
    None
}

/// Two parallel conjugate lines sharing one crossing line: one of the two
/// non-shared cells must hold the digit, so their common peers lose it.
fn skyscraper_in(
    board: &Board,
    digit: u8,
    lines: &[TwoPlaceLine],
    cross_of: fn(u8) -> usize,
    cross_base: usize,
) -> Option<Action> {
    for pair in combinations(lines.len(), 2) {
        let a = lines[pair[0]];
        let b = lines[pair[1]];
        let (shared_cross, roof_a, roof_b) = if cross_of(a.cells[0]) == cross_of(b.cells[0]) {
            (cross_of(a.cells[0]), a.cells[1], b.cells[1])
        } else if cross_of(a.cells[0]) == cross_of(b.cells[1]) {
            (cross_of(a.cells[0]), a.cells[1], b.cells[0])
        } else if cross_of(a.cells[1]) == cross_of(b.cells[0]) {
            (cross_of(a.cells[1]), a.cells[0], b.cells[1])
        } else if cross_of(a.cells[1]) == cross_of(b.cells[1]) {
            (cross_of(a.cells[1]), a.cells[0], b.cells[0])
        } else {
            continue;
        };

        if box_of(roof_a) == box_of(roof_b) {
            continue;
        }

        let eliminated = peers(roof_a) & peers(roof_b) & board.cells_with_candidate(digit);
        if eliminated.is_empty() {
            continue;
        }

        let mut action = Action::new(
            Technique::Skyscraper,
            explain::skyscraper(digit, a.house, b.house, cross_base + shared_cross),
        );
        for cell in eliminated.iter() {
            action.push_eliminate(cell, digit);
        }
        return Some(action);
    }
    None
}

/// A conjugate row and a conjugate column whose candidate cells do not meet;
/// if one cell of each shares a box, the crossing of the two remaining cells
/// loses the digit.
pub fn find_two_string_kite(board: &Board) -> Option<Action> {
    for digit in 1..=9 {
        let rows = lines_with_two_places(board, digit, ROW_BASE);
        let cols = lines_with_two_places(board, digit, COL_BASE);

        for row in &rows {
            for col in &cols {
                let row_cells = CellSet::single(row.cells[0]).with(row.cells[1]);
                let col_cells = CellSet::single(col.cells[0]).with(col.cells[1]);
                if !(row_cells & col_cells).is_empty() {
                    continue;
                }

                let [ra, rb] = row.cells;
                let [cx, cy] = col.cells;
                let eliminated = if box_of(ra) == box_of(cx) {
                    cell_index(row_of(cy), col_of(rb))
                } else if box_of(ra) == box_of(cy) {
                    cell_index(row_of(cx), col_of(rb))
                } else if box_of(rb) == box_of(cx) {
                    cell_index(row_of(cy), col_of(ra))
                } else if box_of(rb) == box_of(cy) {
                    cell_index(row_of(cx), col_of(ra))
                } else {
                    continue;
                };

                if board.has_candidate(eliminated, digit) {
                    return Some(
                        Action::new(
                            Technique::TwoStringKite,
                            explain::two_string_kite(digit, row.house, col.house),
                        )
                        .eliminate(eliminated, digit),
                    );
                }
            }
        }
    }
    None
}

pub fn find_rectangle_elimination(board: &Board) -> Option<Action> {
    for digit in 1..=9 {
        let rows = lines_with_two_places(board, digit, ROW_BASE);
        let cols = lines_with_two_places(board, digit, COL_BASE);
        if let Some(action) = rectangle_in(board, digit, &rows, col_of, ROW_BASE, COL_BASE) {
            return Some(action);
        }
        if let Some(action) = rectangle_in(board, digit, &cols, row_of, COL_BASE, ROW_BASE) {
            return Some(action);
        }
    }
    None
}

/// The hinge line holds a conjugate pair spanning two box stacks. Placing the
/// digit at the crossing of another parallel line and the first corner's
/// crossing line would force the opposite corner, emptying a box of the
/// digit.
fn rectangle_in(
    board: &Board,
    digit: u8,
    hinges: &[TwoPlaceLine],
    cross_of: fn(u8) -> usize,
    line_base: usize,
    cross_base: usize,
) -> Option<Action> {
    for hinge in hinges {
        let cross_1 = cross_of(hinge.cells[0]);
        let cross_2 = cross_of(hinge.cells[1]);
        // The two corners must sit in different box stacks.
        if cross_1 / 3 == cross_2 / 3 {
            continue;
        }
        for (near, far) in [(cross_1, cross_2), (cross_2, cross_1)] {
            if let Some(action) =
                rectangle_corner(board, digit, hinge, near, far, line_base, cross_base)
            {
                return Some(action);
            }
        }
    }
    None
}

#[allow(clippy::too_many_arguments)]
fn rectangle_corner(
    board: &Board,
    digit: u8,
    hinge: &TwoPlaceLine,
    near: usize,
    far: usize,
    line_base: usize,
    cross_base: usize,
) -> Option<Action> {
    let hinge_line = hinge.house - line_base;
    for other_line in 0..9 {
        if other_line / 3 == hinge_line / 3 {
            continue;
        }
        let target = line_cross_cell(line_base, other_line, near);
        if !board.has_candidate(target, digit) {
            continue;
        }
        let emptied_box = BOX_BASE + box_of(line_cross_cell(line_base, other_line, far));
        let box_cells = board.house_candidate_cells(emptied_box, digit);
        if box_cells.is_empty() {
            continue;
        }
        let other_house = line_base + other_line;
        let far_house = cross_base + far;
        if box_cells.is_subset_of(house_cells(other_house) | house_cells(far_house)) {
            let corner = line_cross_cell(line_base, hinge_line, near);
            let opposite = line_cross_cell(line_base, hinge_line, far);
            return Some(
                Action::new(
                    Technique::RectangleElimination,
                    explain::rectangle_elimination(digit, target, corner, opposite, emptied_box),
                )
                .eliminate(target, digit),
            );
        }
    }
    None
}

/// Crossing of a row-family or column-family line with a perpendicular index.
fn line_cross_cell(line_base: usize, line: usize, cross: usize) -> u8 {
    if line_base == ROW_BASE {
        cell_index(line, cross)
    } else {
        cell_index(cross, line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::cell_name;

    fn blank_board() -> Board {
        let mut board = Board::from_values(&".".repeat(81)).unwrap();
        board.initialize_candidates();
        board
    }

    fn confine_row(board: &mut Board, row: usize, digit: u8, cols: &[usize]) {
        for col in 0..9 {
            if !cols.contains(&col) {
                board.eliminate(cell_index(row, col), digit).unwrap();
            }
        }
    }

    fn confine_col(board: &mut Board, col: usize, digit: u8, rows: &[usize]) {
        for row in 0..9 {
            if !rows.contains(&row) {
                board.eliminate(cell_index(row, col), digit).unwrap();
            }
        }
    }

    #[test]
    fn test_skyscraper() {
        let mut board = blank_board();
        confine_row(&mut board, 1, 5, &[2, 6]);
        confine_row(&mut board, 3, 5, &[2, 8]);

        let action = find_skyscraper(&board).unwrap();
        assert_eq!(action.technique, Technique::Skyscraper);
        assert_eq!(
            action.explanation,
            "there are only two possible cells to place 5 in r2 and r4, \
             and two of those cells share c3"
        );
        let cells: Vec<String> = action.steps.iter().map(|s| cell_name(s.cell())).collect();
        assert_eq!(cells, vec!["r1c9", "r3c9", "r5c7", "r6c7"]);
    }

    #[test]
    fn test_two_string_kite() {
        let mut board = blank_board();
        confine_row(&mut board, 4, 7, &[0, 4]);
        confine_col(&mut board, 1, 7, &[3, 8]);

        let action = find_two_string_kite(&board).unwrap();
        assert_eq!(
            action.explanation,
            "for 7, there are only two places in r5 and c2"
        );
        assert_eq!(action.steps.len(), 1);
        assert_eq!(cell_name(action.steps[0].cell()), "r9c5");
        assert_eq!(action.steps[0].digit(), 7);
    }

    #[test]
    fn test_rectangle_elimination() {
        let mut board = blank_board();
        confine_row(&mut board, 1, 6, &[0, 5]);
        for cell in [cell_index(7, 3), cell_index(7, 4), cell_index(8, 3), cell_index(8, 4)] {
            board.eliminate(cell, 6).unwrap();
        }

        let action = find_rectangle_elimination(&board).unwrap();
        assert_eq!(action.technique, Technique::RectangleElimination);
        assert_eq!(action.steps.len(), 1);
        assert_eq!(cell_name(action.steps[0].cell()), "r7c1");
        assert_eq!(action.steps[0].digit(), 6);
        assert_eq!(
            action.explanation,
            "if r7c1 is 6, then r2c1 cannot be 6, and r2c6 must be 6, \
             which eliminates all possible places for 6 in b8"
        );
    }
}
