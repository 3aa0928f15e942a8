//! Fish: one search core shared by the basic, finned, franken, and mutant
//! variants.
//!
//! A fish for a digit is a pair of equal-sized families of houses (bases and
//! covers, each family internally disjoint in candidate cells). Base cells
//! not covered are fins; eliminations are cover cells outside the bases,
//! restricted to the common peers of every fin.

use crate::board::Board;
use crate::cellset::CellSet;
use crate::houses::{peers, BOX_BASE, COL_BASE, HOUSE_COUNT, ROW_BASE};
use crate::solver::explain;
use crate::solver::types::{Action, Technique};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FinPolicy {
    /// Strict cover: any fin rejects the pattern.
    Forbid,
    /// Fins required; sashimi patterns fall out of the same rule.
    Require,
    /// Fins optional (franken and mutant searches).
    Allow,
}

/// Candidate-cell sets of a house range, keeping houses with at least two
/// positions for the digit.
fn candidate_houses(board: &Board, digit: u8, range: std::ops::Range<usize>) -> Vec<(usize, CellSet)> {
    range
        .filter_map(|house| {
            let cells = board.house_candidate_cells(house, digit);
            (cells.len() > 1).then_some((house, cells))
        })
        .collect()
}

fn check_fish(
    board: &Board,
    digit: u8,
    bases: &[(usize, CellSet)],
    covers: &[(usize, CellSet)],
    base_cells: CellSet,
    cover_cells: CellSet,
    policy: FinPolicy,
    technique: Technique,
) -> Option<Action> {
    let fins = base_cells - cover_cells;
    let mut eliminated = cover_cells - base_cells;
    if eliminated.is_empty() {
        return None;
    }
    match policy {
        FinPolicy::Forbid if !fins.is_empty() => return None,
        FinPolicy::Require if fins.is_empty() => return None,
        _ => {}
    }
    for fin in fins.iter() {
        eliminated &= peers(fin);
        if eliminated.is_empty() {
            return None;
        }
    }
    eliminated &= board.cells_with_candidate(digit);
    if eliminated.is_empty() {
        return None;
    }

    let base_houses: Vec<usize> = bases.iter().map(|&(h, _)| h).collect();
    let cover_houses: Vec<usize> = covers.iter().map(|&(h, _)| h).collect();
    let mut action = Action::new(
        technique,
        explain::fish(digit, &base_houses, &cover_houses, fins),
    );
    for cell in eliminated.iter() {
        action.push_eliminate(cell, digit);
    }
    Some(action)
}

/// Recursively enumerate size-k house combinations whose candidate cells are
/// pairwise disjoint, in lexicographic pool order.
fn each_disjoint_combo(
    pool: &[(usize, CellSet)],
    k: usize,
    start: usize,
    picked: &mut Vec<(usize, CellSet)>,
    union: CellSet,
    visit: &mut dyn FnMut(&[(usize, CellSet)], CellSet) -> Option<Action>,
) -> Option<Action> {
    if k == 0 {
        return visit(picked, union);
    }
    for i in start..pool.len() {
        let (house, cells) = pool[i];
        if !(union & cells).is_empty() {
            continue;
        }
        picked.push((house, cells));
        let found = each_disjoint_combo(pool, k - 1, i + 1, picked, union | cells, visit);
        picked.pop();
        if found.is_some() {
            return found;
        }
    }
    None
}

fn search_line_fish(board: &Board, digit: u8, size: usize, policy: FinPolicy, technique: Technique) -> Option<Action> {
    let rows = candidate_houses(board, digit, ROW_BASE..COL_BASE);
    let cols = candidate_houses(board, digit, COL_BASE..BOX_BASE);

    each_disjoint_combo(&rows, size, 0, &mut Vec::new(), CellSet::EMPTY, &mut |row_set, row_cells| {
        let row_set = row_set.to_vec();
        each_disjoint_combo(&cols, size, 0, &mut Vec::new(), CellSet::EMPTY, &mut |col_set, col_cells| {
            check_fish(board, digit, &row_set, col_set, row_cells, col_cells, policy, technique)
                .or_else(|| {
                    check_fish(board, digit, col_set, &row_set, col_cells, row_cells, policy, technique)
                })
        })
    })
}

fn search_franken_fish_with(
    board: &Board,
    digit: u8,
    size: usize,
    lines: &[(usize, CellSet)],
    cross_lines: &[(usize, CellSet)],
    boxes: &[(usize, CellSet)],
) -> Option<Action> {
    for line_count in 0..size {
        let pool = lines.to_vec();
        let found = each_disjoint_combo(&pool, line_count, 0, &mut Vec::new(), CellSet::EMPTY, &mut |line_set, line_cells| {
            let line_set = line_set.to_vec();
            let boxes_free: Vec<(usize, CellSet)> = boxes
                .iter()
                .filter(|&&(_, cells)| (cells & line_cells).is_empty())
                .copied()
                .collect();
            each_disjoint_combo(&boxes_free, size - line_count, 0, &mut Vec::new(), CellSet::EMPTY, &mut |box_set, box_cells| {
                let mut base: Vec<(usize, CellSet)> = line_set.clone();
                base.extend_from_slice(box_set);
                let base_cells = line_cells | box_cells;
                each_disjoint_combo(cross_lines, size, 0, &mut Vec::new(), CellSet::EMPTY, &mut |cover_set, cover_cells| {
                    check_fish(board, digit, &base, cover_set, base_cells, cover_cells, FinPolicy::Allow, Technique::FrankenFish)
                        .or_else(|| {
                            check_fish(board, digit, cover_set, &base, cover_cells, base_cells, FinPolicy::Allow, Technique::FrankenFish)
                        })
                })
            })
        });
        if found.is_some() {
            return found;
        }
    }
    None
}

/// X-Wing, Swordfish, Jellyfish: n rows covered by n columns or vice versa.
pub fn find_basic_fish(board: &Board) -> Option<Action> {
    for size in 2..=4 {
        for digit in 1..=9 {
            if let Some(action) =
                search_line_fish(board, digit, size, FinPolicy::Forbid, Technique::BasicFish)
            {
                return Some(action);
            }
        }
    }
    None
}

/// Finned (and sashimi) line fish: the cover condition is relaxed and
/// eliminations must see every fin.
pub fn find_finned_fish(board: &Board) -> Option<Action> {
    for size in 2..=4 {
        for digit in 1..=9 {
            if let Some(action) =
                search_line_fish(board, digit, size, FinPolicy::Require, Technique::FinnedFish)
            {
                return Some(action);
            }
        }
    }
    None
}

/// Franken fish: one line orientation plus boxes against the perpendicular
/// lines. Size 2 is omitted; a franken X-Wing degenerates to a finned one.
pub fn find_franken_fish(board: &Board) -> Option<Action> {
    for size in 3..=4 {
        for digit in 1..=9 {
            let rows = candidate_houses(board, digit, ROW_BASE..COL_BASE);
            let cols = candidate_houses(board, digit, COL_BASE..BOX_BASE);
            let boxes = candidate_houses(board, digit, BOX_BASE..HOUSE_COUNT);
            if let Some(action) =
                search_franken_fish_with(board, digit, size, &rows, &cols, &boxes)
            {
                return Some(action);
            }
            if let Some(action) =
                search_franken_fish_with(board, digit, size, &cols, &rows, &boxes)
            {
                return Some(action);
            }
        }
    }
    None
}

/// Mutant fish: bases and covers drawn freely from all 27 houses, each
/// family internally disjoint and the families sharing no house.
pub fn find_mutant_fish(board: &Board) -> Option<Action> {
    for size in 3..=4 {
        for digit in 1..=9 {
            let all = candidate_houses(board, digit, 0..HOUSE_COUNT);
            if all.is_empty() {
                continue;
            }
            let found = each_disjoint_combo(&all, size, 0, &mut Vec::new(), CellSet::EMPTY, &mut |base_set, base_cells| {
                let base_set = base_set.to_vec();
                let cover_pool: Vec<(usize, CellSet)> = all
                    .iter()
                    .filter(|(house, _)| !base_set.iter().any(|&(b, _)| b == *house))
                    .copied()
                    .collect();
                each_disjoint_combo(&cover_pool, size, 0, &mut Vec::new(), CellSet::EMPTY, &mut |cover_set, cover_cells| {
                    check_fish(board, digit, &base_set, cover_set, base_cells, cover_cells, FinPolicy::Allow, Technique::MutantFish)
                        .or_else(|| {
                            check_fish(board, digit, cover_set, &base_set, cover_cells, base_cells, FinPolicy::Allow, Technique::MutantFish)
                        })
                })
            });
            if found.is_some() {
                return found;
            }
        }
    }
    None
}
