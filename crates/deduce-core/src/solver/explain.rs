//! The single formatter for explanation strings.
//!
//! Techniques hand structured pattern data to these builders instead of
//! concatenating strings inline, so regression output stays stable.

use itertools::Itertools;

use crate::board::cell_name;
use crate::cellset::{CellSet, DigitSet};
use crate::houses::house_name;

/// `r1c2,r3c4,...` for a cell set, ascending.
pub fn cellset_names(cells: CellSet) -> String {
    cells.iter().map(cell_name).join(",")
}

/// `r1,b4,...` for a list of house indices.
pub fn house_names(houses: &[usize]) -> String {
    houses.iter().map(|&h| house_name(h)).join(",")
}

/// `4,7,9` for a digit set, ascending.
pub fn digit_names(digits: DigitSet) -> String {
    digits.iter().map(|d| d.to_string()).join(",")
}

pub fn full_house(cell: u8, house: usize) -> String {
    format!(
        "{} is the only missing cell in {}",
        cell_name(cell),
        house_name(house)
    )
}

pub fn naked_single(cell: u8, digit: u8) -> String {
    format!(
        "{} is the only possible value to fill {}",
        digit,
        cell_name(cell)
    )
}

pub fn hidden_single(cell: u8, digit: u8, house: usize) -> String {
    format!(
        "in {}, {} is the only possible cell that can be {}",
        house_name(house),
        cell_name(cell),
        digit
    )
}

pub fn locked_candidates(digit: u8, house_a: usize, house_b: usize) -> String {
    format!(
        "in {}, {} can only be in {} & {}",
        house_name(house_a),
        digit,
        house_name(house_a),
        house_name(house_b)
    )
}

pub fn naked_subset(house: usize, cells: CellSet, digits: DigitSet) -> String {
    format!(
        "in {}, {} only contains {}",
        house_name(house),
        cellset_names(cells),
        digit_names(digits)
    )
}

pub fn hidden_subset(house: usize, digits: DigitSet, cells: CellSet) -> String {
    format!(
        "in {}, {} only appears in {}",
        house_name(house),
        digit_names(digits),
        cellset_names(cells)
    )
}

pub fn fish(digit: u8, bases: &[usize], covers: &[usize], fins: CellSet) -> String {
    if fins.is_empty() {
        format!(
            "for {}, {} is covered by {}",
            digit,
            house_names(bases),
            house_names(covers)
        )
    } else {
        format!(
            "for {}, {} is covered by {} with fins {}",
            digit,
            house_names(bases),
            house_names(covers),
            cellset_names(fins)
        )
    }
}

pub fn skyscraper(digit: u8, line_a: usize, line_b: usize, shared_line: usize) -> String {
    format!(
        "there are only two possible cells to place {} in {} and {}, and two of those cells share {}",
        digit,
        house_name(line_a),
        house_name(line_b),
        house_name(shared_line)
    )
}

pub fn two_string_kite(digit: u8, row: usize, col: usize) -> String {
    format!(
        "for {}, there are only two places in {} and {}",
        digit,
        house_name(row),
        house_name(col)
    )
}

pub fn rectangle_elimination(
    digit: u8,
    target: u8,
    corner: u8,
    opposite: u8,
    emptied_box: usize,
) -> String {
    format!(
        "if {} is {}, then {} cannot be {}, and {} must be {}, \
         which eliminates all possible places for {} in {}",
        cell_name(target),
        digit,
        cell_name(corner),
        digit,
        cell_name(opposite),
        digit,
        digit,
        house_name(emptied_box)
    )
}

pub fn xy_wing(pivot: u8, pincer_a: u8, pincer_b: u8, x: u8, y: u8, z: u8) -> String {
    format!(
        "the pivot {} and the pincers {} and {} form an XY-Wing with xyz={}{}{}",
        cell_name(pivot),
        cell_name(pincer_a),
        cell_name(pincer_b),
        x,
        y,
        z
    )
}

pub fn xyz_wing(pivot: u8, pincer_a: u8, pincer_b: u8, x: u8, y: u8, z: u8) -> String {
    format!(
        "the pivot {} and the pincers {} and {} form an XYZ-Wing with xyz={}{}{}",
        cell_name(pivot),
        cell_name(pincer_a),
        cell_name(pincer_b),
        x,
        y,
        z
    )
}

pub fn w_wing(cell_a: u8, cell_b: u8, link_a: u8, link_b: u8, linked: u8, other: u8) -> String {
    format!(
        "{} -{}- {} ={}= {} -{}- {} form a W-Wing",
        cell_name(cell_a),
        other,
        cell_name(link_a),
        linked,
        cell_name(link_b),
        other,
        cell_name(cell_b)
    )
}

pub fn chain_contradiction(cell: u8, digit: u8) -> String {
    format!(
        "assuming {} is {} leads to a contradiction",
        cell_name(cell),
        digit
    )
}

pub fn chain_house_contradiction(cell: u8, digit: u8, house: usize) -> String {
    format!(
        "assuming {} in {} is placed at {} leads to a contradiction",
        digit,
        house_name(house),
        cell_name(cell)
    )
}

pub fn chain_survivor(cell: u8, digit: u8) -> String {
    format!(
        "every other candidate of {} leads to a contradiction, so it must be {}",
        cell_name(cell),
        digit
    )
}
