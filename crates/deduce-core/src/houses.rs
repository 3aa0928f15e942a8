//! Static house topology for the 9x9 grid.
//!
//! House index convention: 0..=8 rows, 9..=17 columns, 18..=26 boxes.
//! The tables are `const`-built once and shared read-only.

use crate::cellset::CellSet;

pub const ROW_BASE: usize = 0;
pub const COL_BASE: usize = 9;
pub const BOX_BASE: usize = 18;
pub const HOUSE_COUNT: usize = 27;

#[inline]
pub const fn cell_index(row: usize, col: usize) -> u8 {
    (row * 9 + col) as u8
}

#[inline]
pub const fn row_of(cell: u8) -> usize {
    cell as usize / 9
}

#[inline]
pub const fn col_of(cell: u8) -> usize {
    cell as usize % 9
}

#[inline]
pub const fn box_of(cell: u8) -> usize {
    (row_of(cell) / 3) * 3 + col_of(cell) / 3
}

const fn build_house_cells() -> [CellSet; 27] {
    let mut houses = [CellSet::EMPTY; 27];
    let mut cell = 0u8;
    while cell < 81 {
        let row = row_of(cell);
        let col = col_of(cell);
        let bx = box_of(cell);
        houses[ROW_BASE + row] = houses[ROW_BASE + row].with(cell);
        houses[COL_BASE + col] = houses[COL_BASE + col].with(cell);
        houses[BOX_BASE + bx] = houses[BOX_BASE + bx].with(cell);
        cell += 1;
    }
    houses
}

const fn build_peers() -> [CellSet; 81] {
    let houses = build_house_cells();
    let mut peers = [CellSet::EMPTY; 81];
    let mut cell = 0u8;
    while cell < 81 {
        let row_set = houses[ROW_BASE + row_of(cell)];
        let col_set = houses[COL_BASE + col_of(cell)];
        let box_set = houses[BOX_BASE + box_of(cell)];
        peers[cell as usize] =
            CellSet::from_bits(row_set.bits() | col_set.bits() | box_set.bits()).without(cell);
        cell += 1;
    }
    peers
}

/// The 9 rows, 9 columns, and 9 boxes as cell sets.
pub static HOUSE_CELLS: [CellSet; 27] = build_house_cells();

/// The 20 cells sharing a house with each cell, excluding the cell itself.
pub static PEERS: [CellSet; 81] = build_peers();

/// The exactly three houses containing a cell: row, column, box.
#[inline]
pub fn houses_of_cell(cell: u8) -> [usize; 3] {
    [
        ROW_BASE + row_of(cell),
        COL_BASE + col_of(cell),
        BOX_BASE + box_of(cell),
    ]
}

/// Peers of a cell as a set.
#[inline]
pub fn peers(cell: u8) -> CellSet {
    PEERS[cell as usize]
}

/// Cells of a house as a set.
#[inline]
pub fn house_cells(house: usize) -> CellSet {
    HOUSE_CELLS[house]
}

/// Short house name: `r3`, `c7`, `b5`.
pub fn house_name(house: usize) -> String {
    if house < COL_BASE {
        format!("r{}", house - ROW_BASE + 1)
    } else if house < BOX_BASE {
        format!("c{}", house - COL_BASE + 1)
    } else {
        format!("b{}", house - BOX_BASE + 1)
    }
}

/// The cell where a row-or-column house crosses a column-or-row house.
pub fn crossing_cell(line_a: usize, line_b: usize) -> u8 {
    let (row, col) = if line_a < COL_BASE {
        (line_a - ROW_BASE, line_b - COL_BASE)
    } else {
        (line_b - ROW_BASE, line_a - COL_BASE)
    };
    cell_index(row, col)
}
