//! Board state: given clues, placed values, and candidate masks.
//!
//! The per-cell masks and the inverted `cells_with_candidate` index are two
//! views of the same truth; every mutation goes through [`Board::place`] /
//! [`Board::eliminate`], which keep both in sync with O(1) bit operations.

use crate::cellset::{CellSet, DigitSet};
use crate::error::SolverError;
use crate::houses::{self, house_cells, house_name, peers, HOUSE_COUNT};
use crate::solver::{Action, Step};

use itertools::Itertools;

/// Short cell name: `r5c7` (1-based).
pub fn cell_name(cell: u8) -> String {
    format!("r{}c{}", houses::row_of(cell) + 1, houses::col_of(cell) + 1)
}

#[derive(Debug, Clone)]
pub struct Board {
    values: [Option<u8>; 81],
    given: [bool; 81],
    candidates: [DigitSet; 81],
    /// cells_with_candidate[d-1]: empty cells whose mask contains d.
    positions: [CellSet; 9],
    unfilled: CellSet,
}

impl Board {
    fn blank() -> Self {
        Board {
            values: [None; 81],
            given: [false; 81],
            candidates: [DigitSet::EMPTY; 81],
            positions: [CellSet::EMPTY; 9],
            unfilled: CellSet::ALL,
        }
    }

    /// Parse a value string: 81 characters row-major, `.` or `0` for empty,
    /// `1`..`9` for a given.
    pub fn from_values(s: &str) -> Result<Self, SolverError> {
        let mut board = Board::blank();
        let mut idx = 0usize;
        for ch in s.chars() {
            if idx >= 81 {
                return Err(SolverError::Parse(format!(
                    "value string longer than 81 cells: {s:?}"
                )));
            }
            match ch {
                '.' | '0' => {}
                '1'..='9' => {
                    let cell = idx as u8;
                    board.values[idx] = Some(ch as u8 - b'0');
                    board.given[idx] = true;
                    board.unfilled = board.unfilled.without(cell);
                }
                _ => {
                    return Err(SolverError::Parse(format!(
                        "unexpected character {ch:?} at cell {idx}"
                    )))
                }
            }
            idx += 1;
        }
        if idx != 81 {
            return Err(SolverError::Parse(format!(
                "value string has {idx} cells, expected 81"
            )));
        }
        Ok(board)
    }

    /// Parse an ASCII candidate grid: exactly 81 digit runs separated by
    /// non-digit characters. A one-digit run is a given, a longer run the
    /// candidate mask of an empty cell.
    pub fn from_candidate_grid(s: &str) -> Result<Self, SolverError> {
        let mut runs: Vec<DigitSet> = Vec::with_capacity(81);
        let mut current = DigitSet::EMPTY;
        let mut in_run = false;
        for ch in s.chars() {
            match ch {
                '1'..='9' => {
                    current = current.with(ch as u8 - b'0');
                    in_run = true;
                }
                '0' => {
                    return Err(SolverError::Parse(
                        "candidate grid may not contain 0".into(),
                    ))
                }
                _ => {
                    if in_run {
                        runs.push(current);
                        current = DigitSet::EMPTY;
                        in_run = false;
                    }
                }
            }
        }
        if in_run {
            runs.push(current);
        }
        if runs.len() != 81 {
            return Err(SolverError::Parse(format!(
                "candidate grid has {} runs, expected 81",
                runs.len()
            )));
        }

        let mut board = Board::blank();
        for (idx, run) in runs.into_iter().enumerate() {
            let cell = idx as u8;
            if let Some(digit) = run.single_digit() {
                board.values[idx] = Some(digit);
                board.given[idx] = true;
                board.unfilled = board.unfilled.without(cell);
            } else {
                board.candidates[idx] = run;
                for digit in run.iter() {
                    board.positions[digit as usize - 1] =
                        board.positions[digit as usize - 1].with(cell);
                }
            }
        }
        Ok(board)
    }

    /// Row-major value string with `.` for empty cells.
    pub fn to_value_string(&self) -> String {
        self.values
            .iter()
            .map(|v| match v {
                Some(d) => char::from(b'0' + d),
                None => '.',
            })
            .collect()
    }

    /// Box-bordered ASCII candidate grid; the inverse of
    /// [`Board::from_candidate_grid`].
    pub fn to_candidate_string(&self) -> String {
        let runs: Vec<String> = (0..81u8)
            .map(|cell| match self.values[cell as usize] {
                Some(d) => d.to_string(),
                None => self.candidates[cell as usize].iter().join(""),
            })
            .collect();

        let col_widths: Vec<usize> = (0..9)
            .map(|col| {
                (0..9)
                    .map(|row| runs[houses::cell_index(row, col) as usize].len())
                    .max()
                    .unwrap()
                    + 1
            })
            .collect();

        let mut s = String::new();
        let push_border = |s: &mut String| {
            s.push('+');
            for (col, width) in col_widths.iter().enumerate() {
                for _ in 0..*width {
                    s.push('-');
                }
                if col % 3 == 2 {
                    s.push_str("-+");
                }
            }
            s.push('\n');
        };

        push_border(&mut s);
        for row in 0..9 {
            s.push('|');
            for col in 0..9 {
                let run = &runs[houses::cell_index(row, col) as usize];
                for _ in 0..col_widths[col] - run.len() {
                    s.push(' ');
                }
                s.push_str(run);
                if col % 3 == 2 {
                    s.push_str(" |");
                }
            }
            s.push('\n');
            if row % 3 == 2 {
                push_border(&mut s);
            }
        }
        s
    }

    /// Fill the mask of every empty cell with the digits unseen in its
    /// houses, rebuilding the inverted index. Idempotent.
    pub fn initialize_candidates(&mut self) {
        self.positions = [CellSet::EMPTY; 9];
        for cell in 0..81u8 {
            if self.values[cell as usize].is_some() {
                self.candidates[cell as usize] = DigitSet::EMPTY;
                continue;
            }
            let mut seen = DigitSet::EMPTY;
            for peer in peers(cell).iter() {
                if let Some(v) = self.values[peer as usize] {
                    seen = seen.with(v);
                }
            }
            let mask = seen.complement();
            self.candidates[cell as usize] = mask;
            for digit in mask.iter() {
                self.positions[digit as usize - 1] =
                    self.positions[digit as usize - 1].with(cell);
            }
        }
    }

    // ---- read-only accessors ----

    #[inline]
    pub fn value(&self, cell: u8) -> Option<u8> {
        self.values[cell as usize]
    }

    #[inline]
    pub fn is_given(&self, cell: u8) -> bool {
        self.given[cell as usize]
    }

    #[inline]
    pub fn candidates(&self, cell: u8) -> DigitSet {
        self.candidates[cell as usize]
    }

    #[inline]
    pub fn has_candidate(&self, cell: u8, digit: u8) -> bool {
        self.candidates[cell as usize].contains(digit)
    }

    /// Empty cells whose mask contains `digit`.
    #[inline]
    pub fn cells_with_candidate(&self, digit: u8) -> CellSet {
        self.positions[digit as usize - 1]
    }

    /// `cells_with_candidate(digit)` restricted to one house.
    #[inline]
    pub fn house_candidate_cells(&self, house: usize, digit: u8) -> CellSet {
        self.positions[digit as usize - 1] & house_cells(house)
    }

    #[inline]
    pub fn unfilled_cells(&self) -> CellSet {
        self.unfilled
    }

    pub fn is_solved(&self) -> bool {
        self.unfilled.is_empty()
    }

    // ---- mutation ----

    /// Place a digit. Fails with `InvalidPlacement` on a given/filled cell or
    /// a digit outside the mask, and with `Contradiction` (without mutating)
    /// when the placement would strip a peer of its last candidate.
    pub fn place(&mut self, cell: u8, digit: u8) -> Result<(), SolverError> {
        let idx = cell as usize;
        if self.given[idx] {
            return Err(SolverError::InvalidPlacement {
                cell: cell_name(cell),
                digit,
                reason: "cell is a given".into(),
            });
        }
        if self.values[idx].is_some() {
            return Err(SolverError::InvalidPlacement {
                cell: cell_name(cell),
                digit,
                reason: "cell is already filled".into(),
            });
        }
        if !self.candidates[idx].contains(digit) {
            return Err(SolverError::InvalidPlacement {
                cell: cell_name(cell),
                digit,
                reason: "digit is not a candidate".into(),
            });
        }

        let affected = peers(cell) & self.positions[digit as usize - 1];
        for peer in affected.iter() {
            if self.candidates[peer as usize] == DigitSet::single(digit) {
                return Err(SolverError::Contradiction(format!(
                    "placing {} at {} leaves {} without candidates",
                    digit,
                    cell_name(cell),
                    cell_name(peer)
                )));
            }
        }

        for d in self.candidates[idx].iter() {
            self.positions[d as usize - 1] = self.positions[d as usize - 1].without(cell);
        }
        self.candidates[idx] = DigitSet::EMPTY;
        self.values[idx] = Some(digit);
        self.unfilled = self.unfilled.without(cell);
        for peer in affected.iter() {
            self.candidates[peer as usize] = self.candidates[peer as usize].without(digit);
            self.positions[digit as usize - 1] =
                self.positions[digit as usize - 1].without(peer);
        }
        Ok(())
    }

    /// Remove a digit from a cell's mask. A digit already absent is a no-op;
    /// removing the last candidate is a contradiction and is refused.
    pub fn eliminate(&mut self, cell: u8, digit: u8) -> Result<(), SolverError> {
        let idx = cell as usize;
        if !self.candidates[idx].contains(digit) {
            return Ok(());
        }
        if self.candidates[idx] == DigitSet::single(digit) {
            return Err(SolverError::Contradiction(format!(
                "eliminating {} from {} leaves it without candidates",
                digit,
                cell_name(cell)
            )));
        }
        self.candidates[idx] = self.candidates[idx].without(digit);
        self.positions[digit as usize - 1] = self.positions[digit as usize - 1].without(cell);
        Ok(())
    }

    /// Apply an action's steps in recorded order, stopping at the first
    /// contradiction. Steps are atomic; the action is not.
    pub fn apply(&mut self, action: &Action) -> Result<(), SolverError> {
        for step in &action.steps {
            match *step {
                Step::Place { cell, digit } => self.place(cell, digit)?,
                Step::Eliminate { cell, digit } => self.eliminate(cell, digit)?,
            }
        }
        Ok(())
    }

    /// First violated invariant, if any: a duplicated value in a house, an
    /// empty mask on an unsolved cell, or a house with no remaining cell for
    /// an unplaced digit.
    pub fn find_contradiction(&self) -> Option<String> {
        for cell in self.unfilled.iter() {
            if self.candidates[cell as usize].is_empty() {
                return Some(format!("{} has no candidates left", cell_name(cell)));
            }
        }
        for house in 0..HOUSE_COUNT {
            let mut placed = DigitSet::EMPTY;
            for cell in house_cells(house).iter() {
                if let Some(v) = self.values[cell as usize] {
                    if placed.contains(v) {
                        return Some(format!(
                            "{} appears twice in {}",
                            v,
                            house_name(house)
                        ));
                    }
                    placed = placed.with(v);
                }
            }
            for digit in placed.complement().iter() {
                if self.house_candidate_cells(house, digit).is_empty() {
                    return Some(format!(
                        "no cell in {} can hold {}",
                        house_name(house),
                        digit
                    ));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    #[test]
    fn test_value_string_round_trip() {
        let board = Board::from_values(CLASSIC).unwrap();
        assert_eq!(board.to_value_string(), CLASSIC);
        assert!(board.is_given(0));
        assert_eq!(board.value(0), Some(5));
        assert_eq!(board.value(2), None);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Board::from_values(&CLASSIC[..80]),
            Err(SolverError::Parse(_))
        ));
        let long = format!("{CLASSIC}1");
        assert!(matches!(
            Board::from_values(&long),
            Err(SolverError::Parse(_))
        ));
        let bad = CLASSIC.replace('.', "x");
        assert!(matches!(
            Board::from_values(&bad),
            Err(SolverError::Parse(_))
        ));
    }

    #[test]
    fn test_initialize_candidates() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        // r1c3 sees 5, 3, 7 in its row, 9, 8 and 6 in its column and box.
        assert!(!board.has_candidate(2, 5));
        assert!(!board.has_candidate(2, 3));
        assert!(board.candidates(2).len() >= 1);

        // Index and masks agree.
        for digit in 1..=9 {
            for cell in board.cells_with_candidate(digit).iter() {
                assert!(board.has_candidate(cell, digit));
            }
        }
        assert!(board.find_contradiction().is_none());
    }

    #[test]
    fn test_initialize_candidates_idempotent() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();
        let masks: Vec<DigitSet> = (0..81).map(|c| board.candidates(c)).collect();
        board.initialize_candidates();
        let again: Vec<DigitSet> = (0..81).map(|c| board.candidates(c)).collect();
        assert_eq!(masks, again);
    }

    #[test]
    fn test_place_updates_both_views() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();

        // r5c5 is the classic naked single.
        let cell = houses::cell_index(4, 4);
        assert_eq!(board.candidates(cell).single_digit(), Some(5));
        board.place(cell, 5).unwrap();
        assert_eq!(board.value(cell), Some(5));
        assert!(board.candidates(cell).is_empty());
        assert!(!board.cells_with_candidate(5).contains(cell));
        for peer in peers(cell).iter() {
            assert!(!board.has_candidate(peer, 5));
        }
    }

    #[test]
    fn test_place_rejects_given() {
        let mut board = Board::from_values(CLASSIC).unwrap();
        board.initialize_candidates();
        assert!(matches!(
            board.place(0, 5),
            Err(SolverError::InvalidPlacement { .. })
        ));
    }

    #[test]
    fn test_place_detects_peer_contradiction_without_mutation() {
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        for digit in 2..=9 {
            board.eliminate(1, digit).unwrap();
        }
        assert_eq!(board.candidates(1).single_digit(), Some(1));

        let before = board.candidates(0);
        assert!(matches!(
            board.place(0, 1),
            Err(SolverError::Contradiction(_))
        ));
        assert_eq!(board.value(0), None);
        assert_eq!(board.candidates(0), before);
    }

    #[test]
    fn test_eliminate_last_candidate_is_refused() {
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        for digit in 2..=9 {
            board.eliminate(40, digit).unwrap();
        }
        assert!(matches!(
            board.eliminate(40, 1),
            Err(SolverError::Contradiction(_))
        ));
        // Absent digit is a no-op.
        board.eliminate(40, 9).unwrap();
    }

    #[test]
    fn test_candidate_grid_round_trip() {
        // A one-digit run reads back as a given, so round-trip over a board
        // whose empty cells all keep at least two candidates.
        let empty = ".".repeat(81);
        let mut board = Board::from_values(&empty).unwrap();
        board.initialize_candidates();
        for (cell, digit) in [(0u8, 1u8), (0, 5), (40, 2), (40, 7), (80, 9)] {
            board.eliminate(cell, digit).unwrap();
        }

        let s = board.to_candidate_string();
        let reparsed = Board::from_candidate_grid(&s).unwrap();
        for cell in 0..81 {
            assert_eq!(board.candidates(cell), reparsed.candidates(cell));
            assert_eq!(board.value(cell), reparsed.value(cell));
        }
        assert_eq!(reparsed.to_candidate_string(), s);
    }

    #[test]
    fn test_candidate_grid_wrong_run_count() {
        assert!(matches!(
            Board::from_candidate_grid("12 34 56"),
            Err(SolverError::Parse(_))
        ));
    }
}
