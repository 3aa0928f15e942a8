use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::cell_name;

/// The closed set of technique tags a deduction can be attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Technique {
    // Singles
    FullHouse,
    NakedSingle,
    HiddenSingle,

    // Intersections
    LockedCandidates,

    // Subsets
    NakedSubset,
    HiddenSubset,

    // Fish
    BasicFish,
    FinnedFish,
    FrankenFish,
    MutantFish,

    // Single-digit patterns
    Skyscraper,
    TwoStringKite,
    RectangleElimination,

    // Wings
    XYWing,
    XYZWing,
    WWing,

    // Chains
    ForcingChain,
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Technique::FullHouse => write!(f, "Full House"),
            Technique::NakedSingle => write!(f, "Naked Single"),
            Technique::HiddenSingle => write!(f, "Hidden Single"),
            Technique::LockedCandidates => write!(f, "Locked Candidates"),
            Technique::NakedSubset => write!(f, "Naked Subset"),
            Technique::HiddenSubset => write!(f, "Hidden Subset"),
            Technique::BasicFish => write!(f, "Basic Fish"),
            Technique::FinnedFish => write!(f, "Finned Fish"),
            Technique::FrankenFish => write!(f, "Franken Fish"),
            Technique::MutantFish => write!(f, "Mutant Fish"),
            Technique::Skyscraper => write!(f, "Skyscraper"),
            Technique::TwoStringKite => write!(f, "2-String Kite"),
            Technique::RectangleElimination => write!(f, "Rectangle Elimination"),
            Technique::XYWing => write!(f, "XY-Wing"),
            Technique::XYZWing => write!(f, "XYZ-Wing"),
            Technique::WWing => write!(f, "W-Wing"),
            Technique::ForcingChain => write!(f, "Forcing Chain"),
        }
    }
}

/// One atomic deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// Set a value; the digit must be in the cell's mask.
    Place { cell: u8, digit: u8 },
    /// Remove a digit from a cell's mask.
    Eliminate { cell: u8, digit: u8 },
}

impl Step {
    pub fn cell(&self) -> u8 {
        match *self {
            Step::Place { cell, .. } | Step::Eliminate { cell, .. } => cell,
        }
    }

    pub fn digit(&self) -> u8 {
        match *self {
            Step::Place { digit, .. } | Step::Eliminate { digit, .. } => digit,
        }
    }
}

/// A bundle of steps attributed to one technique, with the pattern that
/// justified them rendered as a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub technique: Technique,
    pub steps: Vec<Step>,
    pub explanation: String,
}

impl Action {
    pub fn new(technique: Technique, explanation: String) -> Self {
        Action {
            technique,
            steps: Vec::new(),
            explanation,
        }
    }

    pub fn place(mut self, cell: u8, digit: u8) -> Self {
        self.steps.push(Step::Place { cell, digit });
        self
    }

    pub fn eliminate(mut self, cell: u8, digit: u8) -> Self {
        self.steps.push(Step::Eliminate { cell, digit });
        self
    }

    pub fn push_place(&mut self, cell: u8, digit: u8) {
        self.steps.push(Step::Place { cell, digit });
    }

    pub fn push_eliminate(&mut self, cell: u8, digit: u8) {
        self.steps.push(Step::Eliminate { cell, digit });
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl fmt::Display for Action {
    /// One line per step: `[Tag] reason => rXcY=D` or `[Tag] reason => rXcY<>D`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, step) in self.steps.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            match *step {
                Step::Place { cell, digit } => write!(
                    f,
                    "[{:?}] {} => {}={}",
                    self.technique,
                    self.explanation,
                    cell_name(cell),
                    digit
                )?,
                Step::Eliminate { cell, digit } => write!(
                    f,
                    "[{:?}] {} => {}<>{}",
                    self.technique,
                    self.explanation,
                    cell_name(cell),
                    digit
                )?,
            }
        }
        Ok(())
    }
}
