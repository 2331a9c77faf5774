//! A1-style addressing. Rows and columns are 1-based everywhere in the crate.

use std::fmt;

/// Column number (A = 1) to its letters. Column 0 does not exist.
pub fn col_to_letters(col: u32) -> String {
    debug_assert!(col > 0, "columns are 1-based");
    let mut col = col.saturating_sub(1);
    let mut result = Vec::new();
    loop {
        result.push(char::from(b'A' + (col % 26) as u8));
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    result.iter().rev().collect()
}

/// Column letters to the column number (A = 1). Returns `None` for anything
/// that is not a run of ASCII letters, or that does not fit in a `u32`.
pub fn letters_to_col(letters: &str) -> Option<u32> {
    if letters.is_empty() || !letters.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    letters.bytes().try_fold(0u32, |acc, b| {
        acc.checked_mul(26)?
            .checked_add(u32::from(b.to_ascii_uppercase() - b'A') + 1)
    })
}

pub fn cell_ref(row: u32, col: u32) -> String {
    format!("{}{}", col_to_letters(col), row)
}

/// Splits "AB12" into (row 12, col 28).
pub fn parse_cell_ref(s: &str) -> Option<(u32, u32)> {
    let digits_at = s.find(|c: char| c.is_ascii_digit())?;
    let (letters, digits) = s.split_at(digits_at);
    let col = letters_to_col(letters)?;
    let row: u32 = digits.parse().ok()?;
    (row > 0).then_some((row, col))
}

/// Inclusive rectangular range of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellRange {
    pub first_row: u32,
    pub first_col: u32,
    pub last_row: u32,
    pub last_col: u32,
}

impl CellRange {
    pub fn new(first_row: u32, first_col: u32, last_row: u32, last_col: u32) -> Self {
        CellRange {
            first_row: first_row.min(last_row),
            first_col: first_col.min(last_col),
            last_row: first_row.max(last_row),
            last_col: first_col.max(last_col),
        }
    }

    pub fn row(row: u32, first_col: u32, last_col: u32) -> Self {
        CellRange::new(row, first_col, row, last_col)
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.split_once(':') {
            Some((a, b)) => {
                let (r1, c1) = parse_cell_ref(a)?;
                let (r2, c2) = parse_cell_ref(b)?;
                Some(CellRange::new(r1, c1, r2, c2))
            }
            None => {
                let (r, c) = parse_cell_ref(s)?;
                Some(CellRange::new(r, c, r, c))
            }
        }
    }

    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.first_row <= other.last_row
            && other.first_row <= self.last_row
            && self.first_col <= other.last_col
            && other.first_col <= self.last_col
    }

    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        (self.first_row..=self.last_row)
            .flat_map(move |r| (self.first_col..=self.last_col).map(move |c| (r, c)))
    }
}

impl fmt::Display for CellRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = cell_ref(self.first_row, self.first_col);
        if self.first_row == self.last_row && self.first_col == self.last_col {
            write!(f, "{start}")
        } else {
            write!(f, "{start}:{}", cell_ref(self.last_row, self.last_col))
        }
    }
}
