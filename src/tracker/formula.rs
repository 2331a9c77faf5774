//! Builds formula text. Nothing here parses or checks a formula; the
//! spreadsheet application evaluates them.

use crate::workbook::address::{CellRange, cell_ref};

/// `'Sheet Name'!B2`. Sheet names are always quoted; embedded apostrophes
/// are doubled.
pub fn sheet_cell(sheet: &str, row: u32, col: u32) -> String {
    format!("{}!{}", quote_sheet(sheet), cell_ref(row, col))
}

/// `'Sheet Name'!AV2:AV8`
pub fn sheet_range(sheet: &str, range: CellRange) -> String {
    format!("{}!{}", quote_sheet(sheet), range)
}

/// `AC2:AH2` style range inside the current sheet.
pub fn range(first_row: u32, first_col: u32, last_row: u32, last_col: u32) -> String {
    CellRange::new(first_row, first_col, last_row, last_col).to_string()
}

/// Vertical run of one column.
pub fn column_range(col: u32, first_row: u32, last_row: u32) -> String {
    range(first_row, col, last_row, col)
}

/// `IF(cond,"a","b")` with both branches as string literals.
pub fn if_text(condition: &str, when_true: &str, when_false: &str) -> String {
    format!(
        "IF({condition},{},{})",
        string_literal(when_true),
        string_literal(when_false)
    )
}

pub fn string_literal(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

fn quote_sheet(sheet: &str) -> String {
    format!("'{}'", sheet.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sheet_refs() {
        assert_eq!(sheet_cell("Daily Journal", 2, 30), "'Daily Journal'!AD2");
        assert_eq!(
            sheet_range("Daily Journal", CellRange::new(2, 48, 8, 48)),
            "'Daily Journal'!AV2:AV8"
        );
        assert_eq!(sheet_cell("Bob's", 1, 1), "'Bob''s'!A1");
    }

    #[test]
    fn test_local_ranges() {
        assert_eq!(range(2, 29, 2, 34), "AC2:AH2");
        assert_eq!(column_range(9, 6, 35), "I6:I35");
    }

    #[test]
    fn test_if_text() {
        assert_eq!(
            if_text("J22<7", "Focus", "Say \"go\""),
            r#"IF(J22<7,"Focus","Say ""go""")"#
        );
    }
}
