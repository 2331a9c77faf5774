//! One builder per sheet. Each takes the shared theme and writes its layout
//! into an empty [`Sheet`](crate::workbook::sheet::Sheet).

pub mod analytics;
pub mod dashboard;
pub mod insights;
pub mod journal;
pub mod monthly;
pub mod settings;
pub mod vision;
pub mod weekly;

// Column numbers for the hand-laid sheets.
pub(crate) const A: u32 = 1;
pub(crate) const B: u32 = 2;
pub(crate) const C: u32 = 3;
pub(crate) const D: u32 = 4;
pub(crate) const E: u32 = 5;
pub(crate) const F: u32 = 6;
pub(crate) const G: u32 = 7;
pub(crate) const H: u32 = 8;
pub(crate) const I: u32 = 9;
pub(crate) const J: u32 = 10;

use crate::workbook::sheet::Sheet;

pub(crate) fn set_widths(sheet: &mut Sheet, widths: &[(u32, f64)]) {
    for &(col, width) in widths {
        sheet.set_column_width(col, width);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::{
        UserProfile,
        tracker::{BuildContext, calendar::RunDate, theme::Theme},
        workbook::{builder::WorkbookBuilder, cell::CellValue, sheet::Sheet},
    };

    pub fn run_date() -> RunDate {
        RunDate(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    /// Runs `build` against a fresh sheet.
    pub fn built(build: impl FnOnce(&mut Sheet, &Theme, &BuildContext)) -> Sheet {
        let profile = UserProfile::default();
        let ctx = BuildContext {
            today: run_date(),
            profile: &profile,
        };
        let mut wb = WorkbookBuilder::new("unused.xlsx")
            .set_sheets(["Test"])
            .build()
            .unwrap();
        let sheet = wb.get_sheet("Test").unwrap();
        build(sheet, &Theme::standard(), &ctx);
        sheet.clone()
    }

    pub fn text(sheet: &Sheet, row: u32, col: u32) -> &str {
        match sheet.cell(row, col) {
            Some(CellValue::Text(t)) => t,
            other => panic!("expected text at ({row},{col}), got {other:?}"),
        }
    }

    pub fn formula(sheet: &Sheet, row: u32, col: u32) -> &str {
        match sheet.cell(row, col) {
            Some(CellValue::Formula(f)) => f,
            other => panic!("expected formula at ({row},{col}), got {other:?}"),
        }
    }
}
