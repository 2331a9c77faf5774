use crate::{
    tracker::{
        BuildContext,
        formula::range,
        layout::{
            DATE_COL, DAY_COL, FIRST_HABIT_COL, FIRST_RECORD_ROW, JOURNAL_COLUMNS, LAST_HABIT_COL,
            OVERALL_COL, QUARTER_COL, WEEK_COL,
        },
        sheets::A,
        theme::Theme,
    },
    workbook::{cell::CellValue, sheet::Sheet},
};

const HEADER_ROW: u32 = 1;

pub fn build(sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
    let heading = theme.header.clone().fill(theme.header_fill.clone());
    for (col, column) in (1..).zip(JOURNAL_COLUMNS.iter()) {
        sheet.write_with_style(HEADER_ROW, col, column.header, &heading);
        sheet.set_column_width(col, column.width);
    }

    // Seed record for the run date.
    let row = FIRST_RECORD_ROW;
    let today = ctx.today;
    sheet.write(row, DATE_COL, today.date());
    sheet.write(row, DAY_COL, today.weekday_name());
    sheet.write(row, WEEK_COL, today.iso_week());
    sheet.write(row, QUARTER_COL, today.quarter());
    sheet.write(
        row,
        OVERALL_COL,
        CellValue::formula(format!(
            "=AVERAGE({})",
            range(row, FIRST_HABIT_COL, row, LAST_HABIT_COL)
        )),
    );

    sheet.freeze_panes(FIRST_RECORD_ROW, A);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::tracker::sheets::test_support::{built, formula, text};

    #[test]
    fn test_header_row_and_widths() {
        let sheet = built(build);
        for (i, column) in JOURNAL_COLUMNS.iter().enumerate() {
            let col = i as u32 + 1;
            assert_eq!(text(&sheet, 1, col), column.header);
            assert_eq!(sheet.column_width(col), Some(column.width));
        }
        assert_eq!(sheet.cell(1, 56), None);
        let style = sheet.style_at(1, 5).unwrap();
        assert!(style.font.bold);
        assert_eq!(style.fill, Theme::standard().header_fill);
    }

    #[test]
    fn test_seed_record() {
        let sheet = built(build);
        assert_eq!(
            sheet.cell(2, 1),
            Some(&CellValue::Date(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()))
        );
        assert_eq!(text(&sheet, 2, 2), "Friday");
        assert_eq!(sheet.cell(2, 3), Some(&CellValue::Number(42.0)));
        assert_eq!(text(&sheet, 2, 4), "Q4");
        assert_eq!(formula(&sheet, 2, 35), "=AVERAGE(AC2:AH2)");
        // Everything else in the record is left for the user.
        assert_eq!(sheet.cell(2, 5), None);
        assert_eq!(sheet.cell(2, 55), None);
        assert_eq!(sheet.cell(3, 1), None);
    }

    #[test]
    fn test_header_row_frozen() {
        let sheet = built(build);
        assert_eq!(sheet.frozen_at(), Some((2, 1)));
    }
}
