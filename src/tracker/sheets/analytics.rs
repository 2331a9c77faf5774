//! Rolling 30-day window over the Daily Journal plus summary metrics.
//!
//! Window row `r` mirrors journal row `r - 4`, so row 6 is the first record.
//! Empty journal dates show as blank rather than as date zero.
//! Habit columns C..H follow [`Habit::ALL`]; I is the overall score.

use crate::{
    tracker::{
        TrackerSheet,
        formula::{column_range, range, sheet_cell},
        layout::{DATE_COL, FIRST_RECORD_ROW, Habit},
        sheets::{A, B, C, D, F, H, I, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

pub const WINDOW_FIRST_ROW: u32 = 6;
pub const WINDOW_LAST_ROW: u32 = 35;
/// Per-column 30-day average, feeding the best/worst habit lookups.
pub const AVERAGE_ROW: u32 = 36;
/// Average Daily Score; referenced from the dashboard and AI Insights.
pub const AVERAGE_SCORE_ROW: u32 = 39;

const HEADING_ROW: u32 = WINDOW_FIRST_ROW - 1;
const DATE_FORMAT: &str = "yyyy-mm-dd";

fn window(col: u32) -> String {
    column_range(col, WINDOW_FIRST_ROW, WINDOW_LAST_ROW)
}

fn key_metrics() -> [(&'static str, String); 5] {
    let habit_labels = range(HEADING_ROW, C, HEADING_ROW, H);
    let habit_averages = range(AVERAGE_ROW, C, AVERAGE_ROW, H);
    let pick = |agg: &str| {
        format!("=INDEX({habit_labels},MATCH({agg}({habit_averages}),{habit_averages},0))")
    };
    [
        ("Average Daily Score:", format!("=AVERAGE({})", window(I))),
        ("Best Performing Habit:", pick("MAX")),
        ("Improvement Opportunity:", pick("MIN")),
        (
            "Consistency Score:",
            format!(
                "=COUNTA({})/{}*100",
                window(B),
                WINDOW_LAST_ROW - WINDOW_FIRST_ROW + 1
            ),
        ),
        (
            "Weekly Trend:",
            format!(
                "=IF(AVERAGE({})>AVERAGE({}),\"Improving\",\"Needs Focus\")",
                column_range(I, WINDOW_FIRST_ROW, WINDOW_FIRST_ROW + 6),
                column_range(I, WINDOW_FIRST_ROW + 7, WINDOW_FIRST_ROW + 13),
            ),
        ),
    ]
}

pub fn build(sheet: &mut Sheet, theme: &Theme) {
    let mut widths: Vec<(u32, f64)> = (A..=I).map(|col| (col, 15.0)).collect();
    widths.push((B, 20.0));
    set_widths(sheet, &widths);

    sheet.write_with_style(2, B, "PERFORMANCE ANALYTICS", &theme.title);
    sheet.merge(CellRange::row(2, B, H));

    sheet.write_with_style(4, B, "PERFORMANCE TRENDS (Last 30 Days)", &theme.header);
    let heading = theme.table_heading(11, PaletteColor::AccentTeal);
    let headings = std::iter::once("Date")
        .chain(Habit::ALL.map(Habit::label))
        .chain(std::iter::once("Overall"));
    for (col, label) in (B..).zip(headings) {
        sheet.write_with_style(HEADING_ROW, col, label, &heading);
    }

    let journal = TrackerSheet::DailyJournal.title();
    let date_style = theme.normal.clone().custom_format(DATE_FORMAT);
    let record_offset = WINDOW_FIRST_ROW - FIRST_RECORD_ROW;
    for row in WINDOW_FIRST_ROW..=WINDOW_LAST_ROW {
        let source = sheet_cell(journal, row - record_offset, DATE_COL);
        let date = format!("=IF(ISBLANK({source}),\"\",{source})");
        sheet.write_with_style(row, B, CellValue::formula(date), &date_style);
    }

    sheet.write_with_style(AVERAGE_ROW, B, "30-Day Average", &theme.normal);
    let value_style = theme.highlight();
    for col in C..=I {
        let avg = CellValue::formula(format!("=AVERAGE({})", window(col)));
        sheet.write_with_style(AVERAGE_ROW, col, avg, &value_style);
    }

    sheet.write_with_style(38, B, "KEY METRICS", &theme.header);
    for (row, (label, formula)) in (AVERAGE_SCORE_ROW..).zip(key_metrics()) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write_with_style(row, C, CellValue::formula(formula), &value_style);
    }

    sheet.write_with_style(46, B, "TREND ANALYSIS", &theme.header);
    let correlations = [
        ("Energy vs Productivity Correlation:", D, F),
        ("Clarity vs Overall Correlation:", C, I),
    ];
    for (row, (label, x, y)) in (47..).zip(correlations) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write(
            row,
            C,
            CellValue::formula(format!("=CORREL({},{})", window(x), window(y))),
        );
    }
}
