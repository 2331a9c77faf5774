use crate::{
    tracker::{
        BuildContext, TrackerSheet,
        formula::{if_text, sheet_cell, sheet_range},
        layout::{
            ENERGY_COL, FIRST_RECORD_ROW, Habit, INFLUENCE_COL, PATH_A_COL, TASK1_DONE_COL,
            WEEKDAYS,
        },
        sheets::{
            A, B, C, D, E, F, G, I, J,
            analytics::{AVERAGE_SCORE_ROW, WINDOW_FIRST_ROW},
            set_widths,
        },
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

pub const METRICS_FIRST_ROW: u32 = 7;
pub const HABIT_GRID_HEADER_ROW: u32 = 16;
/// Value seeded into every habit/day cell until real scores replace it.
pub const HABIT_PLACEHOLDER: f64 = 5.0;
const BACKGROUND: CellRange = CellRange {
    first_row: 1,
    first_col: A,
    last_row: 25,
    last_col: J,
};

const INSIGHTS: [&str; 6] = [
    "Performance Optimization: Review and apply insights from 'AI Insights' tab",
    "Energy Management: Track patterns in your energy scores",
    "Focus Areas: Identify lowest-scoring habits for improvement",
    "Consistency Check: Maintain daily journal entries for best insights",
    "Weekly Review: Complete Sunday reviews for pattern recognition",
    "Path Balance: Monitor 70/30 split between Path A and Path B",
];

/// (label, formula, unit suffix) rows of the performance snapshot.
fn metrics() -> [(&'static str, String, &'static str); 6] {
    let journal = TrackerSheet::DailyJournal.title();
    let analytics = TrackerSheet::PerformanceAnalytics.title();
    let today = FIRST_RECORD_ROW;
    let first_week = CellRange::new(today, TASK1_DONE_COL, today + 6, TASK1_DONE_COL);
    let latest = sheet_cell(analytics, WINDOW_FIRST_ROW, I);
    let previous = sheet_cell(analytics, WINDOW_FIRST_ROW + 1, I);

    [
        (
            "Daily Performance Score",
            format!("={}", sheet_cell(analytics, AVERAGE_SCORE_ROW, C)),
            "/10",
        ),
        (
            "Energy Level",
            format!("={}", sheet_cell(journal, today, ENERGY_COL)),
            "/10",
        ),
        (
            "Weekly Goals Progress",
            format!(
                "=COUNTIF({},\"Y\")/7*100",
                sheet_range(journal, first_week)
            ),
            "%",
        ),
        (
            "Leadership Impact",
            format!("={}", sheet_cell(journal, today, INFLUENCE_COL)),
            "/10",
        ),
        (
            "Work-Life Balance",
            format!("=(100-ABS({}-70))", sheet_cell(journal, today, PATH_A_COL)),
            "%",
        ),
        (
            "Trend",
            format!(
                "=IF({latest}>{previous},\"Rising\",{})",
                if_text(&format!("{latest}<{previous}"), "Falling", "Stable"),
            ),
            "",
        ),
    ]
}

pub fn build(sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
    set_widths(
        sheet,
        &[(A, 5.0), (B, 25.0), (C, 15.0), (D, 12.0), (E, 5.0), (F, 25.0), (G, 45.0)],
    );

    sheet.write_with_style(2, B, "HIGH PERFORMANCE TAKEOFF TRACKER", &theme.title);
    sheet.merge(CellRange::row(2, B, D));
    sheet.write_with_style(
        3,
        B,
        "\"The becoming is the point.\" - J. Fraser",
        &theme.subtitle,
    );
    sheet.merge(CellRange::row(3, B, D));

    let today = ctx.today;
    sheet.write_with_style(4, B, format!("Date: {}", today.long_date()), &theme.normal);
    sheet.write_with_style(4, C, format!("Week: {}", today.iso_week()), &theme.normal);
    sheet.write_with_style(4, D, today.quarter(), &theme.normal);

    sheet.write_with_style(6, B, "PERFORMANCE SNAPSHOT", &theme.header);
    sheet.merge(CellRange::row(6, B, D));

    let value_style = theme.highlight();
    for (row, (label, formula, suffix)) in (METRICS_FIRST_ROW..).zip(metrics()) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write_with_style(row, C, CellValue::formula(formula), &value_style);
        sheet.write_with_style(row, D, suffix, &theme.normal);
    }

    sheet.write_with_style(6, F, "AI INSIGHTS & RECOMMENDATIONS", &theme.header);
    sheet.merge(CellRange::row(6, F, G));
    for (n, (row, insight)) in (METRICS_FIRST_ROW..).zip(INSIGHTS).enumerate() {
        sheet.write_with_style(row, F, format!("{}.", n + 1), &theme.normal);
        sheet.write_with_style(row, G, insight, &theme.normal);
    }

    sheet.write_with_style(15, B, "WEEKLY HABIT SCORES", &theme.header);
    let day_style = Theme::accent(10, true, PaletteColor::AccentTeal);
    for (col, day) in (C..).zip(WEEKDAYS) {
        sheet.write_with_style(HABIT_GRID_HEADER_ROW, col, day, &day_style);
    }
    for (row, habit) in (HABIT_GRID_HEADER_ROW + 1..).zip(Habit::ALL) {
        sheet.write_with_style(row, B, habit.label(), &theme.normal);
        for col in C..C + WEEKDAYS.len() as u32 {
            sheet.write_with_style(row, col, HABIT_PLACEHOLDER, &theme.normal);
        }
    }

    sheet.fill_range(BACKGROUND, &theme.background_fill);
}
