use crate::{
    tracker::{
        BuildContext, TrackerSheet,
        formula::{sheet_cell, sheet_range},
        layout::{DATE_COL, Domain, FIRST_RECORD_ROW, OVERALL_COL},
        sheets::{A, B, C, D, E, insights::RECOMMENDATIONS_FIRST_ROW, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

/// Journal rows covered by one month of records.
const MONTH_DAYS: u32 = 31;

fn scorecard() -> [(&'static str, CellValue, &'static str); 4] {
    let journal = TrackerSheet::DailyJournal.title();
    let last_row = FIRST_RECORD_ROW + MONTH_DAYS - 1;
    let month = |col| CellRange::new(FIRST_RECORD_ROW, col, last_row, col);
    [
        (
            "Average Daily Performance:",
            CellValue::formula(format!(
                "=AVERAGE({})",
                sheet_range(journal, month(OVERALL_COL))
            )),
            "%",
        ),
        (
            "Consistency (days completed):",
            CellValue::formula(format!("=COUNTA({})", sheet_range(journal, month(DATE_COL)))),
            "/31",
        ),
        ("Best Week:", CellValue::text("Week 1"), ""),
        ("Improvement from Last Month:", CellValue::text("+0"), "%"),
    ]
}

pub fn build(sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
    set_widths(sheet, &[(A, 5.0), (B, 25.0), (C, 20.0), (D, 20.0), (E, 20.0)]);

    sheet.write_with_style(2, B, "MONTHLY REVIEW", &theme.title);
    sheet.write_with_style(4, B, "Month:", &theme.normal);
    sheet.write_with_style(
        4,
        C,
        ctx.today.month_year(),
        &Theme::accent(14, true, PaletteColor::AccentGold),
    );

    sheet.write_with_style(6, B, "MONTHLY SCORECARD", &theme.header);
    let value_style = theme.highlight();
    for (row, (label, value, suffix)) in (7..).zip(scorecard()) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write_with_style(row, C, value, &value_style);
        sheet.write(row, D, suffix);
    }

    sheet.write_with_style(13, B, "DOMAIN PROGRESS", &theme.header);
    for (row, domain) in (14..).zip(Domain::ALL) {
        sheet.write_with_style(row, B, domain.label(), &theme.normal);
        sheet.write(row, C, "0%");
        sheet.write(row, D, "of monthly target");
    }

    sheet.write_with_style(22, B, "WINS OF THE MONTH", &theme.header);
    for (n, row) in (23..=25).enumerate() {
        sheet.write_with_style(row, B, format!("{}.", n + 1), &theme.normal);
        sheet.write(row, C, "");
    }

    // Stress Management recommendation on AI Insights.
    let focus = sheet_cell(
        TrackerSheet::AiInsights.title(),
        RECOMMENDATIONS_FIRST_ROW + 1,
        C,
    );
    sheet.write_with_style(28, B, "FOCUS AREAS FOR NEXT MONTH", &theme.header);
    sheet.write(29, C, CellValue::formula(format!("={focus}")));
}
