use crate::{
    tracker::{
        TrackerSheet,
        formula::sheet_range,
        layout::{Domain, FIRST_RECORD_ROW, PATH_A_COL},
        sheets::{A, B, C, D, E, F, G, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

pub const TABLE_HEADER_ROW: u32 = 4;
/// 7-day Path A average; the rest of the allocation panel is relative to it.
pub const PATH_A_AVERAGE_ROW: u32 = 14;
pub const PATH_A_TARGET: u32 = 70;

const HEADERS: [&str; 6] = [
    "Domain",
    "Target",
    "Current",
    "Progress %",
    "Last Updated",
    "Notes",
];

/// Target, current, progress, last updated, notes.
fn targets(domain: Domain) -> [&'static str; 5] {
    match domain {
        Domain::Money => ["$15K/month revenue", "$0", "0%", "", "5 -> 10 -> 20 clients"],
        Domain::Health => [
            "3x/week, 185-197 lbs",
            "0x/week",
            "0%",
            "",
            "Strength training focus",
        ],
        Domain::Career => [
            "Excellence + Legacy",
            "In Progress",
            "0%",
            "",
            "Build automation systems",
        ],
        Domain::Creative => [
            "4 books, 5K followers",
            "0 books",
            "0%",
            "",
            "SHIP IT! Path A focus",
        ],
        Domain::Love => [
            "12 date nights",
            "0 dates",
            "0%",
            "",
            "Presence over performance",
        ],
        Domain::InnerPeace => ["Daily practice", "0%", "0%", "", "The spiral continues"],
    }
}

pub fn build(sheet: &mut Sheet, theme: &Theme) {
    set_widths(
        sheet,
        &[
            (A, 5.0),
            (B, 25.0),
            (C, 25.0),
            (D, 15.0),
            (E, 12.0),
            (F, 15.0),
            (G, 35.0),
        ],
    );

    sheet.write_with_style(2, B, "2026 VISION BOARD TRACKER", &theme.title);
    sheet.merge(CellRange::row(2, B, G));

    let heading = theme.table_heading(11, PaletteColor::AccentGold);
    for (col, header) in (B..).zip(HEADERS) {
        sheet.write_with_style(TABLE_HEADER_ROW, col, header, &heading);
    }

    let mut last_row = TABLE_HEADER_ROW;
    for (row, domain) in (TABLE_HEADER_ROW + 1..).zip(Domain::ALL) {
        let label = Theme::accent(11, true, domain.color());
        sheet.write_with_style(row, B, domain.label(), &label);
        for (col, value) in (C..).zip(targets(domain)) {
            sheet.write_with_style(row, col, value, &theme.normal);
        }
        last_row = row;
    }
    sheet.border_range(
        CellRange::new(TABLE_HEADER_ROW, B, last_row, G),
        &theme.thin_border,
    );

    let journal = TrackerSheet::DailyJournal.title();
    let first_week = CellRange::new(
        FIRST_RECORD_ROW,
        PATH_A_COL,
        FIRST_RECORD_ROW + 6,
        PATH_A_COL,
    );
    let average = format!("C{PATH_A_AVERAGE_ROW}");
    let panel = [
        (
            "Weekly Average - Path A (SHIP IT!):",
            CellValue::formula(format!("=AVERAGE({})", sheet_range(journal, first_week))),
            "%",
        ),
        (
            "Weekly Average - Path B (Stability):",
            CellValue::formula(format!("=100-{average}")),
            "%",
        ),
        (
            "Target Split:",
            CellValue::text(format!("{PATH_A_TARGET}% / {}%", 100 - PATH_A_TARGET)),
            "",
        ),
        (
            "Variance from Target:",
            CellValue::formula(format!("=ABS({average}-{PATH_A_TARGET})")),
            "% off",
        ),
    ];

    sheet.write_with_style(13, B, "PATH ALLOCATION TRACKING", &theme.header);
    let value_style = theme.highlight();
    for (row, (label, value, suffix)) in (PATH_A_AVERAGE_ROW..).zip(panel) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write_with_style(row, C, value, &value_style);
        if !suffix.is_empty() {
            sheet.write_with_style(row, D, suffix, &theme.normal);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::sheets::test_support::{built, formula, text};

    fn sheet() -> Sheet {
        built(|s, t, _| build(s, t))
    }

    #[test]
    fn test_domain_table() {
        let sheet = sheet();
        assert_eq!(text(&sheet, 4, B), "Domain");
        assert_eq!(text(&sheet, 4, G), "Notes");
        assert_eq!(text(&sheet, 5, B), "Money & Finance");
        assert_eq!(text(&sheet, 5, C), "$15K/month revenue");
        assert_eq!(text(&sheet, 10, B), "Inner Peace");
        assert_eq!(text(&sheet, 10, G), "The spiral continues");
        assert_eq!(text(&sheet, 8, F), "");
    }

    #[test]
    fn test_domain_labels_use_domain_colors() {
        let sheet = sheet();
        for (row, domain) in (5..).zip(Domain::ALL) {
            let font = &sheet.style_at(row, B).unwrap().font;
            assert!(font.bold);
            assert_eq!(font.color.as_ref().map(|c| c.rgb()), Some(domain.color().hex()));
        }
    }

    #[test]
    fn test_table_is_outlined() {
        let sheet = sheet();
        let theme = Theme::standard();
        assert_eq!(sheet.style_at(4, B).unwrap().border, theme.thin_border);
        assert_eq!(sheet.style_at(4, B).unwrap().fill, theme.header_fill);
        assert_eq!(sheet.style_at(10, G).unwrap().border, theme.thin_border);
        assert_eq!(sheet.style_at(11, B), None);
    }

    #[test]
    fn test_path_allocation_panel() {
        let sheet = sheet();
        assert_eq!(formula(&sheet, 14, C), "=AVERAGE('Daily Journal'!AV2:AV8)");
        assert_eq!(formula(&sheet, 15, C), "=100-C14");
        assert_eq!(text(&sheet, 16, C), "70% / 30%");
        assert_eq!(formula(&sheet, 17, C), "=ABS(C14-70)");
        assert_eq!(text(&sheet, 14, D), "%");
        assert_eq!(text(&sheet, 17, D), "% off");
        assert_eq!(sheet.cell(16, D), None);
    }
}
