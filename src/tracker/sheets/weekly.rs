use crate::{
    tracker::{
        BuildContext,
        formula::{if_text, range},
        layout::{Habit, WEEKDAYS},
        sheets::{A, B, C, E, F, I, J, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

const DAY_HEADER_ROW: u32 = 15;
/// Overall row of the habit grid; its weekly average drives the insight.
const OVERALL_ROW: u32 = DAY_HEADER_ROW + Habit::ALL.len() as u32 + 1;

pub fn build(sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
    let mut widths = vec![(A, 5.0), (B, 20.0)];
    widths.extend((C..=J).map(|col| (col, 15.0)));
    set_widths(sheet, &widths);

    sheet.write_with_style(2, B, "WEEKLY REVIEW", &theme.title);

    sheet.write_with_style(4, B, "Week Number:", &theme.normal);
    sheet.write_with_style(
        4,
        C,
        ctx.today.iso_week(),
        &Theme::accent(14, true, PaletteColor::AccentGold),
    );

    sheet.write_with_style(6, B, "WEEKLY WINS (Top 3)", &theme.header);
    for (n, row) in (7..=9).enumerate() {
        sheet.write_with_style(row, B, format!("{}.", n + 1), &theme.normal);
        sheet.write(row, C, "");
        sheet.merge(CellRange::row(row, C, E));
    }

    sheet.write_with_style(11, B, "WEEKLY CHALLENGES", &theme.header);
    sheet.write(12, C, "");
    sheet.merge(CellRange::row(12, C, E));

    sheet.write_with_style(14, B, "HABIT SCORE AVERAGES", &theme.header);
    let day_style = Theme::accent(10, true, PaletteColor::AccentTeal);
    let headers = WEEKDAYS.into_iter().chain(std::iter::once("Avg"));
    for (col, label) in (C..).zip(headers) {
        sheet.write_with_style(DAY_HEADER_ROW, col, label, &day_style);
    }
    let rows = Habit::ALL
        .map(Habit::label)
        .into_iter()
        .chain(std::iter::once("Overall"));
    for (row, label) in (DAY_HEADER_ROW + 1..).zip(rows) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write(
            row,
            J,
            CellValue::formula(format!("=AVERAGE({})", range(row, C, row, I))),
        );
    }

    sheet.write_with_style(25, B, "INSIGHTS FOR NEXT WEEK", &theme.header);
    sheet.write(
        26,
        C,
        CellValue::formula(format!(
            "={}",
            if_text(
                &format!("J{OVERALL_ROW}<7"),
                "Focus on improving overall performance",
                "Maintain momentum and push for excellence",
            )
        )),
    );

    sheet.write_with_style(28, B, "COMMITMENT FOR NEXT WEEK", &theme.header);
    sheet.write(29, C, "");
    sheet.merge(CellRange::row(29, C, F));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::sheets::test_support::{built, formula, text};

    #[test]
    fn test_week_number_from_run_date() {
        let sheet = built(build);
        assert_eq!(text(&sheet, 2, B), "WEEKLY REVIEW");
        assert_eq!(sheet.cell(4, C), Some(&CellValue::Number(42.0)));
        assert_eq!(sheet.style_at(4, C).unwrap().font.point_size(), 14);
    }

    #[test]
    fn test_free_text_areas_are_merged() {
        let sheet = built(build);
        for row in 7..=9 {
            assert!(sheet.merges().contains(&CellRange::row(row, C, E)));
        }
        assert_eq!(text(&sheet, 9, B), "3.");
        assert!(sheet.merges().contains(&CellRange::row(12, C, E)));
        assert!(sheet.merges().contains(&CellRange::row(29, C, F)));
    }

    #[test]
    fn test_habit_average_grid() {
        let sheet = built(build);
        assert_eq!(text(&sheet, 15, C), "Mon");
        assert_eq!(text(&sheet, 15, I), "Sun");
        assert_eq!(text(&sheet, 15, J), "Avg");
        assert_eq!(text(&sheet, 16, B), "Clarity");
        assert_eq!(text(&sheet, 22, B), "Overall");
        for row in 16..=22 {
            assert_eq!(formula(&sheet, row, J), format!("=AVERAGE(C{row}:I{row})"));
        }
    }

    #[test]
    fn test_next_week_insight() {
        let sheet = built(build);
        assert_eq!(
            formula(&sheet, 26, C),
            "=IF(J22<7,\"Focus on improving overall performance\",\
             \"Maintain momentum and push for excellence\")"
        );
    }
}
