use crate::{
    tracker::{
        TrackerSheet,
        formula::{if_text, sheet_cell, sheet_range},
        layout::{
            CLARITY_COL, ENERGY_COL, FIRST_GOAL_COL, FIRST_RECORD_ROW, INFLUENCE_COL,
            LAST_GOAL_COL, PATH_A_COL,
        },
        sheets::{A, B, C, analytics::AVERAGE_SCORE_ROW, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::{address::CellRange, cell::CellValue, sheet::Sheet},
};

pub const RECOMMENDATIONS_FIRST_ROW: u32 = 5;

const PATTERNS: [(&str, &str); 5] = [
    (
        "Best Performance Days",
        "Track your highest-scoring days to identify optimal conditions",
    ),
    ("Energy Peak Times", "Note when your energy scores are highest"),
    ("Stress Triggers", "Identify situations that correlate with low scores"),
    (
        "Productivity Patterns",
        "Find which activities lead to highest productivity",
    ),
    ("Leadership Moments", "Document when you have the most influence"),
];

fn conditional(condition: String, when_true: &str, when_false: &str) -> String {
    format!("={}", if_text(&condition, when_true, when_false))
}

fn recommendations() -> [(&'static str, String); 6] {
    let journal = TrackerSheet::DailyJournal.title();
    let today = |col| sheet_cell(journal, FIRST_RECORD_ROW, col);
    let daily_score = sheet_cell(
        TrackerSheet::PerformanceAnalytics.title(),
        AVERAGE_SCORE_ROW,
        C,
    );
    let goals = CellRange::row(FIRST_RECORD_ROW, FIRST_GOAL_COL, LAST_GOAL_COL);

    [
        (
            "Performance Optimization",
            conditional(
                format!("{daily_score}<7"),
                "Focus on improving your weakest habit area",
                "Maintain your strong performance patterns",
            ),
        ),
        (
            "Stress Management",
            conditional(
                format!("{}<5", today(ENERGY_COL)),
                "Consider energy management techniques - your energy score is low",
                "Your energy levels are healthy - maintain current practices",
            ),
        ),
        (
            "Leadership Effectiveness",
            conditional(
                format!("{}<6", today(INFLUENCE_COL)),
                "Look for opportunities to influence and lead others",
                "Your leadership impact is strong - continue mentoring",
            ),
        ),
        (
            "Work-Life Balance",
            conditional(
                format!("ABS({}-70)>20", today(PATH_A_COL)),
                "Adjust your Path A/B balance toward the 70/30 target",
                "Good balance between creative work and stability",
            ),
        ),
        (
            "Energy Management",
            conditional(
                format!("{}<{}", today(ENERGY_COL), today(CLARITY_COL)),
                "Energy is lagging behind clarity - focus on physical wellness",
                "Energy and clarity are well-aligned",
            ),
        ),
        (
            "Goal Achievement",
            conditional(
                format!("COUNTBLANK({})>0", sheet_range(journal, goals)),
                "Set clear daily goals to improve focus",
                "Goals are set - focus on execution",
            ),
        ),
    ]
}

fn predictions() -> [String; 3] {
    let journal = TrackerSheet::DailyJournal.title();
    let today = |col| sheet_cell(journal, FIRST_RECORD_ROW, col);
    [
        conditional(
            format!("{}<6", today(ENERGY_COL)),
            "1. Prioritize rest and recovery activities",
            "1. Channel your high energy into bold action",
        ),
        conditional(
            format!("{}<6", today(CLARITY_COL)),
            "2. Start with a clarity-building morning routine",
            "2. Dive into your most important creative work",
        ),
        conditional(
            format!("{}<6", today(INFLUENCE_COL)),
            "3. Schedule time for meaningful connections",
            "3. Lead a meeting or mentor someone",
        ),
    ]
}

pub fn build(sheet: &mut Sheet, theme: &Theme) {
    set_widths(sheet, &[(A, 5.0), (B, 30.0), (C, 60.0)]);

    sheet.write_with_style(2, B, "AI-POWERED INSIGHTS", &theme.title);
    sheet.merge(CellRange::row(2, B, C));

    sheet.write_with_style(4, B, "PERSONALIZED RECOMMENDATIONS", &theme.header);
    let category = Theme::accent(11, true, PaletteColor::AccentTeal);
    for (row, (label, formula)) in (RECOMMENDATIONS_FIRST_ROW..).zip(recommendations()) {
        sheet.write_with_style(row, B, label, &category);
        sheet.write_with_style(row, C, CellValue::formula(formula), &theme.normal);
    }

    sheet.write_with_style(13, B, "PATTERN RECOGNITION", &theme.header);
    let pattern = Theme::accent(11, true, PaletteColor::AccentCoral);
    for (row, (label, description)) in (14..).zip(PATTERNS) {
        sheet.write_with_style(row, B, label, &pattern);
        sheet.write_with_style(row, C, description, &theme.normal);
    }

    sheet.write_with_style(21, B, "PREDICTIVE ANALYTICS", &theme.header);
    sheet.write_with_style(
        22,
        B,
        "Based on your patterns, tomorrow you should:",
        &theme.normal,
    );
    for (row, formula) in (23..).zip(predictions()) {
        sheet.write_with_style(row, B, CellValue::formula(formula), &theme.normal);
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
    fn test_recommendation_thresholds() {
        let sheet = sheet();
        assert_eq!(text(&sheet, 5, B), "Performance Optimization");
        assert!(formula(&sheet, 5, C).starts_with("=IF('Performance Analytics'!C39<7,"));
        assert!(formula(&sheet, 6, C).starts_with("=IF('Daily Journal'!AD2<5,"));
        assert!(formula(&sheet, 7, C).starts_with("=IF('Daily Journal'!AG2<6,"));
        assert!(formula(&sheet, 8, C).starts_with("=IF(ABS('Daily Journal'!AV2-70)>20,"));
        assert!(
            formula(&sheet, 9, C).starts_with("=IF('Daily Journal'!AD2<'Daily Journal'!AC2,")
        );
        assert_eq!(
            formula(&sheet, 10, C),
            "=IF(COUNTBLANK('Daily Journal'!F2:H2)>0,\
             \"Set clear daily goals to improve focus\",\
             \"Goals are set - focus on execution\")"
        );
    }

    #[test]
    fn test_pattern_panel_is_static() {
        let sheet = sheet();
        assert_eq!(text(&sheet, 14, B), "Best Performance Days");
        assert_eq!(text(&sheet, 18, B), "Leadership Moments");
        assert_eq!(
            sheet.style_at(14, B).unwrap().font.color.as_ref().map(|c| c.rgb()),
            Some("F97316")
        );
    }

    #[test]
    fn test_predictions_are_balanced() {
        let sheet = sheet();
        assert_eq!(
            formula(&sheet, 23, B),
            "=IF('Daily Journal'!AD2<6,\
             \"1. Prioritize rest and recovery activities\",\
             \"1. Channel your high energy into bold action\")"
        );
        for row in 23..=25 {
            let f = formula(&sheet, row, B);
            assert_eq!(f.matches('(').count(), f.matches(')').count(), "{f}");
        }
        assert!(formula(&sheet, 24, B).contains("'Daily Journal'!AC2<6"));
        assert!(formula(&sheet, 25, B).contains("'Daily Journal'!AG2<6"));
    }
}
