use crate::{
    tracker::{
        BuildContext,
        layout::Domain,
        sheets::{A, B, C, set_widths},
        theme::{PaletteColor, Theme},
    },
    workbook::sheet::Sheet,
};

const SCORE_BUCKETS: [(&str, &str, PaletteColor); 4] = [
    ("1-4:", "Needs Work (Red)", PaletteColor::StatusDanger),
    ("5-6:", "Making Progress (Yellow)", PaletteColor::StatusWarning),
    ("7-8:", "On Track (Green)", PaletteColor::StatusSuccess),
    ("9-10:", "Exceptional (Gold)", PaletteColor::AccentGold),
];

fn definition(domain: Domain) -> &'static str {
    match domain {
        Domain::Money => "$15K/mo revenue, 20 clients, debt freedom",
        Domain::Health => "3x/week strength training, 185-197 lbs",
        Domain::Career => "Excellence while transitioning, legacy systems",
        Domain::Creative => "4 books shipped, 5K followers, 2K subscribers",
        Domain::Love => "12 date nights, presence over performance",
        Domain::InnerPeace => "Daily practice, the spiral continues",
    }
}

pub fn build(sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
    set_widths(sheet, &[(A, 5.0), (B, 25.0), (C, 40.0)]);

    sheet.write_with_style(2, B, "SETTINGS & REFERENCE", &theme.title);

    sheet.write_with_style(4, B, "USER SETTINGS", &theme.header);
    let profile = ctx.profile;
    let settings = [
        ("Name:", profile.name.clone()),
        (
            "Start Date:",
            profile.start_date.format("%B %-d, %Y").to_string(),
        ),
        ("Time Zone:", profile.time_zone.clone()),
    ];
    let value_style = Theme::accent(11, false, PaletteColor::AccentGold);
    for (row, (label, value)) in (5..).zip(settings) {
        sheet.write_with_style(row, B, label, &theme.normal);
        sheet.write_with_style(row, C, value, &value_style);
    }

    sheet.write_with_style(10, B, "SCORING REFERENCE", &theme.header);
    for (row, (bucket, meaning, color)) in (11..).zip(SCORE_BUCKETS) {
        sheet.write_with_style(row, B, bucket, &Theme::accent(11, true, color));
        sheet.write_with_style(row, C, meaning, &theme.normal);
    }

    sheet.write_with_style(17, B, "DOMAIN DEFINITIONS", &theme.header);
    let domain_style = Theme::accent(11, true, PaletteColor::AccentTeal);
    for (row, domain) in (18..).zip(Domain::ALL) {
        sheet.write_with_style(row, B, format!("{}:", domain.label()), &domain_style);
        sheet.write_with_style(row, C, definition(domain), &theme.normal);
    }

    sheet.write_with_style(26, B, "PATH ALLOCATION", &theme.header);
    sheet.write_with_style(27, B, "Path A (SHIP IT!):", &theme.normal);
    sheet.write_with_style(
        27,
        C,
        "70% - Creative ventures, platform, books",
        &theme.normal,
    );
    sheet.write_with_style(28, B, "Path B (Stability):", &theme.normal);
    sheet.write_with_style(28, C, "30% - BCCS excellence, family, health", &theme.normal);
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        UserProfile,
        tracker::sheets::test_support::{run_date, text},
        workbook::builder::WorkbookBuilder,
    };

    fn built_for(profile: &UserProfile) -> Sheet {
        let ctx = BuildContext {
            today: run_date(),
            profile,
        };
        let mut wb = WorkbookBuilder::new("unused.xlsx")
            .set_sheets(["Settings"])
            .build()
            .unwrap();
        let sheet = wb.get_sheet("Settings").unwrap();
        build(sheet, &Theme::standard(), &ctx);
        sheet.clone()
    }

    #[test]
    fn test_default_profile() {
        let sheet = built_for(&UserProfile::default());
        assert_eq!(text(&sheet, 5, C), "Joshua Fraser, Ed.D.");
        assert_eq!(text(&sheet, 6, C), "January 1, 2026");
        assert_eq!(text(&sheet, 7, C), "America/Chicago");
    }

    #[test]
    fn test_custom_profile() {
        let profile = UserProfile {
            name: "A. Tester".into(),
            start_date: NaiveDate::from_ymd_opt(2027, 3, 15).unwrap(),
            time_zone: "Europe/Berlin".into(),
        };
        let sheet = built_for(&profile);
        assert_eq!(text(&sheet, 5, C), "A. Tester");
        assert_eq!(text(&sheet, 6, C), "March 15, 2027");
        assert_eq!(text(&sheet, 7, C), "Europe/Berlin");
    }

    #[test]
    fn test_score_legend_colors() {
        let sheet = built_for(&UserProfile::default());
        let colors: Vec<&str> = (11..=14)
            .map(|row| sheet.style_at(row, B).unwrap().font.color.as_ref().unwrap().rgb())
            .collect();
        assert_eq!(colors, ["EF4444", "EAB308", "22C55E", "D4A853"]);
        assert_eq!(text(&sheet, 14, B), "9-10:");
    }

    #[test]
    fn test_domain_definitions_and_paths() {
        let sheet = built_for(&UserProfile::default());
        assert_eq!(text(&sheet, 18, B), "Money & Finance:");
        assert_eq!(text(&sheet, 23, B), "Inner Peace:");
        assert_eq!(text(&sheet, 27, C), "70% - Creative ventures, platform, books");
        assert_eq!(text(&sheet, 28, B), "Path B (Stability):");
    }
}
