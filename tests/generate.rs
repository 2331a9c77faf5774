use std::{collections::HashSet, fs};

use chrono::NaiveDate;
use takeoff_tracker::{
    GeneratorConfig, UserProfile, generate,
    error::TrackerError,
    reader::{XlsxReader, read_part},
    tracker::{
        BuildContext, TrackerSheet, build_workbook,
        calendar::RunDate,
        layout::{Domain, JOURNAL_COLUMNS},
        theme::Theme,
    },
    workbook::cell::CellValue,
};
use tempfile::TempDir;

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

fn config_in(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_output_path(dir.path().join("tracker.xlsx"))
        .with_run_date(run_date())
}

#[test]
fn test_sheets_in_tab_order() {
    let dir = TempDir::new().unwrap();
    let path = generate(&config_in(&dir)).unwrap();
    assert_eq!(path, dir.path().join("tracker.xlsx"));

    let reader = XlsxReader::open(&path).unwrap();
    assert_eq!(
        reader.sheet_names(),
        [
            "Executive Dashboard",
            "Daily Journal",
            "Performance Analytics",
            "AI Insights",
            "Vision Board Tracker",
            "Weekly Review",
            "Monthly Review",
            "Settings & Reference",
        ]
    );
}

#[test]
fn test_journal_layout_round_trips() {
    let dir = TempDir::new().unwrap();
    let path = generate(&config_in(&dir)).unwrap();
    let mut reader = XlsxReader::open(&path).unwrap();
    let journal = reader.read_sheet("Daily Journal").unwrap();

    let headers: Vec<&str> = journal
        .row(1)
        .map(|(_, c)| c.value.as_deref().unwrap())
        .collect();
    let expected: Vec<&str> = JOURNAL_COLUMNS.iter().map(|c| c.header).collect();
    assert_eq!(headers, expected);
    assert_eq!(journal.value("BC1"), Some("Timestamp"));
    assert_eq!(journal.column_widths.get(&5), Some(&40.0));

    assert_eq!(journal.frozen_at, Some((2, 1)));
    assert_eq!(journal.value("A2"), Some("46311"));
    assert_eq!(journal.value("B2"), Some("Friday"));
    assert_eq!(journal.value("C2"), Some("42"));
    assert_eq!(journal.value("D2"), Some("Q4"));
    assert_eq!(journal.formula("AI2"), Some("AVERAGE(AC2:AH2)"));
}

#[test]
fn test_cross_sheet_formulas_survive_the_package() {
    let dir = TempDir::new().unwrap();
    let path = generate(&config_in(&dir)).unwrap();
    let mut reader = XlsxReader::open(&path).unwrap();

    let dashboard = reader.read_sheet("Executive Dashboard").unwrap();
    assert_eq!(dashboard.formula("C8"), Some("'Daily Journal'!AD2"));
    assert!(dashboard.merges.iter().any(|m| m.to_string() == "B2:D2"));

    let vision = reader.read_sheet("Vision Board Tracker").unwrap();
    assert_eq!(vision.formula("C14"), Some("AVERAGE('Daily Journal'!AV2:AV8)"));
    assert_eq!(vision.formula("C17"), Some("ABS(C14-70)"));

    let analytics = reader.read_sheet("Performance Analytics").unwrap();
    assert_eq!(
        analytics.formula("B6"),
        Some("IF(ISBLANK('Daily Journal'!A2),\"\",'Daily Journal'!A2)")
    );
    assert_eq!(
        analytics.formula("C40"),
        Some("INDEX(C5:H5,MATCH(MAX(C36:H36),C36:H36,0))")
    );

    let monthly = reader.read_sheet("Monthly Review").unwrap();
    assert_eq!(monthly.formula("C29"), Some("'AI Insights'!C6"));
}

#[test]
fn test_run_date_reaches_every_dated_sheet() {
    let dir = TempDir::new().unwrap();
    let path = generate(&config_in(&dir)).unwrap();
    let mut reader = XlsxReader::open(&path).unwrap();

    let dashboard = reader.read_sheet("Executive Dashboard").unwrap();
    assert_eq!(dashboard.value("B4"), Some("Date: October 16, 2026"));
    assert_eq!(dashboard.value("C4"), Some("Week: 42"));
    let weekly = reader.read_sheet("Weekly Review").unwrap();
    assert_eq!(weekly.value("C4"), Some("42"));
    let monthly = reader.read_sheet("Monthly Review").unwrap();
    assert_eq!(monthly.value("C4"), Some("October 2026"));
}

#[test]
fn test_package_parts() {
    let dir = TempDir::new().unwrap();
    let path = generate(&config_in(&dir)).unwrap();

    let workbook = read_part(&path, "xl/workbook.xml").unwrap();
    assert!(workbook.contains(r#"<calcPr fullCalcOnLoad="1"/>"#));
    assert!(workbook.contains(r#"name="Settings &amp; Reference""#));

    let styles = read_part(&path, "xl/styles.xml").unwrap();
    assert!(styles.contains(r#"<name val="Arial"/>"#));
    assert!(styles.contains(r#"<fgColor rgb="FF0A1628"/>"#));
    assert!(styles.contains(r#"formatCode="yyyy-mm-dd""#));

    let sheet1 = read_part(&path, "xl/worksheets/sheet1.xml").unwrap();
    assert!(sheet1.contains(r#"tabSelected="1""#));
}

#[test]
fn test_same_run_date_same_contents() {
    let first = TempDir::new().unwrap();
    let second = TempDir::new().unwrap();
    let a = generate(&config_in(&first)).unwrap();
    let b = generate(&config_in(&second)).unwrap();

    let mut ra = XlsxReader::open(&a).unwrap();
    let mut rb = XlsxReader::open(&b).unwrap();
    for sheet in TrackerSheet::ALL.map(TrackerSheet::title) {
        let ca = ra.read_sheet(sheet).unwrap();
        let cb = rb.read_sheet(sheet).unwrap();
        assert_eq!(ca.cells, cb.cells, "{sheet}");
        assert_eq!(ca.merges, cb.merges, "{sheet}");
    }
    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_existing_file_is_replaced() {
    let dir = TempDir::new().unwrap();
    let config = config_in(&dir);
    fs::write(&config.output_path, b"stale").unwrap();

    generate(&config).unwrap();
    let reader = XlsxReader::open(&config.output_path).unwrap();
    assert_eq!(reader.sheet_names().len(), 8);
}

#[test]
fn test_missing_directory_is_a_persist_error() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("no-such-dir").join("tracker.xlsx");
    let config = GeneratorConfig::default().with_output_path(&target);

    let err = generate(&config).unwrap_err();
    assert!(matches!(err, TrackerError::Persist { ref path, .. } if *path == target));
    assert!(!target.exists());
}

#[test]
fn test_directory_target_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("taken");
    fs::create_dir(&target).unwrap();
    let config = GeneratorConfig::default().with_output_path(&target);

    assert!(generate(&config).is_err());
    assert!(target.is_dir());
    // No stray temp files are left next to the target.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_domain_labels_colored_per_domain() {
    let profile = UserProfile::default();
    let ctx = BuildContext {
        today: RunDate(run_date()),
        profile: &profile,
    };
    let wb = build_workbook("unused.xlsx", &Theme::standard(), &ctx).unwrap();
    let vision = wb.sheet(TrackerSheet::VisionBoard.title()).unwrap();

    let mut colors = HashSet::new();
    for (row, domain) in (5..).zip(Domain::ALL) {
        assert_eq!(vision.cell(row, 2), Some(&CellValue::text(domain.label())));
        let font = &vision.style_at(row, 2).unwrap().font;
        assert!(font.bold);
        colors.insert(font.color.clone().unwrap());
    }
    assert_eq!(colors.len(), 6);
}
