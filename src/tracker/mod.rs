//! The High Performance Takeoff Tracker: eight sheets populated in a fixed
//! order and written as one workbook.

use std::path::PathBuf;

use crate::{
    GeneratorConfig, Result, UserProfile,
    error::TrackerError,
    tracker::{calendar::RunDate, theme::Theme},
    workbook::{Workbook, builder::WorkbookBuilder, sheet::Sheet},
};

pub mod calendar;
pub mod formula;
pub mod layout;
pub mod sheets;
pub mod theme;

/// Inputs shared by every sheet builder besides the theme.
#[derive(Debug, Clone, Copy)]
pub struct BuildContext<'a> {
    pub today: RunDate,
    pub profile: &'a UserProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackerSheet {
    Dashboard,
    DailyJournal,
    PerformanceAnalytics,
    AiInsights,
    VisionBoard,
    WeeklyReview,
    MonthlyReview,
    Settings,
}

impl TrackerSheet {
    /// Tab order; the first one is active when the file opens.
    pub const ALL: [TrackerSheet; 8] = [
        TrackerSheet::Dashboard,
        TrackerSheet::DailyJournal,
        TrackerSheet::PerformanceAnalytics,
        TrackerSheet::AiInsights,
        TrackerSheet::VisionBoard,
        TrackerSheet::WeeklyReview,
        TrackerSheet::MonthlyReview,
        TrackerSheet::Settings,
    ];

    pub const fn title(self) -> &'static str {
        match self {
            TrackerSheet::Dashboard => "Executive Dashboard",
            TrackerSheet::DailyJournal => "Daily Journal",
            TrackerSheet::PerformanceAnalytics => "Performance Analytics",
            TrackerSheet::AiInsights => "AI Insights",
            TrackerSheet::VisionBoard => "Vision Board Tracker",
            TrackerSheet::WeeklyReview => "Weekly Review",
            TrackerSheet::MonthlyReview => "Monthly Review",
            TrackerSheet::Settings => "Settings & Reference",
        }
    }

    pub fn populate(self, sheet: &mut Sheet, theme: &Theme, ctx: &BuildContext) {
        match self {
            TrackerSheet::Dashboard => sheets::dashboard::build(sheet, theme, ctx),
            TrackerSheet::DailyJournal => sheets::journal::build(sheet, theme, ctx),
            TrackerSheet::PerformanceAnalytics => sheets::analytics::build(sheet, theme),
            TrackerSheet::AiInsights => sheets::insights::build(sheet, theme),
            TrackerSheet::VisionBoard => sheets::vision::build(sheet, theme),
            TrackerSheet::WeeklyReview => sheets::weekly::build(sheet, theme, ctx),
            TrackerSheet::MonthlyReview => sheets::monthly::build(sheet, theme, ctx),
            TrackerSheet::Settings => sheets::settings::build(sheet, theme, ctx),
        }
    }
}

/// Creates every sheet in tab order and populates it.
pub fn build_workbook(
    output_path: impl Into<PathBuf>,
    theme: &Theme,
    ctx: &BuildContext,
) -> Result<Workbook> {
    let mut wb = WorkbookBuilder::new(output_path)
        .set_sheets(TrackerSheet::ALL.map(TrackerSheet::title))
        .build()?;

    for kind in TrackerSheet::ALL {
        let sheet = wb
            .get_sheet(kind.title())
            .ok_or_else(|| TrackerError::NotFound(format!("sheet '{}'", kind.title())))?;
        kind.populate(sheet, theme, ctx);
        tracing::debug!(sheet = kind.title(), cells = sheet.cell_count(), "sheet populated");
    }
    tracing::debug!(
        path = %wb.output_path().display(),
        sheets = wb.sheet_names().len(),
        "workbook assembled"
    );
    Ok(wb)
}

/// One build-then-save cycle. Returns the path written.
pub fn generate(config: &GeneratorConfig) -> Result<PathBuf> {
    tracing::info!(
        path = %config.output_path.display(),
        date = %config.run_date,
        "generating tracker workbook"
    );

    let theme = Theme::standard();
    let ctx = BuildContext {
        today: RunDate(config.run_date),
        profile: &config.profile,
    };
    let wb = build_workbook(config.output_path.clone(), &theme, &ctx)?;
    let sheet_count = wb.sheet_names().len();
    let path = wb.finish()?;

    tracing::info!(path = %path.display(), sheets = sheet_count, "workbook written");
    Ok(path)
}
