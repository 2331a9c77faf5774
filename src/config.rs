use std::path::PathBuf;

use chrono::{Local, NaiveDate};

pub const DEFAULT_OUTPUT_PATH: &str = "High_Performance_Takeoff_Tracker.xlsx";

/// Owner details shown on the Settings & Reference sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub start_date: NaiveDate,
    pub time_zone: String,
}

impl Default for UserProfile {
    fn default() -> Self {
        UserProfile {
            name: "Joshua Fraser, Ed.D.".to_string(),
            start_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap_or_default(),
            time_zone: "America/Chicago".to_string(),
        }
    }
}

/// Everything a generation run depends on. There is no external input; the
/// binary always runs with `GeneratorConfig::default()`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub output_path: PathBuf,
    /// Date seeded into the Dashboard, Journal, Weekly and Monthly sheets.
    pub run_date: NaiveDate,
    pub profile: UserProfile,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            run_date: Local::now().date_naive(),
            profile: UserProfile::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    pub fn with_run_date(mut self, date: NaiveDate) -> Self {
        self.run_date = date;
        self
    }

    pub fn with_profile(mut self, profile: UserProfile) -> Self {
        self.profile = profile;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_PATH));
        assert_eq!(config.profile.time_zone, "America/Chicago");
        assert_eq!(
            config.profile.start_date,
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_overrides() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let config = GeneratorConfig::default()
            .with_output_path("/tmp/out.xlsx")
            .with_run_date(date);
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.xlsx"));
        assert_eq!(config.run_date, date);
    }
}
