use chrono::{Datelike, NaiveDate};

/// Run date plus the derived labels the sheets print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDate(pub NaiveDate);

impl RunDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn iso_week(&self) -> u32 {
        self.0.iso_week().week()
    }

    pub fn quarter(&self) -> String {
        format!("Q{}", (self.0.month() - 1) / 3 + 1)
    }

    /// "October 16, 2026"
    pub fn long_date(&self) -> String {
        self.0.format("%B %d, %Y").to_string()
    }

    /// "Friday"
    pub fn weekday_name(&self) -> String {
        self.0.format("%A").to_string()
    }

    /// "October 2026"
    pub fn month_year(&self) -> String {
        self.0.format("%B %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> RunDate {
        RunDate(NaiveDate::from_ymd_opt(y, m, d).unwrap())
    }

    #[test]
    fn test_labels() {
        let d = day(2026, 10, 16);
        assert_eq!(d.iso_week(), 42);
        assert_eq!(d.quarter(), "Q4");
        assert_eq!(d.long_date(), "October 16, 2026");
        assert_eq!(d.weekday_name(), "Friday");
        assert_eq!(d.month_year(), "October 2026");
    }

    #[test]
    fn test_quarter_boundaries() {
        assert_eq!(day(2026, 1, 1).quarter(), "Q1");
        assert_eq!(day(2026, 3, 31).quarter(), "Q1");
        assert_eq!(day(2026, 4, 1).quarter(), "Q2");
        assert_eq!(day(2026, 9, 30).quarter(), "Q3");
        assert_eq!(day(2026, 12, 31).quarter(), "Q4");
    }

    #[test]
    fn test_iso_week_across_year_end() {
        // 2027-01-01 is a Friday and belongs to week 53 of 2026.
        assert_eq!(day(2027, 1, 1).iso_week(), 53);
        assert_eq!(day(2026, 1, 1).long_date(), "January 01, 2026");
    }
}
