use chrono::{Datelike, NaiveDate};

/// Day number of 1899-12-30 counted from 0001-01-01, the epoch of Excel's
/// 1900 date system for every date after February 1900.
const EXCEL_EPOCH_DAYS_FROM_CE: i32 = 693_594;

/// Value held by a cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Excel stores every number as f64.
    Number(f64),
    /// Written as an inline string, no sharedStrings part.
    Text(String),
    Bool(bool),
    /// Formula text, with or without the leading `=`. Never evaluated here.
    Formula(String),
    /// Stored as a serial day number; rendered with a date format.
    Date(NaiveDate),
    Blank,
}

impl CellValue {
    pub fn num(v: impl Into<f64>) -> Self {
        CellValue::Number(v.into())
    }
    pub fn text(v: impl Into<String>) -> Self {
        CellValue::Text(v.into())
    }
    pub fn formula(v: impl Into<String>) -> Self {
        CellValue::Formula(v.into())
    }
    pub fn date(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }

    /// Formula body as stored in the worksheet part (no leading `=`).
    pub fn formula_body(&self) -> Option<&str> {
        match self {
            CellValue::Formula(f) => Some(f.strip_prefix('=').unwrap_or(f)),
            _ => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(v: &str) -> Self {
        CellValue::Text(v.to_string())
    }
}

impl From<String> for CellValue {
    fn from(v: String) -> Self {
        CellValue::Text(v)
    }
}

impl From<f64> for CellValue {
    fn from(v: f64) -> Self {
        CellValue::Number(v)
    }
}

impl From<u32> for CellValue {
    fn from(v: u32) -> Self {
        CellValue::Number(v.into())
    }
}

impl From<NaiveDate> for CellValue {
    fn from(v: NaiveDate) -> Self {
        CellValue::Date(v)
    }
}

pub fn excel_serial(date: NaiveDate) -> i32 {
    date.num_days_from_ce() - EXCEL_EPOCH_DAYS_FROM_CE
}
