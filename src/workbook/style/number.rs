#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NumberFormat {
    General, // (default)
    Date,    // e.g 10/16/2026
    Custom(String),
}

impl NumberFormat {
    pub fn builtin_id(&self) -> Option<u32> {
        match self {
            NumberFormat::General => Some(0),
            NumberFormat::Date => Some(14), // "m/d/yyyy"
            NumberFormat::Custom(_) => None,
        }
    }

    pub fn is_date(&self) -> bool {
        match self {
            NumberFormat::Date => true,
            NumberFormat::Custom(code) => code.contains(['y', 'd']),
            NumberFormat::General => false,
        }
    }
}
