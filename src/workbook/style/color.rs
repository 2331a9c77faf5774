#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(pub String);

impl Color {
    pub fn new(hex: &str) -> Self {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            Color(format!("FF{}", hex.to_uppercase()))
        } else {
            Color(hex.to_uppercase())
        }
    }

    pub fn as_argb(&self) -> &str {
        &self.0
    }

    /// RGB part without the alpha byte.
    pub fn rgb(&self) -> &str {
        self.0.get(2..).unwrap_or(&self.0)
    }
}
