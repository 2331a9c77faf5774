use crate::workbook::style::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Fill {
    None,
    /// Reserved second entry of every fills table.
    Gray125,
    Solid(Color),
}

impl Fill {
    pub fn solid(hex: &str) -> Self {
        Fill::Solid(Color::new(hex))
    }

    pub fn to_xml(&self) -> String {
        match self {
            Fill::None => "<fill><patternFill patternType=\"none\"/></fill>".into(),
            Fill::Gray125 => "<fill><patternFill patternType=\"gray125\"/></fill>".into(),
            Fill::Solid(c) => format!(
                "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"{0}\"/><bgColor rgb=\"{0}\"/></patternFill></fill>",
                c.as_argb()
            ),
        }
    }
}
