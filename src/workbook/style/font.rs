use crate::workbook::{style::color::Color, xml_escape};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    pub bold: bool,
    pub italic: bool,
    /// Twentieths of a point.
    pub size: u32,
    pub color: Option<Color>,
    pub name: String,
}

impl Default for Font {
    fn default() -> Self {
        Font {
            bold: false,
            italic: false,
            size: 220,
            color: None,
            name: "Calibri".into(),
        }
    }
}

impl Font {
    pub fn new(name: &str, pt: u32) -> Self {
        Font {
            name: name.into(),
            size: pt * 20,
            ..Font::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn color(mut self, hex: &str) -> Self {
        self.color = Some(Color::new(hex));
        self
    }

    pub fn point_size(&self) -> u32 {
        self.size / 20
    }

    pub fn to_xml(&self) -> String {
        let mut xml = String::from("<font>");
        if self.bold {
            xml.push_str("<b/>");
        }
        if self.italic {
            xml.push_str("<i/>");
        }

        let pt = self.point_size();
        xml.push_str(&format!("<sz val=\"{pt}\"/>"));

        if let Some(c) = &self.color {
            xml.push_str(&format!("<color rgb=\"{}\"/>", c.as_argb()));
        }

        xml.push_str(&format!("<name val=\"{}\"/>", xml_escape(&self.name)));
        xml.push_str("</font>");
        xml
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_xml() {
        let font = Font::new("Arial", 14).bold().color("D4A853");
        assert_eq!(
            font.to_xml(),
            "<font><b/><sz val=\"14\"/><color rgb=\"FFD4A853\"/><name val=\"Arial\"/></font>"
        );
        assert_eq!(
            Font::new("Arial", 12).italic().to_xml(),
            "<font><i/><sz val=\"12\"/><name val=\"Arial\"/></font>"
        );
    }
}
