//! Palette and shared style descriptors. Every sheet builder borrows one
//! immutable [`Theme`].

use crate::workbook::style::{
    Style,
    border::{Border, BorderStyle},
    fill::Fill,
    font::Font,
};

pub const FONT_FAMILY: &str = "Arial";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    BgPrimary,
    BgSecondary,
    AccentGold,
    AccentTeal,
    AccentCoral,
    AccentPurple,
    TextPrimary,
    TextSecondary,
    StatusSuccess,
    StatusWarning,
    StatusDanger,
    DomainMoney,
    DomainHealth,
    DomainCareer,
    DomainCreative,
    DomainLove,
    DomainInner,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 17] = [
        PaletteColor::BgPrimary,
        PaletteColor::BgSecondary,
        PaletteColor::AccentGold,
        PaletteColor::AccentTeal,
        PaletteColor::AccentCoral,
        PaletteColor::AccentPurple,
        PaletteColor::TextPrimary,
        PaletteColor::TextSecondary,
        PaletteColor::StatusSuccess,
        PaletteColor::StatusWarning,
        PaletteColor::StatusDanger,
        PaletteColor::DomainMoney,
        PaletteColor::DomainHealth,
        PaletteColor::DomainCareer,
        PaletteColor::DomainCreative,
        PaletteColor::DomainLove,
        PaletteColor::DomainInner,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            PaletteColor::BgPrimary => "bg_primary",
            PaletteColor::BgSecondary => "bg_secondary",
            PaletteColor::AccentGold => "accent_gold",
            PaletteColor::AccentTeal => "accent_teal",
            PaletteColor::AccentCoral => "accent_coral",
            PaletteColor::AccentPurple => "accent_purple",
            PaletteColor::TextPrimary => "text_primary",
            PaletteColor::TextSecondary => "text_secondary",
            PaletteColor::StatusSuccess => "status_success",
            PaletteColor::StatusWarning => "status_warning",
            PaletteColor::StatusDanger => "status_danger",
            PaletteColor::DomainMoney => "domain_money",
            PaletteColor::DomainHealth => "domain_health",
            PaletteColor::DomainCareer => "domain_career",
            PaletteColor::DomainCreative => "domain_creative",
            PaletteColor::DomainLove => "domain_love",
            PaletteColor::DomainInner => "domain_inner",
        }
    }

    pub const fn hex(self) -> &'static str {
        match self {
            PaletteColor::BgPrimary => "0A1628",
            PaletteColor::BgSecondary => "1A2940",
            PaletteColor::AccentGold => "D4A853",
            PaletteColor::AccentTeal => "14B8A6",
            PaletteColor::AccentCoral => "F97316",
            PaletteColor::AccentPurple => "8B5CF6",
            PaletteColor::TextPrimary => "FFFFFF",
            PaletteColor::TextSecondary => "94A3B8",
            PaletteColor::StatusSuccess => "22C55E",
            PaletteColor::StatusWarning => "EAB308",
            PaletteColor::StatusDanger => "EF4444",
            PaletteColor::DomainMoney => "D4A853",
            PaletteColor::DomainHealth => "14B8A6",
            PaletteColor::DomainCareer => "F97316",
            PaletteColor::DomainCreative => "8B5CF6",
            PaletteColor::DomainLove => "EC4899",
            PaletteColor::DomainInner => "06B6D4",
        }
    }

    pub fn lookup(name: &str) -> Option<PaletteColor> {
        PaletteColor::ALL.into_iter().find(|c| c.name() == name)
    }
}

/// Immutable style record shared by all sheet builders.
#[derive(Debug, Clone)]
pub struct Theme {
    pub title: Style,
    pub header: Style,
    pub subtitle: Style,
    pub normal: Style,
    pub header_fill: Fill,
    pub background_fill: Fill,
    pub thin_border: Border,
}

impl Theme {
    pub fn standard() -> Self {
        Theme {
            title: Theme::accent(20, true, PaletteColor::AccentGold),
            header: Theme::accent(14, true, PaletteColor::AccentGold),
            subtitle: Theme::accent(12, false, PaletteColor::TextSecondary),
            normal: Theme::accent(11, false, PaletteColor::TextPrimary),
            header_fill: Fill::solid(PaletteColor::BgSecondary.hex()),
            background_fill: Fill::solid(PaletteColor::BgPrimary.hex()),
            thin_border: Border::all(BorderStyle::Thin, PaletteColor::BgSecondary.hex()),
        }
    }

    /// Arial at `size` points in a palette color.
    pub fn accent(size: u32, bold: bool, color: PaletteColor) -> Style {
        let font = Font::new(FONT_FAMILY, size).color(color.hex());
        Style::with_font(if bold { font.bold() } else { font })
    }

    /// Bold 11pt value font used for computed figures.
    pub fn highlight(&self) -> Style {
        Theme::accent(11, true, PaletteColor::AccentGold)
    }

    /// Column heading of a table: bold accent font on the header fill.
    pub fn table_heading(&self, size: u32, color: PaletteColor) -> Style {
        Theme::accent(size, true, color).fill(self.header_fill.clone())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workbook::style::color::Color;

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(PaletteColor::lookup("accent_gold"), Some(PaletteColor::AccentGold));
        assert_eq!(PaletteColor::lookup("domain_love").map(|c| c.hex()), Some("EC4899"));
        assert_eq!(PaletteColor::lookup("nope"), None);
    }

    #[test]
    fn test_palette_names_unique() {
        let mut names: Vec<_> = PaletteColor::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), PaletteColor::ALL.len());
    }

    #[test]
    fn test_standard_fonts() {
        let theme = Theme::standard();
        assert_eq!(theme.title.font.name, "Arial");
        assert_eq!(theme.title.font.point_size(), 20);
        assert!(theme.title.font.bold);
        assert_eq!(theme.header.font.point_size(), 14);
        assert!(!theme.subtitle.font.bold);
        assert_eq!(theme.normal.font.color, Some(Color::new("FFFFFF")));
        assert_eq!(theme.header_fill, Fill::solid("1A2940"));
    }
}
