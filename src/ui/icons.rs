use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📦, 📖, etc.)
    NerdFont, // Nerd Fonts glyphs (U+F015, etc.)
    Off,      // No icons
}

impl IconMode {
    /// Parse the config string; unknown values fall back to emoji
    pub fn from_config(value: &str) -> Self {
        match value {
            "nerdfont" => IconMode::NerdFont,
            "off" | "none" => IconMode::Off,
            _ => IconMode::Emoji,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub icon_color: Color,
    pub chevron_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            icon_color: Color::Cyan,
            chevron_color: Color::DarkGray,
        }
    }
}

/// Resolves icon names from the tree into styled spans.
///
/// Resolution is best-effort: an unknown name yields `None` and the item is
/// rendered without an icon. It never fails.
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

/// Known icon names mapped to (emoji, nerd font) glyphs
fn lookup(name: &str) -> Option<(&'static str, &'static str)> {
    let pair = match name {
        "home" => ("🏠", "\u{f015}"),
        "box" | "package" => ("📦", "\u{f487}"),
        "laptop" | "computer" => ("💻", "\u{f109}"),
        "phone" => ("📱", "\u{f10b}"),
        "folder" => ("📁", "\u{f07b}"),
        "file" | "document" => ("📄", "\u{f15b}"),
        "user" | "person" => ("👤", "\u{f007}"),
        "search" => ("🔍", "\u{f002}"),
        "mail" => ("✉️", "\u{f0e0}"),
        "info" => ("ℹ️", "\u{f05a}"),
        "star" => ("⭐", "\u{f005}"),
        "globe" => ("🌐", "\u{f0ac}"),
        "shield" => ("🛡️", "\u{f132}"),
        "bell" => ("🔔", "\u{f0f3}"),
        "wrench" | "tools" => ("🔧", "\u{f0ad}"),
        "book" => ("📖", "\u{f02d}"),
        "chart" => ("📊", "\u{f080}"),
        "gear" | "settings" => ("⚙️", "\u{f013}"),
        _ => return None,
    };
    Some(pair)
}

impl IconRenderer {
    pub fn new(mode: IconMode) -> Self {
        Self {
            mode,
            theme: IconTheme::default(),
        }
    }

    /// Resolve an icon name into a styled span, `None` when the name is
    /// unknown, absent, or icons are disabled
    pub fn resolve(&self, name: Option<&str>) -> Option<Span<'static>> {
        if self.mode == IconMode::Off {
            return None;
        }
        let (emoji, nerd) = lookup(name?)?;
        let glyph = match self.mode {
            IconMode::Emoji => format!("{} ", emoji),
            IconMode::NerdFont => format!("{} ", nerd),
            IconMode::Off => unreachable!(),
        };
        Some(Span::styled(
            glyph,
            Style::default().fg(self.theme.icon_color),
        ))
    }

    /// Trailing marker on branch items, hinting that activation drills down
    pub fn chevron(&self) -> Span<'static> {
        Span::styled("›", Style::default().fg(self.theme.chevron_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_icon_resolves() {
        let renderer = IconRenderer::new(IconMode::Emoji);
        assert!(renderer.resolve(Some("home")).is_some());
        assert!(renderer.resolve(Some("wrench")).is_some());
    }

    #[test]
    fn test_unknown_icon_resolves_to_none() {
        let renderer = IconRenderer::new(IconMode::Emoji);
        assert!(renderer.resolve(Some("no-such-icon")).is_none());
        assert!(renderer.resolve(None).is_none());
    }

    #[test]
    fn test_off_mode_suppresses_icons() {
        let renderer = IconRenderer::new(IconMode::Off);
        assert!(renderer.resolve(Some("home")).is_none());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(IconMode::from_config("nerdfont"), IconMode::NerdFont);
        assert_eq!(IconMode::from_config("off"), IconMode::Off);
        assert_eq!(IconMode::from_config("emoji"), IconMode::Emoji);
        assert_eq!(IconMode::from_config("bogus"), IconMode::Emoji);
    }
}
