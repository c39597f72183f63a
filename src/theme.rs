//! Colour themes for the terminal board.

use derive_more::{Display, Error};
use ratatui::style::{Color, Modifier, Style};
use tracing::instrument;

/// A static colour table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Name used in config files and on the command line.
    pub name: &'static str,
    /// Screen background.
    pub background: Color,
    /// Board background.
    pub grid: Color,
    /// Empty cell.
    pub empty: Color,
    /// Text on light tiles.
    pub text: Color,
    /// Text on dark tiles (8 and up).
    pub text_bright: Color,
    /// Tile colours by value, ascending.
    pub tiles: &'static [(u32, Color)],
    /// Colour for tiles beyond the table.
    pub beyond: Color,
}

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// The familiar beige board.
pub const CLASSIC: Theme = Theme {
    name: "classic",
    background: rgb(0xfaf8ef),
    grid: rgb(0xbbada0),
    empty: rgb(0xcdc1b4),
    text: rgb(0x776e65),
    text_bright: rgb(0xf9f6f2),
    tiles: &[
        (2, rgb(0xeee4da)),
        (4, rgb(0xede0c8)),
        (8, rgb(0xf2b179)),
        (16, rgb(0xf59563)),
        (32, rgb(0xf67c5f)),
        (64, rgb(0xf65e3b)),
        (128, rgb(0xedcf72)),
        (256, rgb(0xedcc61)),
        (512, rgb(0xedc850)),
        (1024, rgb(0xedc53f)),
        (2048, rgb(0xedc22e)),
    ],
    beyond: rgb(0x3c3a32),
};

/// Slate board with pale tiles.
pub const DARK: Theme = Theme {
    name: "dark",
    background: rgb(0x2d3436),
    grid: rgb(0x3c4245),
    empty: rgb(0x4b5254),
    text: rgb(0x2d3436),
    text_bright: rgb(0xffffff),
    tiles: &[
        (2, rgb(0xdfe6e9)),
        (4, rgb(0xb2bec3)),
        (8, rgb(0x74b9ff)),
        (16, rgb(0x0984e3)),
        (32, rgb(0xa29bfe)),
        (64, rgb(0x6c5ce7)),
        (128, rgb(0x55efc4)),
        (256, rgb(0x00b894)),
        (512, rgb(0xfdcb6e)),
        (1024, rgb(0xe17055)),
        (2048, rgb(0xd63031)),
    ],
    beyond: rgb(0x000000),
};

/// Every built-in theme.
pub const THEMES: [Theme; 2] = [CLASSIC, DARK];

impl Theme {
    /// Looks up a built-in theme by name (case-insensitive).
    #[instrument]
    pub fn named(name: &str) -> Result<Theme, ThemeError> {
        THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name.trim()))
            .copied()
            .ok_or_else(|| ThemeError::new(format!("Unknown theme '{}'", name)))
    }

    /// Names of the built-in themes.
    pub fn names() -> Vec<&'static str> {
        THEMES.iter().map(|t| t.name).collect()
    }

    /// Background colour for a cell holding `value`.
    pub fn tile_color(&self, value: u32) -> Color {
        if value == 0 {
            return self.empty;
        }
        self.tiles
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, c)| *c)
            .unwrap_or(self.beyond)
    }

    /// Full style for a cell holding `value`.
    pub fn tile_style(&self, value: u32) -> Style {
        let fg = if value >= 8 { self.text_bright } else { self.text };
        Style::default()
            .bg(self.tile_color(value))
            .fg(fg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        CLASSIC
    }
}

/// Theme lookup error.
#[derive(Debug, Clone, Display, Error)]
#[display("Theme error: {} at {}:{}", message, file, line)]
pub struct ThemeError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ThemeError {
    /// Creates a new theme error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(Theme::named("Dark").map(|t| t.name).ok(), Some("dark"));
        assert_eq!(Theme::named(" classic ").map(|t| t.name).ok(), Some("classic"));
    }

    #[test]
    fn test_unknown_theme_errors() {
        let err = Theme::named("neon").unwrap_err();
        assert!(err.message.contains("neon"));
    }

    #[test]
    fn test_tile_colors() {
        assert_eq!(CLASSIC.tile_color(0), CLASSIC.empty);
        assert_eq!(CLASSIC.tile_color(2), rgb(0xeee4da));
        assert_eq!(CLASSIC.tile_color(4096), CLASSIC.beyond);
    }

    #[test]
    fn test_bright_text_from_eight() {
        assert_eq!(DARK.tile_style(4).fg, Some(DARK.text));
        assert_eq!(DARK.tile_style(8).fg, Some(DARK.text_bright));
    }

    #[test]
    fn test_names() {
        assert_eq!(Theme::names(), vec!["classic", "dark"]);
    }
}
