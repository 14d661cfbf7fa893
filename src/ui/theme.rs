//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML color schemes, either built in (Catppuccin Mocha and Latte)
//! or loaded from a file. Views never name colors directly; they tag text with
//! a [`Tone`] and the theme maps each tone to a color.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! accent = "#89b4fa"
//! favorite_fg = "#f9e2af"
//! checked_fg = "#a6e3a1"
//! disabled_fg = "#45475a"
//! message_fg = "#89b4fa"
//! error_fg = "#f38ba8"
//! ```

use crate::domain::error::{Result, TripboardError};
use crate::ui::component::Tone;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Color scheme for UI rendering.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex color strings (e.g. `"#cdd6f4"`) for every role.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, secondary row details.
    pub text_dim: String,

    pub border: String,

    /// Point type labels and control captions.
    pub accent: String,
    /// Favorite star.
    pub favorite_fg: String,
    /// Checked option of the filter/sort controls and selected offers.
    pub checked_fg: String,
    /// Control options that cannot be chosen.
    pub disabled_fg: String,
    /// Empty-list message.
    pub message_fg: String,
    /// Last error in the footer.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Supported names: `catppuccin-mocha`, `catppuccin-latte`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripboard::ui::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TripboardError::Theme`] if the file cannot be read or the TOML
    /// is invalid or incomplete.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| TripboardError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| TripboardError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Color for a span tone.
    #[must_use]
    pub fn tone_color(&self, tone: Tone) -> &str {
        let colors = &self.colors;
        match tone {
            Tone::Normal => &colors.text_normal,
            Tone::Dim => &colors.text_dim,
            Tone::Accent => &colors.accent,
            Tone::Title => &colors.header_fg,
            Tone::Favorite => &colors.favorite_fg,
            Tone::Checked => &colors.checked_fg,
            Tone::Disabled => &colors.disabled_fg,
            Tone::Message => &colors.message_fg,
        }
    }

    /// Parses `#rrggbb`, falling back to white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use tripboard::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#ff8000"), "\u{1b}[38;2;255;128;0m");
    /// ```
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Catppuccin Mocha.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse, which the tests rule out.
    fn default() -> Self {
        Self::from_name("catppuccin-mocha")
            .expect("Built-in catppuccin-mocha theme should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn built_in_themes_parse() {
        assert_eq!(Theme::default().name, "catppuccin-mocha");
        assert!(Theme::from_name("catppuccin-latte").is_some());
    }

    #[test]
    fn invalid_hex_falls_back_to_white() {
        assert_eq!(Theme::fg("#12"), "\u{1b}[38;2;255;255;255m");
        assert_eq!(Theme::bg("zzzzzz"), "\u{1b}[48;2;255;255;255m");
    }

    #[test]
    fn tones_map_to_theme_colors() {
        let theme = Theme::default();
        assert_eq!(theme.tone_color(Tone::Favorite), theme.colors.favorite_fg);
        assert_eq!(theme.tone_color(Tone::Normal), theme.colors.text_normal);
    }

    #[test]
    fn incomplete_theme_file_is_rejected() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "name = \"broken\"\n[colors]\nheader_fg = \"#ffffff\"").unwrap();

        let err = Theme::from_file(file.path()).unwrap_err();
        assert!(matches!(err, TripboardError::Theme(_)));
    }
}
