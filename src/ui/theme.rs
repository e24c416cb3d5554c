//! Theme management and ANSI escape sequence generation.
//!
//! Themes are TOML documents. Two ship with the plugin:
//!
//! - `emerald`: green and amber on a dark terminal (default)
//! - `parchment`: ink on a light terminal
//!
//! A custom file can be supplied with the `theme_file` option.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! brand_fg = "#34d399"
//! accent_fg = "#fb923c"
//! header_fg = "#ecfdf5"
//! # header_bg = "#064e3b"   (optional)
//! tab_active_fg = "#022c22"
//! tab_active_bg = "#34d399"
//! selection_fg = "#022c22"
//! selection_bg = "#6ee7b7"
//! text_normal = "#e7e5e4"
//! text_dim = "#a8a29e"
//! border = "#065f46"
//! search_bar_border = "#fb923c"
//! match_highlight_fg = "#1c1917"
//! match_highlight_bg = "#fdba74"
//! empty_state_fg = "#fb923c"
//! star_fg = "#fbbf24"
//! error_fg = "#f87171"
//! ```

use crate::domain::{BookstacksError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Name of the theme used when none is configured.
pub const DEFAULT_THEME: &str = "emerald";

const EMERALD: &str = include_str!("../../themes/emerald.toml");
const PARCHMENT: &str = include_str!("../../themes/parchment.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements, as hex strings (e.g. `"#34d399"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Library name in the navigation bar.
    pub brand_fg: String,
    /// Secondary emphasis (favourites heading, 404 code).
    pub accent_fg: String,

    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    /// Tab of the current route.
    pub tab_active_fg: String,
    pub tab_active_bg: String,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    /// Footer, subtitles, placeholders.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Rating stars.
    pub star_fg: String,
    /// Inline form errors.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` for names other than `emerald` and `parchment`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bookstacks::ui::Theme;
    ///
    /// let theme = Theme::from_name("parchment").unwrap();
    /// assert_eq!(theme.name, "parchment");
    /// assert!(Theme::from_name("neon").is_none());
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let source = match name.trim().to_ascii_lowercase().as_str() {
            "emerald" => EMERALD,
            "parchment" => PARCHMENT,
            _ => return None,
        };

        toml::from_str(source).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`BookstacksError::Theme`] if the file cannot be read or its
    /// content is not a complete theme.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| BookstacksError::Theme(format!("failed to read {}: {e}", path.display())))?;

        toml::from_str(&contents)
            .map_err(|e| BookstacksError::Theme(format!("failed to parse {}: {e}", path.display())))
    }

    /// Converts a hex color to an RGB tuple. Malformed input gives white.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// ANSI 24-bit foreground escape for a hex color.
    ///
    /// ```rust
    /// use bookstacks::ui::Theme;
    ///
    /// assert_eq!(Theme::fg("#047857"), "\u{1b}[38;2;4;120;87m");
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
    pub const fn italic() -> &'static str {
        "\u{001b}[3m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `emerald` theme.
    ///
    /// # Panics
    ///
    /// Panics if the bundled theme fails to parse, which the unit tests rule out.
    fn default() -> Self {
        Self::from_name(DEFAULT_THEME).expect("bundled emerald theme should always parse")
    }
}
