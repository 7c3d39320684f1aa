//! Terminal styling for table listings.
//!
//! Colors are plain ANSI escape sequences and are switched off under the
//! `NO_COLOR` and `TERM=dumb` conventions.

/// ANSI escape codes used by the CLI.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headings.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for easy terrain and land counts.
    pub const GREEN: &str = "\x1b[32m";
    /// Cyan for sea counts.
    pub const CYAN: &str = "\x1b[36m";
    /// Orange (256-color) for difficult terrain.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved color codes, either ANSI sequences or empty strings.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub heading: &'static str,
    pub muted: &'static str,
    pub land: &'static str,
    pub sea: &'static str,
    pub difficult: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            heading: colors::WHITE_BOLD,
            muted: colors::GRAY,
            land: colors::GREEN,
            sea: colors::CYAN,
            difficult: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            heading: "",
            muted: "",
            land: "",
            sea: "",
            difficult: "",
        }
    }

    /// `colored()` when the terminal supports ANSI colors, else `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Color for a biome multiplier: anything above 1.0 is difficult terrain.
    #[must_use]
    pub fn for_multiplier(&self, multiplier: f64) -> &'static str {
        if multiplier > 1.0 {
            self.difficult
        } else {
            self.land
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether ANSI colors should be emitted.
///
/// Respects `NO_COLOR` (<https://no-color.org/>) and `TERM=dumb`.
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}
