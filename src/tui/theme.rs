//! Theme system for TUI colors and styles
//!
//! Two palettes, light and dark. Severity colors follow the badge colors of
//! the CLI listing (red for High, orange for Medium, green for Low) with a
//! shade chosen for contrast against each background.

use iocraft::prelude::Color;
use serde::{Deserialize, Serialize};

use crate::error::IncidentError;
use crate::types::Severity;

/// Light or dark presentation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

enum_display_fromstr!(
    ThemeMode,
    IncidentError::invalid_theme_mode,
    {
        Light => "light",
        Dark => "dark",
    }
);

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Source of the current presentation mode
///
/// The dashboard reads the mode to pick a palette and calls `toggle` when the
/// user asks to switch; it never stores the preference itself.
pub trait ThemeProvider {
    fn current_mode(&self) -> ThemeMode;
    fn toggle(&mut self);
}

/// In-memory theme preference for one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSwitch {
    mode: ThemeMode,
}

impl ThemeSwitch {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }
}

impl ThemeProvider for ThemeSwitch {
    fn current_mode(&self) -> ThemeMode {
        self.mode
    }

    fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "theme toggled");
    }
}

const GRAY: Color = Color::Rgb {
    r: 120,
    g: 120,
    b: 120,
};

/// Theme configuration for TUI components
#[derive(Debug, Clone)]
pub struct Theme {
    // Severity colors
    pub severity_high: Color,
    pub severity_medium: Color,
    pub severity_low: Color,

    // UI colors
    pub border: Color,
    pub border_focused: Color,
    pub background: Color,
    pub text: Color,
    pub text_dimmed: Color,
    pub highlight: Color,
    pub highlight_text: Color,
    pub header_text: Color,
    pub id_color: Color,
    pub error: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            severity_high: Color::Rgb {
                r: 248,
                g: 113,
                b: 113,
            },
            severity_medium: Color::Rgb {
                r: 251,
                g: 146,
                b: 60,
            },
            severity_low: Color::Rgb {
                r: 74,
                g: 222,
                b: 128,
            },

            border: GRAY,
            border_focused: Color::Blue,
            background: Color::Reset,
            text: Color::White,
            text_dimmed: GRAY,
            highlight: Color::Blue,
            highlight_text: Color::White,
            header_text: Color::White,
            id_color: Color::Cyan,
            error: Color::Red,
        }
    }

    pub fn light() -> Self {
        Self {
            severity_high: Color::Rgb {
                r: 185,
                g: 28,
                b: 28,
            },
            severity_medium: Color::Rgb {
                r: 194,
                g: 65,
                b: 12,
            },
            severity_low: Color::Rgb {
                r: 21,
                g: 128,
                b: 61,
            },

            border: Color::Rgb {
                r: 160,
                g: 160,
                b: 160,
            },
            border_focused: Color::DarkBlue,
            background: Color::White,
            text: Color::Black,
            text_dimmed: Color::Rgb {
                r: 100,
                g: 100,
                b: 100,
            },
            highlight: Color::Rgb {
                r: 219,
                g: 234,
                b: 254,
            },
            highlight_text: Color::Black,
            header_text: Color::White,
            id_color: Color::DarkCyan,
            error: Color::DarkRed,
        }
    }

    /// Get the color for an incident severity
    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::High => self.severity_high,
            Severity::Medium => self.severity_medium,
            Severity::Low => self.severity_low,
        }
    }
}

static LIGHT: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::light);
static DARK: std::sync::LazyLock<Theme> = std::sync::LazyLock::new(Theme::dark);

/// Get the palette for a presentation mode
pub fn theme(mode: ThemeMode) -> &'static Theme {
    match mode {
        ThemeMode::Light => &LIGHT,
        ThemeMode::Dark => &DARK,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_mode_from_str() {
        assert_eq!(ThemeMode::from_str("dark").unwrap(), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_str("Light").unwrap(), ThemeMode::Light);
        assert!(ThemeMode::from_str("sepia").is_err());
    }

    #[test]
    fn test_switch_toggle_twice_is_identity() {
        let mut switch = ThemeSwitch::default();
        assert_eq!(switch.current_mode(), ThemeMode::Light);
        switch.toggle();
        assert_eq!(switch.current_mode(), ThemeMode::Dark);
        switch.toggle();
        assert_eq!(switch.current_mode(), ThemeMode::Light);
    }

    #[test]
    fn test_severity_colors_distinct_per_mode() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let t = theme(mode);
            let high = t.severity_color(Severity::High);
            let medium = t.severity_color(Severity::Medium);
            let low = t.severity_color(Severity::Low);
            assert_ne!(high, medium);
            assert_ne!(medium, low);
            assert_ne!(high, low);
        }
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(
            theme(ThemeMode::Light).severity_color(Severity::High),
            theme(ThemeMode::Dark).severity_color(Severity::High)
        );
        assert_ne!(theme(ThemeMode::Light).text, theme(ThemeMode::Dark).text);
    }
}
