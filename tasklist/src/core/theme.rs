//! Light/dark presentation mode and its resolved palette.
//!
//! The theme is explicit state: whoever styles output receives a
//! [`ThemeSelector`] (or its [`Palette`]) as a parameter. Toggling never
//! touches the task store.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeMode::Light => &Palette::LIGHT,
            ThemeMode::Dark => &Palette::DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(format!("unknown theme '{}' (expected light or dark)", other)),
        }
    }
}

/// Resolved colors for one theme mode, as `#rrggbb` strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub card: &'static str,
    pub text: &'static str,
    pub secondary_text: &'static str,
    pub placeholder: &'static str,
    pub border: &'static str,
    /// Muted accent used for completed-task checkboxes.
    pub done_accent: &'static str,
}

impl Palette {
    pub const LIGHT: Palette = Palette {
        background: "#f5f5f5",
        card: "#ffffff",
        text: "#333333",
        secondary_text: "#666666",
        placeholder: "#999999",
        border: "#dddddd",
        done_accent: "#4caf50",
    };

    pub const DARK: Palette = Palette {
        background: "#121212",
        card: "#1e1e1e",
        text: "#f5f5f5",
        secondary_text: "#aaaaaa",
        placeholder: "#777777",
        border: "#333333",
        done_accent: "#66bb6a",
    };
}

/// Holds the active mode. `toggle` is the single mutation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeSelector {
    mode: ThemeMode,
}

impl ThemeSelector {
    pub fn new(mode: ThemeMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn palette(&self) -> &'static Palette {
        self.mode.palette()
    }

    /// Flip light/dark and return the new mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.flipped();
        self.mode
    }
}
