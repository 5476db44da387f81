//! Theme handling shared with the web frontend.
//!
//! The simulator never caches the foreground across frames; the host asks
//! the active theme for its color once per frame so a theme switch shows up
//! with at most one frame of lag.

use std::fmt;
use std::str::FromStr;

/// Solid foreground color, rendered as a CSS `rgb(r, g, b)` string when the
/// canvas painter needs one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Particle and link color for this theme.
    pub fn foreground(self) -> Rgb {
        match self {
            Theme::Dark => Rgb(255, 255, 255),
            Theme::Light => Rgb(0, 0, 0),
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Stable name used as the persisted preference value.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown theme preference: {0:?}")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
