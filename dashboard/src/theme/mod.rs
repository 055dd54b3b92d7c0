//! Light/dark display preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`ThemePreference`] is the single authority for the active theme. It keeps
//! the in-memory [`ThemeCell`], the persisted `localStorage` entry, and the
//! `data-theme` attribute on `<html>` in step. Browser access lives behind the
//! traits in [`preference`] so the resolution rules can be exercised natively;
//! [`browser`] supplies the `web-sys` implementations.
//!
//! RESOLUTION
//! ==========
//! On mount: stored value (if it parses as a [`Theme`]) → OS
//! `prefers-color-scheme` → light. Before mount the cell holds the default,
//! [`Theme::Dark`].


pub mod browser;
pub mod cell;
pub mod preference;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use cell::{Subscription, ThemeCell};
pub use preference::{
    ColorSchemeSignal, PreferenceStore, Resolution, ResolutionSource, ThemePreference, ThemeSurface,
};

/// `localStorage` key holding the persisted theme.
pub const STORAGE_KEY: &str = "z-memory-theme";

/// Attribute set on the document root; stylesheets key off its value.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Display appearance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Lowercase literal used for storage and the presentation attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when text is neither `"light"` nor `"dark"`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct ParseThemeError(pub String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ParseThemeError(other.to_owned())),
        }
    }
}
