//! Theme selection types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::builtin;

/// The display mode a documentation page is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The default (light) display mode.
    Default,
    /// The dark display mode.
    Dark,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Default => f.write_str("default"),
            Mode::Dark => f.write_str("dark"),
        }
    }
}

/// Errors from constructing or loading a theme selection.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// A theme name was empty. Both modes must always name a theme.
    #[error("empty theme name for {mode} mode")]
    EmptyThemeName {
        /// The mode whose theme name was empty.
        mode: Mode,
    },

    /// The TOML source could not be parsed.
    #[cfg(feature = "toml")]
    #[error("invalid theme selection TOML")]
    Toml(#[from] toml::de::Error),
}

/// Which highlight theme to use for each display mode.
///
/// This is a static configuration record: built once when the pipeline is
/// composed and read-only afterwards. Theme names are not validated against
/// any particular highlighting engine; consumers interpret unknown names.
///
/// The `default` field holds the light-mode theme name - the wire format
/// matches, so a selection serializes as `{"dark": "...", "default": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    /// Theme name for dark mode.
    pub dark: String,
    /// Theme name for the default (light) mode.
    pub default: String,
}

impl ThemeSelection {
    /// Create a theme selection, validating that both names are non-empty.
    pub fn new(
        dark: impl Into<String>,
        default: impl Into<String>,
    ) -> Result<Self, ThemeError> {
        let dark = dark.into();
        let default = default.into();
        if dark.is_empty() {
            return Err(ThemeError::EmptyThemeName { mode: Mode::Dark });
        }
        if default.is_empty() {
            return Err(ThemeError::EmptyThemeName {
                mode: Mode::Default,
            });
        }
        Ok(Self { dark, default })
    }

    /// The theme name for the given display mode.
    pub fn for_mode(&self, mode: Mode) -> &str {
        match mode {
            Mode::Dark => &self.dark,
            Mode::Default => &self.default,
        }
    }

    /// Load a theme selection from TOML:
    ///
    /// ```toml
    /// dark = "github-dark"
    /// default = "github-light"
    /// ```
    #[cfg(feature = "toml")]
    pub fn from_toml(source: &str) -> Result<Self, ThemeError> {
        let parsed: Self = toml::from_str(source)?;
        Self::new(parsed.dark, parsed.default)
    }
}

impl Default for ThemeSelection {
    /// The GitHub pair: `github-dark` for dark mode, `github-light` otherwise.
    fn default() -> Self {
        builtin::github_pair()
    }
}
