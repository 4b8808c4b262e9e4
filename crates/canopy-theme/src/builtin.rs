//! Built-in theme names.
//!
//! These are the theme names that documentation pipelines ship with out of
//! the box. The names follow the convention used by highlighting engines
//! (lowercase, hyphen-separated).

use crate::ThemeSelection;

/// The GitHub dark theme name.
pub const GITHUB_DARK: &str = "github-dark";

/// The GitHub light theme name.
pub const GITHUB_LIGHT: &str = "github-light";

/// The stock GitHub pairing: dark mode uses [`GITHUB_DARK`], the default
/// (light) mode uses [`GITHUB_LIGHT`].
pub fn github_pair() -> ThemeSelection {
    ThemeSelection {
        dark: GITHUB_DARK.to_string(),
        default: GITHUB_LIGHT.to_string(),
    }
}
