//! Highlight theme selection for canopy documentation pipelines.
//!
//! This crate provides:
//! - [`ThemeSelection`]: the per-mode (light/dark) theme name pair that a
//!   rendering pipeline consults when styling code blocks
//! - [`Mode`]: the display mode a page is rendered in
//! - Built-in theme name constants (github-dark, github-light)
//!
//! Theme names are opaque to this crate: the highlighting engine that
//! consumes the selection is responsible for resolving a name to actual
//! colors, and for deciding what to do with a name it does not know.

pub mod builtin;
mod selection;

pub use selection::{Mode, ThemeError, ThemeSelection};
