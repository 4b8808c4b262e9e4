//! Canopy - plugin composition for documentation content pipelines
//!
//! A documentation site renders markdown in two phases: markdown-stage
//! plugins rewrite the source text (shortcode expansion and the like), then
//! render-stage plugins style the output (syntax highlighting). Canopy is
//! the composition layer between the two: it holds the plugins a site has
//! wired up, keyed by role, plus the highlight theme selection, and hands
//! them to the rendering pipeline as a single immutable value.
//!
//! Canopy does not implement any plugin itself. Plugins are opaque
//! capabilities supplied by the host:
//!
//! - [`MarkdownTransform`]: a markdown-stage plugin (text in, text out)
//! - [`SyntaxHighlighter`]: a render-stage plugin (language + source in,
//!   styled output out)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use canopy::{compose, global};
//!
//! // Plugins come from wherever the host loads them.
//! let emoji = Arc::new(my_emoji_plugin());
//! let highlighter = Arc::new(my_highlighter());
//!
//! // The stock wiring: "remark-emoji" + "highlight" + the GitHub theme pair.
//! let registry = compose::default_registry(emoji, highlighter);
//! let theme = compose::default_theme();
//!
//! // Optionally pin the registry for the whole process.
//! global::install_global(registry)?;
//! ```
//!
//! # Immutability
//!
//! A [`PluginRegistry`] is built once through [`RegistryBuilder`] and never
//! changes afterwards. All accessors return shared references; there is no
//! mutation API. The optional process-wide registry in [`global`] is
//! initialized exactly once and read-only for the process lifetime.

pub use canopy_theme as theme;

pub mod compose;
pub mod global;
mod plugin;
mod registry;

pub use plugin::{
    MarkdownEntry, MarkdownTransform, PluginEntry, PluginOptions, RenderEntry, SyntaxHighlighter,
};
pub use registry::{PluginRegistry, RegistryBuilder, RegistryError, Stage};
pub use theme::{Mode, ThemeSelection};
