//! Plugin capability traits and registry entries.
//!
//! The registry never looks inside a plugin: instances are held behind
//! `Arc<dyn ...>` and forwarded to the rendering pipeline unchanged. The
//! traits here only pin down which phase a plugin participates in and what
//! the pipeline may ask of it.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::Value;

/// Free-form plugin options: an ordered mapping from option name to value.
///
/// Options are passed through to the plugin verbatim; canopy assigns them
/// no meaning. An entry may carry no options at all, which is distinct from
/// carrying an empty map.
pub type PluginOptions = IndexMap<String, Value>;

/// A markdown-stage plugin: rewrites markdown source before rendering.
///
/// Implementations are supplied by the host pipeline. Canopy only stores
/// and forwards them.
pub trait MarkdownTransform: Send + Sync {
    /// The plugin's own name, for diagnostics.
    fn name(&self) -> &str;

    /// Rewrite a markdown document.
    fn transform(&self, input: &str) -> String;
}

/// A render-stage plugin: styles code blocks in rendered output.
///
/// Implementations are supplied by the host pipeline. Canopy only stores
/// and forwards them.
pub trait SyntaxHighlighter: Send + Sync {
    /// The plugin's own name, for diagnostics.
    fn name(&self) -> &str;

    /// Highlight source code written in `language`.
    fn highlight(&self, language: &str, source: &str) -> String;
}

/// A configured plugin: the instance plus its (optional) options.
///
/// Entries are constructed when the registry is built and immutable
/// afterwards. The `Arc` handed in is the `Arc` read back, so instance
/// identity survives registration (`Arc::ptr_eq` holds).
pub struct PluginEntry<T: ?Sized> {
    instance: Arc<T>,
    options: Option<PluginOptions>,
}

/// A markdown-stage registry entry.
pub type MarkdownEntry = PluginEntry<dyn MarkdownTransform>;

/// A render-stage registry entry.
pub type RenderEntry = PluginEntry<dyn SyntaxHighlighter>;

impl<T: ?Sized> PluginEntry<T> {
    /// Create an entry with no options.
    pub fn new(instance: Arc<T>) -> Self {
        Self {
            instance,
            options: None,
        }
    }

    /// Create an entry with explicit options (which may be empty).
    pub fn with_options(instance: Arc<T>, options: PluginOptions) -> Self {
        Self {
            instance,
            options: Some(options),
        }
    }

    /// The plugin instance, exactly as it was registered.
    pub fn instance(&self) -> &Arc<T> {
        &self.instance
    }

    /// The entry's options, if any were given at registration.
    pub fn options(&self) -> Option<&PluginOptions> {
        self.options.as_ref()
    }
}

impl<T: ?Sized> Clone for PluginEntry<T> {
    fn clone(&self) -> Self {
        Self {
            instance: self.instance.clone(),
            options: self.options.clone(),
        }
    }
}

impl<T: ?Sized> fmt::Debug for PluginEntry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The instance is opaque; only the options are printable.
        f.debug_struct("PluginEntry")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
