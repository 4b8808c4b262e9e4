//! The plugin registry: an immutable, role-keyed view of a pipeline's plugins.
//!
//! A registry holds two insertion-ordered maps, one per pipeline stage.
//! Keys identify plugin roles ("remark-emoji", "highlight", ...) and are
//! unique within a stage; the two stages are separate namespaces, so the
//! same key may appear in both.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use thiserror::Error;

use crate::plugin::{
    MarkdownEntry, MarkdownTransform, PluginEntry, PluginOptions, RenderEntry, SyntaxHighlighter,
};

/// A pipeline stage, used to namespace registry keys and report errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Markdown-stage plugins run against markdown source.
    Markdown,
    /// Render-stage plugins run against rendered output.
    Render,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Markdown => f.write_str("markdown"),
            Stage::Render => f.write_str("render"),
        }
    }
}

/// Errors from building a registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The same key was registered twice within one stage.
    #[error("duplicate {stage} plugin key: {key:?}")]
    DuplicateKey {
        /// The stage the collision happened in.
        stage: Stage,
        /// The colliding key.
        key: String,
    },
}

/// An immutable mapping from plugin-role key to configured plugin, per stage.
///
/// Built once via [`RegistryBuilder`]; read-only afterwards. Iteration
/// order is registration order.
#[derive(Clone)]
pub struct PluginRegistry {
    markdown: IndexMap<String, MarkdownEntry>,
    render: IndexMap<String, RenderEntry>,
}

impl PluginRegistry {
    /// Start building a registry.
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// All markdown-stage entries, in registration order.
    pub fn markdown_plugins(&self) -> &IndexMap<String, MarkdownEntry> {
        &self.markdown
    }

    /// All render-stage entries, in registration order.
    pub fn render_plugins(&self) -> &IndexMap<String, RenderEntry> {
        &self.render
    }

    /// Look up a markdown-stage entry by role key.
    pub fn markdown_plugin(&self, key: &str) -> Option<&MarkdownEntry> {
        self.markdown.get(key)
    }

    /// Look up a render-stage entry by role key.
    pub fn render_plugin(&self, key: &str) -> Option<&RenderEntry> {
        self.render.get(key)
    }
}

impl fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginRegistry")
            .field("markdown", &self.markdown.keys().collect::<Vec<_>>())
            .field("render", &self.render.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`PluginRegistry`].
///
/// Duplicate keys are reported from [`build`](Self::build) rather than at
/// registration, so wiring code can stay a plain method chain.
#[derive(Default)]
pub struct RegistryBuilder {
    markdown: Vec<(String, MarkdownEntry)>,
    render: Vec<(String, RenderEntry)>,
}

impl RegistryBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a markdown-stage plugin with no options.
    pub fn markdown_plugin(
        mut self,
        key: impl Into<String>,
        instance: Arc<dyn MarkdownTransform>,
    ) -> Self {
        self.markdown.push((key.into(), PluginEntry::new(instance)));
        self
    }

    /// Register a markdown-stage plugin with options.
    pub fn markdown_plugin_with_options(
        mut self,
        key: impl Into<String>,
        instance: Arc<dyn MarkdownTransform>,
        options: PluginOptions,
    ) -> Self {
        self.markdown
            .push((key.into(), PluginEntry::with_options(instance, options)));
        self
    }

    /// Register a render-stage plugin with no options.
    pub fn render_plugin(
        mut self,
        key: impl Into<String>,
        instance: Arc<dyn SyntaxHighlighter>,
    ) -> Self {
        self.render.push((key.into(), PluginEntry::new(instance)));
        self
    }

    /// Register a render-stage plugin with options.
    pub fn render_plugin_with_options(
        mut self,
        key: impl Into<String>,
        instance: Arc<dyn SyntaxHighlighter>,
        options: PluginOptions,
    ) -> Self {
        self.render
            .push((key.into(), PluginEntry::with_options(instance, options)));
        self
    }

    /// Finish building, rejecting duplicate keys within a stage.
    pub fn build(self) -> Result<PluginRegistry, RegistryError> {
        let markdown = collect_stage(Stage::Markdown, self.markdown)?;
        let render = collect_stage(Stage::Render, self.render)?;
        Ok(PluginRegistry { markdown, render })
    }
}

fn collect_stage<T: ?Sized>(
    stage: Stage,
    entries: Vec<(String, PluginEntry<T>)>,
) -> Result<IndexMap<String, PluginEntry<T>>, RegistryError> {
    let mut map = IndexMap::with_capacity(entries.len());
    for (key, entry) in entries {
        if map.contains_key(&key) {
            return Err(RegistryError::DuplicateKey { stage, key });
        }
        map.insert(key, entry);
    }
    Ok(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Noop(&'static str);

    impl MarkdownTransform for Noop {
        fn name(&self) -> &str {
            self.0
        }

        fn transform(&self, input: &str) -> String {
            input.to_string()
        }
    }

    impl SyntaxHighlighter for Noop {
        fn name(&self) -> &str {
            self.0
        }

        fn highlight(&self, _language: &str, source: &str) -> String {
            source.to_string()
        }
    }

    fn markdown(name: &'static str) -> Arc<dyn MarkdownTransform> {
        Arc::new(Noop(name))
    }

    fn render(name: &'static str) -> Arc<dyn SyntaxHighlighter> {
        Arc::new(Noop(name))
    }

    #[test]
    fn test_accessors() {
        let emoji = markdown("emoji");
        let registry = PluginRegistry::builder()
            .markdown_plugin("remark-emoji", emoji.clone())
            .render_plugin_with_options("highlight", render("hl"), PluginOptions::new())
            .build()
            .unwrap();

        assert_eq!(registry.markdown_plugins().len(), 1);
        assert_eq!(registry.render_plugins().len(), 1);

        let entry = registry.markdown_plugin("remark-emoji").unwrap();
        assert!(Arc::ptr_eq(entry.instance(), &emoji));
        assert!(registry.markdown_plugin("missing").is_none());
        assert!(registry.render_plugin("remark-emoji").is_none());
    }

    #[test]
    fn test_duplicate_key_within_stage_rejected() {
        let err = PluginRegistry::builder()
            .markdown_plugin("emoji", markdown("a"))
            .markdown_plugin("emoji", markdown("b"))
            .build()
            .unwrap_err();

        assert_eq!(
            err,
            RegistryError::DuplicateKey {
                stage: Stage::Markdown,
                key: "emoji".to_string(),
            }
        );
        assert_eq!(err.to_string(), "duplicate markdown plugin key: \"emoji\"");
    }

    #[test]
    fn test_same_key_across_stages_allowed() {
        // Stages are separate namespaces.
        let registry = PluginRegistry::builder()
            .markdown_plugin("x", markdown("m"))
            .render_plugin("x", render("r"))
            .build()
            .unwrap();

        assert!(registry.markdown_plugin("x").is_some());
        assert!(registry.render_plugin("x").is_some());
    }

    #[test]
    fn test_registration_order_preserved() {
        let registry = PluginRegistry::builder()
            .markdown_plugin("b", markdown("b"))
            .markdown_plugin("a", markdown("a"))
            .markdown_plugin("c", markdown("c"))
            .build()
            .unwrap();

        let keys: Vec<&str> = registry
            .markdown_plugins()
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_clone_shares_instances() {
        let emoji = markdown("emoji");
        let registry = PluginRegistry::builder()
            .markdown_plugin("emoji", emoji.clone())
            .build()
            .unwrap();

        let cloned = registry.clone();
        let entry = cloned.markdown_plugin("emoji").unwrap();
        assert!(Arc::ptr_eq(entry.instance(), &emoji));
    }
}
