//! The stock pipeline wiring.
//!
//! This is the composition a generated docs site ships with: one
//! markdown-stage plugin (emoji shortcode expansion, keyed "remark-emoji"),
//! one render-stage plugin (syntax highlighting, keyed "highlight"), and
//! the GitHub theme pair. The plugin instances themselves come from the
//! host; they are registered here unchanged.

use std::sync::Arc;

use crate::plugin::{MarkdownTransform, PluginOptions, SyntaxHighlighter};
use crate::registry::PluginRegistry;
use crate::theme::{ThemeSelection, builtin};

/// Role key for the emoji shortcode plugin in the markdown stage.
pub const EMOJI_KEY: &str = "remark-emoji";

/// Role key for the syntax highlighting plugin in the render stage.
pub const HIGHLIGHT_KEY: &str = "highlight";

/// Build the default registry from host-supplied plugin instances.
///
/// The emoji plugin is registered under [`EMOJI_KEY`] with no options; the
/// highlighter under [`HIGHLIGHT_KEY`] with empty options. Calling this
/// twice with the same instances yields value-equal registries.
pub fn default_registry(
    emoji: Arc<dyn MarkdownTransform>,
    highlighter: Arc<dyn SyntaxHighlighter>,
) -> PluginRegistry {
    PluginRegistry::builder()
        .markdown_plugin(EMOJI_KEY, emoji)
        .render_plugin_with_options(HIGHLIGHT_KEY, highlighter, PluginOptions::new())
        .build()
        .expect("default keys are distinct")
}

/// The default highlight theme selection: github-dark / github-light.
pub fn default_theme() -> ThemeSelection {
    builtin::github_pair()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Mode;

    struct FakeEmoji;

    impl MarkdownTransform for FakeEmoji {
        fn name(&self) -> &str {
            "fake-emoji"
        }

        fn transform(&self, input: &str) -> String {
            input.to_string()
        }
    }

    struct FakeHighlighter;

    impl SyntaxHighlighter for FakeHighlighter {
        fn name(&self) -> &str {
            "fake-highlighter"
        }

        fn highlight(&self, _language: &str, source: &str) -> String {
            source.to_string()
        }
    }

    fn fixtures() -> (Arc<dyn MarkdownTransform>, Arc<dyn SyntaxHighlighter>) {
        (Arc::new(FakeEmoji), Arc::new(FakeHighlighter))
    }

    #[test]
    fn test_markdown_stage_has_exactly_the_emoji_entry() {
        let (emoji, highlighter) = fixtures();
        let registry = default_registry(emoji.clone(), highlighter);

        assert_eq!(registry.markdown_plugins().len(), 1);
        let entry = registry.markdown_plugin(EMOJI_KEY).unwrap();
        assert!(Arc::ptr_eq(entry.instance(), &emoji));
        assert!(entry.options().is_none());
    }

    #[test]
    fn test_render_stage_has_exactly_the_highlight_entry() {
        let (emoji, highlighter) = fixtures();
        let registry = default_registry(emoji, highlighter.clone());

        assert_eq!(registry.render_plugins().len(), 1);
        let entry = registry.render_plugin(HIGHLIGHT_KEY).unwrap();
        assert!(Arc::ptr_eq(entry.instance(), &highlighter));
        assert_eq!(entry.options(), Some(&PluginOptions::new()));
    }

    #[test]
    fn test_default_theme_is_the_github_pair() {
        let theme = default_theme();
        assert_eq!(theme.dark, "github-dark");
        assert_eq!(theme.default, "github-light");
        assert_eq!(theme.for_mode(Mode::Dark), "github-dark");
        assert_eq!(theme.for_mode(Mode::Default), "github-light");
    }

    #[test]
    fn test_composition_is_idempotent() {
        let (emoji, highlighter) = fixtures();
        let first = default_registry(emoji.clone(), highlighter.clone());
        let second = default_registry(emoji, highlighter);

        // Same keys, same instances, same options, both times.
        assert_eq!(
            first.markdown_plugins().keys().collect::<Vec<_>>(),
            second.markdown_plugins().keys().collect::<Vec<_>>(),
        );
        assert_eq!(
            first.render_plugins().keys().collect::<Vec<_>>(),
            second.render_plugins().keys().collect::<Vec<_>>(),
        );
        assert!(Arc::ptr_eq(
            first.markdown_plugin(EMOJI_KEY).unwrap().instance(),
            second.markdown_plugin(EMOJI_KEY).unwrap().instance(),
        ));
        assert_eq!(
            first.render_plugin(HIGHLIGHT_KEY).unwrap().options(),
            second.render_plugin(HIGHLIGHT_KEY).unwrap().options(),
        );
        assert_eq!(default_theme(), default_theme());
    }
}
