//! Shows the stock pipeline wiring with stand-in plugins.
//!
//! Run with: cargo run --example stock_wiring

use std::sync::Arc;

use canopy::theme::Mode;
use canopy::{MarkdownTransform, SyntaxHighlighter, compose};
use indoc::indoc;

/// Stand-in for a real emoji shortcode plugin.
struct DemoEmoji;

impl MarkdownTransform for DemoEmoji {
    fn name(&self) -> &str {
        "demo-emoji"
    }

    fn transform(&self, input: &str) -> String {
        input.replace(":crab:", "\u{1f980}")
    }
}

/// Stand-in for a real syntax highlighter.
struct DemoHighlighter;

impl SyntaxHighlighter for DemoHighlighter {
    fn name(&self) -> &str {
        "demo-highlighter"
    }

    fn highlight(&self, language: &str, source: &str) -> String {
        format!("<pre data-lang=\"{language}\">{source}</pre>")
    }
}

fn main() {
    let registry = compose::default_registry(Arc::new(DemoEmoji), Arc::new(DemoHighlighter));
    let theme = compose::default_theme();

    println!("registry: {registry:?}");
    println!("dark theme:    {}", theme.for_mode(Mode::Dark));
    println!("default theme: {}", theme.for_mode(Mode::Default));

    let page = indoc! {"
        # Hello :crab:

        Welcome to the docs.
    "};

    let emoji = registry.markdown_plugin(compose::EMOJI_KEY).unwrap();
    println!("transformed:\n{}", emoji.instance().transform(page));

    let highlighter = registry.render_plugin(compose::HIGHLIGHT_KEY).unwrap();
    println!(
        "highlighted: {}",
        highlighter.instance().highlight("rust", "fn main() {}")
    );
}
