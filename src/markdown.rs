//! Markdown Rendering
//!
//! pulldown-cmark wrapper for the edit/preview panes.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES | Options::ENABLE_TASKLISTS
}

/// Render markdown to HTML; empty input renders a placeholder paragraph
pub fn render_markdown(text: &str) -> String {
    if text.trim().is_empty() {
        return "<p><em>No content yet.</em></p>".to_string();
    }

    let parser = Parser::new_ext(text, get_options());
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

/// Render markdown for inline use (strips the outer `<p>` pair)
pub fn render_markdown_inline(text: &str) -> String {
    let html = render_markdown(text);

    html.trim()
        .strip_prefix("<p>")
        .and_then(|s| s.strip_suffix("</p>"))
        .map(|s| s.to_string())
        .unwrap_or(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_basic_markdown() {
        let html = render_markdown("# Title\n\nSome *emphasis*.");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>emphasis</em>"));
    }

    #[test]
    fn test_empty_input_placeholder() {
        assert_eq!(render_markdown(""), "<p><em>No content yet.</em></p>");
        assert_eq!(render_markdown("   \n"), "<p><em>No content yet.</em></p>");
    }

    #[test]
    fn test_inline_strips_paragraph() {
        assert_eq!(render_markdown_inline("plain text"), "plain text");
    }

    #[test]
    fn test_tables_enabled() {
        let html = render_markdown("|a|b|\n|-|-|\n|1|2|");
        assert!(html.contains("<table>"));
    }
}
