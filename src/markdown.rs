//! Item Type Help Text
//!
//! Type descriptions are short Markdown snippets (`you *can* break the
//! site this way`), rendered inline next to each add button.

use pulldown_cmark::{html::push_html, Options, Parser};

fn get_options() -> Options {
    Options::ENABLE_STRIKETHROUGH
}

/// Render markdown to HTML, stripping the outer `<p>` of a single paragraph
pub fn render_description(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let mut html = String::new();
    push_html(&mut html, Parser::new_ext(text, get_options()));

    let trimmed = html.trim();
    match trimmed.strip_prefix("<p>").and_then(|s| s.strip_suffix("</p>")) {
        Some(inner) if !inner.contains("<p>") => inner.to_string(),
        _ => trimmed.to_string(),
    }
}
