//! Markdown text rendered to HTML.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Convert markdown to an HTML fragment.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders trusted, compiled-in markdown.
#[component]
pub fn MarkdownText(
    /// Markdown source
    markdown: String,
    /// Optional CSS class
    #[props(default = None)]
    class: Option<String>,
) -> Element {
    let html_content = render_markdown(&markdown);
    let class = class.unwrap_or_default();

    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{html_content}",
        }
    }
}
