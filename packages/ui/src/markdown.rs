use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render Markdown to an HTML string.
pub fn render_markdown(source: &str) -> String {
    let mut opts = Options::empty();
    opts.insert(Options::ENABLE_STRIKETHROUGH);
    opts.insert(Options::ENABLE_TABLES);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, Parser::new_ext(source, opts));
    out
}

/// Read-only Markdown block, used for maintenance job descriptions.
#[component]
pub fn Markdown(source: String, #[props(default)] class: String) -> Element {
    let rendered = render_markdown(&source);
    rsx! {
        div {
            class: "markdown {class}",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_emphasis() {
        assert_eq!(
            render_markdown("Cut back to **three buds**."),
            "<p>Cut back to <strong>three buds</strong>.</p>\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_markdown(""), "");
    }

    #[test]
    fn test_raw_text_is_escaped() {
        assert!(render_markdown("a < b").contains("a &lt; b"));
    }
}
