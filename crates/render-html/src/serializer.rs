use vitae_render_core::{BackendKind, FragmentSerializer};

/// Escapes the characters that are significant in HTML text and attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Serializes fragments to HTML.
///
/// Output stays on one line so it can be placed at the current indentation
/// inside a block.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlSerializer;

impl FragmentSerializer for HtmlSerializer {
    fn kind(&self) -> BackendKind {
        BackendKind::Html
    }

    fn text(&self, text: &str) -> String {
        escape_html(text)
    }

    fn strong(&self, inner: &str) -> String {
        format!("<strong>{}</strong>", inner)
    }

    fn emphasis(&self, inner: &str) -> String {
        format!("<em>{}</em>", inner)
    }

    fn link(&self, href: &str, inner: &str) -> String {
        format!("<a href=\"{}\">{}</a>", escape_html(href), inner)
    }

    fn line_break(&self) -> String {
        "<br/>".to_string()
    }

    fn paragraph(&self, inner: &str, only_block: bool) -> String {
        if only_block {
            inner.to_string()
        } else {
            format!("<p>{}</p>", inner)
        }
    }

    fn list(&self, ordered: bool, items: &[String]) -> String {
        let tag = if ordered { "ol" } else { "ul" };
        let items: String = items.iter().map(|item| format!("<li>{}</li>", item)).collect();
        format!("<{tag}>{items}</{tag}>")
    }

    fn join_blocks(&self, blocks: &[String]) -> String {
        blocks.concat()
    }
}
