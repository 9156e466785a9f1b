use vitae_render_core::{BlockKind, TagVocabulary};

/// Indentation of top-level content: inside `<html>`, `<body>` and `<main>`.
pub const BODY_INDENT: usize = 3;

/// HTML element vocabulary for the structural stack.
#[derive(Debug, Clone, Copy)]
pub struct HtmlTags {
    root_indent: usize,
}

impl HtmlTags {
    pub fn new() -> Self {
        Self::with_root_indent(BODY_INDENT)
    }

    pub fn with_root_indent(root_indent: usize) -> Self {
        Self { root_indent }
    }
}

impl Default for HtmlTags {
    fn default() -> Self {
        Self::new()
    }
}

fn element(kind: BlockKind) -> &'static str {
    match kind {
        BlockKind::Section => "section",
        BlockKind::Div => "div",
        BlockKind::List { ordered: true } => "ol",
        BlockKind::List { ordered: false } => "ul",
    }
}

impl TagVocabulary for HtmlTags {
    fn root_indent(&self) -> usize {
        self.root_indent
    }

    fn opening(&self, kind: BlockKind, class: &str) -> Option<String> {
        let class = match kind {
            BlockKind::Section => format!("section {}", class),
            _ => class.to_string(),
        };
        Some(format!("<{} class=\"{}\">", element(kind), class))
    }

    fn closing(&self, kind: BlockKind) -> Option<String> {
        Some(format!("</{}>", element(kind)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_render_core::StructuralStack;

    #[test]
    fn test_section_gets_section_class() {
        let mut stack = StructuralStack::new(HtmlTags::new());
        assert_eq!(
            stack.open(BlockKind::Section, "work"),
            "\t\t\t<section class=\"section work\">\n"
        );
        assert_eq!(stack.open(BlockKind::List { ordered: true }, "l"), "\t\t\t\t<ol class=\"l\">\n");
        assert_eq!(stack.close(), "\t\t\t\t</ol>\n");
        assert_eq!(stack.close(), "\t\t\t</section>\n");
    }
}
