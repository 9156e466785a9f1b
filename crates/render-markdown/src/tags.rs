use vitae_render_core::{BlockKind, TagVocabulary};
use vitae_render_html::HtmlTags;

/// HTML block tags at the top level, with silent sections.
///
/// Sections are announced by heading markers instead of elements, so they
/// emit no tokens and do not indent their children.
#[derive(Debug, Clone, Copy)]
pub struct MarkdownTags {
    blocks: HtmlTags,
}

impl MarkdownTags {
    pub fn new() -> Self {
        Self {
            blocks: HtmlTags::with_root_indent(0),
        }
    }
}

impl Default for MarkdownTags {
    fn default() -> Self {
        Self::new()
    }
}

impl TagVocabulary for MarkdownTags {
    fn root_indent(&self) -> usize {
        0
    }

    fn opening(&self, kind: BlockKind, class: &str) -> Option<String> {
        match kind {
            BlockKind::Section => None,
            _ => self.blocks.opening(kind, class),
        }
    }

    fn closing(&self, kind: BlockKind) -> Option<String> {
        match kind {
            BlockKind::Section => None,
            _ => self.blocks.closing(kind),
        }
    }

    fn indents_children(&self, kind: BlockKind) -> bool {
        kind != BlockKind::Section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_render_core::StructuralStack;

    #[test]
    fn test_sections_are_silent() {
        let mut stack = StructuralStack::new(MarkdownTags::new());
        assert_eq!(stack.open(BlockKind::Section, "work"), "");
        assert_eq!(stack.open(BlockKind::Div, "item"), "<div class=\"item\">\n");
        assert_eq!(stack.current_indent(), 1);
        assert_eq!(stack.close(), "</div>\n");
        assert_eq!(stack.close(), "");
        assert_eq!(stack.close(), "");
    }
}
