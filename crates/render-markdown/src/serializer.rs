use vitae_render_core::{BackendKind, Block, FragmentSerializer, FragmentTree};

const BULLETS: [&str; 3] = ["*", "-", "+"];
const ORDERED: [&str; 2] = ["1.", "1)"];

/// Re-emits fragments as Markdown.
///
/// Lists are framed by blank lines so they also end a preceding HTML block.
/// Consecutive lists switch markers, otherwise Markdown would merge them.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownSerializer;

impl FragmentSerializer for MarkdownSerializer {
    fn kind(&self) -> BackendKind {
        BackendKind::Markdown
    }

    fn text(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '\\' | '*' | '[' | ']') {
                out.push('\\');
            }
            out.push(c);
        }
        out
    }

    fn strong(&self, inner: &str) -> String {
        format!("**{}**", inner)
    }

    fn emphasis(&self, inner: &str) -> String {
        format!("*{}*", inner)
    }

    fn link(&self, href: &str, inner: &str) -> String {
        format!("[{}]({})", inner, href)
    }

    fn line_break(&self) -> String {
        "  \n".to_string()
    }

    fn paragraph(&self, inner: &str, _only_block: bool) -> String {
        inner.to_string()
    }

    fn list(&self, ordered: bool, items: &[String]) -> String {
        self.framed_list(ordered, items, 0)
    }

    /// Blocks are separated by a blank line; framed lists bring their own.
    fn join_blocks(&self, blocks: &[String]) -> String {
        let mut out = String::new();
        for block in blocks {
            if !out.is_empty() {
                let framed = out.ends_with('\n') || block.starts_with('\n');
                out.push_str(if framed { "\n" } else { "\n\n" });
            }
            out.push_str(block);
        }
        out
    }

    fn serialize_tree(&self, tree: &FragmentTree) -> String {
        let only_block = tree.blocks.len() == 1;
        let mut lists = 0;
        let blocks: Vec<String> = tree
            .blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(inlines) => self.paragraph(&self.inlines(inlines), only_block),
                Block::List { ordered, items } => {
                    let items: Vec<String> = items.iter().map(|item| self.inlines(item)).collect();
                    let out = self.framed_list(*ordered, &items, lists);
                    lists += 1;
                    out
                }
            })
            .collect();
        self.join_blocks(&blocks)
    }
}

impl MarkdownSerializer {
    /// A list between blank lines; `index` picks the marker.
    fn framed_list(&self, ordered: bool, items: &[String], index: usize) -> String {
        let marker = if ordered {
            ORDERED[index % ORDERED.len()]
        } else {
            BULLETS[index % BULLETS.len()]
        };
        let lines: Vec<String> = items
            .iter()
            .map(|item| format!("{} {}", marker, item))
            .collect();
        format!("\n{}\n", lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_types::Fragment;

    #[test]
    fn test_inline_markup_round_trips() {
        let out = MarkdownSerializer.serialize(&Fragment::new("Hello **world**, *you* [site](https://a.b)"));
        assert_eq!(out, "Hello **world**, *you* [site](https://a.b)");
    }

    #[test]
    fn test_list_between_paragraphs() {
        let out = MarkdownSerializer.serialize(&Fragment::new("Intro.\n\n- one\n- two\n\nOutro."));
        assert_eq!(out, "Intro.\n\n* one\n* two\n\nOutro.");
    }

    #[test]
    fn test_list_is_framed_by_blank_lines() {
        let out = MarkdownSerializer.serialize(&Fragment::new("- a\n- b"));
        assert_eq!(out, "\n* a\n* b\n");
    }

    #[test]
    fn test_adjacent_lists_switch_markers() {
        let out = MarkdownSerializer.serialize(&Fragment::new("- a\n\n+ b\n\n1. c\n\n2) d"));
        assert_eq!(out, "\n* a\n\n\n- b\n\n\n1. c\n\n\n1) d\n");
    }

    #[test]
    fn test_literal_asterisk_is_escaped() {
        let out = MarkdownSerializer.serialize(&Fragment::new("2 \\* 3"));
        assert_eq!(out, "2 \\* 3");
    }
}
