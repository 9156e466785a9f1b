//! Fragment parsing and the generic fragment-to-backend serializer.
//!
//! A fragment's Markdown is parsed once into a small [`FragmentTree`] holding
//! only the supported subset: paragraphs, one level of lists, strong and
//! regular emphasis, links and line breaks. Every other construct is dropped
//! with a warning. Backends then implement [`FragmentSerializer`] by
//! providing tokens; the walk over the tree is shared.

use crate::error::RenderError;
use crate::kind::BackendKind;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use std::collections::HashMap;
use std::sync::Arc;
use vitae_types::Fragment;

#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    Strong(Vec<Inline>),
    Emphasis(Vec<Inline>),
    Link { href: String, children: Vec<Inline> },
    LineBreak,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FragmentTree {
    pub blocks: Vec<Block>,
}

impl FragmentTree {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

#[derive(Debug)]
enum Frame {
    Paragraph,
    Item,
    Strong,
    Emphasis,
    Link(String),
}

#[derive(Debug)]
struct OpenList {
    ordered: bool,
    items: Vec<Vec<Inline>>,
    depth: usize,
}

#[derive(Debug, Default)]
struct TreeBuilder {
    blocks: Vec<Block>,
    list: Option<OpenList>,
    frames: Vec<(Frame, Vec<Inline>)>,
    skip_depth: usize,
}

impl TreeBuilder {
    /// Adjacent text runs are merged, so serializers see whole runs of text.
    fn push_inline(&mut self, inline: Inline) {
        if self.frames.is_empty() {
            let frame = if self.list.is_some() {
                Frame::Item
            } else {
                Frame::Paragraph
            };
            self.frames.push((frame, Vec::new()));
        }
        if let Some((_, children)) = self.frames.last_mut() {
            match (children.last_mut(), inline) {
                (Some(Inline::Text(last)), Inline::Text(text)) => last.push_str(&text),
                (_, inline) => children.push(inline),
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        if self.skip_depth > 0 {
            self.skip_depth += 1;
            return;
        }
        match tag {
            Tag::Paragraph => {
                // Loose list items wrap their text in paragraphs; the item frame already holds it.
                if self.list.is_some() {
                    if matches!(self.frames.last(), Some((Frame::Item, children)) if !children.is_empty()) {
                        self.push_inline(Inline::Text(" ".to_string()));
                    }
                } else {
                    self.frames.push((Frame::Paragraph, Vec::new()));
                }
            }
            Tag::List(start) => match self.list.as_mut() {
                Some(list) => {
                    log::warn!("Nested list in fragment; flattening it into the enclosing list.");
                    list.depth += 1;
                }
                None => {
                    self.list = Some(OpenList {
                        ordered: start.is_some(),
                        items: Vec::new(),
                        depth: 1,
                    });
                }
            },
            Tag::Item => {
                self.finish_item();
                self.frames.push((Frame::Item, Vec::new()));
            }
            Tag::Strong => self.frames.push((Frame::Strong, Vec::new())),
            Tag::Emphasis => self.frames.push((Frame::Emphasis, Vec::new())),
            Tag::Link { dest_url, .. } => {
                self.frames.push((Frame::Link(dest_url.to_string()), Vec::new()))
            }
            other => {
                log::warn!("Unsupported construct in fragment ({:?}); dropping it.", other);
                self.skip_depth = 1;
            }
        }
    }

    fn end(&mut self, tag: TagEnd) {
        if self.skip_depth > 0 {
            self.skip_depth -= 1;
            return;
        }
        match tag {
            TagEnd::Paragraph => {
                if self.list.is_some() {
                    return;
                }
                match self.frames.pop() {
                    Some((Frame::Paragraph, children)) => {
                        if !children.is_empty() {
                            self.blocks.push(Block::Paragraph(children));
                        }
                    }
                    Some(other) => self.frames.push(other),
                    None => {}
                }
            }
            TagEnd::Item => self.finish_item(),
            TagEnd::List(_) => {
                self.finish_item();
                let closed = match self.list.as_mut() {
                    Some(list) => {
                        list.depth -= 1;
                        list.depth == 0
                    }
                    None => false,
                };
                if closed {
                    self.flush_list();
                }
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link => {
                if let Some((frame, children)) = self.frames.pop() {
                    let inline = match frame {
                        Frame::Strong => Inline::Strong(children),
                        Frame::Emphasis => Inline::Emphasis(children),
                        Frame::Link(href) => Inline::Link { href, children },
                        Frame::Paragraph | Frame::Item => {
                            self.frames.push((frame, children));
                            return;
                        }
                    };
                    self.push_inline(inline);
                }
            }
            _ => {}
        }
    }

    fn finish_item(&mut self) {
        if !matches!(self.frames.last(), Some((Frame::Item, _))) {
            return;
        }
        if let Some((_, children)) = self.frames.pop() {
            self.push_item(children);
        }
    }

    fn push_item(&mut self, children: Vec<Inline>) {
        if children.is_empty() {
            return;
        }
        if let Some(list) = self.list.as_mut() {
            list.items.push(children);
        }
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            if !list.items.is_empty() {
                self.blocks.push(Block::List {
                    ordered: list.ordered,
                    items: list.items,
                });
            }
        }
    }

    fn finish(mut self) -> FragmentTree {
        // Unterminated inline frames are folded back into their parents.
        while let Some((frame, children)) = self.frames.pop() {
            match frame {
                Frame::Paragraph => {
                    if !children.is_empty() {
                        self.blocks.push(Block::Paragraph(children));
                    }
                }
                Frame::Item => self.push_item(children),
                Frame::Strong => self.push_inline(Inline::Strong(children)),
                Frame::Emphasis => self.push_inline(Inline::Emphasis(children)),
                Frame::Link(href) => self.push_inline(Inline::Link { href, children }),
            }
        }
        self.flush_list();
        FragmentTree {
            blocks: self.blocks,
        }
    }
}

/// Parses restricted Markdown into a [`FragmentTree`].
pub fn parse_fragment(markdown: &str) -> FragmentTree {
    let mut builder = TreeBuilder::default();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(tag) => builder.start(tag),
            Event::End(tag) => builder.end(tag),
            _ if builder.skip_depth > 0 => {}
            Event::Text(text) => builder.push_inline(Inline::Text(text.to_string())),
            Event::SoftBreak => builder.push_inline(Inline::Text(" ".to_string())),
            Event::HardBreak => builder.push_inline(Inline::LineBreak),
            other => {
                log::warn!("Unsupported inline construct in fragment ({:?}); dropping it.", other);
            }
        }
    }
    builder.finish()
}

/// Serializes fragments into one backend's syntax.
///
/// Implementors supply the tokens; the tree walk is provided.
pub trait FragmentSerializer: Send + Sync {
    fn kind(&self) -> BackendKind;

    /// Escapes plain text.
    fn text(&self, text: &str) -> String;

    fn strong(&self, inner: &str) -> String;

    fn emphasis(&self, inner: &str) -> String;

    fn link(&self, href: &str, inner: &str) -> String;

    fn line_break(&self) -> String;

    /// Wraps a paragraph. `only_block` is true when the paragraph is the whole fragment.
    fn paragraph(&self, inner: &str, only_block: bool) -> String;

    fn list(&self, ordered: bool, items: &[String]) -> String;

    fn join_blocks(&self, blocks: &[String]) -> String {
        blocks.join("\n")
    }

    fn inlines(&self, inlines: &[Inline]) -> String {
        let mut out = String::new();
        for inline in inlines {
            match inline {
                Inline::Text(text) => out.push_str(&self.text(text)),
                Inline::Strong(children) => out.push_str(&self.strong(&self.inlines(children))),
                Inline::Emphasis(children) => {
                    out.push_str(&self.emphasis(&self.inlines(children)))
                }
                Inline::Link { href, children } => {
                    out.push_str(&self.link(href, &self.inlines(children)))
                }
                Inline::LineBreak => out.push_str(&self.line_break()),
            }
        }
        out
    }

    fn serialize_tree(&self, tree: &FragmentTree) -> String {
        let only_block = tree.blocks.len() == 1;
        let blocks: Vec<String> = tree
            .blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(inlines) => self.paragraph(&self.inlines(inlines), only_block),
                Block::List { ordered, items } => {
                    let items: Vec<String> = items.iter().map(|item| self.inlines(item)).collect();
                    self.list(*ordered, &items)
                }
            })
            .collect();
        self.join_blocks(&blocks)
    }

    /// Serializes a fragment. Absent fragments give an empty string.
    fn serialize(&self, fragment: &Fragment) -> String {
        match fragment.as_str() {
            Some(markdown) if !fragment.is_empty() => {
                self.serialize_tree(&parse_fragment(markdown))
            }
            _ => String::new(),
        }
    }
}

/// Fragment serializers keyed by backend, built per builder.
#[derive(Clone, Default)]
pub struct SerializerTable {
    entries: HashMap<BackendKind, Arc<dyn FragmentSerializer>>,
}

impl SerializerTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a serializer under its own kind, replacing any previous one.
    pub fn register(&mut self, serializer: Arc<dyn FragmentSerializer>) {
        self.entries.insert(serializer.kind(), serializer);
    }

    pub fn with(mut self, serializer: Arc<dyn FragmentSerializer>) -> Self {
        self.register(serializer);
        self
    }

    pub fn get(&self, kind: BackendKind) -> Result<Arc<dyn FragmentSerializer>, RenderError> {
        self.entries
            .get(&kind)
            .cloned()
            .ok_or(RenderError::MissingSerializer(kind))
    }

    pub fn contains(&self, kind: BackendKind) -> bool {
        self.entries.contains_key(&kind)
    }
}

impl std::fmt::Debug for SerializerTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.entries.keys().collect();
        kinds.sort();
        f.debug_struct("SerializerTable").field("kinds", &kinds).finish()
    }
}
