//! The structural stack: balanced nesting without call sites tracking what is open.
//!
//! Callers open blocks with a kind and a class, and close them with a bare
//! `close()`. The stack remembers what was opened and emits the matching
//! terminator. Indentation is derived from the open blocks, so leaf emitters
//! ask [`StructuralStack::current_indent`] instead of threading a level around.

/// The kinds of block a backend can open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Section,
    Div,
    List { ordered: bool },
}

/// Maps block kinds to a backend's tokens.
pub trait TagVocabulary {
    /// Indentation of top-level blocks.
    fn root_indent(&self) -> usize;

    /// The opening token, or `None` when the block is silent in this vocabulary.
    fn opening(&self, kind: BlockKind, class: &str) -> Option<String>;

    /// The closing token, or `None` when the block needs no terminator.
    fn closing(&self, kind: BlockKind) -> Option<String>;

    /// Whether children of this block are indented one level deeper.
    fn indents_children(&self, kind: BlockKind) -> bool {
        let _ = kind;
        true
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenBlock {
    kind: BlockKind,
    indent: usize,
    child_indent: usize,
}

/// Tabs for the given indentation level.
pub fn indentation(level: usize) -> String {
    "\t".repeat(level)
}

#[derive(Debug, Clone)]
pub struct StructuralStack<V> {
    vocabulary: V,
    open: Vec<OpenBlock>,
}

impl<V: TagVocabulary> StructuralStack<V> {
    pub fn new(vocabulary: V) -> Self {
        Self {
            vocabulary,
            open: Vec::new(),
        }
    }

    pub fn vocabulary(&self) -> &V {
        &self.vocabulary
    }

    /// Indentation for content written at the current position.
    pub fn current_indent(&self) -> usize {
        self.open
            .last()
            .map_or_else(|| self.vocabulary.root_indent(), |block| block.child_indent)
    }

    /// Tabs for [`Self::current_indent`].
    pub fn pad(&self) -> String {
        indentation(self.current_indent())
    }

    /// Opens a block and returns its opening line.
    pub fn open(&mut self, kind: BlockKind, class: &str) -> String {
        let indent = self.current_indent();
        let child_indent = if self.vocabulary.indents_children(kind) {
            indent + 1
        } else {
            indent
        };
        self.open.push(OpenBlock {
            kind,
            indent,
            child_indent,
        });
        self.vocabulary
            .opening(kind, class)
            .map(|token| format!("{}{}\n", indentation(indent), token))
            .unwrap_or_default()
    }

    /// Closes the most recently opened block and returns its closing line.
    ///
    /// Closing with nothing open yields an empty string.
    pub fn close(&mut self) -> String {
        let Some(block) = self.open.pop() else {
            log::debug!("close() called on an empty structural stack");
            return String::new();
        };
        self.vocabulary
            .closing(block.kind)
            .map(|token| format!("{}{}\n", indentation(block.indent), token))
            .unwrap_or_default()
    }

    /// Kind of the innermost open block.
    pub fn top(&self) -> Option<BlockKind> {
        self.open.last().map(|block| block.kind)
    }

    pub fn depth(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Drops every open block without emitting terminators.
    pub fn reset(&mut self) {
        self.open.clear();
    }
}
