//! Core rendering abstractions for the vitae backends.
//!
//! This crate provides what every output format shares:
//! - [`BackendKind`], the closed set of output formats
//! - [`StructuralStack`], the LIFO tracker that balances nested blocks
//! - [`FragmentSerializer`] and [`SerializerTable`] for rich-text fragments
//! - [`RenderError`] for rendering operations

/// Module categories a document shell asks for.
pub mod category {
    /// Body content, rendered by every backend.
    pub const DEFAULT: &str = "default";
    /// Extra key-values inside the LaTeX `\makecvtitle` block.
    pub const TITLE: &str = "title";
    /// Extra content in the HTML sidebar.
    pub const SIDEBAR: &str = "sidebar";
}

mod error;
pub mod fragment;
mod kind;
pub mod stack;

pub use error::RenderError;
pub use fragment::{Block, FragmentSerializer, FragmentTree, Inline, SerializerTable, parse_fragment};
pub use kind::BackendKind;
pub use stack::{BlockKind, StructuralStack, TagVocabulary, indentation};
