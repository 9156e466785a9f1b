//! HTML backend.
//!
//! [`MarkupWriter`] holds the block primitives records use (`div` blocks,
//! paragraphs, spans, links, lists). It is implemented here by
//! [`HtmlContext`] and reused by the Markdown backend, which embeds the same
//! block markup in its output.

mod context;
mod markup;
mod options;
mod serializer;
mod tags;

pub use context::{HtmlContext, TitleFn};
pub use markup::MarkupWriter;
pub use options::HtmlOptions;
pub use serializer::{HtmlSerializer, escape_html};
pub use tags::HtmlTags;
