//! Markdown backend.
//!
//! Headings are Markdown heading markers; records are written as the same
//! block markup the HTML backend produces, which Markdown renderers pass
//! through. Free text (introductions, summaries) stays Markdown.

mod context;
mod serializer;
mod tags;

pub use context::{MarkdownContext, MarkdownOptions};
pub use serializer::MarkdownSerializer;
pub use tags::MarkdownTags;
