//! LaTeX backend.
//!
//! Produces a document for the `academiccv` class: records become key-value
//! commands such as `\job{ title = {...}, }`, and the author's identity goes
//! into `\makecvtitle`. Unlike the markup backends, LaTeX output is flat, so
//! this context has no structural stack.

mod context;
mod options;
mod serializer;

pub use context::LatexContext;
pub use options::LatexOptions;
pub use serializer::LatexSerializer;
