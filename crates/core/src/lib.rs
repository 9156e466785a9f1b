//! # vitae-core
//!
//! Build orchestration for vitae.
//!
//! A [`Builder`] holds the registered modules and backends. A build loads
//! the personal data and each module's sub-tree of the input once, then runs
//! one render pass per [`Backend`]. Passes share the loaded data read-only;
//! with the `parallel-render` feature they run on rayon's global pool.

mod backend;
mod builder;
pub mod error;

pub use backend::Backend;
pub use builder::{Builder, DEFAULT_PERSONAL_KEY, RenderedDocument};
pub use error::BuildError;
