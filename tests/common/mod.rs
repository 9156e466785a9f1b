#![allow(dead_code)]

pub mod fixtures;

use serde_json::Value;
use vitae::{BackendKind, BuildError, Builder, Module, category};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Builds `input` with a builder that has exactly one backend and returns its document.
pub fn render_one(mut builder: Builder, input: &Value) -> Result<String, BuildError> {
    let mut documents = builder.build(input)?;
    assert_eq!(documents.len(), 1, "expected a single backend");
    Ok(documents.remove(0).content)
}

/// A builder holding one module loaded from `key`, rendered by `backend`.
pub fn single_module_builder(
    key: &str,
    module: Box<dyn Module>,
    backend: impl Into<vitae::Backend>,
) -> Builder {
    Builder::new()
        .register_module(Some(key), module, category::DEFAULT)
        .register_backend(backend)
}

/// Counts opening and closing tags of `tag` in `html`.
pub fn tag_balance(html: &str, tag: &str) -> (usize, usize) {
    let opening = html.matches(&format!("<{} ", tag)).count() + html.matches(&format!("<{}>", tag)).count();
    let closing = html.matches(&format!("</{}>", tag)).count();
    (opening, closing)
}

pub fn assert_backend(documents: &[vitae::RenderedDocument], expected: &[BackendKind]) {
    let kinds: Vec<BackendKind> = documents.iter().map(|d| d.backend).collect();
    assert_eq!(kinds, expected);
}
