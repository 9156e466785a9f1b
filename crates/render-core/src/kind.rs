use std::fmt;

/// The output formats a document can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BackendKind {
    /// Typeset documents (LaTeX, `academiccv` class).
    Latex,
    /// Web pages.
    Html,
    /// Plain Markdown text.
    Markdown,
}

impl BackendKind {
    pub const ALL: [BackendKind; 3] = [BackendKind::Latex, BackendKind::Html, BackendKind::Markdown];

    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Latex => "LaTeX",
            BackendKind::Html => "HTML",
            BackendKind::Markdown => "Markdown",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
