use thiserror::Error;

/// Structural problems in a module's input. Loading stops at the first one.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Module '{module}': subsections were requested but the input has no \"order\" key")]
    MissingOrder { module: String },
    #[error("Module '{module}': subsection '{label}' is listed in \"order\" but has no data")]
    MissingGroup { module: String, label: String },
    #[error("Module '{module}': expected {expected}, found {found}")]
    UnexpectedShape {
        module: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("Module '{module}': invalid record: {source}")]
    InvalidRecord {
        module: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// Name of the module that failed to load.
    pub fn module(&self) -> &str {
        match self {
            LoadError::MissingOrder { module }
            | LoadError::MissingGroup { module, .. }
            | LoadError::UnexpectedShape { module, .. }
            | LoadError::InvalidRecord { module, .. } => module,
        }
    }
}
