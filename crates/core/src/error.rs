//! Error type for a whole build.

use thiserror::Error;
use vitae_modules::LoadError;
use vitae_render_core::RenderError;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),
    #[error("Render error: {0}")]
    Render(#[from] RenderError),
    #[error("Invalid personal data under '{key}': {source}")]
    InvalidPersonalData {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
