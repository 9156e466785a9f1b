use crate::kind::BackendKind;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("{record} does not support the {backend} backend")]
    Unsupported {
        record: &'static str,
        backend: BackendKind,
    },
    #[error("{backend} backend: heading level {level} is invalid")]
    InvalidHeadingLevel { backend: BackendKind, level: u8 },
    #[error("No fragment serializer registered for the {0} backend")]
    MissingSerializer(BackendKind),
    #[error("{backend} render pass finished with {open} block(s) still open")]
    UnbalancedBlocks { backend: BackendKind, open: usize },
}

impl RenderError {
    pub fn unsupported(record: &'static str, backend: BackendKind) -> Self {
        RenderError::Unsupported { record, backend }
    }
}
