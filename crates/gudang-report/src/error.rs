use thiserror::Error;

/// Report rendering errors.
///
/// `Fetch` and `Decode` are per-photo and never fatal: the pipeline logs
/// them and renders the affected cell as an empty bordered box. `Pdf` and
/// `Io` abort the document.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Photo fetch failed: {0}")]
    Fetch(String),

    #[error("Photo decode failed: {0}")]
    Decode(String),

    #[error("PDF build failed: {0}")]
    Pdf(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RenderError> for gudang_core::AppError {
    fn from(err: RenderError) -> Self {
        gudang_core::AppError::Report(err.to_string())
    }
}
