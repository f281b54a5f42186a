use pictor_core::error::PictorError;
use reqwest::StatusCode;

/// High-level error type covering every failure mode the client can hit.
#[derive(Debug, thiserror::Error)]
pub enum HuggingFaceError {
    /// Transport failure. The request URL is stripped so that host and port
    /// never leak into the message that gets classified.
    #[error("request failed: {0}")]
    Http(reqwest::Error),

    #[error("{status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Hugging Face format error: {0}")]
    Format(String),

    #[error("API token contains characters not allowed in a header")]
    InvalidToken,
}

impl From<reqwest::Error> for HuggingFaceError {
    fn from(value: reqwest::Error) -> Self {
        HuggingFaceError::Http(value.without_url())
    }
}

impl From<HuggingFaceError> for PictorError {
    fn from(value: HuggingFaceError) -> Self {
        PictorError::Backend(Box::new(value))
    }
}
