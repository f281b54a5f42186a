//! Unified error type exposed by **`pictor-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up to the [`crate::PictorClient`]. Every variant can be
//! mapped onto a user-facing [`FailureKind`] through [`PictorError::kind`].

use thiserror::Error;

use crate::failure::{FailureKind, classify_failure};

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, PictorError>;

#[derive(Debug, Error)]
pub enum PictorError {
    /// The prompt was empty or contained only whitespace. Raised before any
    /// network traffic happens.
    #[error("prompt is empty")]
    EmptyPrompt,

    /// A style key did not match any entry of the preset table.
    #[error("unknown style preset `{0}`")]
    UnknownStyle(String),

    /// The credential required by a backend is absent from the process
    /// configuration.
    #[error("`{variable}` is not set\n{instructions}")]
    MissingCredential {
        variable: &'static str,
        instructions: &'static str,
    },

    /// The backend answered, but the payload is not a decodable image.
    #[error("image payload could not be decoded: {0}")]
    InvalidImage(String),

    /// Generic forwarding of any backend-specific error.
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl PictorError {
    /// Category used to pick the message shown to the user.
    ///
    /// Validation errors map directly; everything else goes through
    /// [`classify_failure`] on [`PictorError::raw_message`].
    pub fn kind(&self) -> FailureKind {
        match self {
            PictorError::EmptyPrompt => FailureKind::ValidationEmpty,
            other => classify_failure(&other.raw_message()),
        }
    }

    /// The message as reported by its source. Backend errors are rendered
    /// without the `backend returned an error` wrapper.
    pub fn raw_message(&self) -> String {
        match self {
            PictorError::Backend(inner) => inner.to_string(),
            other => other.to_string(),
        }
    }

    /// Human-readable message for this error, as shown in a UI.
    pub fn user_message(&self) -> String {
        self.kind().user_message(self.raw_message())
    }
}
