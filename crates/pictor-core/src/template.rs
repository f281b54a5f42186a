//! The prompt side of a generation request.
//!
//! A backend only ever sees the *enhanced* prompt, but the session history
//! also keeps what the user typed and which style was applied. [`ImagePrompt`]
//! bundles the three, and [`IntoImagePrompt`] lets any value produce one.
//! `pictor-prompt` implements the trait for its style-aware composer.

use crate::{error::Result, style::StylePreset};

/// A validated prompt, ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePrompt {
    original: String,
    enhanced: String,
    style: StylePreset,
}

impl ImagePrompt {
    pub fn new(original: impl Into<String>, enhanced: impl Into<String>, style: StylePreset) -> Self {
        Self {
            original: original.into(),
            enhanced: enhanced.into(),
            style,
        }
    }

    /// What the user entered, trimmed.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// What is actually sent to the model.
    pub fn enhanced(&self) -> &str {
        &self.enhanced
    }

    pub fn style(&self) -> StylePreset {
        self.style
    }
}

/// Converts a value into an [`ImagePrompt`].
///
/// Implementations validate their input; an `Err` here means the request is
/// rejected before any network call.
pub trait IntoImagePrompt {
    fn into_image_prompt(self) -> Result<ImagePrompt>;
}

impl IntoImagePrompt for ImagePrompt {
    fn into_image_prompt(self) -> Result<ImagePrompt> {
        Ok(self)
    }
}
