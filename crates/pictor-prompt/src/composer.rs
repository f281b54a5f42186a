//! Turn what the user typed into the prompt that is actually sent.
//!
//! The rule is deliberately simple: trim the input, then append the suffix
//! of the selected [`StylePreset`]. Nothing else is rewritten.
//!
//! ```rust
//! use pictor_core::style::StylePreset;
//! use pictor_prompt::composer::compose;
//!
//! let enhanced = compose("  a red fox ", StylePreset::Anime).unwrap();
//! assert_eq!(
//!     enhanced,
//!     "a red fox, anime style, vibrant colors, Studio Ghibli inspired, detailed illustration",
//! );
//! assert_eq!(compose("a red fox", StylePreset::None).unwrap(), "a red fox");
//! assert!(compose("   ", StylePreset::Anime).is_err());
//! ```

use pictor_core::{error::PictorError, style::StylePreset};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromptError {
    /// Nothing left after trimming whitespace.
    #[error("prompt is empty")]
    Empty,
}

impl From<PromptError> for PictorError {
    fn from(value: PromptError) -> Self {
        match value {
            PromptError::Empty => PictorError::EmptyPrompt,
        }
    }
}

/// `trim(raw) + style.suffix()`.
///
/// # Errors
///
/// * [`PromptError::Empty`] if `raw` is empty or only whitespace.
pub fn compose(raw: &str, style: StylePreset) -> Result<String, PromptError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty);
    }

    let suffix = style.suffix();
    let mut enhanced = String::with_capacity(trimmed.len() + suffix.len());
    enhanced.push_str(trimmed);
    enhanced.push_str(suffix);

    Ok(enhanced)
}
