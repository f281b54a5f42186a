//! A user prompt paired with the style it should be rendered in.
//!
//! [`StyledPrompt`] is what a UI hands to [`pictor_core::PictorClient`]: it
//! borrows the text as typed and only composes (and validates) it when the
//! client asks for an [`ImagePrompt`].

use pictor_core::{
    error::Result,
    style::StylePreset,
    template::{ImagePrompt, IntoImagePrompt},
};

use crate::composer::compose;

#[derive(Debug, Clone, Copy)]
pub struct StyledPrompt<'a> {
    raw: &'a str,
    style: StylePreset,
}

impl<'a> StyledPrompt<'a> {
    pub fn new(raw: &'a str, style: StylePreset) -> Self {
        Self { raw, style }
    }

    pub fn style(&self) -> StylePreset {
        self.style
    }

    /// The enhanced prompt, if a style other than `None` is applied and the
    /// prompt is not empty. Meant for "view enhanced prompt" displays.
    pub fn preview(&self) -> Option<String> {
        if self.style.is_none() {
            return None;
        }
        compose(self.raw, self.style).ok()
    }
}

/// Shorthand for prompts without a style.
impl<'a> From<&'a str> for StyledPrompt<'a> {
    fn from(value: &'a str) -> Self {
        Self::new(value, StylePreset::None)
    }
}

impl IntoImagePrompt for StyledPrompt<'_> {
    fn into_image_prompt(self) -> Result<ImagePrompt> {
        let enhanced = compose(self.raw, self.style)?;
        Ok(ImagePrompt::new(self.raw.trim(), enhanced, self.style))
    }
}

#[cfg(test)]
mod tests {
    use pictor_core::error::PictorError;

    use super::*;

    #[test]
    fn builds_image_prompt_from_the_worked_example() {
        let prompt = StyledPrompt::new("a red fox", StylePreset::Anime)
            .into_image_prompt()
            .unwrap();

        assert_eq!(prompt.original(), "a red fox");
        assert_eq!(
            prompt.enhanced(),
            "a red fox, anime style, vibrant colors, Studio Ghibli inspired, detailed illustration"
        );
        assert_eq!(prompt.style(), StylePreset::Anime);
    }

    #[test]
    fn original_prompt_is_stored_trimmed() {
        let prompt = StyledPrompt::from("  sunset over the sea\n")
            .into_image_prompt()
            .unwrap();
        assert_eq!(prompt.original(), "sunset over the sea");
        assert_eq!(prompt.enhanced(), "sunset over the sea");
    }

    #[test]
    fn empty_prompt_is_rejected_before_sending() {
        let err = StyledPrompt::new("   ", StylePreset::Realistic)
            .into_image_prompt()
            .unwrap_err();
        assert!(matches!(err, PictorError::EmptyPrompt));
    }

    #[test]
    fn preview_only_when_styled() {
        assert_eq!(StyledPrompt::new("fox", StylePreset::None).preview(), None);
        assert_eq!(StyledPrompt::new(" ", StylePreset::Anime).preview(), None);
        assert_eq!(
            StyledPrompt::new("fox", StylePreset::Watercolor).preview().unwrap(),
            "fox, watercolor painting, soft colors, artistic, delicate brushstrokes"
        );
    }
}
