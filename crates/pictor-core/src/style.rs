//! Style presets: named suffixes appended to a prompt to bias the model
//! towards a visual style.
//!
//! The table is `'static` data and never changes at runtime.
//!
//! ```rust
//! use pictor_core::style::StylePreset;
//!
//! let style: StylePreset = "digital art".parse().unwrap();
//! assert_eq!(style, StylePreset::DigitalArt);
//! assert_eq!(style.to_string(), "Digital Art");
//! assert!(StylePreset::None.suffix().is_empty());
//! ```

use std::{fmt::Display, str::FromStr};

use crate::error::PictorError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StylePreset {
    #[default]
    None,
    Anime,
    Realistic,
    DigitalArt,
    Watercolor,
    OilPainting,
    Cyberpunk,
    Fantasy,
}

impl StylePreset {
    /// All presets in display order, `None` first.
    pub const ALL: [StylePreset; 8] = [
        StylePreset::None,
        StylePreset::Anime,
        StylePreset::Realistic,
        StylePreset::DigitalArt,
        StylePreset::Watercolor,
        StylePreset::OilPainting,
        StylePreset::Cyberpunk,
        StylePreset::Fantasy,
    ];

    /// Display name, also accepted by [`FromStr`].
    pub const fn name(&self) -> &'static str {
        match self {
            StylePreset::None => "None",
            StylePreset::Anime => "Anime",
            StylePreset::Realistic => "Realistic",
            StylePreset::DigitalArt => "Digital Art",
            StylePreset::Watercolor => "Watercolor",
            StylePreset::OilPainting => "Oil Painting",
            StylePreset::Cyberpunk => "Cyberpunk",
            StylePreset::Fantasy => "Fantasy",
        }
    }

    /// Text appended to the trimmed user prompt. Empty for `None`.
    pub const fn suffix(&self) -> &'static str {
        match self {
            StylePreset::None => "",
            StylePreset::Anime => {
                ", anime style, vibrant colors, Studio Ghibli inspired, detailed illustration"
            }
            StylePreset::Realistic => {
                ", photorealistic, highly detailed, 8K resolution, professional photography"
            }
            StylePreset::DigitalArt => {
                ", digital painting, artstation trending, concept art, highly detailed"
            }
            StylePreset::Watercolor => {
                ", watercolor painting, soft colors, artistic, delicate brushstrokes"
            }
            StylePreset::OilPainting => {
                ", oil painting, classical art style, textured canvas, rich colors"
            }
            StylePreset::Cyberpunk => {
                ", cyberpunk style, neon lights, futuristic, sci-fi, dark atmosphere"
            }
            StylePreset::Fantasy => {
                ", fantasy art, magical, enchanted, epic scene, mystical atmosphere"
            }
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, StylePreset::None)
    }

    /// `Style adds: <suffix>` for every preset except `None`.
    pub fn describe(&self) -> Option<String> {
        (!self.is_none()).then(|| format!("Style adds: {}", self.suffix()))
    }
}

impl Display for StylePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Case-insensitive lookup by display name. Hyphens and underscores count as
/// spaces so `oil-painting` and `oil_painting` work on a command line.
impl FromStr for StylePreset {
    type Err = PictorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace(['-', '_'], " ");

        StylePreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| PictorError::UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("none".parse::<StylePreset>().unwrap(), StylePreset::None);
        assert_eq!("Anime".parse::<StylePreset>().unwrap(), StylePreset::Anime);
        assert_eq!(
            "oil-painting".parse::<StylePreset>().unwrap(),
            StylePreset::OilPainting
        );
        assert_eq!(
            " DIGITAL_ART ".parse::<StylePreset>().unwrap(),
            StylePreset::DigitalArt
        );
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "pointillism".parse::<StylePreset>().unwrap_err();
        assert!(matches!(err, PictorError::UnknownStyle(name) if name == "pointillism"));
    }

    #[test]
    fn every_named_suffix_starts_with_a_separator() {
        for preset in StylePreset::ALL.into_iter().filter(|p| !p.is_none()) {
            assert!(preset.suffix().starts_with(", "), "{preset}");
        }
    }

    #[test]
    fn describe_skips_none() {
        assert_eq!(StylePreset::None.describe(), None);
        assert_eq!(
            StylePreset::Cyberpunk.describe().unwrap(),
            "Style adds: , cyberpunk style, neon lights, futuristic, sci-fi, dark atmosphere"
        );
    }
}
