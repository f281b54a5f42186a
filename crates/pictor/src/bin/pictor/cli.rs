use std::path::PathBuf;

use clap::Parser;
use pictor::{error::PictorError, style::StylePreset};

/// Generate images from text with Stable Diffusion XL on Hugging Face.
///
/// Without `--prompt` an interactive session starts: every line is a prompt,
/// lines starting with `:` are commands (`:help` lists them).
#[derive(Debug, Parser)]
#[command(name = "pictor", version, about)]
pub struct Args {
    /// Style preset applied to prompts, e.g. "Anime" or "oil-painting".
    #[arg(short, long, default_value = "None", value_parser = parse_style)]
    pub style: StylePreset,

    /// Directory generated images are written to.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Hub model id to use instead of Stable Diffusion XL.
    #[arg(short, long)]
    pub model: Option<String>,

    /// Generate a single image for this prompt and exit.
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Give up on a request after this many seconds. Waits indefinitely if unset.
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Inference host override.
    #[arg(long, env = "PICTOR_BASE_URL", hide = true)]
    pub base_url: Option<String>,
}

fn parse_style(value: &str) -> Result<StylePreset, String> {
    value.parse().map_err(|err: PictorError| {
        let names: Vec<_> = StylePreset::ALL.iter().map(StylePreset::name).collect();
        format!("{err} (expected one of: {})", names.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["pictor"]).unwrap();
        assert_eq!(args.style, StylePreset::None);
        assert_eq!(args.out_dir, PathBuf::from("."));
        assert!(args.prompt.is_none());
        assert!(args.model.is_none());
    }

    #[test]
    fn one_shot_with_style() {
        let args = Args::try_parse_from([
            "pictor",
            "--style",
            "digital-art",
            "--prompt",
            "a red fox",
            "-o",
            "out",
        ])
        .unwrap();
        assert_eq!(args.style, StylePreset::DigitalArt);
        assert_eq!(args.prompt.as_deref(), Some("a red fox"));
        assert_eq!(args.out_dir, PathBuf::from("out"));
    }

    #[test]
    fn unknown_style_lists_choices() {
        let err = Args::try_parse_from(["pictor", "--style", "pointillism"]).unwrap_err();
        assert!(err.to_string().contains("Oil Painting"));
    }
}
