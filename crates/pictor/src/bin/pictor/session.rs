//! One interactive session: the current style, the history and where images
//! go. Output is written to any `io::Write` so the loop can be driven from
//! tests.

use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use pictor::{
    PictorClient,
    failure::FailureKind,
    history::GenerationHistory,
    prompt::styled::StyledPrompt,
    provider::TextToImageProvider,
    style::StylePreset,
    types::{
        caption::{history_heading, record_caption, style_badge},
        export::to_png,
        naming::{download_file_name, history_file_name},
    },
};
use tokio::io::{AsyncBufRead, AsyncBufReadExt as _};

use crate::command::{Command, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<B> {
    client: PictorClient<B>,
    history: GenerationHistory,
    style: StylePreset,
    out_dir: PathBuf,
}

impl<B: TextToImageProvider> Session<B> {
    pub fn new(client: PictorClient<B>, style: StylePreset, out_dir: PathBuf) -> Self {
        Self {
            client,
            history: GenerationHistory::new(),
            style,
            out_dir,
        }
    }

    /// Read commands from `input` until it ends or `:quit` is entered.
    ///
    /// A failing command is reported and the session carries on.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();

        loop {
            write!(out, "[{}] > ", self.style)?;
            out.flush()?;

            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                Ok(None) => {
                    writeln!(out)?;
                    return Ok(());
                }
                // The offending line has been consumed, the next one is fine to read.
                Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                    writeln!(out, "error: input is not valid UTF-8, line skipped")?;
                    continue;
                }
                Err(err) => return Err(err.into()),
            };

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(msg) => {
                    writeln!(out, "{msg}")?;
                    continue;
                }
            };

            match self.handle(command, out).await {
                Ok(Flow::Quit) => return Ok(()),
                Ok(Flow::Continue) => {}
                Err(err) => writeln!(out, "error: {err:#}")?,
            }
        }
    }

    pub async fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> anyhow::Result<Flow> {
        match command {
            Command::Generate(raw) => {
                self.generate(&raw, out).await?;
            }
            Command::Style(style) => {
                self.style = style;
                match style.describe() {
                    Some(describe) => writeln!(out, "Style: {style}. {describe}")?,
                    None => writeln!(out, "Style: {style}")?,
                }
            }
            Command::Styles => {
                for preset in StylePreset::ALL {
                    let marker = if preset == self.style { '*' } else { ' ' };
                    writeln!(out, "{marker} {:<13}{}", preset.name(), preset.suffix())?;
                }
            }
            Command::History => self.print_history(out)?,
            Command::Save(index) => {
                let Some(record) = self.history.get(index) else {
                    writeln!(out, "No image at position {index} ({} in history).", self.history.len())?;
                    return Ok(Flow::Continue);
                };
                let name = history_file_name(record.original_prompt(), index);
                let png = to_png(record.image())?;
                let path = write_png(&self.out_dir, &name, png).await?;
                writeln!(out, "Saved to {}", path.display())?;
            }
            Command::Clear => {
                self.history.clear();
                writeln!(out, "History cleared.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Generate one image and save it. Returns whether an image was produced;
    /// request failures are reported to `out`, not returned as errors.
    pub async fn generate<W: Write>(&mut self, raw: &str, out: &mut W) -> anyhow::Result<bool> {
        let prompt = StyledPrompt::new(raw, self.style);

        if let Some(enhanced) = prompt.preview() {
            writeln!(out, "Enhanced prompt: {enhanced}")?;
        }

        let (name, png, caption) = match self.client.generate(prompt, &mut self.history).await {
            Ok(record) => (
                download_file_name(record.original_prompt()),
                to_png(record.image())?,
                record_caption(record),
            ),
            Err(err) => {
                let prefix = match err.kind() {
                    FailureKind::ValidationEmpty => "warning",
                    _ => "error",
                };
                writeln!(out, "{prefix}: {}", err.user_message())?;
                return Ok(false);
            }
        };

        writeln!(out, "Image generated successfully!")?;
        writeln!(out, "{caption}")?;
        let path = write_png(&self.out_dir, &name, png).await?;
        writeln!(out, "Saved to {}", path.display())?;

        Ok(true)
    }

    fn print_history<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        if self.history.is_empty() {
            writeln!(out, "No images yet.")?;
            return Ok(());
        }

        writeln!(out, "{}", history_heading(&self.history))?;
        for (index, record) in self.history.list().iter().enumerate() {
            writeln!(
                out,
                "  [{index}] {} | {} | {}",
                record.timestamp().format("%H:%M:%S"),
                style_badge(record.style()),
                record.original_prompt()
            )?;
            if !record.style().is_none() {
                writeln!(out, "      Enhanced: {}", record.enhanced_prompt())?;
            }
        }

        Ok(())
    }
}

async fn write_png(dir: &Path, name: &str, png: Vec<u8>) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join(name);
    tokio::fs::write(&path, png)
        .await
        .with_context(|| format!("writing {}", path.display()))?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use std::{
        future::Future,
        io::Cursor,
        pin::Pin,
        sync::atomic::{AtomicUsize, Ordering},
    };

    use image::{DynamicImage, ImageFormat, RgbImage};
    use pictor::{
        error::{PictorError, Result},
        payload::ImagePayload,
        provider::TextToImageParameters,
    };

    use super::*;

    /// Succeeds for every prompt except those containing `fail:<message>`.
    struct ScriptedBackend {
        calls: AtomicUsize,
    }

    impl TextToImageProvider for ScriptedBackend {
        fn text_to_image<'p>(
            &self,
            params: TextToImageParameters,
        ) -> Pin<Box<dyn Future<Output = Result<ImagePayload>> + Send + 'p>> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            Box::pin(async move {
                if let Some((_, msg)) = params.prompt.split_once("fail:") {
                    return Err(PictorError::Backend(msg.to_string().into()));
                }
                let mut buf = Cursor::new(Vec::new());
                DynamicImage::ImageRgb8(RgbImage::new(3, 3))
                    .write_to(&mut buf, ImageFormat::Jpeg)
                    .map_err(|err| PictorError::InvalidImage(err.to_string()))?;
                ImagePayload::decode(buf.into_inner())
            })
        }
    }

    fn session(dir: &Path) -> Session<ScriptedBackend> {
        let client = PictorClient::new(ScriptedBackend {
            calls: AtomicUsize::new(0),
        });
        Session::new(client, StylePreset::None, dir.to_path_buf())
    }

    fn calls(session: &Session<ScriptedBackend>) -> usize {
        session.client.backend().calls.load(Ordering::SeqCst)
    }

    #[tokio::test]
    async fn styled_generation_is_recorded_and_saved_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut out = Vec::new();

        session.handle(Command::Style(StylePreset::Anime), &mut out).await.unwrap();
        let ok = session.generate("a red fox", &mut out).await.unwrap();
        assert!(ok);

        let latest = session.history.latest().unwrap();
        assert_eq!(latest.original_prompt(), "a red fox");
        assert_eq!(
            latest.enhanced_prompt(),
            "a red fox, anime style, vibrant colors, Studio Ghibli inspired, detailed illustration"
        );

        let saved = std::fs::read(dir.path().join("ai_generated_a_red_fox.png")).unwrap();
        assert_eq!(image::guess_format(&saved).unwrap(), ImageFormat::Png);

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Enhanced prompt: a red fox, anime style"));
        assert!(out.contains("a red fox (Anime style)"));
    }

    #[tokio::test]
    async fn empty_prompt_warns_without_calling_the_backend() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut out = Vec::new();

        let ok = session.generate("   ", &mut out).await.unwrap();

        assert!(!ok);
        assert_eq!(calls(&session), 0);
        assert!(session.history.is_empty());
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "warning: Please enter a description for your image.\n"
        );
    }

    #[tokio::test]
    async fn failures_are_reported_and_the_session_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let input = "fail:429 Too Many Requests\nfail:boom\nsunset\n:quit\nnever reached\n";
        let mut out = Vec::new();

        session.run(input.as_bytes(), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("error: Rate limit reached."));
        assert!(out.contains("error: An error occurred: boom\n"));
        assert!(out.contains("Image generated successfully!"));
        assert_eq!(calls(&session), 3);
        assert_eq!(session.history.len(), 1);
    }

    #[tokio::test]
    async fn history_save_and_clear() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let input = "first\n:style watercolor\nsecond\n:history\n:save 1\n:save 7\n:clear\n:history\n";
        let mut out = Vec::new();

        session.run(input.as_bytes(), &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Image History (2/10)"));
        assert!(out.contains("Watercolor | second"));
        assert!(out.contains("No style | first"));
        assert!(out.contains("No image at position 7 (2 in history)."));
        assert!(out.contains("History cleared."));
        assert!(out.ends_with("No images yet.\n[Watercolor] > \n"));
        assert!(dir.path().join("ai_generated_first_1.png").exists());
        assert!(session.history.is_empty());
    }

    #[tokio::test]
    async fn invalid_utf8_input_skips_the_line() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut out = Vec::new();

        session.run(&b"\xff\xfe fox\nsunset\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("error: input is not valid UTF-8, line skipped"));
        assert!(out.contains("Image generated successfully!"));
        assert_eq!(calls(&session), 1);
        assert_eq!(session.history.latest().unwrap().original_prompt(), "sunset");
    }

    #[tokio::test]
    async fn unknown_commands_do_not_end_the_session() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session(dir.path());
        let mut out = Vec::new();

        session.run(&b":bogus\n:styles\n"[..], &mut out).await.unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("unknown command `:bogus`"));
        assert!(out.contains("* None"));
        assert!(out.contains("  Cyberpunk    , cyberpunk style"));
    }
}
