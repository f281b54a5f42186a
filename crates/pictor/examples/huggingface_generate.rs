use pictor::huggingface::HuggingFaceAdapterBuilder;
use pictor::{
    PictorClient,
    history::GenerationHistory,
    prompt::styled::StyledPrompt,
    style::StylePreset,
    types::{export::to_png, naming::download_file_name},
};

/// # Text to image – the whole round-trip
///
/// 1. **Builds** a Hugging Face backend from `HUGGINGFACE_TOKEN`.
/// 2. **Composes** a prompt with the *Watercolor* preset.
/// 3. **Generates** the image once; failures print the user-facing message.
/// 4. **Exports** the newest history entry as PNG into the current directory.
///
/// ```bash
/// export HUGGINGFACE_TOKEN=hf_…
/// cargo run -p pictor --example huggingface_generate
/// ```
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let backend = HuggingFaceAdapterBuilder::new_from_env().build()?;
    let client = PictorClient::new(backend);
    let mut history = GenerationHistory::new();

    let prompt = StyledPrompt::new("A serene lake at sunset", StylePreset::Watercolor);
    if let Some(enhanced) = prompt.preview() {
        println!("Enhanced prompt: {enhanced}");
    }

    let record = match client.generate(prompt, &mut history).await {
        Ok(record) => record,
        Err(err) => {
            eprintln!("{}", err.user_message());
            return Ok(());
        }
    };

    let (width, height) = record.image().dimensions();
    let file_name = download_file_name(record.original_prompt());
    std::fs::write(&file_name, to_png(record.image())?)?;

    println!("Saved {width}x{height} image to {file_name}");
    Ok(())
}
