//! # `pictor` – The umbrella crate
//!
//! A *one-stop import* that glues together the building-block crates in the
//! workspace:
//!
//! | Crate                    | What it provides                                                            |
//! |--------------------------|-----------------------------------------------------------------------------|
//! | **`pictor-core`**        | `TextToImageProvider`, `PictorClient`, session history, errors, failure kinds |
//! | **`pictor-prompt`**      | Style-aware prompt composition (`compose`, `StyledPrompt`)                  |
//! | **`pictor-types`**       | PNG export, download file names, captions                                   |
//! | **`pictor-huggingface`** | HTTP adapter for the Hugging Face inference service *(optional)*            |
//!
//! The `huggingface` feature (on by default) re-exports the adapter crate.
//! The `cli` feature builds the interactive `pictor` binary.
//!
//! ## Quick example
//!
//! ```rust,no_run
//! use pictor::{
//!     PictorClient,
//!     history::GenerationHistory,
//!     prompt::styled::StyledPrompt,
//!     style::StylePreset,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let backend = pictor::huggingface::HuggingFaceAdapterBuilder::new_from_env().build()?;
//!     let client = PictorClient::new(backend);
//!     let mut history = GenerationHistory::new();
//!
//!     let record = client
//!         .generate(StyledPrompt::new("a red fox", StylePreset::Anime), &mut history)
//!         .await?;
//!     println!("{} ({} bytes)", record.enhanced_prompt(), record.image().len());
//!     Ok(())
//! }
//! ```
#![doc(html_root_url = "https://docs.rs/pictor/latest")]

pub use pictor_core::*;
pub use pictor_prompt as prompt;
pub use pictor_types as types;

#[cfg(feature = "huggingface")]
pub use pictor_huggingface as huggingface;
