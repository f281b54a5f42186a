//! Generic client that runs one generation request against a single
//! concrete [`TextToImageProvider`] and records the result.
//!
//! The client itself is immutable and cheap to clone. Session state lives in
//! a [`GenerationHistory`] that the caller owns and lends to each request.
//!
//! ```rust,ignore
//! let client = PictorClient::new(backend);
//! let mut history = GenerationHistory::new();
//!
//! let record = client
//!     .generate(StyledPrompt::new("a red fox", StylePreset::Anime), &mut history)
//!     .await?;
//! println!("{}", record.enhanced_prompt());
//! ```
use std::{future::Future, pin::Pin, sync::Arc};

use chrono::Utc;

use crate::{
    error::Result,
    history::GenerationHistory,
    model::Model,
    payload::ImagePayload,
    provider::{TextToImageParameters, TextToImageProvider},
    record::GenerationRecord,
    template::IntoImagePrompt,
};

/// A client bound to a single provider and model.
#[derive(Debug)]
pub struct PictorClient<B> {
    backend: Arc<B>,
    model: Model,
}

impl<B> Clone for PictorClient<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            model: self.model.clone(),
        }
    }
}

impl<B> PictorClient<B>
where
    B: TextToImageProvider,
{
    /// Create a new client that delegates all calls to `backend` and targets
    /// the default model.
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
            model: Model::default(),
        }
    }

    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Access the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Validate `prompt`, send the enhanced text to the backend once and, on
    /// success, push a new record to the front of `history`.
    ///
    /// On any error `history` is left untouched. Use
    /// [`crate::error::PictorError::kind`] to pick a message for the user.
    pub async fn generate<'h, P>(
        &self,
        prompt: P,
        history: &'h mut GenerationHistory,
    ) -> Result<&'h GenerationRecord>
    where
        P: IntoImagePrompt,
    {
        let prompt = prompt.into_image_prompt()?;

        #[cfg(feature = "tracing")]
        tracing::info!(
            model = ?self.model,
            style = %prompt.style(),
            prompt_len = prompt.enhanced().len(),
            "generating image"
        );

        let params = TextToImageParameters::new(prompt.enhanced(), self.model.clone());
        let image = self.backend.text_to_image(params).await.inspect_err(|_err| {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = ?_err.kind(), error = %_err, "image generation failed");
        })?;

        Ok(history.push(GenerationRecord::new(image, prompt, Utc::now())))
    }
}

impl<B: TextToImageProvider> TextToImageProvider for PictorClient<B> {
    fn text_to_image<'p>(
        &self,
        params: TextToImageParameters,
    ) -> Pin<Box<dyn Future<Output = Result<ImagePayload>> + Send + 'p>> {
        self.backend.text_to_image(params)
    }
}
