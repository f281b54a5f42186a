use std::{future::Future, pin::Pin};

use crate::{error::Result, model::Model, payload::ImagePayload};

/// A **backend** turns a prompt into a network call to a concrete provider
/// and returns the decoded image.
///
/// The call is fire-once: implementations must not retry on their own. A
/// failure is reported to the caller as-is and classified there.
///
/// The method returns a [`Pin<Box<dyn Future>>`] so we stay object-safe
/// without pulling in `async_trait`.
pub trait TextToImageProvider: Send + Sync {
    fn text_to_image<'p>(
        &self,
        params: TextToImageParameters,
    ) -> Pin<Box<dyn Future<Output = Result<ImagePayload>> + Send + 'p>>;
}

#[derive(Debug, Clone)]
pub struct TextToImageParameters {
    pub prompt: String,
    pub model: Model,
}

impl TextToImageParameters {
    pub fn new(prompt: impl Into<String>, model: Model) -> Self {
        Self {
            prompt: prompt.into(),
            model,
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn model(&self) -> &Model {
        &self.model
    }
}
