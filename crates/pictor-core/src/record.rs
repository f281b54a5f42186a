use chrono::{DateTime, Utc};

use crate::{payload::ImagePayload, style::StylePreset, template::ImagePrompt};

/// One successful generation plus its provenance.
///
/// Fields are private and there are no setters: a record never changes after
/// it has been created.
#[derive(Debug, Clone)]
pub struct GenerationRecord {
    image: ImagePayload,
    prompt: ImagePrompt,
    timestamp: DateTime<Utc>,
}

impl GenerationRecord {
    pub fn new(image: ImagePayload, prompt: ImagePrompt, timestamp: DateTime<Utc>) -> Self {
        Self {
            image,
            prompt,
            timestamp,
        }
    }

    pub fn image(&self) -> &ImagePayload {
        &self.image
    }

    pub fn original_prompt(&self) -> &str {
        self.prompt.original()
    }

    pub fn enhanced_prompt(&self) -> &str {
        self.prompt.enhanced()
    }

    pub fn style(&self) -> StylePreset {
        self.prompt.style()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}
