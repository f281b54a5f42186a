use serde::{Deserialize, Serialize};

/// Body of a text-to-image inference request.
#[derive(Debug, Serialize, Clone)]
pub struct TextToImageRequest {
    pub inputs: String,
}

impl TextToImageRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }
}

/// Error body returned alongside non-success statuses, e.g.
/// `{"error":"Model ... is currently loading","estimated_time":20.0}`.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiErrorBody {
    pub error: ApiErrorMessage,
    #[serde(default)]
    pub estimated_time: Option<f64>,
}

/// Most endpoints send a single string, validation failures a list.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ApiErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl ApiErrorBody {
    /// Render the body as a single line. Falls back to the trimmed raw text
    /// when it is not JSON in the expected shape.
    pub fn message_from(raw: &str) -> String {
        let Ok(body) = serde_json::from_str::<ApiErrorBody>(raw) else {
            return raw.trim().to_string();
        };

        let mut message = match body.error {
            ApiErrorMessage::One(msg) => msg,
            ApiErrorMessage::Many(msgs) => msgs.join("; "),
        };
        if let Some(secs) = body.estimated_time {
            message.push_str(&format!(" (estimated time: {secs:.0}s)"));
        }

        message
    }
}
