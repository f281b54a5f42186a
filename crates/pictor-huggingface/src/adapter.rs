use std::{env, sync::Arc, time::Duration};

use pictor_core::error::{PictorError, Result};
use reqwest::Client as HttpClient;

use crate::{client::HuggingFaceClient, error::HuggingFaceError};

/// Environment variable holding the API token.
pub const TOKEN_ENV: &str = "HUGGINGFACE_TOKEN";

/// Operator instructions printed when [`TOKEN_ENV`] is missing.
pub const SETUP_INSTRUCTIONS: &str = "\
Setup Instructions:
1. Go to https://huggingface.co/settings/tokens
2. Create a new token with 'Write' permissions
3. Add it to the `.env` file as: `HUGGINGFACE_TOKEN=your_token_here`";

/// Thin wrapper that wires the HTTP client [`HuggingFaceClient`] into a value
/// that implements [`pictor_core::provider::TextToImageProvider`].
///
/// It owns the API token and a shareable, connection-pooled `reqwest::Client`.
/// All user-facing functionality sits on [`pictor_core::PictorClient`] once
/// the adapter is plugged in.
#[derive(Debug)]
pub struct HuggingFaceAdapter {
    pub(crate) client: Arc<HuggingFaceClient>,
}

/// Builder for [`HuggingFaceAdapter`].
///
/// # Typical usage
///
/// ```rust,no_run
/// use pictor_huggingface::HuggingFaceAdapterBuilder;
///
/// let backend = HuggingFaceAdapterBuilder::new_from_env()
///     .build()
///     .expect("HUGGINGFACE_TOKEN must be set");
/// ```
#[derive(Default)]
pub struct HuggingFaceAdapterBuilder {
    pub(crate) api_key: Option<String>,
    pub(crate) base_url: Option<String>,
    pub(crate) timeout: Option<Duration>,
    pub(crate) http: Option<HttpClient>,
}

impl HuggingFaceAdapterBuilder {
    /// Create an *empty* builder. Remember to supply an API token manually.
    pub fn new() -> Self {
        Self::default()
    }

    /// Convenience constructor that reads the [`TOKEN_ENV`] environment
    /// variable. Blank values count as missing.
    ///
    /// Never panics. Missing tokens only surface during [`Self::build`].
    pub fn new_from_env() -> Self {
        Self {
            api_key: env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()),
            ..Self::default()
        }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Point the adapter at another inference host, e.g. a dedicated endpoint
    /// or a proxy. The model id is appended to this URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Abort requests after `timeout`. Without it a request waits for the
    /// service to answer. Ignored when [`Self::with_http`] is used.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    pub fn with_http(mut self, http: HttpClient) -> Self {
        self.http = Some(http);
        self
    }

    /// Finalise the builder and return a ready-to-use adapter.
    ///
    /// # Errors
    ///
    /// * [`PictorError::MissingCredential`] if no token was provided.
    /// * [`PictorError::Backend`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<HuggingFaceAdapter> {
        let api_key = self.api_key.ok_or(PictorError::MissingCredential {
            variable: TOKEN_ENV,
            instructions: SETUP_INSTRUCTIONS,
        })?;

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = HttpClient::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(HuggingFaceError::from)?
            }
        };

        Ok(HuggingFaceAdapter {
            client: Arc::new(HuggingFaceClient::with_http(api_key, http, self.base_url)),
        })
    }
}
