use bytes::Bytes;
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue},
};

use crate::{
    api_v1::{ApiErrorBody, TextToImageRequest},
    error::HuggingFaceError,
};

pub(crate) const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Minimal HTTP client for Hugging Face's text-to-image inference endpoint.
///
/// * One request ▶ one response, no retries.
/// * Returns the raw image bytes; decoding happens in the adapter.
/// * Shares a single `reqwest::Client`, so cloning `HuggingFaceClient` is cheap.
#[derive(Clone)]
pub struct HuggingFaceClient {
    api_key: String,
    http: HttpClient,
    base: String,
}

impl std::fmt::Debug for HuggingFaceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HuggingFaceClient")
            .field("base", &self.base)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HuggingFaceClient {
    /// Build with a caller-supplied `reqwest::Client` (timeouts, proxies,
    /// custom TLS …). `base_url` defaults to the public inference router.
    pub fn with_http(
        api_key: impl Into<String>,
        http: HttpClient,
        base_url: Option<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base: base_url
                .map(|url| url.trim_end_matches('/').to_owned())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Ask `model` to render `request` and return the encoded image.
    pub async fn text_to_image(
        &self,
        model: &str,
        request: &TextToImageRequest,
    ) -> Result<Bytes, HuggingFaceError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("image/png"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", self.api_key))
                .map_err(|_| HuggingFaceError::InvalidToken)?,
        );

        let url = format!("{}/{}", self.base, model);

        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "sending text-to-image request");

        let resp = self
            .http
            .post(url)
            .headers(headers)
            .json(request)
            .send()
            .await?;

        let status = resp.status();

        #[cfg(feature = "tracing")]
        tracing::debug!(%status, "text-to-image response received");

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(HuggingFaceError::Api {
                status,
                message: ApiErrorBody::message_from(&body),
            });
        }

        let is_json = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/json"));
        if is_json {
            let body = resp.text().await?;
            return Err(HuggingFaceError::Format(format!(
                "expected image bytes, got JSON: {}",
                ApiErrorBody::message_from(&body)
            )));
        }

        Ok(resp.bytes().await?)
    }
}
