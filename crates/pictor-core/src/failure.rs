//! Classification of failed generations into user-facing categories.
//!
//! Upstream services report problems as free text, so the mapping works on
//! substrings. It is kept in one place ([`classify_failure`]) so that changes
//! in upstream wording only need to be handled here.
//!
//! The category only picks a message template. It never changes control
//! flow: no class is retried and the caller always ends up without an image.

use std::fmt::Display;

/// Every way a single generation request can end without an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// Empty or whitespace-only prompt. Never reaches the remote service.
    ValidationEmpty,
    /// The model is still being loaded by the inference service.
    ModelLoading,
    /// The caller exceeded the service's rate limit.
    RateLimited,
    /// The credential was rejected.
    Unauthorized,
    /// Anything else. The raw message is surfaced verbatim.
    Unknown,
}

/// Map an upstream error message onto a [`FailureKind`].
///
/// Checks run in a fixed order and the first match wins:
///
/// 1. `503` or `loading` → [`FailureKind::ModelLoading`]
/// 2. `429` or `rate limit` → [`FailureKind::RateLimited`]
/// 3. `401` or `unauthorized` → [`FailureKind::Unauthorized`]
/// 4. otherwise [`FailureKind::Unknown`]
///
/// Word matches are case-insensitive.
///
/// ```rust
/// use pictor_core::failure::{FailureKind, classify_failure};
///
/// assert_eq!(classify_failure("Error 503: loading"), FailureKind::ModelLoading);
/// assert_eq!(classify_failure("Internal Server Error"), FailureKind::Unknown);
/// ```
pub fn classify_failure(message: &str) -> FailureKind {
    let lower = message.to_lowercase();

    if message.contains("503") || lower.contains("loading") {
        FailureKind::ModelLoading
    } else if message.contains("429") || lower.contains("rate limit") {
        FailureKind::RateLimited
    } else if message.contains("401") || lower.contains("unauthorized") {
        FailureKind::Unauthorized
    } else {
        FailureKind::Unknown
    }
}

impl FailureKind {
    /// Message template for this category. `raw` is only used by
    /// [`FailureKind::Unknown`].
    pub fn user_message(&self, raw: impl Display) -> String {
        match self {
            FailureKind::ValidationEmpty => "Please enter a description for your image.".into(),
            FailureKind::ModelLoading => {
                "Model is currently loading. Please wait a moment and try again.".into()
            }
            FailureKind::RateLimited => {
                "Rate limit reached. Please wait a few minutes before trying again.".into()
            }
            FailureKind::Unauthorized => "Authentication failed. Please check your HuggingFace \
                                          token has 'Write' permissions."
                .into(),
            FailureKind::Unknown => format!("An error occurred: {raw}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_documented_messages() {
        assert_eq!(classify_failure("Error 503: loading"), FailureKind::ModelLoading);
        assert_eq!(classify_failure("429 Too Many Requests"), FailureKind::RateLimited);
        assert_eq!(classify_failure("401 unauthorized"), FailureKind::Unauthorized);
        assert_eq!(classify_failure("Internal Server Error"), FailureKind::Unknown);
    }

    #[test]
    fn word_matches_ignore_case() {
        assert_eq!(
            classify_failure("Model X is currently LOADING"),
            FailureKind::ModelLoading
        );
        assert_eq!(classify_failure("Rate Limit exceeded"), FailureKind::RateLimited);
        assert_eq!(classify_failure("UNAUTHORIZED"), FailureKind::Unauthorized);
    }

    #[test]
    fn first_match_wins() {
        // Mentions both 429 and 401, the rate limit check runs first.
        assert_eq!(
            classify_failure("429 after 401 unauthorized"),
            FailureKind::RateLimited
        );
        assert_eq!(
            classify_failure("unauthorized while loading"),
            FailureKind::ModelLoading
        );
    }

    #[test]
    fn unknown_message_is_surfaced_verbatim() {
        let msg = FailureKind::Unknown.user_message("Internal Server Error");
        assert_eq!(msg, "An error occurred: Internal Server Error");
    }

    #[test]
    fn templates_ignore_raw_message() {
        let msg = FailureKind::RateLimited.user_message("429 Too Many Requests");
        assert!(msg.starts_with("Rate limit reached."));
        assert!(!msg.contains("429"));
    }
}
