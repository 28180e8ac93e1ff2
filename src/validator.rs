//! Turns whatever the user typed or pasted into a URL worth sending.

use std::fmt;
use serde::Serialize;
use url::Url;
use crate::error::RejectionReason;

/// A trimmed, `@`-stripped string that parses as a URL with a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CandidateUrl(String);

impl CandidateUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CandidateUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips surrounding whitespace and any leading `@` run (mention-style pastes).
pub fn normalize(raw: &str) -> &str {
    raw.trim().trim_start_matches('@')
}

pub fn validate(raw: &str) -> Result<CandidateUrl, RejectionReason> {
    if raw.trim().is_empty() {
        tracing::debug!("rejected empty input");
        return Err(RejectionReason::EmptyInput);
    }

    let cleaned = normalize(raw);
    match Url::parse(cleaned) {
        Ok(parsed) if parsed.host().is_some() => Ok(CandidateUrl(cleaned.to_string())),
        Ok(_) => {
            tracing::debug!(input = cleaned, "rejected url without host");
            Err(RejectionReason::MalformedUrl)
        }
        Err(e) => {
            tracing::debug!(input = cleaned, error = %e, "rejected malformed url");
            Err(RejectionReason::MalformedUrl)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_is_empty() {
        for input in ["", " ", "\t\n", "     "] {
            assert_eq!(validate(input), Err(RejectionReason::EmptyInput), "{input:?}");
        }
    }

    #[test]
    fn strips_mentions_and_whitespace() {
        let url = validate("  @@https://example.com  ").unwrap();
        assert_eq!(url.as_str(), "https://example.com");

        let url = validate("@http://login.example.org/path?q=1").unwrap();
        assert_eq!(url.as_str(), "http://login.example.org/path?q=1");

        let url = validate("https://example.com").unwrap();
        assert_eq!(url.as_str(), "https://example.com");
    }

    #[test]
    fn does_not_reserialize() {
        // `Url` would add a trailing slash; the candidate keeps the user's text.
        let url = validate("HTTPS://Example.com").unwrap();
        assert_eq!(url.to_string(), "HTTPS://Example.com");
    }

    #[test]
    fn malformed_inputs() {
        for input in ["not a url", "example.com", "@", "@@@", "mailto:someone@example.com", "https://"] {
            assert_eq!(validate(input), Err(RejectionReason::MalformedUrl), "{input:?}");
        }
    }
}
