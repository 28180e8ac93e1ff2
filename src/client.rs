use std::time::Instant;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, ClientBuilder};
use url::Url;
use crate::api::models::{CheckRequest, CheckResponse, ErrorBody};
use crate::classifier::classify;
use crate::config::Config;
use crate::error::{AppError, Result, SERVER_ERROR_MESSAGE};
use crate::validator::CandidateUrl;
use crate::verdict::ParsedVerdict;

/// Sends candidate URLs to the remote checker. Cloning shares the connection pool;
/// every call is an independent request with no retry.
#[derive(Clone, Debug)]
pub struct CheckClient {
    http: Client,
    endpoint: Url,
}

impl CheckClient {
    pub fn new(config: &Config) -> Result<Self> {
        let mut builder = ClientBuilder::new();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(CheckClient {
            http,
            endpoint: config.check_endpoint(),
        })
    }

    pub fn with_endpoint(endpoint: Url) -> Self {
        CheckClient {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Always resolves; network and server failures come back as an `Error` verdict.
    pub async fn check_url(&self, candidate: &CandidateUrl) -> ParsedVerdict {
        match self.fetch_label(candidate).await {
            Ok(label) => classify(&label),
            Err(err) => {
                tracing::warn!(url = %candidate, error = %err, "check failed");
                ParsedVerdict::error(err.user_message())
            }
        }
    }

    /// Raw `result` label from the checker.
    pub async fn fetch_label(&self, candidate: &CandidateUrl) -> Result<String> {
        tracing::info!(url = %candidate, endpoint = %self.endpoint, "checking url");
        let start = Instant::now();

        let res = self
            .http
            .post(self.endpoint.clone())
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&CheckRequest { url: candidate.as_str() })
            .send()
            .await?;

        let status = res.status();
        tracing::debug!(status = status.as_u16(), elapsed = ?start.elapsed(), "checker responded");

        if !status.is_success() {
            let body = res.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.error)
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
            return Err(AppError::ServerError(message));
        }

        let body = res.bytes().await?;
        let parsed: CheckResponse = serde_json::from_slice(&body)
            .map_err(|e| AppError::InvalidResponse(e.to_string()))?;

        Ok(parsed.result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FALLBACK_MESSAGE;
    use crate::validator::validate;
    use crate::verdict::VerdictStatus;

    #[test]
    fn endpoint_comes_from_config() {
        let config = Config::new(Url::parse("http://checker.internal:8080").unwrap()).unwrap();
        let client = CheckClient::new(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://checker.internal:8080/api/check-url");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error_verdict() {
        // Bind then drop so nothing is listening on the port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = Url::parse(&format!("http://127.0.0.1:{}/api/check-url", port)).unwrap();
        let client = CheckClient::with_endpoint(endpoint);
        let candidate = validate("https://example.com").unwrap();

        let verdict = client.check_url(&candidate).await;
        assert_eq!(verdict.status, VerdictStatus::Error);
        assert_eq!(verdict.confidence, "");
        assert_eq!(verdict.message.as_deref(), Some(FALLBACK_MESSAGE));
    }
}
