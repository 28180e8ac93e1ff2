use std::env;
use std::time::Duration;
use url::Url;
use crate::error::{AppError, Result};

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
const CHECK_PATH: &str = "api/check-url";
const API_BASE_VAR: &str = "PHISH_CHECK_API_BASE";
const TIMEOUT_VAR: &str = "PHISH_CHECK_TIMEOUT_SECS";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_base: Url,
    /// Transport-level timeout. `None` leaves the HTTP client at its default (no timeout).
    pub request_timeout: Option<Duration>,
}

impl Config {
    /// Loads `.env` and the environment. An explicit base replaces `PHISH_CHECK_API_BASE` entirely.
    pub fn load(api_base: Option<Url>) -> Result<Self> {
        // Load environment variables from .env file if it exists
        dotenv::dotenv().ok();

        Self::from_lookup_with_base(|key| env::var(key).ok(), api_base)
    }

    pub fn from_lookup_with_base<F>(lookup: F, api_base: Option<Url>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        match api_base {
            None => Self::from_lookup(lookup),
            Some(api_base) => {
                // The environment base is never parsed, so a broken one cannot block the override.
                let mut config = Config::new(api_base)?;
                config.request_timeout = parse_timeout(&lookup)?;
                Ok(config)
            }
        }
    }

    /// Builds a config from any key/value source, so tests never touch the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base = lookup(API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let mut config = Config::new(Url::parse(base.trim())?)?;
        config.request_timeout = parse_timeout(&lookup)?;

        Ok(config)
    }

    pub fn new(api_base: Url) -> Result<Self> {
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(AppError::ConfigError(format!(
                "Unsupported API scheme: {}",
                api_base.scheme()
            )));
        }
        if api_base.host().is_none() {
            return Err(AppError::ConfigError("API base has no host".to_string()));
        }

        Ok(Config {
            api_base,
            request_timeout: None,
        })
    }

    pub fn check_endpoint(&self) -> Url {
        let mut base = self.api_base.clone();
        // `Url::join` replaces the last segment unless the path ends in a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        // Joining a fixed relative path onto an http(s) base cannot fail.
        base.join(CHECK_PATH).unwrap_or(base)
    }
}

fn parse_timeout<F>(lookup: &F) -> Result<Option<Duration>>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(TIMEOUT_VAR) else {
        return Ok(None);
    };
    let secs = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| AppError::ConfigError(format!("Invalid timeout: {}", e)))?;
    if secs == 0 {
        return Err(AppError::ConfigError("Timeout must be at least one second".to_string()));
    }
    Ok(Some(Duration::from_secs(secs)))
}
