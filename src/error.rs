use serde::Serialize;

/// Message shown when no usable response came back from the checker.
pub const FALLBACK_MESSAGE: &str = "Failed to check URL";

/// Message shown when the checker answered non-2xx without an `error` field.
pub const SERVER_ERROR_MESSAGE: &str = "Server error";

/// Why user input never reached the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
pub enum RejectionReason {
    #[error("Please enter a URL")]
    EmptyInput,

    #[error("Please enter a valid URL")]
    MalformedUrl,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Failed to reach checker: {0}")]
    TransportError(String),

    #[error("Unexpected response from checker: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// Text carried by the `Error` verdict this failure turns into.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected(reason) => reason.to_string(),
            AppError::ServerError(msg) => msg.clone(),
            AppError::TransportError(_) | AppError::InvalidResponse(_) => {
                FALLBACK_MESSAGE.to_string()
            }
            AppError::ConfigError(msg) => msg.clone(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportError(err.to_string())
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl From<url::ParseError> for AppError {
    fn from(err: url::ParseError) -> Self {
        AppError::ConfigError(format!("Invalid URL: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
