use std::fmt;
use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerdictStatus {
    Malicious,
    Suspicious,
    Safe,
    Error,
    /// A label that did not start with a known token, kept verbatim.
    Unrecognized(String),
}

impl VerdictStatus {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Malicious" => Some(VerdictStatus::Malicious),
            "Suspicious" => Some(VerdictStatus::Suspicious),
            "Safe" => Some(VerdictStatus::Safe),
            "Error" => Some(VerdictStatus::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            VerdictStatus::Malicious => "Malicious",
            VerdictStatus::Suspicious => "Suspicious",
            VerdictStatus::Safe => "Safe",
            VerdictStatus::Error => "Error",
            VerdictStatus::Unrecognized(raw) => raw,
        }
    }
}

impl fmt::Display for VerdictStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for VerdictStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// What the result screen shows for one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedVerdict {
    pub status: VerdictStatus,
    pub confidence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ParsedVerdict {
    pub fn error(message: impl Into<String>) -> Self {
        ParsedVerdict {
            status: VerdictStatus::Error,
            confidence: String::new(),
            message: Some(message.into()),
        }
    }
}
