use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::verdict::{ParsedVerdict, VerdictStatus};

#[derive(Serialize)]
pub struct CheckRequest<'a> {
    pub url: &'a str,
}

#[derive(Deserialize)]
pub struct CheckResponse {
    pub result: String,
}

#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

/// One finished check, as printed in `--json` mode.
#[derive(Serialize)]
pub struct CheckReport {
    pub url: String,
    pub status: VerdictStatus,
    pub confidence: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub checked_at: DateTime<Utc>,
}

impl CheckReport {
    pub fn new(url: impl Into<String>, verdict: ParsedVerdict) -> Self {
        CheckReport {
            url: url.into(),
            status: verdict.status,
            confidence: verdict.confidence,
            message: verdict.message,
            checked_at: Utc::now(),
        }
    }
}
