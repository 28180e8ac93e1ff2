use once_cell::sync::Lazy;
use regex::Regex;
use crate::verdict::{ParsedVerdict, VerdictStatus};

// Known token at the very start, then everything that follows (newlines included).
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(Malicious|Suspicious|Safe|Error)(.*)").expect("Failed to compile label pattern")
});

/// Splits a human-readable label such as `Malicious (98.0% confidence)` into
/// status and confidence. Unknown labels become the status verbatim.
pub fn classify(result: &str) -> ParsedVerdict {
    let Some(caps) = LABEL_PATTERN.captures(result) else {
        return ParsedVerdict {
            status: VerdictStatus::Unrecognized(result.to_string()),
            confidence: String::new(),
            message: None,
        };
    };

    let status = VerdictStatus::from_token(&caps[1])
        .unwrap_or_else(|| VerdictStatus::Unrecognized(result.to_string()));
    let confidence = caps[2].trim().replace(['(', ')'], "");
    // The server reports its own failures as `Error: ...`; the full label is the explanation.
    let message = (status == VerdictStatus::Error).then(|| result.to_string());

    ParsedVerdict {
        status,
        confidence,
        message,
    }
}
