//! How a verdict looks on the result screen.
//!
//! Every status maps to exactly one row of [`STYLES`]; labels the checker sends
//! that we do not recognize get their own row instead of borrowing another's.

use std::fmt;
use serde::Serialize;
use crate::error::FALLBACK_MESSAGE;
use crate::verdict::{ParsedVerdict, VerdictStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VerdictKind {
    Malicious,
    Suspicious,
    Safe,
    Error,
    Unrecognized,
}

impl From<&VerdictStatus> for VerdictKind {
    fn from(status: &VerdictStatus) -> Self {
        match status {
            VerdictStatus::Malicious => VerdictKind::Malicious,
            VerdictStatus::Suspicious => VerdictKind::Suspicious,
            VerdictStatus::Safe => VerdictKind::Safe,
            VerdictStatus::Error => VerdictKind::Error,
            VerdictStatus::Unrecognized(_) => VerdictKind::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VerdictStyle {
    pub icon: &'static str,
    pub color: &'static str,
    pub description: &'static str,
}

pub static STYLES: [(VerdictKind, VerdictStyle); 5] = [
    (
        VerdictKind::Malicious,
        VerdictStyle {
            icon: "warning",
            color: "#FF3B30",
            description: "This URL appears to be malicious. Do not proceed!",
        },
    ),
    (
        VerdictKind::Suspicious,
        VerdictStyle {
            icon: "help",
            color: "#FF9500",
            description: "This URL shows some suspicious patterns. Proceed with caution.",
        },
    ),
    (
        VerdictKind::Safe,
        VerdictStyle {
            icon: "check-circle",
            color: "#34C759",
            description: "This URL appears to be safe.",
        },
    ),
    (
        VerdictKind::Error,
        VerdictStyle {
            icon: "error",
            color: "#8B0000",
            description: FALLBACK_MESSAGE,
        },
    ),
    (
        VerdictKind::Unrecognized,
        VerdictStyle {
            icon: "help-outline",
            color: "#6C757D",
            description: "The checker returned a result this app does not recognize.",
        },
    ),
];

pub fn style_for(kind: VerdictKind) -> &'static VerdictStyle {
    STYLES
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, style)| style)
        .unwrap_or(&STYLES[STYLES.len() - 1].1)
}

/// Everything the result screen renders for one verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultView {
    pub kind: VerdictKind,
    pub headline: String,
    pub confidence: Option<String>,
    pub description: String,
    pub icon: &'static str,
    pub color: &'static str,
}

impl ResultView {
    pub fn from_verdict(verdict: &ParsedVerdict) -> Self {
        let kind = VerdictKind::from(&verdict.status);
        let style = style_for(kind);

        // Error rows explain themselves with whatever went wrong.
        let description = match (kind, &verdict.message) {
            (VerdictKind::Error, Some(message)) => message.clone(),
            _ => style.description.to_string(),
        };

        ResultView {
            kind,
            headline: verdict.status.to_string(),
            confidence: Some(verdict.confidence.clone()).filter(|c| !c.is_empty()),
            description,
            icon: style.icon,
            color: style.color,
        }
    }
}

impl fmt::Display for ResultView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.icon, self.headline)?;
        if let Some(confidence) = &self.confidence {
            writeln!(f, "{}", confidence)?;
        }
        write!(f, "{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::classify;

    #[test]
    fn every_kind_has_a_row() {
        for kind in [
            VerdictKind::Malicious,
            VerdictKind::Suspicious,
            VerdictKind::Safe,
            VerdictKind::Error,
            VerdictKind::Unrecognized,
        ] {
            assert!(STYLES.iter().any(|(k, _)| *k == kind), "{kind:?}");
        }
    }

    #[test]
    fn malicious_view() {
        let view = ResultView::from_verdict(&classify("Malicious (98.0% confidence)"));
        assert_eq!(view.kind, VerdictKind::Malicious);
        assert_eq!(view.headline, "Malicious");
        assert_eq!(view.confidence.as_deref(), Some("98.0% confidence"));
        assert_eq!(view.icon, "warning");
        assert_eq!(view.color, "#FF3B30");
        assert_eq!(view.to_string(), "[warning] Malicious\n98.0% confidence\nThis URL appears to be malicious. Do not proceed!");
    }

    #[test]
    fn unrecognized_is_not_shown_as_safe() {
        let view = ResultView::from_verdict(&classify("Unexpected server text"));
        assert_eq!(view.kind, VerdictKind::Unrecognized);
        assert_eq!(view.headline, "Unexpected server text");
        assert_eq!(view.confidence, None);
        assert_ne!(view.color, style_for(VerdictKind::Safe).color);
    }

    #[test]
    fn error_view_uses_verdict_message() {
        let view = ResultView::from_verdict(&ParsedVerdict::error("rate limited"));
        assert_eq!(view.kind, VerdictKind::Error);
        assert_eq!(view.description, "rate limited");
        assert_eq!(view.to_string(), "[error] Error\nrate limited");
    }
}
