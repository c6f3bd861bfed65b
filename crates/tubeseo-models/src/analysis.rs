//! Title analysis findings and scores.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a single diagnostic finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One line of the analysis checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }
}

/// Result of scoring a title.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TitleAnalysis {
    /// Clamped score in `0..=100`
    pub score: u8,

    /// Findings in check evaluation order
    pub findings: Vec<Finding>,
}

impl TitleAnalysis {
    /// Display grade used by the dashboard color bands.
    pub fn grade(&self) -> &'static str {
        match self.score {
            80..=u8::MAX => "good",
            60..=79 => "fair",
            _ => "poor",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_serializes_snake_case() {
        let json = serde_json::to_string(&Finding::info("Add Number")).unwrap();
        assert_eq!(json, r#"{"severity":"info","message":"Add Number"}"#);
    }

    #[test]
    fn test_grade_bands() {
        let analysis = |score| TitleAnalysis {
            score,
            findings: vec![],
        };
        assert_eq!(analysis(100).grade(), "good");
        assert_eq!(analysis(80).grade(), "good");
        assert_eq!(analysis(79).grade(), "fair");
        assert_eq!(analysis(60).grade(), "fair");
        assert_eq!(analysis(59).grade(), "poor");
    }
}
