//! Power word source status.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the active power word list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SourceStatus {
    /// Fetched from the remote word list
    Online,
    /// Built-in fallback list
    Offline,
}

impl SourceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceStatus::Online => "online",
            SourceStatus::Offline => "offline",
        }
    }

    /// Human readable label shown next to the word list.
    pub fn label(&self) -> &'static str {
        match self {
            SourceStatus::Online => "Online (remote list active)",
            SourceStatus::Offline => "Offline (local list)",
        }
    }

    pub fn is_online(&self) -> bool {
        matches!(self, SourceStatus::Online)
    }
}

impl fmt::Display for SourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
