//! Generated title suggestions and the combined optimizer report.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::analysis::TitleAnalysis;
use crate::words::SourceStatus;

/// A rewritten title produced from one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Suggestion {
    /// Name of the template that produced this title
    pub template: String,

    /// Rendered title
    pub title: String,
}

impl Suggestion {
    pub fn new(template: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            title: title.into(),
        }
    }

    /// Length in characters, as counted against the title budget.
    pub fn char_len(&self) -> usize {
        self.title.chars().count()
    }
}

/// Everything the optimizer produces for one (title, keyword) pair.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct OptimizeReport {
    pub analysis: TitleAnalysis,

    /// Empty when the title already meets the suggestion threshold
    pub suggestions: Vec<Suggestion>,

    pub tags: Vec<String>,

    pub description: String,

    /// Source of the power word list used for this report
    pub word_source: SourceStatus,

    /// Power word hint taken from the top search result, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trending_word: Option<String>,
}
