//! Engine configuration.
//!
//! Rubric thresholds, templates and the title budget are data so a single
//! engine covers every scoring variant.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Character-count bands for the length criterion.
///
/// `optimal_min..=optimal_max` earns full credit, anything else inside
/// `acceptable_min..=max` earns partial credit, and titles over `max` are
/// reported as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthBands {
    pub acceptable_min: usize,
    pub optimal_min: usize,
    pub optimal_max: usize,
    pub max: usize,
}

impl Default for LengthBands {
    fn default() -> Self {
        Self {
            acceptable_min: 10,
            optimal_min: 20,
            optimal_max: 85,
            max: 100,
        }
    }
}

/// Point values for each scoring criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rubric {
    pub length: LengthBands,
    pub length_optimal_points: u8,
    pub length_acceptable_points: u8,
    pub keyword_present_points: u8,
    pub keyword_front_points: u8,
    pub power_word_points: u8,
    pub number_points: u8,
    pub bracket_points: u8,
    pub emoji_points: u8,
}

impl Default for Rubric {
    fn default() -> Self {
        Self {
            length: LengthBands::default(),
            length_optimal_points: 20,
            length_acceptable_points: 10,
            keyword_present_points: 15,
            keyword_front_points: 15,
            power_word_points: 20,
            number_points: 10,
            bracket_points: 10,
            emoji_points: 10,
        }
    }
}

impl Rubric {
    /// Credit awarded when no keyword is given.
    pub fn keyword_full_points(&self) -> u8 {
        self.keyword_present_points
            .saturating_add(self.keyword_front_points)
    }

    pub fn validate(&self) -> EngineResult<()> {
        let b = &self.length;
        if !(b.acceptable_min <= b.optimal_min && b.optimal_min <= b.optimal_max && b.optimal_max <= b.max) {
            return Err(EngineError::config(format!(
                "length bands must satisfy acceptable_min <= optimal_min <= optimal_max <= max, got {:?}",
                b
            )));
        }
        Ok(())
    }
}

/// A named suggestion template before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSpec {
    pub name: String,
    pub pattern: String,
}

impl TemplateSpec {
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
        }
    }
}

/// Built-in suggestion templates, in output order.
pub const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("colon", "{keyword}: {core} ({power} {year}) {emoji}"),
    ("emoji_lead", "{emoji} {keyword} {power}: {core} [{year}]"),
    ("dash", "{core} - {keyword} {emoji} ({power} {year})"),
    ("question", "Is This the {power} {keyword} of {year}? {core} {emoji}"),
    ("number_hook", "{number} {power} {keyword} Tips ({year}): {core} {emoji}"),
];

/// Suggestion generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Hard limit for a generated title, in characters
    pub max_title_chars: usize,
    /// Upper bound for the core segment regardless of remaining budget
    pub core_max_chars: usize,
    /// Number of suggestions produced when the caller does not ask
    pub default_count: usize,
    /// Core used when nothing is left after removing the keyword
    pub core_placeholder: String,
    pub templates: Vec<TemplateSpec>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 100,
            core_max_chars: 45,
            default_count: 3,
            core_placeholder: "Video".to_string(),
            templates: DEFAULT_TEMPLATES
                .iter()
                .map(|(name, pattern)| TemplateSpec::new(*name, *pattern))
                .collect(),
        }
    }
}

/// Remote power word list configuration.
#[derive(Debug, Clone)]
pub struct WordListConfig {
    /// URL of a JSON array of strings; `None` always serves the fallback list
    pub url: Option<String>,
    /// Fetch timeout
    pub timeout: Duration,
    /// How long a successful fetch is reused
    pub ttl: Duration,
    /// How long to wait before retrying after a failed fetch
    pub offline_retry: Duration,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout: Duration::from_secs(3),
            ttl: Duration::from_secs(600),
            offline_retry: Duration::from_secs(60),
        }
    }
}

impl WordListConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: std::env::var("POWER_WORDS_URL")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            timeout: env_secs("POWER_WORDS_TIMEOUT_SECS").unwrap_or(defaults.timeout),
            ttl: env_secs("POWER_WORDS_TTL_SECS").unwrap_or(defaults.ttl),
            offline_retry: env_secs("POWER_WORDS_RETRY_SECS").unwrap_or(defaults.offline_retry),
        }
    }
}

/// Top-level engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub rubric: Rubric,
    pub generator: GeneratorConfig,
    pub word_list: WordListConfig,
    /// Suggestions are generated for titles scoring below this
    pub suggestion_threshold: u8,
    /// Maximum number of generated tags
    pub tag_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rubric: Rubric::default(),
            generator: GeneratorConfig::default(),
            word_list: WordListConfig::default(),
            suggestion_threshold: 100,
            tag_cap: 15,
        }
    }
}

impl EngineConfig {
    /// Create config from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mut generator = defaults.generator;
        if let Some(max) = env_parse("MAX_TITLE_CHARS") {
            generator.max_title_chars = max;
        }
        if let Some(count) = env_parse("SUGGESTION_COUNT") {
            generator.default_count = count;
        }

        Self {
            rubric: defaults.rubric,
            generator,
            word_list: WordListConfig::from_env(),
            suggestion_threshold: env_parse("SUGGESTION_THRESHOLD")
                .unwrap_or(defaults.suggestion_threshold),
            tag_cap: env_parse("TAG_CAP").unwrap_or(defaults.tag_cap),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        self.rubric.validate()?;
        if self.generator.max_title_chars == 0 {
            return Err(EngineError::config("max_title_chars must be positive"));
        }
        if self.generator.templates.is_empty() {
            return Err(EngineError::config("at least one suggestion template is required"));
        }
        if self.tag_cap < 2 {
            return Err(EngineError::config(
                "tag_cap must leave room for the keyword and its dated variant",
            ));
        }
        Ok(())
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

fn env_secs(key: &str) -> Option<Duration> {
    env_parse::<u64>(key).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.generator.max_title_chars, 100);
        assert_eq!(config.generator.templates.len(), 5);
        assert_eq!(config.word_list.ttl, Duration::from_secs(600));
        assert_eq!(config.word_list.timeout, Duration::from_secs(3));
        assert!(config.word_list.url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_default_rubric_totals_100() {
        let r = Rubric::default();
        let total = r.length_optimal_points as u32
            + r.keyword_full_points() as u32
            + r.power_word_points as u32
            + r.number_points as u32
            + r.bracket_points as u32
            + r.emoji_points as u32;
        assert_eq!(total, 100);
    }

    #[test]
    fn test_rubric_rejects_inverted_bands() {
        let mut rubric = Rubric::default();
        rubric.length.optimal_min = 90;
        assert!(matches!(rubric.validate(), Err(EngineError::Config(_))));
    }

    #[test]
    fn test_config_rejects_tag_cap_below_two() {
        let mut config = EngineConfig::default();
        config.tag_cap = 1;
        assert!(matches!(config.validate(), Err(EngineError::Config(_))));
        config.tag_cap = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_empty_templates() {
        let mut config = EngineConfig::default();
        config.generator.templates.clear();
        assert!(config.validate().is_err());
    }
}
