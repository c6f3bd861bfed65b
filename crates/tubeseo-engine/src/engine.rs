//! Engine facade tying the analyzer, generator and word list together.

use std::sync::Arc;

use tracing::debug;
use tubeseo_models::{AuditEntry, OptimizeReport, UploadRecord};

use crate::analyzer::analyze_title;
use crate::audit::audit_record;
use crate::chooser::{Chooser, RandomChooser};
use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::metadata::{generate_description, generate_tags};
use crate::power_words::{PowerWordCache, PowerWords};
use crate::suggest::SuggestionGenerator;

/// Title optimizer.
pub struct SeoEngine {
    config: EngineConfig,
    words: Arc<PowerWordCache>,
    generator: SuggestionGenerator,
}

impl SeoEngine {
    pub fn new(
        config: EngineConfig,
        words: Arc<PowerWordCache>,
        chooser: Arc<dyn Chooser>,
    ) -> EngineResult<Self> {
        config.validate()?;
        let generator = SuggestionGenerator::new(config.generator.clone(), chooser)?;
        Ok(Self {
            config,
            words,
            generator,
        })
    }

    /// Build the word list cache from `config` and choose ingredients randomly.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let words = Arc::new(PowerWordCache::new(config.word_list.clone())?);
        Self::new(config, words, Arc::new(RandomChooser))
    }

    /// Create from environment variables.
    pub fn from_env() -> EngineResult<Self> {
        Self::from_config(EngineConfig::from_env())
    }

    /// Pin the year used in suggestions and tags.
    pub fn with_year(mut self, year: i32) -> Self {
        self.generator = self.generator.with_year(year);
        self
    }

    pub fn power_words(&self) -> &Arc<PowerWordCache> {
        &self.words
    }

    /// Analyze a title and produce suggestions, tags and a description.
    pub async fn optimize(
        &self,
        title: &str,
        keyword: &str,
        trending_hint: Option<&str>,
    ) -> OptimizeReport {
        let words = self.words.get().await;
        self.optimize_with(title, keyword, &words, trending_hint)
    }

    /// Same as [`SeoEngine::optimize`] with an explicit word list.
    pub fn optimize_with(
        &self,
        title: &str,
        keyword: &str,
        words: &PowerWords,
        trending_hint: Option<&str>,
    ) -> OptimizeReport {
        let analysis = analyze_title(title, keyword, words.as_slice(), &self.config.rubric);

        let suggestions = if analysis.score < self.config.suggestion_threshold {
            self.generator
                .generate_default(title, keyword, words.as_slice(), trending_hint)
        } else {
            debug!(score = analysis.score, "Title meets threshold, skipping suggestions");
            Vec::new()
        };

        let year = self.generator.year();
        let tags = generate_tags(title, keyword, year, self.config.tag_cap);
        let description = generate_description(title, keyword, &tags, year);

        OptimizeReport {
            analysis,
            suggestions,
            tags,
            description,
            word_source: words.status,
            trending_word: trending_hint
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string),
        }
    }

    /// Audit a batch of existing uploads against one word list snapshot.
    pub async fn audit(&self, records: Vec<UploadRecord>) -> Vec<AuditEntry> {
        let words = self.words.get().await;
        records
            .into_iter()
            .map(|record| {
                audit_record(
                    record,
                    words.as_slice(),
                    &self.config.rubric,
                    &self.generator,
                    self.config.suggestion_threshold,
                )
            })
            .collect()
    }
}
