//! Budget-aware title suggestions.

use std::sync::Arc;

use tracing::debug;
use tubeseo_models::Suggestion;

use crate::chooser::{choose, Chooser};
use crate::config::GeneratorConfig;
use crate::error::{EngineError, EngineResult};
use crate::lexicon::{FALLBACK_POWER_WORDS, HOOK_NUMBERS, VIRAL_EMOJIS};
use crate::metadata::current_year;
use crate::template::{Ingredients, TitleTemplate};
use crate::text::{clean_title_text, smart_truncate, tidy_rendered, title_case};

/// Renders rewritten titles from a fixed template list.
pub struct SuggestionGenerator {
    config: GeneratorConfig,
    templates: Vec<TitleTemplate>,
    chooser: Arc<dyn Chooser>,
    fixed_year: Option<i32>,
}

impl SuggestionGenerator {
    /// Parse the configured templates. A malformed template is an error.
    pub fn new(config: GeneratorConfig, chooser: Arc<dyn Chooser>) -> EngineResult<Self> {
        if config.templates.is_empty() {
            return Err(EngineError::config("at least one suggestion template is required"));
        }
        let templates = config
            .templates
            .iter()
            .map(TitleTemplate::from_spec)
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            config,
            templates,
            chooser,
            fixed_year: None,
        })
    }

    /// Pin the year instead of reading the clock.
    pub fn with_year(mut self, year: i32) -> Self {
        self.fixed_year = Some(year);
        self
    }

    pub fn year(&self) -> i32 {
        self.fixed_year.unwrap_or_else(current_year)
    }

    /// Generate up to `count` suggestions, one per template in order.
    ///
    /// `trending_hint`, when non-blank, replaces the randomly chosen power
    /// word. Every returned title fits `max_title_chars`.
    pub fn generate(
        &self,
        title: &str,
        keyword: &str,
        power_words: &[String],
        trending_hint: Option<&str>,
        count: usize,
    ) -> Vec<Suggestion> {
        let max = self.config.max_title_chars;
        let core = match clean_title_text(title, keyword) {
            c if c.is_empty() => self.config.core_placeholder.clone(),
            c => c,
        };
        let ingredients = self.pick_ingredients(keyword, power_words, trending_hint);

        self.templates
            .iter()
            .take(count)
            .map(|template| {
                let ingredients = self.fit_keyword(template, &ingredients);
                let fixed = template.fixed_len(&ingredients);
                let allowed = max.saturating_sub(fixed).min(self.config.core_max_chars);
                let core = match smart_truncate(&core, allowed) {
                    c if c.is_empty() && self.config.core_placeholder.chars().count() <= allowed => {
                        self.config.core_placeholder.clone()
                    }
                    c => c,
                };

                let mut rendered = tidy_rendered(&template.render(&ingredients, &core));
                if rendered.chars().count() > max {
                    debug!(
                        template = template.name(),
                        fixed, max, "Template scaffolding exceeds the title budget"
                    );
                    rendered = smart_truncate(&rendered, max);
                }
                Suggestion::new(template.name(), rendered)
            })
            .collect()
    }

    /// Generate the configured default number of suggestions.
    pub fn generate_default(
        &self,
        title: &str,
        keyword: &str,
        power_words: &[String],
        trending_hint: Option<&str>,
    ) -> Vec<Suggestion> {
        self.generate(title, keyword, power_words, trending_hint, self.config.default_count)
    }

    /// Shorten the keyword when it leaves no room for the core placeholder.
    fn fit_keyword(&self, template: &TitleTemplate, ingredients: &Ingredients) -> Ingredients {
        let max = self.config.max_title_chars;
        let reserve = self.config.core_placeholder.chars().count();
        let slots = template.keyword_slots();
        let fixed = template.fixed_len(ingredients);
        if slots == 0 || fixed + reserve <= max {
            return ingredients.clone();
        }

        let scaffold = fixed - ingredients.keyword.chars().count() * slots;
        let budget = max.saturating_sub(scaffold + reserve) / slots;
        debug!(
            template = template.name(),
            budget, "Shortening keyword to fit the title budget"
        );
        Ingredients {
            keyword: smart_truncate(&ingredients.keyword, budget),
            ..ingredients.clone()
        }
    }

    fn pick_ingredients(
        &self,
        keyword: &str,
        power_words: &[String],
        trending_hint: Option<&str>,
    ) -> Ingredients {
        let chooser = self.chooser.as_ref();
        let power = match trending_hint.map(str::trim).filter(|h| !h.is_empty()) {
            Some(hint) => hint.to_string(),
            None => choose(chooser, power_words)
                .cloned()
                .or_else(|| choose(chooser, FALLBACK_POWER_WORDS).map(|w| w.to_string()))
                .unwrap_or_default(),
        };

        Ingredients {
            keyword: title_case(keyword.trim()),
            power: power.to_uppercase(),
            year: self.year().to_string(),
            emoji: choose(chooser, VIRAL_EMOJIS).copied().unwrap_or_default().to_string(),
            number: choose(chooser, HOOK_NUMBERS).copied().unwrap_or_default().to_string(),
        }
    }
}
