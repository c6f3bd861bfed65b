//! Title scoring, suggestion and metadata engine.
//!
//! This crate provides:
//! - A rule-based title analyzer with a configurable rubric
//! - Budget-aware title suggestion templates
//! - Tag and description generation
//! - A TTL cache for the remote power word list

pub mod analyzer;
pub mod audit;
pub mod chooser;
pub mod config;
pub mod engine;
pub mod error;
pub mod lexicon;
pub mod metadata;
pub mod power_words;
pub mod suggest;
pub mod template;
pub mod text;

pub use analyzer::analyze_title;
pub use audit::{audit_record, guess_keyword};
pub use chooser::{Chooser, FixedChooser, RandomChooser};
pub use config::{EngineConfig, GeneratorConfig, LengthBands, Rubric, WordListConfig};
pub use engine::SeoEngine;
pub use error::{EngineError, EngineResult, WordListError};
pub use metadata::{current_year, generate_description, generate_tags};
pub use power_words::{fetch_power_words, PowerWordCache, PowerWords};
pub use suggest::SuggestionGenerator;
pub use template::{Ingredients, TitleTemplate};
pub use text::{clean_title_text, extract_trending_word, smart_truncate, title_case};
