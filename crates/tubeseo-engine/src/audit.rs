//! Channel audit helpers.

use tubeseo_models::{AuditEntry, UploadRecord};

use crate::analyzer::analyze_title;
use crate::config::Rubric;
use crate::lexicon::is_stop_word;
use crate::suggest::SuggestionGenerator;

/// Keyword used for uploads whose title has no usable token.
const DEFAULT_KEYWORD: &str = "Video";

/// Guess the target keyword of an existing upload: its first significant token.
pub fn guess_keyword(title: &str) -> String {
    title
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|token| !token.is_empty() && !is_stop_word(&token.to_lowercase()))
        .unwrap_or(DEFAULT_KEYWORD)
        .to_string()
}

/// Score one upload and attach suggestions when it scores below `threshold`.
pub fn audit_record(
    record: UploadRecord,
    power_words: &[String],
    rubric: &Rubric,
    generator: &SuggestionGenerator,
    threshold: u8,
) -> AuditEntry {
    let guessed_keyword = guess_keyword(&record.title);
    let analysis = analyze_title(&record.title, &guessed_keyword, power_words, rubric);
    let suggestions = if analysis.score < threshold {
        generator.generate_default(&record.title, &guessed_keyword, power_words, None)
    } else {
        Vec::new()
    };

    AuditEntry {
        record,
        guessed_keyword,
        analysis,
        suggestions,
    }
}
