//! Rule-based title scoring.
//!
//! Criteria are evaluated in a fixed order (length, keyword, power word,
//! number, brackets, emoji). Each one adds points independently and emits
//! exactly one finding.

use tubeseo_models::{Finding, TitleAnalysis};

use crate::config::Rubric;
use crate::lexicon::contains_viral_emoji;

const BRACKETS: &[char] = &['(', ')', '[', ']'];

/// Score `title` against `rubric`.
///
/// An empty or whitespace-only title yields score 0 and a single error
/// finding instead of the usual one-per-criterion list.
pub fn analyze_title(
    title: &str,
    keyword: &str,
    power_words: &[String],
    rubric: &Rubric,
) -> TitleAnalysis {
    if title.trim().is_empty() {
        return TitleAnalysis {
            score: 0,
            findings: vec![Finding::error("Title Is Empty")],
        };
    }

    let title_lower = title.to_lowercase();
    let checks = [
        check_length(title, rubric),
        check_keyword(&title_lower, keyword, rubric),
        check_power_word(&title_lower, power_words, rubric),
        check_number(title, rubric),
        check_brackets(title, rubric),
        check_emoji(title, rubric),
    ];

    let total: u32 = checks.iter().map(|(points, _)| u32::from(*points)).sum();
    TitleAnalysis {
        score: total.min(100) as u8,
        findings: checks.into_iter().map(|(_, finding)| finding).collect(),
    }
}

fn check_length(title: &str, rubric: &Rubric) -> (u8, Finding) {
    let len = title.chars().count();
    let bands = &rubric.length;

    if (bands.optimal_min..=bands.optimal_max).contains(&len) {
        (
            rubric.length_optimal_points,
            Finding::success(format!("Length Optimal ({len} chars)")),
        )
    } else if len > bands.max {
        (
            0,
            Finding::error(format!("Length Too Long ({len} chars, max {})", bands.max)),
        )
    } else if len >= bands.acceptable_min {
        (
            rubric.length_acceptable_points,
            Finding::warning(format!(
                "Length Acceptable ({len} chars, aim for {}-{})",
                bands.optimal_min, bands.optimal_max
            )),
        )
    } else {
        (0, Finding::warning(format!("Length Too Short ({len} chars)")))
    }
}

fn check_keyword(title_lower: &str, keyword: &str, rubric: &Rubric) -> (u8, Finding) {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return (
            rubric.keyword_full_points(),
            Finding::success("Keyword Check Skipped (no target keyword)"),
        );
    }

    if !title_lower.contains(&keyword) {
        return (0, Finding::error("Keyword Missing"));
    }

    let stripped_title = strip_leading_symbols(title_lower);
    let stripped_keyword = strip_leading_symbols(&keyword);
    if stripped_title.starts_with(stripped_keyword) {
        (
            rubric.keyword_full_points(),
            Finding::success("Keyword at Front"),
        )
    } else {
        (
            rubric.keyword_present_points,
            Finding::warning("Keyword Present (Not Front)"),
        )
    }
}

fn check_power_word(title_lower: &str, power_words: &[String], rubric: &Rubric) -> (u8, Finding) {
    let found = power_words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .find(|w| !w.is_empty() && title_lower.contains(w.as_str()));

    match found {
        Some(word) => (
            rubric.power_word_points,
            Finding::success(format!("Power Word Found ({word})")),
        ),
        None => (0, Finding::warning("No Power Word")),
    }
}

fn check_number(title: &str, rubric: &Rubric) -> (u8, Finding) {
    if title.chars().any(|c| c.is_ascii_digit()) {
        (rubric.number_points, Finding::success("Contains Number"))
    } else {
        (0, Finding::info("Add Number"))
    }
}

fn check_brackets(title: &str, rubric: &Rubric) -> (u8, Finding) {
    if title.contains(BRACKETS) {
        (rubric.bracket_points, Finding::success("Contains Brackets"))
    } else {
        (0, Finding::info("Add Brackets"))
    }
}

fn check_emoji(title: &str, rubric: &Rubric) -> (u8, Finding) {
    if contains_viral_emoji(title) {
        (rubric.emoji_points, Finding::success("Visual Hook (Emoji)"))
    } else {
        (0, Finding::info("Add Emoji"))
    }
}

fn strip_leading_symbols(text: &str) -> &str {
    text.trim_start_matches(|c: char| !c.is_alphanumeric())
}
