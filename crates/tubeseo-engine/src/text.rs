//! Text helpers shared by the generator and the metadata builder.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::warn;

const ELLIPSIS: &str = "...";

/// Characters trimmed from the ends of an extracted core.
const SEPARATORS: &[char] = &[':', '-', '|', ',', '–', '—'];

static BRACKETED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]|\([^)]*\)").expect("valid bracket pattern"));

static EMPTY_BRACKETS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*\)|\[\s*\]").expect("valid empty bracket pattern"));

/// Extract the core of a title: what is left after removing the keyword,
/// bracketed segments and dangling separators. May return an empty string.
pub fn clean_title_text(title: &str, keyword: &str) -> String {
    let keyword = keyword.trim();
    let mut text = title.to_string();

    if !keyword.is_empty() {
        match RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => text = pattern.replace_all(&text, " ").into_owned(),
            Err(e) => warn!("Keyword pattern rejected, keeping title intact: {}", e),
        }
    }

    let text = BRACKETED.replace_all(&text, " ");
    let text = collapse_whitespace(&text);
    text.trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .to_string()
}

/// Cut `text` to at most `limit` characters without splitting a word.
///
/// Text that already fits is returned unchanged. Otherwise the text is cut to
/// `limit - 3` characters, backed off to the last whitespace boundary and
/// suffixed with `...`. When no boundary exists, or `limit <= 3`, the result
/// is empty.
pub fn smart_truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    if limit <= ELLIPSIS.len() {
        return String::new();
    }

    let keep = limit - ELLIPSIS.len();
    let byte_end = text
        .char_indices()
        .nth(keep)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..byte_end];

    let at_boundary = text[byte_end..]
        .chars()
        .next()
        .is_some_and(char::is_whitespace);

    let cut = if at_boundary {
        head
    } else {
        match head.rfind(char::is_whitespace) {
            Some(i) => &head[..i],
            None => "",
        }
    };

    let cut = cut.trim_end();
    if cut.is_empty() {
        String::new()
    } else {
        format!("{cut}{ELLIPSIS}")
    }
}

/// Capitalize the first letter of every word and lowercase the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_is_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean up a rendered template whose optional segments came out empty.
pub(crate) fn tidy_rendered(text: &str) -> String {
    let text = EMPTY_BRACKETS.replace_all(text, " ");
    let text = collapse_whitespace(&text);
    let text = text.replace(" :", ":");
    text.trim_matches(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .to_string()
}

/// Pick a power word hint out of a competitor title: the first token longer
/// than three characters written entirely in capitals.
pub fn extract_trending_word(title: &str) -> Option<String> {
    title
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .find(|token| {
            token.chars().count() > 3
                && token.chars().any(char::is_alphabetic)
                && !token.chars().any(char::is_lowercase)
        })
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_removes_keyword_and_brackets() {
        let core = clean_title_text("Relaxing Jazz: Smooth Night Music [Live] (2024)", "relaxing jazz");
        assert_eq!(core, "Smooth Night Music");
    }

    #[test]
    fn test_clean_is_case_insensitive_and_collapses() {
        let core = clean_title_text("Best   LOFI beats  to   study", "lofi");
        assert_eq!(core, "Best beats to study");
    }

    #[test]
    fn test_clean_strips_leading_separators() {
        assert_eq!(clean_title_text("Jazz | Coffee Shop Ambience", "jazz"), "Coffee Shop Ambience");
        assert_eq!(clean_title_text("Jazz - Rainy Day", "jazz"), "Rainy Day");
    }

    #[test]
    fn test_clean_title_equal_to_keyword_is_empty() {
        assert_eq!(clean_title_text("Relaxing Jazz", "relaxing jazz"), "");
        assert_eq!(clean_title_text("", "anything"), "");
    }

    #[test]
    fn test_clean_with_empty_keyword_keeps_text() {
        assert_eq!(clean_title_text("Morning Piano (Full Album)", ""), "Morning Piano");
    }

    #[test]
    fn test_clean_keyword_with_regex_metacharacters() {
        assert_eq!(clean_title_text("C++ (2024) Crash Course", "c++"), "Crash Course");
    }

    #[test]
    fn test_truncate_fits_unchanged() {
        assert_eq!(smart_truncate("short text", 10), "short text");
        assert_eq!(smart_truncate("", 0), "");
    }

    #[test]
    fn test_truncate_cuts_at_word_boundary() {
        // keep = 9 chars: "the quick", next char is a space
        assert_eq!(smart_truncate("the quick brown fox", 12), "the quick...");
        // keep = 8 chars: "the quic" backs off to "the"
        assert_eq!(smart_truncate("the quick brown fox", 11), "the...");
    }

    #[test]
    fn test_truncate_single_long_word_is_empty() {
        assert_eq!(smart_truncate("supercalifragilistic", 10), "");
    }

    #[test]
    fn test_truncate_tiny_limits() {
        for limit in 0..=3 {
            assert_eq!(smart_truncate("two words", limit), "");
        }
    }

    #[test]
    fn test_truncate_never_exceeds_limit_or_splits_words() {
        let text = "Smooth jazz for a rainy evening with café vibes and soft piano 🎹 melodies";
        let words: Vec<&str> = text.split_whitespace().collect();
        for limit in 0..=text.chars().count() + 2 {
            let out = smart_truncate(text, limit);
            assert!(out.chars().count() <= limit, "limit {limit} gave {out:?}");
            if out == text || out.is_empty() {
                continue;
            }
            let body = out.strip_suffix("...").expect("truncated output ends with ellipsis");
            let kept: Vec<&str> = body.split_whitespace().collect();
            assert_eq!(kept, words[..kept.len()], "limit {limit} split a word");
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("relaxing jazz"), "Relaxing Jazz");
        assert_eq!(title_case("LOFI hip-hop"), "Lofi Hip-Hop");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_tidy_rendered_drops_empty_segments() {
        assert_eq!(tidy_rendered(":  (BEST 2026) 🔥"), "(BEST 2026) 🔥");
        assert_eq!(tidy_rendered("Jazz:  () 🔥"), "Jazz: 🔥");
        assert_eq!(tidy_rendered("🔥  BEST : core [2026]"), "🔥 BEST: core [2026]");
    }

    #[test]
    fn test_extract_trending_word() {
        assert_eq!(
            extract_trending_word("the ULTIMATE jazz mix 2024"),
            Some("ULTIMATE".to_string())
        );
        assert_eq!(extract_trending_word("NEW (EPIC) Mix"), Some("EPIC".to_string()));
        assert_eq!(extract_trending_word("LOL beats"), None);
        assert_eq!(extract_trending_word("2024 jazz 1000"), None);
        assert_eq!(extract_trending_word(""), None);
    }
}
