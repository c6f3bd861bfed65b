//! Static word and symbol sets.

/// Power words used when the remote list is unavailable.
pub const FALLBACK_POWER_WORDS: &[&str] = &[
    "secret", "best", "exposed", "tutorial", "guide", "review", "tips", "hacks", "fast", "easy",
];

/// Emojis counted as a visual hook and used in suggestions.
pub const VIRAL_EMOJIS: &[&str] = &[
    "🔥", "😱", "🔴", "✅", "❌", "🎵", "⚠️", "⚡", "🚀", "💰", "💯", "🤯", "😭", "😡", "😴", "🌙",
    "✨", "💤", "🌧️", "🎹",
];

/// Words skipped when deriving tags and guessing keywords (English and Indonesian).
pub const STOP_WORDS: &[&str] = &[
    "the", "and", "or", "for", "to", "in", "on", "at", "by", "with", "a", "an", "is", "it", "of",
    "that", "this", "from", "how", "what", "why", "video", "dan", "di", "ke", "dari", "yang",
    "ini", "itu",
];

/// Numbers used by list-style suggestion templates.
pub const HOOK_NUMBERS: &[&str] = &["3", "5", "7", "10"];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

pub fn contains_viral_emoji(text: &str) -> bool {
    VIRAL_EMOJIS.iter().any(|emoji| text.contains(emoji))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_words_are_lowercase() {
        assert!(!FALLBACK_POWER_WORDS.is_empty());
        for word in FALLBACK_POWER_WORDS {
            assert_eq!(*word, word.to_lowercase());
        }
    }

    #[test]
    fn test_contains_viral_emoji() {
        assert!(contains_viral_emoji("Rainy night 🌧️ piano"));
        assert!(contains_viral_emoji("🔥"));
        assert!(!contains_viral_emoji("plain title"));
    }
}
