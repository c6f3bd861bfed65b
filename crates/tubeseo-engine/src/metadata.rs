//! Tag and description generation.

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;

use crate::lexicon::is_stop_word;
use crate::text::title_case;

static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("valid punctuation pattern"));

/// Number of tags listed under "Related Keywords" in the description.
const DESCRIPTION_TAGS: usize = 8;

pub fn current_year() -> i32 {
    Utc::now().year()
}

/// Derive upload tags from a title.
///
/// The lowercase keyword comes first and `"{keyword} {year}"` last; the
/// composite keeps its slot even when the title yields more words than `cap`.
pub fn generate_tags(title: &str, keyword: &str, year: i32, cap: usize) -> Vec<String> {
    let keyword = keyword.trim().to_lowercase();
    let mut seen = HashSet::new();
    let mut tags = Vec::new();

    let word_cap = if keyword.is_empty() {
        cap
    } else {
        cap.saturating_sub(1)
    };

    if !keyword.is_empty() && word_cap > 0 {
        seen.insert(keyword.clone());
        tags.push(keyword.clone());
    }

    let cleaned = NON_WORD.replace_all(&title.to_lowercase(), "").into_owned();
    for word in cleaned.split_whitespace() {
        if tags.len() >= word_cap {
            break;
        }
        if word.chars().count() > 2 && !is_stop_word(word) && seen.insert(word.to_string()) {
            tags.push(word.to_string());
        }
    }

    if !keyword.is_empty() && cap > 0 {
        let composite = format!("{keyword} {year}");
        if seen.insert(composite.clone()) {
            tags.push(composite);
        }
    }

    tags
}

/// Render the description template for an upload.
pub fn generate_description(title: &str, keyword: &str, tags: &[String], year: i32) -> String {
    let keyword = keyword.trim();
    let subject = if keyword.is_empty() { title.trim() } else { keyword };
    let related = tags
        .iter()
        .take(DESCRIPTION_TAGS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let mut hashtags = Vec::new();
    let keyword_tag = hashtag(keyword);
    if !keyword_tag.is_empty() {
        hashtags.push(format!("#{keyword_tag}"));
    }
    hashtags.push("#Video".to_string());
    let extra = tags.get(1).map(|t| hashtag(t)).filter(|t| !t.is_empty());
    hashtags.push(format!("#{}", extra.as_deref().unwrap_or("Viral")));

    format!(
        "🔴 **{title}**\n\n\
         In this video, we explore **{subject}**. This is the ultimate guide/collection for {year}.\n\n\
         👇 **Timestamps:**\n\
         0:00 Intro\n\
         0:30 {highlight} Highlights\n\
         5:00 Conclusion\n\n\
         🔔 **Don't forget to SUBSCRIBE for more content like this!**\n\n\
         🔎 **Related Keywords:**\n\
         {related}\n\n\
         #Hashtags:\n\
         {hashtags}",
        title = title.trim(),
        highlight = title_case(subject),
        hashtags = hashtags.join(" "),
    )
}

fn hashtag(text: &str) -> String {
    text.chars().filter(|c| c.is_alphanumeric()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_keyword_first_and_composite_last() {
        let tags = generate_tags("Best Relaxing Jazz Music 2024 🎵", "Relaxing Jazz", 2026, 15);
        assert_eq!(
            tags,
            vec![
                "relaxing jazz",
                "best",
                "relaxing",
                "jazz",
                "music",
                "2024",
                "relaxing jazz 2026",
            ]
        );
    }

    #[test]
    fn test_tags_skip_stop_words_short_words_and_duplicates() {
        let tags = generate_tags("How to play the piano: piano tips for an hour", "piano", 2026, 15);
        assert_eq!(tags, vec!["piano", "play", "tips", "hour", "piano 2026"]);
    }

    #[test]
    fn test_tags_respect_cap_and_keep_composite() {
        let title = (1..=30).map(|i| format!("word{i}")).collect::<Vec<_>>().join(" ");
        let tags = generate_tags(&title, "music", 2026, 15);
        assert_eq!(tags.len(), 15);
        assert_eq!(tags[0], "music");
        assert_eq!(tags[14], "music 2026");

        let tags = generate_tags("Relaxing jazz music", "jazz", 2026, 2);
        assert_eq!(tags, vec!["jazz", "jazz 2026"]);
    }

    #[test]
    fn test_tags_are_unique_and_lowercase() {
        let tags = generate_tags("LOFI Lofi lofi BEATS beats", "Lofi", 2026, 15);
        let unique: HashSet<&String> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
        assert!(tags.iter().all(|t| *t == t.to_lowercase()));
        assert!(tags.contains(&"lofi".to_string()));
    }

    #[test]
    fn test_tags_without_keyword() {
        let tags = generate_tags("Morning coffee playlist", "", 2026, 15);
        assert_eq!(tags, vec!["morning", "coffee", "playlist"]);
    }

    #[test]
    fn test_description_template() {
        let tags = vec!["relaxing jazz".to_string(), "best".to_string()];
        let desc = generate_description("Best Relaxing Jazz", "relaxing jazz", &tags, 2026);
        assert!(desc.starts_with("🔴 **Best Relaxing Jazz**\n\n"));
        assert!(desc.contains("we explore **relaxing jazz**"));
        assert!(desc.contains("guide/collection for 2026."));
        assert!(desc.contains("0:30 Relaxing Jazz Highlights\n"));
        assert!(desc.contains("🔎 **Related Keywords:**\nrelaxing jazz, best\n"));
        assert!(desc.ends_with("#Hashtags:\n#relaxingjazz #Video #best"));
    }

    #[test]
    fn test_description_defaults() {
        let desc = generate_description("Rain sounds", "", &[], 2026);
        assert!(desc.contains("we explore **Rain sounds**"));
        assert!(desc.ends_with("#Hashtags:\n#Video #Viral"));
    }
}
