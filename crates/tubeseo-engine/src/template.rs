//! Suggestion templates.
//!
//! A template is a pattern such as `{keyword}: {core} ({power} {year}) {emoji}`.
//! Everything except `{core}` is fixed for a given suggestion, so the budget
//! left for the core can be computed per template before rendering.

use crate::config::TemplateSpec;
use crate::error::{EngineError, EngineResult};

/// A parsed piece of a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Keyword,
    Core,
    Power,
    Year,
    Emoji,
    Number,
}

impl Segment {
    fn from_placeholder(name: &str) -> Option<Self> {
        match name {
            "keyword" => Some(Segment::Keyword),
            "core" => Some(Segment::Core),
            "power" => Some(Segment::Power),
            "year" => Some(Segment::Year),
            "emoji" => Some(Segment::Emoji),
            "number" => Some(Segment::Number),
            _ => None,
        }
    }
}

/// Values substituted into every placeholder except `{core}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ingredients {
    /// Keyword as displayed (title case)
    pub keyword: String,
    /// Power word as displayed (uppercase)
    pub power: String,
    pub year: String,
    pub emoji: String,
    pub number: String,
}

impl Ingredients {
    fn value<'a>(&'a self, segment: &'a Segment) -> &'a str {
        match segment {
            Segment::Literal(text) => text,
            Segment::Keyword => &self.keyword,
            Segment::Power => &self.power,
            Segment::Year => &self.year,
            Segment::Emoji => &self.emoji,
            Segment::Number => &self.number,
            Segment::Core => "",
        }
    }
}

/// A named, parsed title template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleTemplate {
    name: String,
    segments: Vec<Segment>,
}

impl TitleTemplate {
    /// Parse a pattern. Exactly one `{core}` placeholder is required.
    pub fn parse(name: impl Into<String>, pattern: &str) -> EngineResult<Self> {
        let name = name.into();
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            match c {
                '{' => {
                    let mut placeholder = String::new();
                    let mut closed = false;
                    for p in chars.by_ref() {
                        if p == '}' {
                            closed = true;
                            break;
                        }
                        placeholder.push(p);
                    }
                    if !closed {
                        return Err(EngineError::template(&name, "unclosed '{'"));
                    }
                    let segment = Segment::from_placeholder(placeholder.trim()).ok_or_else(|| {
                        EngineError::template(&name, format!("unknown placeholder {{{placeholder}}}"))
                    })?;
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(segment);
                }
                '}' => return Err(EngineError::template(&name, "unmatched '}'")),
                _ => literal.push(c),
            }
        }
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let cores = segments.iter().filter(|s| **s == Segment::Core).count();
        if cores != 1 {
            return Err(EngineError::template(
                &name,
                format!("expected exactly one {{core}} placeholder, found {cores}"),
            ));
        }

        Ok(Self { name, segments })
    }

    pub fn from_spec(spec: &TemplateSpec) -> EngineResult<Self> {
        Self::parse(spec.name.clone(), &spec.pattern)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of `{keyword}` placeholders.
    pub fn keyword_slots(&self) -> usize {
        self.segments.iter().filter(|s| **s == Segment::Keyword).count()
    }

    /// Characters taken by everything except the core.
    pub fn fixed_len(&self, ingredients: &Ingredients) -> usize {
        self.segments
            .iter()
            .map(|s| ingredients.value(s).chars().count())
            .sum()
    }

    /// Substitute the ingredients and the (already truncated) core.
    pub fn render(&self, ingredients: &Ingredients, core: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Core => out.push_str(core),
                other => out.push_str(ingredients.value(other)),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ingredients() -> Ingredients {
        Ingredients {
            keyword: "Relaxing Jazz".to_string(),
            power: "BEST".to_string(),
            year: "2026".to_string(),
            emoji: "🔥".to_string(),
            number: "7".to_string(),
        }
    }

    #[test]
    fn test_parse_and_render() {
        let t = TitleTemplate::parse("colon", "{keyword}: {core} ({power} {year}) {emoji}").unwrap();
        assert_eq!(t.name(), "colon");
        assert_eq!(
            t.render(&ingredients(), "Night Music"),
            "Relaxing Jazz: Night Music (BEST 2026) 🔥"
        );
    }

    #[test]
    fn test_fixed_len_counts_every_literal() {
        let t = TitleTemplate::parse("colon", "{keyword}: {core} ({power} {year}) {emoji}").unwrap();
        // "Relaxing Jazz" 13 + ": " 2 + " (" 2 + "BEST" 4 + " " 1 + "2026" 4 + ") " 2 + "🔥" 1
        assert_eq!(t.fixed_len(&ingredients()), 29);
        let rendered = t.render(&ingredients(), "abc");
        assert_eq!(rendered.chars().count(), 29 + 3);
    }

    #[test]
    fn test_value_borrows_literal_text() {
        let t = TitleTemplate::parse("dash", "{core} - {keyword}").unwrap();
        assert_eq!(t.fixed_len(&ingredients()), " - Relaxing Jazz".chars().count());
        assert_eq!(t.keyword_slots(), 1);
        assert_eq!(TitleTemplate::parse("none", "{core}!").unwrap().keyword_slots(), 0);
    }

    #[test]
    fn test_overhead_differs_per_template() {
        let a = TitleTemplate::parse("a", "{keyword}: {core}").unwrap();
        let b = TitleTemplate::parse("b", "{number} {power} {keyword} Tips ({year}): {core}").unwrap();
        assert!(b.fixed_len(&ingredients()) > a.fixed_len(&ingredients()));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            TitleTemplate::parse("bad", "{keyword: {core}"),
            Err(EngineError::Template { .. })
        ));
        assert!(TitleTemplate::parse("bad", "{core} {views}").is_err());
        assert!(TitleTemplate::parse("bad", "{core} }").is_err());
        assert!(TitleTemplate::parse("bad", "{core} {core}").is_err());
        assert!(TitleTemplate::parse("bad", "{keyword} only").is_err());
        assert!(TitleTemplate::parse("bad", "{core").is_err());
    }

    #[test]
    fn test_default_templates_parse() {
        for (name, pattern) in crate::config::DEFAULT_TEMPLATES {
            assert!(TitleTemplate::parse(*name, pattern).is_ok(), "{name} failed to parse");
        }
    }
}
