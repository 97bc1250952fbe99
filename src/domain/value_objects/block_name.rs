//! Block name value object
//!
//! Derives the slug, display title and PascalCase identifier used when
//! scaffolding a block from the name the user typed.

use std::fmt;

/// A user-supplied block name with a non-empty slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockName {
    raw: String,
    slug: String,
}

impl BlockName {
    /// Returns `None` when the name has no characters usable in a slug.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        let slug = slugify(&raw);
        if slug.is_empty() {
            return None;
        }
        Some(Self { raw, slug })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// `My Block` -> `my-block`
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// `my block` -> `My Block`
    pub fn default_title(&self) -> String {
        title_case(&self.raw)
    }

    /// `my-block` -> `MyBlock`
    pub fn pascal_case(&self) -> String {
        self.slug
            .split('-')
            .filter(|part| !part.is_empty())
            .map(capitalize)
            .collect()
    }
}

impl fmt::Display for BlockName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.slug)
    }
}

/// Lowercase, separators collapsed to single `-`, other punctuation dropped.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for c in input.chars() {
        if c.is_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.extend(c.to_lowercase());
        } else if c.is_whitespace() || c == '-' || c == '_' {
            pending_dash = true;
        }
    }

    slug
}

/// Capitalize the first letter of every whitespace-separated word.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_from_spaced_name() {
        let name = BlockName::new("My Block").unwrap();
        assert_eq!(name.slug(), "my-block");
        assert_eq!(name.default_title(), "My Block");
        assert_eq!(name.pascal_case(), "MyBlock");
    }

    #[test]
    fn slug_collapses_separators_and_drops_punctuation() {
        assert_eq!(slugify("  Hero -- Banner!  "), "hero-banner");
        assert_eq!(slugify("call_to_action"), "call-to-action");
        assert_eq!(slugify("Team's Grid (v2)"), "teams-grid-v2");
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("my block"), "My Block");
        assert_eq!(title_case("hero  banner"), "Hero Banner");
        assert_eq!(title_case("FAQ list"), "FAQ List");
    }

    #[test]
    fn name_without_slug_characters_is_rejected() {
        assert!(BlockName::new("???").is_none());
        assert!(BlockName::new("   ").is_none());
    }
}
