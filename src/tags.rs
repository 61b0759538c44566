//! # Tag Classification
//!
//! Furtrack encodes a tag's category in a short numeric prefix on the raw
//! tag string: `"1:blep"` is the character "blep", `"3:ferrah"` credits a
//! photographer, and so on. This module parses those strings into a [`Tag`]
//! carrying its [`TagType`], and offers [`tags_by_type`] to collect the
//! values of a single category out of an API tag list.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

/// Categorizes the type or nature of a [`Tag`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TagType {
    /// Tags identifying a character depicted in the post.
    Character,
    /// Tags crediting the maker of a fursuit.
    Maker,
    /// Tags crediting the photographer.
    Photographer,
    /// Tags naming the event where the photo was taken.
    Event,
    /// Tags identifying a species.
    Species,
    /// Any tag without a recognized type prefix. Never matched explicitly.
    General,
}

impl Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Character => write!(f, "Character"),
            Self::Maker => write!(f, "Maker"),
            Self::Photographer => write!(f, "Photographer"),
            Self::Event => write!(f, "Event"),
            Self::Species => write!(f, "Species"),
            Self::General => write!(f, "General"),
        }
    }
}

/// Ordered prefix table mapping raw-string prefixes to tag types.
///
/// Rules are tried in declaration order and the first textual match wins.
/// The `"6"` rule has no colon separator, so any raw tag starting with the
/// digit 6 classifies as [`TagType::Species`] even if a differently-typed
/// prefix beginning with 6 were ever introduced. That ambiguity comes from
/// the service's own tag convention and is kept as-is for compatibility.
pub const TAG_PREFIXES: &[(&str, TagType)] = &[
    ("1:", TagType::Character),
    ("2:", TagType::Maker),
    ("3:", TagType::Photographer),
    ("5:", TagType::Event),
    ("6", TagType::Species),
];

/// A single Furtrack tag, split into its bare value and its category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    tag: String,
    tag_type: TagType,
}

impl Tag {
    /// Creates a new `Tag` from an already classified value.
    pub fn new(text: &str, tag_type: TagType) -> Self {
        Self {
            tag: text.to_string(),
            tag_type,
        }
    }

    /// Parses a raw tag string into its category and bare value.
    ///
    /// Matching is byte-exact on the prefixes in [`TAG_PREFIXES`], with no
    /// trimming or case folding. Strings matching no rule come back as
    /// [`TagType::General`] with the raw string untouched.
    pub fn parse(raw: &str) -> Self {
        for (prefix, tag_type) in TAG_PREFIXES {
            if let Some(value) = raw.strip_prefix(prefix) {
                return Self {
                    tag: value.to_string(),
                    tag_type: *tag_type,
                };
            }
        }

        Self {
            tag: raw.to_string(),
            tag_type: TagType::General,
        }
    }

    /// Returns a reference to the bare value of the tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the [`TagType`] of the tag.
    pub const fn tag_type(&self) -> TagType {
        self.tag_type
    }
}

/// Collects the bare values of every record in `tags` whose parsed type
/// equals `tag_type`, preserving input order and duplicates.
///
/// `tags` is a list of raw API tag records; each is expected to carry the
/// raw tag string in its `tagName` field. Records without a string
/// `tagName` are skipped.
pub fn tags_by_type(tags: &[Value], tag_type: TagType) -> Vec<String> {
    tags.iter()
        .filter_map(|record| record.get("tagName").and_then(Value::as_str))
        .map(Tag::parse)
        .filter(|tag| tag.tag_type() == tag_type)
        .map(|tag| tag.tag)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_prefix_maps_to_its_type() {
        assert_eq!(Tag::parse("1:Alpha"), Tag::new("Alpha", TagType::Character));
        assert_eq!(Tag::parse("2:StuffedPaws"), Tag::new("StuffedPaws", TagType::Maker));
        assert_eq!(Tag::parse("3:ferrah"), Tag::new("ferrah", TagType::Photographer));
        assert_eq!(Tag::parse("5:mff2023"), Tag::new("mff2023", TagType::Event));
        assert_eq!(Tag::parse("6wolf"), Tag::new("wolf", TagType::Species));
    }

    #[test]
    fn unprefixed_strings_fall_back_to_general() {
        assert_eq!(Tag::parse("random"), Tag::new("random", TagType::General));
        assert_eq!(Tag::parse("4:nothing"), Tag::new("4:nothing", TagType::General));
        assert_eq!(Tag::parse(""), Tag::new("", TagType::General));
    }

    #[test]
    fn species_rule_wins_over_any_longer_numeric_token() {
        // The "6" rule has no colon, so a hypothetical "60:" prefix can never
        // be reached. Pins the declaration order of TAG_PREFIXES.
        assert_eq!(
            Tag::parse("60:something"),
            Tag::new("0:something", TagType::Species)
        );
    }

    #[test]
    fn matching_is_exact_with_no_normalization() {
        assert_eq!(Tag::parse(" 1:Alpha"), Tag::new(" 1:Alpha", TagType::General));
        assert_eq!(Tag::parse("1: Alpha"), Tag::new(" Alpha", TagType::Character));
    }

    #[test]
    fn tags_by_type_filters_and_preserves_order() {
        let records = [
            json!({"tagName": "1:Alpha"}),
            json!({"tagName": "2:Beta"}),
            json!({"tagName": "1:Gamma"}),
            json!({"tagName": "random"}),
        ];

        assert_eq!(
            tags_by_type(&records, TagType::Character),
            vec!["Alpha", "Gamma"]
        );
        assert_eq!(tags_by_type(&records, TagType::General), vec!["random"]);
    }

    #[test]
    fn tags_by_type_returns_empty_when_nothing_matches() {
        let records = [json!({"tagName": "2:Beta"})];

        assert!(tags_by_type(&records, TagType::Event).is_empty());
    }

    #[test]
    fn tags_by_type_keeps_duplicates_and_skips_nameless_records() {
        let records = [
            json!({"tagName": "1:Alpha"}),
            json!({"tagId": 7}),
            json!({"tagName": "1:Alpha"}),
        ];

        assert_eq!(
            tags_by_type(&records, TagType::Character),
            vec!["Alpha", "Alpha"]
        );
    }
}
