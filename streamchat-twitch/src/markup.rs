//! Emote markup rewriting
//!
//! Twitch reports emote occurrences as code-point ranges in the message
//! tags of each chat line. [`rewrite_emotes`] turns those ranges into a
//! map from the literal emote text to an HTML `img` fragment referencing
//! the emote CDN, which a rendering layer substitutes into the message.
//!
//! Offsets are logical code-point positions, not byte offsets: a message
//! starting with an emoji still indexes the emote exactly where the tag
//! says it is.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Base URL for Twitch emote images
pub const EMOTE_CDN_BASE: &str = "https://static-cdn.jtvnw.net/emoticons/v1";

/// An inclusive start/end pair of code-point positions within a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmoteRange {
    pub start: usize,
    pub end: usize,
}

impl EmoteRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Emote id -> occurrence ranges, in insertion order.
///
/// Iteration order is load-bearing: when two ranges claim the same start
/// offset, the range inserted later wins during rewriting.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmotePositions(IndexMap<String, Vec<EmoteRange>>);

impl EmotePositions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one occurrence range for an emote id
    pub fn insert(&mut self, id: impl Into<String>, range: EmoteRange) {
        self.0.entry(id.into()).or_default().push(range);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<EmoteRange>)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Parse the raw IRC `emotes=` tag form, e.g.
    /// `"25:0-4,12-16/1902:6-10"`. Malformed fragments are skipped.
    pub fn parse_tag(tag: &str) -> Self {
        let mut positions = Self::new();
        for group in tag.split('/').filter(|g| !g.is_empty()) {
            let Some((id, ranges)) = group.split_once(':') else {
                continue;
            };
            for fragment in ranges.split(',') {
                let Some((start, end)) = fragment.split_once('-') else {
                    continue;
                };
                let (Ok(start), Ok(end)) = (start.parse(), end.parse()) else {
                    continue;
                };
                positions.insert(id, EmoteRange::new(start, end));
            }
        }
        positions
    }
}

impl FromIterator<(String, Vec<EmoteRange>)> for EmotePositions {
    fn from_iter<I: IntoIterator<Item = (String, Vec<EmoteRange>)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Rewrite emote occurrences in `message` into renderable markup.
///
/// Returns a map from the literal emote text, as it appears in the
/// message, to an `img` fragment carrying the emote's CDN URL and a
/// `title` attribute equal to that literal text.
///
/// Ranges are taken on trust: offsets past the end of the message are
/// clamped (or skipped entirely when the start is out of bounds), and an
/// inverted range yields an empty slice. Malformed input produces wrong
/// output, never a panic.
pub fn rewrite_emotes(message: &str, positions: &EmotePositions) -> HashMap<String, String> {
    // start offset -> (emote id, inclusive end offset); a later range
    // claiming an already-indexed start overwrites the earlier entry
    let mut starts: HashMap<usize, (&str, usize)> = HashMap::new();
    for (id, ranges) in positions.iter() {
        for range in ranges {
            starts.insert(range.start, (id.as_str(), range.end));
        }
    }
    if starts.is_empty() {
        return HashMap::new();
    }

    // logical code-point index -> byte offset, with a trailing entry for
    // one past the end of the message
    let mut byte_offsets: Vec<usize> = message.char_indices().map(|(offset, _)| offset).collect();
    byte_offsets.push(message.len());
    let char_count = byte_offsets.len() - 1;

    let mut markup = HashMap::new();
    for position in 0..char_count {
        let Some(&(id, end)) = starts.get(&position) else {
            continue;
        };
        let start_byte = byte_offsets[position];
        let end_byte = byte_offsets[end.saturating_add(1).min(char_count)].max(start_byte);
        let name = &message[start_byte..end_byte];
        markup.insert(
            name.to_string(),
            format!(
                "<img src=\"{}/{}/3.0\" class=\"emote\" title=\"{}\">",
                EMOTE_CDN_BASE, id, name
            ),
        );
    }
    markup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions_of(entries: &[(&str, &[(usize, usize)])]) -> EmotePositions {
        let mut positions = EmotePositions::new();
        for (id, ranges) in entries {
            for &(start, end) in *ranges {
                positions.insert(*id, EmoteRange::new(start, end));
            }
        }
        positions
    }

    #[test]
    fn test_empty_positions_yield_empty_map() {
        assert!(rewrite_emotes("Hello Kappa world", &EmotePositions::new()).is_empty());
        assert!(rewrite_emotes("", &EmotePositions::new()).is_empty());
    }

    #[test]
    fn test_single_emote() {
        let positions = positions_of(&[("25", &[(6, 10)])]);
        let markup = rewrite_emotes("Hello Kappa world", &positions);

        assert_eq!(markup.len(), 1);
        let fragment = &markup["Kappa"];
        assert!(fragment.contains("emoticons/v1/25/3.0"));
        assert!(fragment.contains("title=\"Kappa\""));
        assert!(fragment.contains("class=\"emote\""));
    }

    #[test]
    fn test_offsets_are_code_points_not_bytes() {
        // The emoji occupies four bytes but one logical position, so the
        // extracted text must match the ASCII-only case exactly.
        let positions = positions_of(&[("25", &[(2, 6)])]);
        let markup = rewrite_emotes("\u{1F600} Kappa", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup["Kappa"].contains("title=\"Kappa\""));
    }

    #[test]
    fn test_two_emotes_in_one_message() {
        let positions = positions_of(&[("25", &[(0, 4)]), ("88", &[(12, 19)])]);
        let markup = rewrite_emotes("Kappa hello PogChamp", &positions);

        assert_eq!(markup.len(), 2);
        assert!(markup["Kappa"].contains("emoticons/v1/25/3.0"));
        assert!(markup["PogChamp"].contains("emoticons/v1/88/3.0"));
    }

    #[test]
    fn test_repeated_occurrences_collapse_to_one_key() {
        let positions = positions_of(&[("25", &[(0, 4), (6, 10)])]);
        let markup = rewrite_emotes("Kappa Kappa", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup.contains_key("Kappa"));
    }

    #[test]
    fn test_rewrite_is_pure() {
        let positions = positions_of(&[("25", &[(6, 10)])]);
        let first = rewrite_emotes("Hello Kappa world", &positions);
        let second = rewrite_emotes("Hello Kappa world", &positions);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_single_character_range() {
        let positions = positions_of(&[("499", &[(5, 5)])]);
        let markup = rewrite_emotes("hello!", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup["!"].contains("emoticons/v1/499/3.0"));
        assert!(markup["!"].contains("title=\"!\""));
    }

    #[test]
    fn test_duplicate_start_last_write_wins() {
        let positions = positions_of(&[("1", &[(0, 4)]), ("2", &[(0, 4)])]);
        let markup = rewrite_emotes("Kappa", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup["Kappa"].contains("emoticons/v1/2/3.0"));
    }

    #[test]
    fn test_end_past_message_is_clamped() {
        let positions = positions_of(&[("25", &[(6, 400)])]);
        let markup = rewrite_emotes("Hello Kappa", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup.contains_key("Kappa"));
    }

    #[test]
    fn test_start_past_message_contributes_nothing() {
        let positions = positions_of(&[("25", &[(50, 55)])]);
        assert!(rewrite_emotes("short", &positions).is_empty());
    }

    #[test]
    fn test_inverted_range_yields_empty_slice() {
        // Garbage in, garbage out: the slice is empty but nothing panics.
        let positions = positions_of(&[("25", &[(3, 1)])]);
        let markup = rewrite_emotes("abcdef", &positions);

        assert_eq!(markup.len(), 1);
        assert!(markup.contains_key(""));
    }

    #[test]
    fn test_parse_tag() {
        let positions = EmotePositions::parse_tag("25:0-4,12-16/1902:6-10");

        let entries: Vec<_> = positions.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, "25");
        assert_eq!(
            entries[0].1,
            &vec![EmoteRange::new(0, 4), EmoteRange::new(12, 16)]
        );
        assert_eq!(entries[1].0, "1902");
        assert_eq!(entries[1].1, &vec![EmoteRange::new(6, 10)]);
    }

    #[test]
    fn test_parse_tag_skips_malformed_fragments() {
        let positions = EmotePositions::parse_tag("25:0-4,nonsense/bare/1902:x-9,6-10");

        let entries: Vec<_> = positions.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].1, &vec![EmoteRange::new(0, 4)]);
        assert_eq!(entries[1].1, &vec![EmoteRange::new(6, 10)]);
    }

    #[test]
    fn test_parse_tag_empty() {
        assert!(EmotePositions::parse_tag("").is_empty());
    }

    #[test]
    fn test_parsed_tag_feeds_rewrite() {
        let positions = EmotePositions::parse_tag("25:6-10");
        let markup = rewrite_emotes("Hello Kappa world", &positions);
        assert!(markup["Kappa"].contains("emoticons/v1/25/3.0"));
    }
}
