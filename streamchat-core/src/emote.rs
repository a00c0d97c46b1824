//! Emote set types
//!
//! An [`EmoteSet`] is the reshaped output of an emote-provider fetch: an
//! insertion-ordered map from emote name to an asset reference, plus a
//! compiled pattern that matches any of the names when they stand alone
//! between whitespace or message edges.

use indexmap::IndexMap;
use regex::Regex;

use crate::error::{ChatError, ChatResult};
use crate::platform::Platform;

/// Emotes fetched from a third-party provider
#[derive(Debug, Clone)]
pub struct EmoteSet {
    /// Which provider the set came from
    pub platform: Platform,

    /// Emote name -> asset reference, in provider order. BetterTTV sets
    /// carry the emote id; FrankerFaceZ sets carry a full image URL.
    pub emotes: IndexMap<String, String>,

    /// Matches any emote name in the set, name in capture group 1
    pub pattern: Regex,
}

impl EmoteSet {
    /// Build a set from an ordered name -> asset map, compiling the
    /// name-matching pattern from the map's keys
    pub fn new(platform: Platform, emotes: IndexMap<String, String>) -> ChatResult<Self> {
        let pattern = build_name_pattern(emotes.keys().map(String::as_str))?;
        Ok(Self {
            platform,
            emotes,
            pattern,
        })
    }

    /// Number of emotes in the set
    pub fn len(&self) -> usize {
        self.emotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emotes.is_empty()
    }

    /// Emote names found standing alone in `message`, in match order
    pub fn find_names<'m>(&self, message: &'m str) -> Vec<&'m str> {
        self.pattern
            .captures_iter(message)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect()
    }
}

/// Compile a pattern matching any of `names` delimited by whitespace or
/// message edges. Names are escaped, so codes like `":("` match
/// literally. An empty name list yields a pattern that matches nothing.
pub fn build_name_pattern<'a>(names: impl Iterator<Item = &'a str>) -> ChatResult<Regex> {
    let alternation = names.map(regex::escape).collect::<Vec<_>>().join("|");

    // The upstream services used lookaround delimiters; the regex crate
    // has no lookaround, so the delimiters are consumed instead and the
    // name itself is exposed through capture group 1.
    let source = if alternation.is_empty() {
        r"[^\s\S]".to_string()
    } else {
        format!(r"(?:^|\s)({})(?:$|\s)", alternation)
    };

    Regex::new(&source).map_err(|e| ChatError::internal(format!("invalid emote pattern: {}", e)))
}
