//! Emote provider response types

use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

/// A BetterTTV emote
#[derive(Debug, Clone, Deserialize)]
pub struct BttvEmote {
    /// Emote code as typed in chat
    pub code: String,

    /// Emote id, used to build CDN URLs
    pub id: String,
}

/// Response from GET /2/emotes
#[derive(Debug, Clone, Deserialize)]
pub struct BttvGlobalResponse {
    pub emotes: Vec<BttvEmote>,
}

/// Response from GET /2/channels/{channel}
#[derive(Debug, Clone, Deserialize)]
pub struct BttvChannelResponse {
    /// Absent when the channel is not registered with BetterTTV
    #[serde(default)]
    pub emotes: Option<Vec<BttvEmote>>,
}

/// A FrankerFaceZ emote
#[derive(Debug, Clone, Deserialize)]
pub struct FfzEmote {
    /// Emote name as typed in chat
    pub name: String,

    /// Scale factor -> protocol-relative image URL
    #[serde(default)]
    pub urls: BTreeMap<String, String>,
}

impl FfzEmote {
    /// Full `https:` URL of the largest available image, when any.
    /// Scale keys are numeric strings, so the comparison is numeric.
    pub fn image_url(&self) -> Option<String> {
        self.urls
            .iter()
            .max_by_key(|(scale, _)| scale.parse::<u32>().unwrap_or(0))
            .map(|(_, url)| format!("https:{}", url))
    }
}

/// One FrankerFaceZ emoticon set
#[derive(Debug, Clone, Deserialize)]
pub struct FfzSet {
    #[serde(default)]
    pub emoticons: Vec<FfzEmote>,
}

/// Response from GET /v1/set/global
#[derive(Debug, Clone, Deserialize)]
pub struct FfzGlobalResponse {
    pub sets: HashMap<String, FfzSet>,
}

/// Response from GET /v1/room/{channel}
#[derive(Debug, Clone, Deserialize)]
pub struct FfzRoomResponse {
    #[serde(default)]
    pub room: Option<FfzRoom>,

    #[serde(default)]
    pub sets: HashMap<String, FfzSet>,
}

/// Room metadata naming the channel's own emoticon set
#[derive(Debug, Clone, Deserialize)]
pub struct FfzRoom {
    pub set: u64,
}
