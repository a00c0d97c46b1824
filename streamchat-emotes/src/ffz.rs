//! FrankerFaceZ emote client

use crate::types::{FfzGlobalResponse, FfzRoomResponse};
use indexmap::IndexMap;
use reqwest::Client;
use std::time::Duration;
use streamchat_core::{ChatError, ChatResult, EmoteSet, Platform};
use tracing::{debug, instrument};

/// Base URL for the FrankerFaceZ API
const FFZ_API_BASE: &str = "https://api.frankerfacez.com/v1";

/// Id of the global emoticon set within the /set/global response
const FFZ_GLOBAL_SET: &str = "3";

/// FrankerFaceZ API client
#[derive(Debug, Clone)]
pub struct FfzClient {
    client: Client,
    base_url: String,
}

impl FfzClient {
    /// Create a new client. The API requires no authentication.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: FFZ_API_BASE.to_string(),
        }
    }

    /// Fetch the global set plus a room's own set, reshaped into an
    /// [`EmoteSet`] mapping emote name -> image URL (largest scale).
    ///
    /// Rooms unknown to FrankerFaceZ contribute nothing; emotes without
    /// any image URL are skipped.
    #[instrument(skip(self))]
    pub async fn get_emotes(&self, channel: &str) -> ChatResult<EmoteSet> {
        let global_url = format!("{}/set/global", self.base_url);

        debug!("Fetching global FrankerFaceZ emotes");

        let response = self
            .client
            .get(&global_url)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch FFZ emotes: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "FFZ API error ({}): {}",
                status, body
            )));
        }

        let global: FfzGlobalResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse FFZ emotes: {}", e)))?;

        let mut emotes: IndexMap<String, String> = IndexMap::new();
        if let Some(set) = global.sets.get(FFZ_GLOBAL_SET) {
            for emote in &set.emoticons {
                if let Some(url) = emote.image_url() {
                    emotes.insert(emote.name.clone(), url);
                }
            }
        }

        if let Some(room) = self.fetch_room(channel).await? {
            let set_id = room.room.map(|r| r.set.to_string());
            if let Some(set) = set_id.as_deref().and_then(|id| room.sets.get(id)) {
                for emote in &set.emoticons {
                    if let Some(url) = emote.image_url() {
                        emotes.insert(emote.name.clone(), url);
                    }
                }
            }
        }

        debug!("Built FrankerFaceZ set with {} emotes", emotes.len());
        EmoteSet::new(Platform::FrankerFaceZ, emotes)
    }

    /// A non-success status means the room is not registered, which is
    /// not an error for set construction
    async fn fetch_room(&self, channel: &str) -> ChatResult<Option<FfzRoomResponse>> {
        let url = format!("{}/room/{}", self.base_url, urlencoding::encode(channel));

        debug!("Fetching FrankerFaceZ room: {}", channel);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch FFZ room: {}", e)))?;

        if !response.status().is_success() {
            debug!(
                "No FrankerFaceZ room for {} (status {})",
                channel,
                response.status()
            );
            return Ok(None);
        }

        let room: FfzRoomResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse FFZ room: {}", e)))?;

        Ok(Some(room))
    }
}

impl Default for FfzClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FfzRoom, FfzSet};
    use std::collections::HashMap;

    fn set_named(names: &[&str]) -> FfzSet {
        let emoticons = names
            .iter()
            .map(|name| {
                serde_json::from_value(serde_json::json!({
                    "name": name,
                    "urls": {"1": format!("//cdn/{}/1", name), "4": format!("//cdn/{}/4", name)}
                }))
                .unwrap()
            })
            .collect();
        FfzSet { emoticons }
    }

    #[test]
    fn test_room_set_selection() {
        // Mirrors the set-picking logic in get_emotes: the room names its
        // own set id, which keys the sets map.
        let mut sets = HashMap::new();
        sets.insert("609".to_string(), set_named(&["CohhM"]));

        let room = FfzRoomResponse {
            room: Some(FfzRoom { set: 609 }),
            sets,
        };

        let set_id = room.room.as_ref().map(|r| r.set.to_string());
        let picked = set_id.as_deref().and_then(|id| room.sets.get(id));
        assert_eq!(picked.unwrap().emoticons[0].name, "CohhM");
    }

    #[test]
    fn test_room_without_set_contributes_nothing() {
        let room = FfzRoomResponse {
            room: None,
            sets: HashMap::new(),
        };
        let set_id = room.room.as_ref().map(|r| r.set.to_string());
        assert!(set_id.as_deref().and_then(|id| room.sets.get(id)).is_none());
    }
}
