//! BetterTTV emote client

use crate::types::{BttvChannelResponse, BttvEmote, BttvGlobalResponse};
use indexmap::IndexMap;
use reqwest::Client;
use std::time::Duration;
use streamchat_core::{ChatError, ChatResult, EmoteSet, Platform};
use tracing::{debug, instrument};

/// Base URL for the BetterTTV API
const BTTV_API_BASE: &str = "https://api.betterttv.net/2";

/// BetterTTV API client
#[derive(Debug, Clone)]
pub struct BttvClient {
    client: Client,
    base_url: String,
}

impl BttvClient {
    /// Create a new client. The API requires no authentication.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: BTTV_API_BASE.to_string(),
        }
    }

    /// Fetch the global emotes plus a channel's own, reshaped into an
    /// [`EmoteSet`] mapping emote code -> emote id.
    ///
    /// Channel emotes follow the globals, so a channel emote reusing a
    /// global code overrides its asset while keeping the original slot.
    /// A channel unknown to BetterTTV contributes nothing.
    #[instrument(skip(self))]
    pub async fn get_emotes(&self, channel: &str) -> ChatResult<EmoteSet> {
        let global_url = format!("{}/emotes", self.base_url);

        debug!("Fetching global BetterTTV emotes");

        let response = self
            .client
            .get(&global_url)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch BTTV emotes: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "BTTV API error ({}): {}",
                status, body
            )));
        }

        let global: BttvGlobalResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse BTTV emotes: {}", e)))?;

        let mut emotes: IndexMap<String, String> = IndexMap::new();
        for emote in global.emotes {
            emotes.insert(emote.code, emote.id);
        }

        if let Some(channel_emotes) = self.fetch_channel_emotes(channel).await? {
            for emote in channel_emotes {
                emotes.insert(emote.code, emote.id);
            }
        }

        debug!("Built BetterTTV set with {} emotes", emotes.len());
        EmoteSet::new(Platform::BetterTtv, emotes)
    }

    /// A non-success status means the channel is not registered, which is
    /// not an error for set construction
    async fn fetch_channel_emotes(&self, channel: &str) -> ChatResult<Option<Vec<BttvEmote>>> {
        let url = format!(
            "{}/channels/{}",
            self.base_url,
            urlencoding::encode(channel)
        );

        debug!("Fetching BetterTTV channel emotes: {}", channel);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch BTTV channel: {}", e)))?;

        if !response.status().is_success() {
            debug!(
                "No BetterTTV channel emotes for {} (status {})",
                channel,
                response.status()
            );
            return Ok(None);
        }

        let channel_response: BttvChannelResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse BTTV channel: {}", e)))?;

        Ok(channel_response.emotes)
    }
}

impl Default for BttvClient {
    fn default() -> Self {
        Self::new()
    }
}
