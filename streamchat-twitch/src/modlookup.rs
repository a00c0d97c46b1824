//! Moderation-lookup client
//!
//! Wraps the modlookup.3v.fi service, which reports every channel a user
//! moderates. The service paginates with an opaque cursor; an error while
//! following cursors ends the walk and returns the channels collected so
//! far, matching the upstream contract this wrapper was built against.

use reqwest::Client;
use std::time::Duration;
use streamchat_core::{ChatError, ChatResult, ChatUser, ModChannel};
use tracing::{debug, instrument};

use crate::client::TwitchClient;
use crate::types::ModChannelsPage;

/// Base URL for the moderation-lookup API
const MODLOOKUP_API_BASE: &str = "https://modlookup.3v.fi/api";

/// Client for the modlookup.3v.fi moderation-lookup service
#[derive(Debug, Clone)]
pub struct ModLookupClient {
    client: Client,
    base_url: String,
}

impl ModLookupClient {
    /// Create a new client. The service requires no authentication.
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: MODLOOKUP_API_BASE.to_string(),
        }
    }

    /// List every channel `username` moderates, following cursor pages.
    ///
    /// A failure on the first page is returned; a failure on a later page
    /// stops pagination and yields the channels fetched so far.
    #[instrument(skip(self))]
    pub async fn get_mod_channels(&self, username: &str) -> ChatResult<Vec<ModChannel>> {
        let first = format!(
            "{}/user-v3/{}",
            self.base_url,
            urlencoding::encode(username)
        );
        let ModChannelsPage {
            mut channels,
            mut cursor,
        } = self.fetch_page(&first).await?;

        while let Some(token) = cursor.take().filter(|c| !c.is_empty()) {
            let url = format!(
                "{}/user-v3/{}?cursor={}",
                self.base_url,
                urlencoding::encode(username),
                urlencoding::encode(&token)
            );

            match self.fetch_page(&url).await {
                Ok(page) => {
                    channels.extend(page.channels);
                    cursor = page.cursor;
                }
                Err(err) => {
                    debug!("Mod channel pagination stopped early: {}", err);
                    break;
                }
            }
        }

        debug!("Collected {} moderated channels", channels.len());
        Ok(channels)
    }

    /// Resolve the channels `username` moderates into full user profiles
    /// via the Twitch API, one lookup per channel
    #[instrument(skip(self, twitch))]
    pub async fn get_mod_channel_users(
        &self,
        username: &str,
        twitch: &TwitchClient,
    ) -> ChatResult<Vec<ChatUser>> {
        let channels = self.get_mod_channels(username).await?;

        let mut users = Vec::with_capacity(channels.len());
        for channel in &channels {
            users.push(twitch.get_user(&channel.name).await?);
        }
        Ok(users)
    }

    async fn fetch_page(&self, url: &str) -> ChatResult<ModChannelsPage> {
        debug!("Fetching mod channels page: {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch mod channels: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Mod lookup API error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse mod channels: {}", e)))
    }
}

impl Default for ModLookupClient {
    fn default() -> Self {
        Self::new()
    }
}
