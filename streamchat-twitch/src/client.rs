//! Twitch API client
//!
//! Provides methods for interacting with the Twitch REST API: user
//! lookup, channel moderators, chat badges, cheermotes, and OAuth token
//! refresh.

use crate::types::{BadgesResponse, CheermotesResponse, ModeratorsResponse, UsersResponse};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use streamchat_core::{AccessToken, BadgeSet, ChatError, ChatResult, ChatUser, Cheermote, Moderator};
use tracing::{debug, instrument};

/// Base URL for the Helix API
const HELIX_API_BASE: &str = "https://api.twitch.tv/helix";
/// Base URL for the badge display endpoints
const BADGES_API_BASE: &str = "https://badges.twitch.tv/v1/badges";
/// Base URL for the OAuth endpoints
const ID_API_BASE: &str = "https://id.twitch.tv";

/// Which generation of the Twitch REST API requests are shaped for.
///
/// Both generations hit the same hosts; Kraken differs only in the
/// authorization scheme and an extra Accept header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ApiGeneration {
    #[default]
    Helix,
    /// Legacy v5 API
    Kraken,
}

/// Twitch API client
#[derive(Clone)]
pub struct TwitchClient {
    client: Client,
    client_id: Option<String>,
    token: Option<String>,
    client_secret: Option<String>,
    generation: ApiGeneration,
}

impl TwitchClient {
    /// Create a new unauthenticated client (badge endpoints only)
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            client_id: None,
            token: None,
            client_secret: None,
            generation: ApiGeneration::Helix,
        }
    }

    /// Create a new authenticated client
    pub fn with_auth(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        let mut client = Self::new();
        client.client_id = Some(client_id.into());
        client.token = Some(token.into());
        client
    }

    /// Attach the client secret used by [`TwitchClient::refresh_token`]
    pub fn with_client_secret(mut self, client_secret: impl Into<String>) -> Self {
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Switch the authorization scheme to the legacy v5 API
    pub fn with_generation(mut self, generation: ApiGeneration) -> Self {
        self.generation = generation;
        self
    }

    /// Create a client from `TWITCH_CLIENT_ID` / `TWITCH_TOKEN`
    /// (and optionally `TWITCH_CLIENT_SECRET`) environment variables
    pub fn from_env() -> Option<Self> {
        let client_id = std::env::var("TWITCH_CLIENT_ID").ok()?;
        let token = std::env::var("TWITCH_TOKEN").ok()?;
        let client = Self::with_auth(client_id, token);

        match std::env::var("TWITCH_CLIENT_SECRET") {
            Ok(secret) => Some(client.with_client_secret(secret)),
            Err(_) => Some(client),
        }
    }

    /// True when the client id or the authorization token is missing
    pub fn is_unauthenticated(&self) -> bool {
        self.client_id.is_none() || self.token.is_none()
    }

    /// Default headers attached to every request: the client id and the
    /// authorization token in the scheme the API generation expects
    fn auth_headers(&self) -> ChatResult<HeaderMap> {
        let mut headers = HeaderMap::new();

        let client_id = self.client_id.as_deref().unwrap_or("");
        headers.insert(
            "Client-ID",
            HeaderValue::from_str(client_id)
                .map_err(|e| ChatError::config(format!("Invalid client id: {}", e)))?,
        );

        let scheme = match self.generation {
            ApiGeneration::Helix => "Bearer",
            ApiGeneration::Kraken => "OAuth",
        };
        let token = self.token.as_deref().unwrap_or("");
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("{} {}", scheme, token))
                .map_err(|e| ChatError::config(format!("Invalid authorization token: {}", e)))?,
        );

        if self.generation == ApiGeneration::Kraken {
            headers.insert(
                ACCEPT,
                HeaderValue::from_static("application/vnd.twitchtv.v5+json"),
            );
        }

        Ok(headers)
    }

    /// Look up a user by login name, or by id when the name is all digits
    #[instrument(skip(self))]
    pub async fn get_user(&self, username: &str) -> ChatResult<ChatUser> {
        if self.is_unauthenticated() {
            return Err(ChatError::auth(
                "Missing either a client id or an authorization token",
            ));
        }

        let url = format!(
            "{}/users?{}={}",
            HELIX_API_BASE,
            user_query_key(username),
            urlencoding::encode(username)
        );

        debug!("Fetching Twitch user: {}", username);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch user: {}", e)))?;

        if response.status().as_u16() == 401 {
            return Err(ChatError::auth("Invalid or expired Twitch token"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Twitch API error ({}): {}",
                status, body
            )));
        }

        let users: UsersResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse users response: {}", e)))?;

        users
            .data
            .into_iter()
            .next()
            .ok_or_else(|| ChatError::not_found(format!("User not found: {}", username)))
    }

    /// List the moderators of a user's channel
    #[instrument(skip(self))]
    pub async fn get_user_moderators(&self, username: &str) -> ChatResult<Vec<Moderator>> {
        let user = self.get_user(username).await?;
        let url = format!(
            "{}/moderation/moderators?broadcaster_id={}",
            HELIX_API_BASE, user.id
        );

        debug!("Fetching moderators for channel: {}", user.login);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch moderators: {}", e)))?;

        if response.status().as_u16() == 401 {
            return Err(ChatError::auth("Invalid or expired Twitch token"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Twitch API error ({}): {}",
                status, body
            )));
        }

        let moderators: ModeratorsResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse moderators response: {}", e)))?;

        Ok(moderators
            .data
            .into_iter()
            .map(|m| m.to_moderator())
            .collect())
    }

    /// Get the custom chat badges of a channel, resolving the login first
    #[instrument(skip(self))]
    pub async fn get_badges_by_username(
        &self,
        username: &str,
    ) -> ChatResult<HashMap<String, BadgeSet>> {
        let user = self.get_user(username).await?;
        self.get_badges_by_id(&user.id).await
    }

    /// Get the custom chat badges of a channel by broadcaster id
    #[instrument(skip(self))]
    pub async fn get_badges_by_id(&self, user_id: &str) -> ChatResult<HashMap<String, BadgeSet>> {
        let url = format!(
            "{}/channels/{}/display",
            BADGES_API_BASE,
            urlencoding::encode(user_id)
        );
        self.fetch_badges(&url).await
    }

    /// Get the global chat badges
    #[instrument(skip(self))]
    pub async fn get_global_badges(&self) -> ChatResult<HashMap<String, BadgeSet>> {
        let url = format!("{}/global/display", BADGES_API_BASE);
        self.fetch_badges(&url).await
    }

    async fn fetch_badges(&self, url: &str) -> ChatResult<HashMap<String, BadgeSet>> {
        debug!("Fetching badges from: {}", url);

        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch badges: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Badge API error ({}): {}",
                status, body
            )));
        }

        let badges: BadgesResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse badges response: {}", e)))?;

        Ok(badges.badge_sets)
    }

    /// List cheermotes, optionally including a broadcaster's custom ones
    #[instrument(skip(self))]
    pub async fn get_cheermotes(
        &self,
        broadcaster_id: Option<&str>,
    ) -> ChatResult<Vec<Cheermote>> {
        let mut url = format!("{}/bits/cheermotes", HELIX_API_BASE);
        if let Some(id) = broadcaster_id {
            url.push_str(&format!("?broadcaster_id={}", urlencoding::encode(id)));
        }

        debug!("Fetching cheermotes");

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to fetch cheermotes: {}", e)))?;

        if response.status().as_u16() == 401 {
            return Err(ChatError::auth("Invalid or expired Twitch token"));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Twitch API error ({}): {}",
                status, body
            )));
        }

        let cheermotes: CheermotesResponse = response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse cheermotes response: {}", e)))?;

        Ok(cheermotes.data)
    }

    /// Exchange a refresh token for a new access token.
    ///
    /// The client secret may come from the client (see
    /// [`TwitchClient::with_client_secret`]) or be passed per call.
    #[instrument(skip(self, refresh_token, client_secret))]
    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        client_secret: Option<&str>,
    ) -> ChatResult<AccessToken> {
        let client_id = self.client_id.as_deref().ok_or_else(|| {
            ChatError::auth("Missing the client id required to refresh a token")
        })?;
        let secret = client_secret
            .or(self.client_secret.as_deref())
            .ok_or_else(|| {
                ChatError::auth("Missing the client secret required to refresh a token")
            })?;

        let url = format!(
            "{}/oauth2/token?client_id={}&client_secret={}&grant_type=refresh_token&refresh_token={}",
            ID_API_BASE,
            urlencoding::encode(client_id),
            urlencoding::encode(secret),
            urlencoding::encode(refresh_token)
        );

        debug!("Refreshing Twitch OAuth token");

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .map_err(|e| ChatError::network(format!("Failed to refresh token: {}", e)))?;

        if matches!(response.status().as_u16(), 400 | 401 | 403) {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::auth(format!("Refresh token rejected: {}", body)));
        }

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::api(format!(
                "Twitch OAuth error ({}): {}",
                status, body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| ChatError::parse(format!("Failed to parse token response: {}", e)))
    }
}

/// Helix looks users up by login name, or by id when the caller passed a
/// bare numeric id instead
fn user_query_key(username: &str) -> &'static str {
    if username.chars().all(|c| c.is_ascii_digit()) {
        "id"
    } else {
        "login"
    }
}

impl std::fmt::Debug for TwitchClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TwitchClient")
            .field("client_id", &self.client_id)
            .field("authenticated", &self.token.is_some())
            .field("generation", &self.generation)
            .finish()
    }
}
