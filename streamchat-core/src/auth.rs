//! OAuth token types

use serde::{Deserialize, Serialize};

/// Result of refreshing an OAuth token against the Twitch id endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessToken {
    /// The new access token
    pub access_token: String,

    /// Replacement refresh token, when the server rotates it
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Seconds until the access token expires
    #[serde(default)]
    pub expires_in: Option<u64>,

    /// Scopes granted to the token
    #[serde(default)]
    pub scope: Vec<String>,

    #[serde(default)]
    pub token_type: Option<String>,
}
