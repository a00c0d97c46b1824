//! User and moderation types

use serde::{Deserialize, Serialize};

/// A Twitch user profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatUser {
    /// Numeric user id (as a string, the way the API reports it)
    pub id: String,

    /// Login name (lowercase)
    pub login: String,

    /// Display name with original casing
    pub display_name: String,

    /// Account type ("staff", "admin", "global_mod" or empty)
    #[serde(rename = "type", default)]
    pub user_type: String,

    /// Broadcaster tier ("partner", "affiliate" or empty)
    #[serde(default)]
    pub broadcaster_type: String,

    /// Channel description
    #[serde(default)]
    pub description: String,

    /// Profile image URL
    #[serde(default)]
    pub profile_image_url: String,

    /// Offline channel banner URL
    #[serde(default)]
    pub offline_image_url: String,

    /// Total channel views
    #[serde(default)]
    pub view_count: u64,

    /// Account creation timestamp (RFC 3339)
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A moderator of a channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Moderator {
    /// Numeric user id of the moderator
    pub id: String,

    /// Login name
    pub login: String,

    /// Display name
    pub display_name: String,
}

/// A channel a user moderates, as reported by the moderation-lookup service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModChannel {
    /// Channel login name
    pub name: String,

    /// Follower count at lookup time
    #[serde(default)]
    pub followers: i64,

    /// Channel view count at lookup time
    #[serde(default)]
    pub views: i64,
}
