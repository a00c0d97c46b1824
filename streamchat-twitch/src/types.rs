//! Twitch API response types
//!
//! These types mirror the response envelopes of the Twitch REST API and
//! the modlookup.3v.fi service, and are converted to streamchat-core
//! types where the shapes differ.

use serde::Deserialize;
use std::collections::HashMap;

use streamchat_core::{BadgeSet, ChatUser, Cheermote, ModChannel, Moderator};

/// Response from GET /helix/users
#[derive(Debug, Clone, Deserialize)]
pub struct UsersResponse {
    pub data: Vec<ChatUser>,
}

/// Response from GET /helix/moderation/moderators
#[derive(Debug, Clone, Deserialize)]
pub struct ModeratorsResponse {
    pub data: Vec<HelixModerator>,
}

/// A moderator entry as the moderation endpoint reports it
#[derive(Debug, Clone, Deserialize)]
pub struct HelixModerator {
    pub user_id: String,

    #[serde(default)]
    pub user_login: String,

    pub user_name: String,
}

impl HelixModerator {
    pub fn to_moderator(self) -> Moderator {
        Moderator {
            id: self.user_id,
            login: self.user_login,
            display_name: self.user_name,
        }
    }
}

/// Response from the badge display endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct BadgesResponse {
    pub badge_sets: HashMap<String, BadgeSet>,
}

/// Response from GET /helix/bits/cheermotes
#[derive(Debug, Clone, Deserialize)]
pub struct CheermotesResponse {
    pub data: Vec<Cheermote>,
}

/// One page of channels from the moderation-lookup service
#[derive(Debug, Clone, Deserialize)]
pub struct ModChannelsPage {
    pub channels: Vec<ModChannel>,

    /// Opaque continuation token; empty or absent on the last page
    #[serde(default)]
    pub cursor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_users_response() {
        let body = r#"{
            "data": [{
                "id": "44322889",
                "login": "dallas",
                "display_name": "dallas",
                "type": "staff",
                "broadcaster_type": "affiliate",
                "description": "Just a gamer",
                "profile_image_url": "https://example.com/profile.png",
                "offline_image_url": "https://example.com/offline.png",
                "view_count": 191836881,
                "created_at": "2013-06-03T19:12:02Z"
            }]
        }"#;

        let response: UsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data.len(), 1);
        let user = &response.data[0];
        assert_eq!(user.id, "44322889");
        assert_eq!(user.user_type, "staff");
        assert_eq!(user.view_count, 191836881);
        assert_eq!(user.created_at.as_deref(), Some("2013-06-03T19:12:02Z"));
    }

    #[test]
    fn test_deserialize_users_response_minimal_fields() {
        let body = r#"{"data": [{"id": "1", "login": "a", "display_name": "A"}]}"#;

        let response: UsersResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].user_type, "");
        assert_eq!(response.data[0].view_count, 0);
        assert!(response.data[0].created_at.is_none());
    }

    #[test]
    fn test_moderator_conversion() {
        let body = r#"{
            "data": [
                {"user_id": "424596340", "user_login": "quotrock", "user_name": "quotrock"},
                {"user_id": "424596341", "user_name": "dotsarecool"}
            ]
        }"#;

        let response: ModeratorsResponse = serde_json::from_str(body).unwrap();
        let moderators: Vec<Moderator> = response
            .data
            .into_iter()
            .map(HelixModerator::to_moderator)
            .collect();

        assert_eq!(moderators[0].id, "424596340");
        assert_eq!(moderators[0].display_name, "quotrock");
        assert_eq!(moderators[1].login, "");
    }

    #[test]
    fn test_deserialize_badge_sets() {
        let body = r#"{
            "badge_sets": {
                "subscriber": {
                    "versions": {
                        "0": {
                            "image_url_1x": "https://example.com/1.png",
                            "image_url_2x": "https://example.com/2.png",
                            "image_url_4x": "https://example.com/4.png",
                            "title": "Subscriber",
                            "description": "Subscriber",
                            "click_action": "subscribe_to_channel",
                            "click_url": null
                        }
                    }
                }
            }
        }"#;

        let response: BadgesResponse = serde_json::from_str(body).unwrap();
        let set = &response.badge_sets["subscriber"];
        assert_eq!(set.versions["0"].title, "Subscriber");
        assert!(set.versions["0"].click_url.is_none());
    }

    #[test]
    fn test_deserialize_cheermotes() {
        let body = r##"{
            "data": [{
                "prefix": "Cheer",
                "type": "global_first_party",
                "order": 1,
                "tiers": [{
                    "id": "1",
                    "min_bits": 1,
                    "color": "#979797",
                    "can_cheer": true,
                    "show_in_bits_card": true,
                    "images": {"dark": {"animated": {"1": "https://example.com/cheer.gif"}}}
                }]
            }]
        }"##;

        let response: CheermotesResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.data[0].prefix, "Cheer");
        assert_eq!(response.data[0].tiers[0].min_bits, 1);
        assert!(response.data[0].tiers[0].images["dark"]["animated"]["1"].is_string());
    }

    #[test]
    fn test_deserialize_mod_channels_page() {
        let body = r#"{
            "channels": [
                {"name": "cohhcarnage", "followers": 1500000, "views": 90000000},
                {"name": "smallchannel"}
            ],
            "cursor": "abc123"
        }"#;

        let page: ModChannelsPage = serde_json::from_str(body).unwrap();
        assert_eq!(page.channels[0].name, "cohhcarnage");
        assert_eq!(page.channels[1].followers, 0);
        assert_eq!(page.cursor.as_deref(), Some("abc123"));
    }

    #[test]
    fn test_deserialize_access_token() {
        let body = r#"{
            "access_token": "asdfasdf",
            "refresh_token": "eyJfMzUtNDU0OC4MWYwLTQ5MDY",
            "expires_in": 14124,
            "scope": ["chat:read", "chat:edit"],
            "token_type": "bearer"
        }"#;

        let token: streamchat_core::AccessToken = serde_json::from_str(body).unwrap();
        assert_eq!(token.access_token, "asdfasdf");
        assert_eq!(token.expires_in, Some(14124));
        assert_eq!(token.scope, vec!["chat:read", "chat:edit"]);
    }

    #[test]
    fn test_deserialize_access_token_minimal() {
        let body = r#"{"access_token": "abc"}"#;
        let token: streamchat_core::AccessToken = serde_json::from_str(body).unwrap();
        assert!(token.refresh_token.is_none());
        assert!(token.scope.is_empty());
    }

    #[test]
    fn test_deserialize_mod_channels_last_page() {
        let body = r#"{"channels": [], "cursor": ""}"#;
        let page: ModChannelsPage = serde_json::from_str(body).unwrap();
        assert!(page.channels.is_empty());
        assert_eq!(page.cursor.as_deref(), Some(""));
    }
}
