//! Chat badge types
//!
//! Badge sets come from the Twitch badge display endpoints and are keyed
//! by set id (e.g. "subscriber"), then by version id within the set.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A set of badge versions (e.g. all subscriber-tier badges)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeSet {
    /// Version id -> badge version
    pub versions: HashMap<String, BadgeVersion>,
}

/// One renderable badge version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BadgeVersion {
    /// 18x18 image URL
    pub image_url_1x: String,

    /// 36x36 image URL
    #[serde(default)]
    pub image_url_2x: String,

    /// 72x72 image URL
    #[serde(default)]
    pub image_url_4x: String,

    /// Badge title shown on hover
    #[serde(default)]
    pub title: String,

    /// Longer description
    #[serde(default)]
    pub description: String,

    /// Click behavior ("visit_url", "subscribe_to_channel", ...)
    #[serde(default)]
    pub click_action: Option<String>,

    /// Target of the click action, when any
    #[serde(default)]
    pub click_url: Option<String>,
}
