//! Bits cheermote types

use serde::{Deserialize, Serialize};

/// A cheermote as reported by the Helix bits endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cheermote {
    /// Cheer prefix ("Cheer", "Kappa", ...)
    pub prefix: String,

    /// Cheermote kind ("global_first_party", "channel_custom", ...)
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Sort order within the bits card
    #[serde(default)]
    pub order: i32,

    /// Bit tiers for this prefix
    pub tiers: Vec<CheerTier>,
}

/// One bit tier of a cheermote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheerTier {
    /// Tier id ("1", "100", "1000", ...)
    pub id: String,

    /// Minimum bits to trigger this tier
    pub min_bits: u64,

    /// Hex color the tier renders with
    #[serde(default)]
    pub color: String,

    #[serde(default)]
    pub can_cheer: bool,

    #[serde(default)]
    pub show_in_bits_card: bool,

    /// Image URL variants (theme -> animation -> scale), kept as reported
    #[serde(default)]
    pub images: serde_json::Value,
}
