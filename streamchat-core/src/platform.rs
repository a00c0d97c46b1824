//! Platform definitions for chat and emote services

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported upstream services
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Twitch - chat platform and emote CDN
    Twitch,
    /// BetterTTV - third-party emote provider
    BetterTtv,
    /// FrankerFaceZ - third-party emote provider
    FrankerFaceZ,
}

impl Platform {
    /// Get a short identifier for the platform (for display)
    pub fn short_name(&self) -> &'static str {
        match self {
            Platform::Twitch => "T",
            Platform::BetterTtv => "B",
            Platform::FrankerFaceZ => "F",
        }
    }

    /// Get the full display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::Twitch => "Twitch",
            Platform::BetterTtv => "BetterTTV",
            Platform::FrankerFaceZ => "FrankerFaceZ",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "twitch" | "t" => Ok(Platform::Twitch),
            "betterttv" | "bttv" | "b" => Ok(Platform::BetterTtv),
            "frankerfacez" | "ffz" | "f" => Ok(Platform::FrankerFaceZ),
            _ => Err(format!("Unknown platform: {}", s)),
        }
    }
}
