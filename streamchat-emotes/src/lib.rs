//! Third-party emote providers for the Stream Chat Toolkit
//!
//! This crate wraps the BetterTTV and FrankerFaceZ APIs. Each provider
//! client fetches the global emotes plus a channel's own set and reshapes
//! them into a [`streamchat_core::EmoteSet`]: an ordered name -> asset
//! map with a compiled pattern matching any of the names.

pub mod bttv;
pub mod ffz;
pub mod types;

pub use bttv::BttvClient;
pub use ffz::FfzClient;
