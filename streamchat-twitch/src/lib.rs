//! Twitch integration for the Stream Chat Toolkit
//!
//! This crate provides a client for the Twitch REST API (user lookup,
//! moderation, badges, cheermotes, token refresh), a client for the
//! modlookup.3v.fi moderation-lookup service, and the emote markup
//! rewriter that turns emote-position message tags into renderable HTML
//! fragments.

pub mod client;
pub mod markup;
pub mod modlookup;
pub mod types;

pub use client::{ApiGeneration, TwitchClient};
pub use markup::{rewrite_emotes, EmotePositions, EmoteRange};
pub use modlookup::ModLookupClient;
