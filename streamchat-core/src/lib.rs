//! Core types for the Stream Chat Toolkit
//!
//! This crate defines the shared data structures used across the toolkit,
//! including chat users, badges, emote sets, and platform abstractions.

pub mod auth;
pub mod badge;
pub mod cheer;
pub mod emote;
pub mod error;
pub mod platform;
pub mod user;

pub use auth::AccessToken;
pub use badge::{BadgeSet, BadgeVersion};
pub use cheer::{CheerTier, Cheermote};
pub use emote::{build_name_pattern, EmoteSet};
pub use error::{ChatError, ChatResult};
pub use platform::Platform;
pub use user::{ChatUser, ModChannel, Moderator};
