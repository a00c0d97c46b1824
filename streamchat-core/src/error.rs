//! Error types for the toolkit

use thiserror::Error;

/// Toolkit-wide error type
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Platform error ({platform}): {message}")]
    Platform { platform: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ChatError {
    pub fn api(msg: impl Into<String>) -> Self {
        ChatError::Api(msg.into())
    }

    pub fn network(msg: impl Into<String>) -> Self {
        ChatError::Network(msg.into())
    }

    pub fn auth(msg: impl Into<String>) -> Self {
        ChatError::Auth(msg.into())
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        ChatError::Parse(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        ChatError::NotFound(msg.into())
    }

    pub fn platform(platform: impl Into<String>, message: impl Into<String>) -> Self {
        ChatError::Platform {
            platform: platform.into(),
            message: message.into(),
        }
    }

    pub fn config(msg: impl Into<String>) -> Self {
        ChatError::Config(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ChatError::Internal(msg.into())
    }
}

/// Result type alias for toolkit operations
pub type ChatResult<T> = Result<T, ChatError>;
