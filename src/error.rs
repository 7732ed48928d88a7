//! Custom error types for pongbot.
//!
//! This module provides a centralized error handling system with specific error types
//! for different parts of the application.

use poise::serenity_prelude as serenity;
use std::fmt;

/// Main error type for pongbot operations.
#[derive(Debug)]
pub enum BotError {
    /// Configuration errors (missing env vars, invalid values)
    Config(String),
    /// Discord client errors (gateway connection, HTTP)
    Discord(serenity::Error),
}

impl fmt::Display for BotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
            Self::Discord(err) => write!(f, "Discord error: {}", err),
        }
    }
}

impl std::error::Error for BotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BotError::Discord(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serenity::Error> for BotError {
    fn from(err: serenity::Error) -> Self {
        Self::Discord(err)
    }
}

/// Result type alias for pongbot operations.
pub type Result<T> = std::result::Result<T, BotError>;
