//! Configuration management for pongbot.
//!
//! This module handles loading and validating environment variables.

use crate::error::{BotError, Result};
use std::env;

/// Configuration for the application, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Discord bot token
    pub discord_token: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// This will attempt to load a .env file if present using dotenv,
    /// then read required environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is missing or empty. No connection
    /// attempt is made before this check passes.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pongbot::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load configuration");
    /// ```
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (ignore errors - it's optional)
        dotenv::dotenv().ok();

        let discord_token = env::var("DISCORD_TOKEN")
            .map_err(|_| BotError::Config(
                "Missing DISCORD_TOKEN environment variable. Set it in your environment or create a .env file (never commit this file).".to_string()
            ))?;

        if discord_token.trim().is_empty() {
            return Err(BotError::Config(
                "DISCORD_TOKEN is set but empty.".to_string(),
            ));
        }

        Ok(Self { discord_token })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_from_env_token_cases() {
        // Save original value (if any)
        let original_value = env::var("DISCORD_TOKEN").ok();

        // Missing token is a configuration error
        env::remove_var("DISCORD_TOKEN");
        assert!(matches!(Config::from_env(), Err(BotError::Config(_))));

        // Empty token is rejected as well
        env::set_var("DISCORD_TOKEN", "");
        assert!(matches!(Config::from_env(), Err(BotError::Config(_))));

        // A present, non-empty token is carried through verbatim
        env::set_var("DISCORD_TOKEN", "test-token-value");
        let config = Config::from_env().expect("valid token should load");
        assert_eq!(config.discord_token, "test-token-value");

        // Restore original value
        match original_value {
            Some(val) => env::set_var("DISCORD_TOKEN", val),
            None => env::remove_var("DISCORD_TOKEN"),
        }
    }
}
