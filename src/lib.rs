//! Pongbot library.
//!
//! This library provides the core functionality for the pongbot Discord bot:
//! configuration loading and error handling.

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{BotError, Result};
