//! Discord bot commands.
//!
//! This module contains all available bot commands.

pub mod ping;

pub use ping::ping;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ping_is_registered_as_slash_command() {
        let command = ping();
        assert_eq!(command.name, "ping");
        assert!(command.slash_action.is_some());
    }
}
