//! Social Platforms
//!
//! Simulated social-platform accounts. Connecting only records a username; nothing is sent
//! anywhere.

use serde::Deserialize;
use thiserror::Error;

/// Errors from connection management.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlatformError {
    /// A connection needs a non-blank username.
    #[error("cannot connect {platform} without a username")]
    BlankUsername {
        /// Platform name
        platform: String,
    },
}

/// A social platform the restaurant can post to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SocialPlatform {
    /// Catalog identifier
    pub id: u32,

    /// Display name
    pub name: String,

    /// Icon URL
    #[serde(default)]
    pub icon: String,

    /// Whether an account is connected
    #[serde(default)]
    pub connected: bool,

    /// Connected account name, empty when disconnected
    #[serde(default)]
    pub username: String,
}

impl SocialPlatform {
    /// Create a disconnected platform.
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            icon: String::new(),
            connected: false,
            username: String::new(),
        }
    }

    /// Connect an account, replacing any existing one.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::BlankUsername`] if `username` is empty after trimming.
    pub fn connect(&mut self, username: &str) -> Result<(), PlatformError> {
        let username = username.trim();

        if username.is_empty() {
            return Err(PlatformError::BlankUsername {
                platform: self.name.clone(),
            });
        }

        self.username = username.to_string();
        self.connected = true;

        Ok(())
    }

    /// Disconnect the account, if any.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.username.clear();
    }

    /// Account name while connected.
    pub fn handle(&self) -> Option<&str> {
        (self.connected && !self.username.is_empty()).then_some(self.username.as_str())
    }
}
