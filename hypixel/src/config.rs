use serde::Deserialize;

use crate::{client::BASE_URL, Result, UnknownGames};

/// Client settings. Every field has a default, so a config file only needs to
/// name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the API. Point this at a mirror or a local fixture server.
    pub base_url: String,
    pub unknown_games: UnknownGames,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            unknown_games: UnknownGames::default(),
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
