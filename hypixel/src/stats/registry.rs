use std::collections::HashMap;

use log::{debug, warn};
use serde::Deserialize;
use serde_json::{Map, Value};

use super::{bedwars::BedwarsStats, Stats, StatsDecoder, StatsOf};
use crate::{Error, Game, Result};

/// What to do with a stats key that is not a known game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnknownGames {
    /// Fail the whole decode with [`Error::UnknownGame`].
    #[default]
    Strict,
    /// Skip the key. The API adds games without notice, so long running
    /// clients may prefer this.
    Lenient,
}

/// Maps each game to the decoder for its stats.
///
/// Decoders are registered up front, through `&mut self`; after that the
/// registry is only read and can be shared between threads.
///
/// ```
/// use hypixel::stats::{bedwars::BedwarsStats, StatsRegistry};
/// use hypixel::Game;
///
/// let mut registry = StatsRegistry::new();
/// registry.register::<BedwarsStats>(Game::Bedwars).unwrap();
/// assert!(registry.register::<BedwarsStats>(Game::Bedwars).is_err());
/// ```
#[derive(Default)]
pub struct StatsRegistry {
    decoders: HashMap<Game, Box<dyn StatsDecoder>>,
    unknown_games: UnknownGames,
}

impl StatsRegistry {
    /// An empty registry. Every game's stats will be left out.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry with every decoder this crate provides.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry
            .decoders
            .insert(Game::Bedwars, Box::new(StatsOf::<BedwarsStats>::new()));
        registry
    }

    /// Set how keys that are not known games are handled.
    pub fn unknown_games(mut self, policy: UnknownGames) -> Self {
        self.unknown_games = policy;
        self
    }

    pub fn unknown_games_policy(&self) -> UnknownGames {
        self.unknown_games
    }

    /// Register the decoder for `game` using `T`'s `process_json`.
    pub fn register<T: Stats>(&mut self, game: Game) -> Result<()> {
        self.register_decoder(game, Box::new(StatsOf::<T>::new()))
    }

    /// Register a decoder for `game`. Each game can only have one decoder.
    pub fn register_decoder(&mut self, game: Game, decoder: Box<dyn StatsDecoder>) -> Result<()> {
        if self.decoders.contains_key(&game) {
            return Err(Error::DuplicateDecoder(game));
        }
        self.decoders.insert(game, decoder);
        Ok(())
    }

    pub fn is_registered(&self, game: Game) -> bool {
        self.decoders.contains_key(&game)
    }

    /// Decode one game's stats. `Ok(None)` if no decoder is registered.
    pub fn handle_json(&self, game: Game, raw: &Value) -> Result<Option<Box<dyn Stats>>> {
        let decoder = match self.decoders.get(&game) {
            Some(decoder) => decoder,
            None => {
                debug!("no stats decoder for {}, leaving it out", game);
                return Ok(None);
            }
        };

        let raw = raw.as_object().ok_or_else(|| {
            Error::MalformedResponse(format!("stats for {} are not an object", game))
        })?;

        decoder.process_json(raw).map(Some)
    }

    /// Decode every game in a player's `stats` object. Games without a
    /// decoder are left out of the result.
    pub fn handle_all_json(&self, raw: &Map<String, Value>) -> Result<HashMap<Game, Box<dyn Stats>>> {
        let mut all = HashMap::new();

        for (key, value) in raw {
            let game = match Game::from_key(key) {
                Some(game) => game,
                None => match self.unknown_games {
                    UnknownGames::Strict => return Err(Error::UnknownGame(key.clone())),
                    UnknownGames::Lenient => {
                        warn!("skipping stats for unknown game {:?}", key);
                        continue;
                    }
                },
            };

            if let Some(stats) = self.handle_json(game, value)? {
                all.insert(game, stats);
            }
        }

        Ok(all)
    }
}

impl std::fmt::Debug for StatsRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut games: Vec<_> = self.decoders.keys().collect();
        games.sort();
        f.debug_struct("StatsRegistry")
            .field("games", &games)
            .field("unknown_games", &self.unknown_games)
            .finish()
    }
}
