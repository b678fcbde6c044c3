//! Per-game statistics.
//!
//! Each implemented game has a [`Stats`] type that is built from the game's
//! flat stats object. A [`StatsRegistry`] maps games to their decoders so the
//! client can decode a player's stats without knowing about any one game.

use std::{any::Any, fmt::Debug, marker::PhantomData};

use serde_json::{Map, Value};

use crate::{Game, Result};

pub mod bedwars;
mod registry;

pub use registry::{StatsRegistry, UnknownGames};

/// Typed stats for one game.
pub trait Stats: Any + Debug + Send + Sync {
    /// Build the stats from the game's raw stats object. Fields the player
    /// has never touched are missing from the object and count as zero.
    fn process_json(raw: &Map<String, Value>) -> Result<Self>
    where
        Self: Sized;

    fn game(&self) -> Game;

    fn as_any(&self) -> &dyn Any;
}

impl dyn Stats {
    /// Get the concrete stats type back out of a registry result.
    pub fn downcast_ref<T: Stats>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }
}

/// Something that can turn a raw stats object into [`Stats`]. This is what a
/// [`StatsRegistry`] stores for each game.
pub trait StatsDecoder: Send + Sync {
    fn process_json(&self, raw: &Map<String, Value>) -> Result<Box<dyn Stats>>;
}

/// Decoder for any [`Stats`] type through its own `process_json`.
pub struct StatsOf<T>(PhantomData<fn() -> T>);

impl<T> StatsOf<T> {
    pub fn new() -> Self {
        StatsOf(PhantomData)
    }
}

impl<T> Default for StatsOf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Stats> StatsDecoder for StatsOf<T> {
    fn process_json(&self, raw: &Map<String, Value>) -> Result<Box<dyn Stats>> {
        Ok(Box::new(T::process_json(raw)?))
    }
}

/// Read-only view of a flat stats object, restricted to the keys that start
/// with a prefix and with that prefix stripped.
///
/// Stats objects hold several structurally identical game modes side by
/// side, told apart by a key prefix (`eight_one_wins_bedwars` for solo wins,
/// `wins_bedwars` for all modes). A view per mode lets one shape builder read
/// every mode. Missing keys read as zero.
#[derive(Debug, Clone, Copy)]
pub struct Fields<'a> {
    raw: &'a Map<String, Value>,
    prefix: &'a str,
}

impl<'a> Fields<'a> {
    pub fn new(raw: &'a Map<String, Value>) -> Self {
        Self { raw, prefix: "" }
    }

    /// A view of the same object seeing only the keys under `prefix`.
    pub fn with_prefix(self, prefix: &'a str) -> Self {
        Self {
            raw: self.raw,
            prefix,
        }
    }

    pub fn prefix(&self) -> &'a str {
        self.prefix
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        if self.prefix.is_empty() {
            self.raw.get(key)
        } else {
            self.raw.get(&format!("{}{}", self.prefix, key))
        }
    }

    /// A counter. Missing, negative or non-numeric values read as zero.
    pub fn count(&self, key: &str) -> u64 {
        self.get(key)
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f as u64)))
            .unwrap_or(0)
    }

    /// A string selection, such as an active cosmetic. Missing values read as
    /// the empty string.
    pub fn string(&self, key: &str) -> &'a str {
        self.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

/// `numerator / denominator`, or `None` when the denominator is zero.
pub fn ratio(numerator: u64, denominator: u64) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(numerator as f64 / denominator as f64)
    }
}
