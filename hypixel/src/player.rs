use std::collections::HashMap;

use chrono::{serde::ts_milliseconds_option, DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{Game, Result, Stats, StatsRegistry};

/// General data about a player along with their game stats.
#[derive(Debug)]
pub struct Player {
    pub uuid: String,
    pub display_name: String,
    /// The most specific rank the player holds, such as `ADMIN` or `MVP_PLUS`.
    pub rank: Option<String>,
    pub first_login: Option<DateTime<Utc>>,
    pub last_login: Option<DateTime<Utc>>,
    pub last_logout: Option<DateTime<Utc>>,
    /// The stats object as sent, keyed by game database name.
    pub raw_stats: Map<String, Value>,
    /// Stats of every game with a registered decoder.
    pub stats: HashMap<Game, Box<dyn Stats>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerJson {
    uuid: String,
    #[serde(default, rename = "displayname")]
    display_name: String,
    rank: Option<String>,
    monthly_package_rank: Option<String>,
    new_package_rank: Option<String>,
    package_rank: Option<String>,
    #[serde(default, with = "ts_milliseconds_option")]
    first_login: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_milliseconds_option")]
    last_login: Option<DateTime<Utc>>,
    #[serde(default, with = "ts_milliseconds_option")]
    last_logout: Option<DateTime<Utc>>,
    #[serde(default)]
    stats: Map<String, Value>,
}

impl PlayerJson {
    /// Staff ranks live in `rank`, paid ranks in the package fields from
    /// newest to oldest.
    fn resolve_rank(&mut self) -> Option<String> {
        let staff = self.rank.take().filter(|r| r != "NORMAL");
        let not_none = |r: &String| r != "NONE";

        staff
            .or_else(|| self.monthly_package_rank.take().filter(not_none))
            .or_else(|| self.new_package_rank.take().filter(not_none))
            .or_else(|| self.package_rank.take().filter(not_none))
    }
}

impl Player {
    /// Build a player from the `player` field of a `/player` response,
    /// decoding stats with `registry`.
    pub fn from_json(raw: Value, registry: &StatsRegistry) -> Result<Player> {
        let mut json: PlayerJson = serde_json::from_value(raw)?;
        let rank = json.resolve_rank();
        let stats = registry.handle_all_json(&json.stats)?;

        Ok(Player {
            uuid: json.uuid,
            display_name: json.display_name,
            rank,
            first_login: json.first_login,
            last_login: json.last_login,
            last_logout: json.last_logout,
            raw_stats: json.stats,
            stats,
        })
    }

    /// Typed stats for `game`, if they were decoded and are of type `T`.
    pub fn stats_for<T: Stats>(&self, game: Game) -> Option<&T> {
        self.stats.get(&game)?.downcast_ref()
    }
}
