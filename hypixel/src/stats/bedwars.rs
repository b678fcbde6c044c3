//! Bed Wars stats.

use std::any::Any;

use serde_json::{Map, Value};

use super::{ratio, Fields, Stats};
use crate::{Game, Result};

/// Key prefixes of each team mode, in the order of the fields on
/// [`BedwarsStats`].
pub const SOLO: &str = "eight_one_";
pub const DUOS: &str = "eight_two_";
pub const THREES: &str = "four_three_";
pub const FOURS: &str = "four_four_";
pub const TEAMS: &str = "two_four_";

#[derive(Debug, Clone, PartialEq)]
pub struct BedwarsStats {
    pub experience: u64,
    pub coins: u64,
    pub chests: Chests,
    pub cosmetics: Cosmetics,
    /// Totals over every mode.
    pub all_modes: ModeStats,
    pub solo: ModeStats,
    pub duos: ModeStats,
    pub threes: ModeStats,
    pub fours: ModeStats,
    /// 4v4.
    pub teams: ModeStats,
}

impl Stats for BedwarsStats {
    fn process_json(raw: &Map<String, Value>) -> Result<Self> {
        let fields = Fields::new(raw);

        Ok(Self {
            experience: fields.count("Experience"),
            coins: fields.count("coins"),
            chests: Chests::from_fields(fields),
            cosmetics: Cosmetics::from_fields(fields),
            all_modes: ModeStats::from_fields(fields),
            solo: ModeStats::from_fields(fields.with_prefix(SOLO)),
            duos: ModeStats::from_fields(fields.with_prefix(DUOS)),
            threes: ModeStats::from_fields(fields.with_prefix(THREES)),
            fours: ModeStats::from_fields(fields.with_prefix(FOURS)),
            teams: ModeStats::from_fields(fields.with_prefix(TEAMS)),
        })
    }

    fn game(&self) -> Game {
        Game::Bedwars
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Stats for one mode, or for all modes together.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeStats {
    pub kills: KillDeathCount,
    pub deaths: KillDeathCount,
    pub final_kills: KillDeathCount,
    pub final_deaths: KillDeathCount,
    pub beds: BedStats,
    pub winloss: WinLossStats,
    pub resources: ResourcesCollected,
    pub purchases: ItemsPurchased,
    pub plays: u64,
}

impl ModeStats {
    /// Build a mode from a view already scoped to the mode's prefix.
    pub fn from_fields(fields: Fields) -> Self {
        Self {
            kills: KillDeathCount::from_fields(fields, "kills"),
            deaths: KillDeathCount::from_fields(fields, "deaths"),
            final_kills: KillDeathCount::from_fields(fields, "final_kills"),
            final_deaths: KillDeathCount::from_fields(fields, "final_deaths"),
            beds: BedStats {
                breaks: fields.count("beds_broken_bedwars"),
                losses: fields.count("beds_lost_bedwars"),
            },
            winloss: WinLossStats {
                wins: fields.count("wins_bedwars"),
                losses: fields.count("losses_bedwars"),
            },
            resources: ResourcesCollected::from_fields(fields),
            purchases: ItemsPurchased::from_fields(fields),
            plays: fields.count("games_played_bedwars"),
        }
    }

    /// Kill/death ratio.
    pub fn kdr(&self) -> Option<f64> {
        ratio(self.kills.total, self.deaths.total)
    }

    /// Final kill/final death ratio.
    pub fn fkdr(&self) -> Option<f64> {
        ratio(self.final_kills.total, self.final_deaths.total)
    }
}

/// Kills or deaths broken down by cause. Used for kills, final kills, deaths
/// and final deaths alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KillDeathCount {
    pub total: u64,
    pub magic: u64,
    pub void: u64,
    pub entity_attack: u64,
    pub entity_explosion: u64,
    pub fall: u64,
    pub projectile: u64,
    pub fire_tick: u64,
}

impl KillDeathCount {
    /// `kind` is one of `kills`, `deaths`, `final_kills` or `final_deaths`.
    pub fn from_fields(fields: Fields, kind: &str) -> Self {
        let cause = |cause: &str| fields.count(&format!("{}_{}_bedwars", cause, kind));

        Self {
            total: fields.count(&format!("{}_bedwars", kind)),
            magic: cause("magic"),
            void: cause("void"),
            entity_attack: cause("entity_attack"),
            entity_explosion: cause("entity_explosion"),
            fall: cause("fall"),
            projectile: cause("projectile"),
            fire_tick: cause("fire_tick"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Chests {
    pub total: u64,
    pub common: u64,
    pub rare: u64,
}

impl Chests {
    fn from_fields(fields: Fields) -> Self {
        Self {
            total: fields.count("Bedwars_openedChests"),
            common: fields.count("Bedwars_openedCommons"),
            rare: fields.count("Bedwars_openedRares"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResourcesCollected {
    pub total: u64,
    pub iron: u64,
    pub gold: u64,
    pub diamond: u64,
    pub emerald: u64,
}

impl ResourcesCollected {
    pub fn from_fields(fields: Fields) -> Self {
        Self {
            total: fields.count("resources_collected_bedwars"),
            iron: fields.count("iron_resources_collected_bedwars"),
            gold: fields.count("gold_resources_collected_bedwars"),
            diamond: fields.count("diamond_resources_collected_bedwars"),
            emerald: fields.count("emerald_resources_collected_bedwars"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BedStats {
    pub breaks: u64,
    pub losses: u64,
}

impl BedStats {
    /// Beds broken per bed lost.
    pub fn bblr(&self) -> Option<f64> {
        ratio(self.breaks, self.losses)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WinLossStats {
    pub wins: u64,
    pub losses: u64,
}

impl WinLossStats {
    /// Wins per loss. `None` for a player who has never lost.
    pub fn wlr(&self) -> Option<f64> {
        ratio(self.wins, self.losses)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemsPurchased {
    pub total: u64,
    pub permanent: u64,
}

impl ItemsPurchased {
    pub fn from_fields(fields: Fields) -> Self {
        Self {
            total: fields.count("items_purchased_bedwars"),
            permanent: fields.count("permanent_items_purchased_bedwars"),
        }
    }
}

/// Active cosmetics. Empty when the player never picked one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Cosmetics {
    pub kill_effect: String,
    pub bed_destroy: String,
    pub projectile_trail: String,
}

impl Cosmetics {
    fn from_fields(fields: Fields) -> Self {
        Self {
            kill_effect: fields.string("activeKillEffect").to_owned(),
            bed_destroy: fields.string("activeBedDestroy").to_owned(),
            projectile_trail: fields.string("activeProjectileTrail").to_owned(),
        }
    }
}
