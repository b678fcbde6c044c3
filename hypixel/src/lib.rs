//! A typed client for the [Hypixel API](https://api.hypixel.net).
//!
//! * [`Client`] issues requests through a [`Transport`] and turns successful
//!   responses into the records below.
//! * [`Player`] carries general profile data and per-game [`stats`], decoded
//!   by the decoders registered in a [`StatsRegistry`].
//! * [`skyblock`] holds the Skyblock economy: profiles and their bank,
//!   bazaar products and auction house pages. Auctioned items are decoded
//!   with [`itemnbt`].
//!
//! # Stats decoders
//!
//! The API reports stats as one flat object per game. Games with a decoder
//! registered come back typed; the rest are left out of [`Player::stats`]
//! and stay available in [`Player::raw_stats`].
//!
//! ```
//! use hypixel::stats::{bedwars::BedwarsStats, StatsRegistry};
//! use hypixel::Game;
//! use serde_json::json;
//!
//! let registry = StatsRegistry::standard();
//! let raw = json!({ "Bedwars": { "wins_bedwars": 10, "losses_bedwars": 2 } });
//!
//! let stats = registry.handle_all_json(raw.as_object().unwrap()).unwrap();
//! let bedwars = stats[&Game::Bedwars].downcast_ref::<BedwarsStats>().unwrap();
//! assert_eq!(bedwars.all_modes.winloss.wlr(), Some(5.0));
//! ```

pub mod client;
pub mod skyblock;
pub mod stats;

mod config;
mod error;
mod game;
mod player;

pub use client::{Client, Request, Response, Transport};
pub use config::Config;
pub use error::{Error, Result};
pub use game::Game;
pub use player::Player;
pub use stats::{Stats, StatsDecoder, StatsRegistry, UnknownGames};

#[cfg(test)]
mod test;
