//! The Skyblock economy: profiles and their bank, the bazaar and the auction
//! house.

pub mod auction;
pub mod bazaar;
pub mod profile;

pub use auction::{Auction, AuctionHouse, Bid};
pub use bazaar::{Order, Product, QuickStatus};
pub use profile::{Banking, Profile, Transaction, TransactionType};
