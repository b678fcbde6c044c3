//! Auction house pages.
//!
//! Auctioned items arrive as gzipped, base64 encoded NBT. A page holds up to
//! a thousand auctions, so their items are decoded in parallel.

use chrono::{serde::ts_milliseconds, DateTime, Utc};
use log::debug;
use rayon::prelude::*;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

/// One page of active auctions.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionHouse {
    pub page: u32,
    pub total_pages: u32,
    pub total_auctions: u64,
    pub last_updated: DateTime<Utc>,
    pub auctions: Vec<Auction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Auction {
    pub uuid: String,
    pub auctioneer: String,
    pub profile_id: String,
    pub coop: Vec<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub item_name: String,
    pub item_lore: String,
    pub extra: String,
    pub category: String,
    pub tier: String,
    pub starting_bid: u64,
    /// The decoded item. The root compound holds an `i` list of item stacks.
    pub item_data: itemnbt::Value,
    pub claimed: bool,
    pub claimed_bidders: Vec<Value>,
    pub highest_bid_amount: u64,
    pub bids: Vec<Bid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Bid {
    pub auction_id: String,
    pub bidder: String,
    pub profile_id: String,
    pub amount: u64,
    #[serde(with = "ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AuctionHouseJson {
    page: u32,
    total_pages: u32,
    total_auctions: u64,
    #[serde(with = "ts_milliseconds")]
    last_updated: DateTime<Utc>,
    #[serde(default)]
    auctions: Vec<AuctionJson>,
}

#[derive(Deserialize)]
struct AuctionJson {
    uuid: String,
    auctioneer: String,
    profile_id: String,
    #[serde(default)]
    coop: Vec<String>,
    #[serde(with = "ts_milliseconds")]
    start: DateTime<Utc>,
    #[serde(with = "ts_milliseconds")]
    end: DateTime<Utc>,
    item_name: String,
    #[serde(default)]
    item_lore: String,
    #[serde(default)]
    extra: String,
    #[serde(default)]
    category: String,
    #[serde(default)]
    tier: String,
    starting_bid: u64,
    item_bytes: ItemBytes,
    #[serde(default)]
    claimed: bool,
    #[serde(default)]
    claimed_bidders: Vec<Value>,
    #[serde(default)]
    highest_bid_amount: u64,
    #[serde(default)]
    bids: Vec<Bid>,
}

/// Item data is sent either as the blob itself or wrapped in an object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ItemBytes {
    Blob(String),
    Wrapped { data: String },
}

impl ItemBytes {
    fn blob(&self) -> &str {
        match self {
            ItemBytes::Blob(data) | ItemBytes::Wrapped { data } => data,
        }
    }
}

impl AuctionHouse {
    /// Build a page from a `/skyblock/auctions` response. Fails if any
    /// auction's item cannot be decoded. Items are decoded in parallel, so
    /// when several are bad the error may name any one of them.
    pub fn from_json(raw: Value) -> Result<AuctionHouse> {
        let json: AuctionHouseJson = serde_json::from_value(raw)?;
        debug!(
            "decoding {} auctions of page {}/{}",
            json.auctions.len(),
            json.page,
            json.total_pages
        );

        let auctions = json
            .auctions
            .into_par_iter()
            .map(Auction::from_json)
            .collect::<Result<Vec<_>>>()?;

        Ok(AuctionHouse {
            page: json.page,
            total_pages: json.total_pages,
            total_auctions: json.total_auctions,
            last_updated: json.last_updated,
            auctions,
        })
    }
}

impl Auction {
    fn from_json(json: AuctionJson) -> Result<Auction> {
        let item_data = itemnbt::decode(json.item_bytes.blob()).map_err(|source| Error::Item {
            auction: json.uuid.clone(),
            source,
        })?;

        Ok(Auction {
            uuid: json.uuid,
            auctioneer: json.auctioneer,
            profile_id: json.profile_id,
            coop: json.coop,
            start: json.start,
            end: json.end,
            item_name: json.item_name,
            item_lore: json.item_lore,
            extra: json.extra,
            category: json.category,
            tier: json.tier,
            starting_bid: json.starting_bid,
            item_data,
            claimed: json.claimed,
            claimed_bidders: json.claimed_bidders,
            highest_bid_amount: json.highest_bid_amount,
            bids: json.bids,
        })
    }
}
