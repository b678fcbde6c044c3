use chrono::{serde::ts_milliseconds, DateTime, Utc};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// A Skyblock profile, shared by its members.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub profile_id: String,
    /// Uuids of the members, in the order the API lists them.
    #[serde(rename = "members", deserialize_with = "member_ids")]
    pub player_ids: Vec<String>,
    pub cute_name: Option<String>,
    pub selected: Option<bool>,
    pub community_upgrades: Option<Value>,
    /// Missing when the members have turned off their bank API setting.
    pub banking: Option<Banking>,
}

fn member_ids<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    let members = Map::<String, Value>::deserialize(d)?;
    Ok(members.into_iter().map(|(id, _)| id).collect())
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Banking {
    pub balance: f64,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Transaction {
    #[serde(with = "ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
    pub action: TransactionType,
    pub initiator_name: String,
    pub amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionType {
    Deposit,
    Withdraw,
}
