use serde::Deserialize;
use serde_json::{Map, Value};

/// One bazaar product with its order book summary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "ProductJson")]
pub struct Product {
    pub product_id: String,
    pub sell_summary: Vec<Order>,
    pub buy_summary: Vec<Order>,
    pub sell_quick_status: QuickStatus,
    pub buy_quick_status: QuickStatus,
}

#[derive(Deserialize)]
struct ProductJson {
    product_id: String,
    #[serde(default)]
    sell_summary: Vec<Order>,
    #[serde(default)]
    buy_summary: Vec<Order>,
    quick_status: Map<String, Value>,
}

impl TryFrom<ProductJson> for Product {
    type Error = serde_json::Error;

    fn try_from(json: ProductJson) -> Result<Self, Self::Error> {
        Ok(Product {
            sell_quick_status: QuickStatus::from_prefixed(&json.quick_status, "sell")?,
            buy_quick_status: QuickStatus::from_prefixed(&json.quick_status, "buy")?,
            product_id: json.product_id,
            sell_summary: json.sell_summary,
            buy_summary: json.buy_summary,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub amount: u64,
    pub price_per_unit: f64,
    pub orders: u64,
}

/// Current price and volume for one side of a product.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct QuickStatus {
    pub price: f64,
    pub volume: u64,
    pub moving_week: u64,
    pub orders: u64,
}

impl QuickStatus {
    /// The API sends both sides in one object, as `sellPrice`, `buyPrice` and
    /// so on. Pick out one side by its prefix.
    pub fn from_prefixed(raw: &Map<String, Value>, prefix: &str) -> serde_json::Result<Self> {
        let side: Map<String, Value> = raw
            .iter()
            .filter_map(|(k, v)| Some((k.strip_prefix(prefix)?.to_owned(), v.clone())))
            .collect();

        serde_json::from_value(Value::Object(side))
    }
}
