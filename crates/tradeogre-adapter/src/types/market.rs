/*
[INPUT]:  Public market-data JSON payloads
[OUTPUT]: Typed market summaries, order books, tickers and trades
[POS]:    Data layer - public endpoint response types
[UPDATE]: When public endpoint payloads change
*/

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::OrderDirection;

/// Price statistics for one market, every value verbatim from the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketSummary {
    #[serde(rename = "initialprice")]
    pub initial_price: String,
    pub price: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub bid: String,
    pub ask: String,
}

/// One element of the markets listing: symbol -> summary
pub type MarketListing = BTreeMap<String, MarketSummary>;

/// A single price -> quantity entry of a ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: String,
    pub quantity: String,
}

/// One side of an order book, in the order the server sent it
///
/// Decoded from a JSON object keyed by price. Keys are kept as written and
/// must be unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ladder(Vec<PriceLevel>);

impl Ladder {
    pub fn new(levels: Vec<PriceLevel>) -> Self {
        Self(levels)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Quantity listed at exactly `price` (string comparison)
    pub fn get(&self, price: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|level| level.price == price)
            .map(|level| level.quantity.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceLevel> {
        self.0.iter()
    }

    pub fn levels(&self) -> &[PriceLevel] {
        &self.0
    }

    pub fn into_levels(self) -> Vec<PriceLevel> {
        self.0
    }
}

impl<'a> IntoIterator for &'a Ladder {
    type Item = &'a PriceLevel;
    type IntoIter = std::slice::Iter<'a, PriceLevel>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Ladder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for level in &self.0 {
            map.serialize_entry(&level.price, &level.quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Ladder {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LadderVisitor;

        impl<'de> Visitor<'de> for LadderVisitor {
            type Value = Ladder;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of price to quantity")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Ladder, A::Error>
            where
                A: MapAccess<'de>,
            {
                let capacity = access.size_hint().unwrap_or(0);
                let mut levels: Vec<PriceLevel> = Vec::with_capacity(capacity);
                let mut seen: HashSet<String> = HashSet::with_capacity(capacity);
                while let Some((price, quantity)) = access.next_entry::<String, String>()? {
                    if !seen.insert(price.clone()) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate price level {price:?}"
                        )));
                    }
                    levels.push(PriceLevel { price, quantity });
                }
                Ok(Ladder(levels))
            }
        }

        deserializer.deserialize_map(LadderVisitor)
    }
}

/// Order book for one market
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBook {
    /// Sent as the string `"true"` on this endpoint, unlike the boolean
    /// `success` of every other payload.
    pub success: String,
    #[serde(default)]
    pub buy: Ladder,
    #[serde(default)]
    pub sell: Ladder,
}

impl OrderBook {
    pub fn is_success(&self) -> bool {
        self.success == "true"
    }
}

/// 24h ticker; `initial_price` is the price 24 hours ago
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticker {
    pub success: bool,
    #[serde(rename = "initialprice")]
    pub initial_price: String,
    pub price: String,
    pub high: String,
    pub low: String,
    pub volume: String,
    pub bid: String,
    pub ask: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Unix UTC seconds
    pub date: i64,
    #[serde(rename = "type")]
    pub direction: OrderDirection,
    pub price: String,
    pub quantity: String,
}

impl TradeRecord {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn market_listing_keeps_values_verbatim() {
        let body = r#"[
            {"XMR-BTC":{"initialprice":"0.00300000","price":"0.00310000","high":"0.00320000","low":"0.00290000","volume":"1.20000000","bid":"0.00305000","ask":"0.00311000"}},
            {"LTC-BTC":{"initialprice":"0.001","price":"0.0010","high":"0.0011","low":"0.0009","volume":"0","bid":"0.00099","ask":"0.00101"}}
        ]"#;

        let listings: Vec<MarketListing> = serde_json::from_str(body).unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].keys().collect::<Vec<_>>(), vec!["XMR-BTC"]);
        assert_eq!(listings[1].keys().collect::<Vec<_>>(), vec!["LTC-BTC"]);
        let xmr = &listings[0]["XMR-BTC"];
        assert_eq!(xmr.initial_price, "0.00300000");
        assert_eq!(xmr.volume, "1.20000000");
        assert_eq!(listings[1]["LTC-BTC"].price, "0.0010");
    }

    #[test]
    fn ladder_preserves_server_order_and_keys() {
        let body = r#"{"success":"true","buy":{"0.0300":"1","0.01":"5","0.0200":"2"},"sell":{"0.02":"3"}}"#;

        let book: OrderBook = serde_json::from_str(body).unwrap();

        assert!(book.is_success());
        let prices: Vec<&str> = book.buy.iter().map(|level| level.price.as_str()).collect();
        assert_eq!(prices, vec!["0.0300", "0.01", "0.0200"]);
        assert_eq!(book.buy.get("0.01"), Some("5"));
        assert_eq!(book.buy.get("0.0100"), None);
        assert_eq!(book.sell.len(), 1);
    }

    #[test]
    fn ladder_rejects_duplicate_prices() {
        let body = r#"{"success":"true","buy":{"0.01":"5","0.01":"6"},"sell":{}}"#;

        let err = serde_json::from_str::<OrderBook>(body).unwrap_err();
        assert!(err.to_string().contains("duplicate price level \"0.01\""));
    }

    #[test]
    fn deep_ladder_decodes_and_late_duplicate_is_caught() {
        let levels: Vec<String> = (0..20_000).map(|i| format!("\"0.{i:05}\":\"1\"")).collect();
        let body = format!(r#"{{"success":"true","buy":{{{}}},"sell":{{}}}}"#, levels.join(","));

        let book: OrderBook = serde_json::from_str(&body).unwrap();
        assert_eq!(book.buy.len(), 20_000);
        assert_eq!(book.buy.levels()[19_999].price, "0.19999");

        let duplicated = format!(
            r#"{{"success":"true","buy":{{{},"0.00000":"2"}},"sell":{{}}}}"#,
            levels.join(",")
        );
        let err = serde_json::from_str::<OrderBook>(&duplicated).unwrap_err();
        assert!(err.to_string().contains("duplicate price level \"0.00000\""));
    }

    #[test]
    fn ladder_serializes_back_to_object() {
        let ladder = Ladder::new(vec![
            PriceLevel { price: "0.2".into(), quantity: "1".into() },
            PriceLevel { price: "0.1".into(), quantity: "2".into() },
        ]);
        assert_eq!(serde_json::to_string(&ladder).unwrap(), r#"{"0.2":"1","0.1":"2"}"#);
    }

    #[test]
    fn order_book_success_is_a_string() {
        let boolean = json!({"success": true, "buy": {}, "sell": {}});
        assert!(serde_json::from_value::<OrderBook>(boolean).is_err());

        let failed = json!({"success": "false", "buy": {}, "sell": {}});
        let book: OrderBook = serde_json::from_value(failed).unwrap();
        assert!(!book.is_success());
    }

    #[test]
    fn ticker_ignores_unknown_fields() {
        let value = json!({
            "success": true,
            "initialprice": "0.1",
            "price": "0.2",
            "high": "0.3",
            "low": "0.05",
            "volume": "12.5",
            "bid": "0.19",
            "ask": "0.21",
            "change": "+100%"
        });

        let ticker: Ticker = serde_json::from_value(value).unwrap();
        assert!(ticker.success);
        assert_eq!(ticker.initial_price, "0.1");
        assert_eq!(ticker.ask, "0.21");
    }

    #[test]
    fn trade_record_decodes_direction() {
        let body = r#"[{"date":1700000000,"type":"sell","price":"0.003","quantity":"1.5"},{"date":1699999990,"type":"buy","price":"0.002","quantity":"2"}]"#;

        let trades: Vec<TradeRecord> = serde_json::from_str(body).unwrap();

        assert_eq!(trades[0].direction, OrderDirection::Sell);
        assert_eq!(trades[1].direction, OrderDirection::Buy);
        assert_eq!(trades[0].timestamp().unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn trade_record_rejects_unknown_direction() {
        let body = r#"{"date":1,"type":"hold","price":"1","quantity":"1"}"#;

        let err = serde_json::from_str::<TradeRecord>(body).unwrap_err();
        assert!(err.to_string().contains("unknown order token \"hold\""));
    }
}
