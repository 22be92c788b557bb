/*
[INPUT]:  Private (authenticated) endpoint JSON payloads
[OUTPUT]: Typed order results, open orders and balances
[POS]:    Data layer - account/trading endpoint response types
[UPDATE]: When private endpoint payloads change
*/

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::OrderDirection;

/// Result of a buy or sell submission
///
/// `success == false` is a normal response carrying `error`; the optional
/// fields are absent in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitOrderResult {
    pub success: bool,
    /// Present when the order rests on the book. Missing or empty when it
    /// was filled immediately.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(
        rename = "bnewbalavail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub buy_balance_available: Option<String>,
    #[serde(
        rename = "snewbalavail",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub sell_balance_available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SubmitOrderResult {
    /// Whether part of the order is left open on the book
    pub fn is_resting(&self) -> bool {
        self.uuid.as_deref().is_some_and(|uuid| !uuid.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// An active order on the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenOrder {
    pub uuid: String,
    /// Unix UTC seconds
    pub date: i64,
    #[serde(rename = "type")]
    pub direction: OrderDirection,
    pub price: String,
    pub quantity: String,
    pub market: String,
}

impl OpenOrder {
    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.date, 0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceTable {
    pub success: bool,
    #[serde(default)]
    pub balances: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
