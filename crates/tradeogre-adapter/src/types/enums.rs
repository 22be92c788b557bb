/*
[INPUT]:  Wire direction tokens ("buy" / "sell")
[OUTPUT]: OrderDirection enum backed by the shared codec
[POS]:    Data layer - enum definitions for API communication
[UPDATE]: When the exchange adds a new direction token
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::codec::{UnknownEnumToken, WireEnum};

/// Direction of an order or trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderDirection {
    Buy,
    Sell,
}

impl WireEnum for OrderDirection {
    const LABEL: &'static str = "order";
    const TOKENS: &'static [(&'static str, Self)] =
        &[("buy", OrderDirection::Buy), ("sell", OrderDirection::Sell)];
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        Self::codec().encode(self)
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderDirection {
    type Err = UnknownEnumToken;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::codec().decode(s)
    }
}

impl Serialize for OrderDirection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        crate::codec::wire::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for OrderDirection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        crate::codec::wire::deserialize(deserializer)
    }
}
