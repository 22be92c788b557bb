/*
[INPUT]:  Caller-supplied order/account parameters
[OUTPUT]: Form-encodable request bodies
[POS]:    Data layer - request parameter types for private endpoints
[UPDATE]: When private endpoint parameters change
*/

use serde::{Deserialize, Serialize};

/// `uuid` value that cancels every open order across all markets
pub const CANCEL_ALL: &str = "all";

/// Body of `order/buy` and `order/sell`
///
/// Quantity and price are passed through untouched; the exchange decides
/// whether they are acceptable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitOrderRequest {
    pub market: String,
    pub quantity: String,
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelOrderRequest {
    pub uuid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryOrdersRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceRequest {
    pub currency: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_order_form_keeps_field_order() {
        let req = SubmitOrderRequest {
            market: "XMR-BTC".to_string(),
            quantity: "1.5".to_string(),
            price: "0.00420000".to_string(),
        };

        let body = serde_urlencoded::to_string(&req).unwrap();
        assert_eq!(body, "market=XMR-BTC&quantity=1.5&price=0.00420000");
    }

    #[test]
    fn query_orders_form_omits_missing_market() {
        let all = serde_urlencoded::to_string(QueryOrdersRequest::default()).unwrap();
        assert_eq!(all, "");

        let one = serde_urlencoded::to_string(QueryOrdersRequest {
            market: Some("XMR-BTC".to_string()),
        })
        .unwrap();
        assert_eq!(one, "market=XMR-BTC");
    }

    #[test]
    fn cancel_form_escapes_values() {
        let req = CancelOrderRequest {
            uuid: "a b&c".to_string(),
        };
        assert_eq!(serde_urlencoded::to_string(&req).unwrap(), "uuid=a+b%26c");
    }
}
