/*
[INPUT]:  Order parameters and HTTP Basic credentials
[OUTPUT]: Order submission and cancellation results
[POS]:    HTTP layer - trading endpoints (require auth, form-encoded bodies)
[UPDATE]: When adding new trading endpoints or changing order flow
*/

use crate::http::{AuthenticatedClient, Result};
use crate::types::{
    CANCEL_ALL, CancelOrderRequest, CancelResult, OrderDirection, SubmitOrderRequest,
    SubmitOrderResult,
};
use reqwest::Method;

impl AuthenticatedClient {
    /// Submit a limit order in the given direction
    ///
    /// POST /order/{buy|sell}
    /// Not idempotent: every call may place a new order. A rejected order
    /// comes back as `Ok` with `success == false`.
    pub async fn submit_order(
        &self,
        direction: OrderDirection,
        market: &str,
        quantity: &str,
        price: &str,
    ) -> Result<SubmitOrderResult> {
        let form = SubmitOrderRequest {
            market: market.to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
        };
        let request = self.form_request(Method::POST, &["order", direction.as_str()], &form)?;
        self.send_json(request).await
    }

    /// POST /order/buy
    pub async fn submit_buy_order(
        &self,
        market: &str,
        quantity: &str,
        price: &str,
    ) -> Result<SubmitOrderResult> {
        self.submit_order(OrderDirection::Buy, market, quantity, price)
            .await
    }

    /// POST /order/sell
    pub async fn submit_sell_order(
        &self,
        market: &str,
        quantity: &str,
        price: &str,
    ) -> Result<SubmitOrderResult> {
        self.submit_order(OrderDirection::Sell, market, quantity, price)
            .await
    }

    /// Cancel an order by uuid
    ///
    /// POST /order/cancel
    /// The uuid is passed through as-is; [`CANCEL_ALL`] cancels everything.
    pub async fn cancel_order(&self, uuid: &str) -> Result<CancelResult> {
        let form = CancelOrderRequest {
            uuid: uuid.to_string(),
        };
        let request = self.form_request(Method::POST, &["order", "cancel"], &form)?;
        self.send_json(request).await
    }

    /// Cancel every open order in every market
    pub async fn cancel_all_orders(&self) -> Result<CancelResult> {
        self.cancel_order(CANCEL_ALL).await
    }
}
