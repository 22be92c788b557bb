/*
[INPUT]:  Optional market filter, currency symbol and HTTP Basic credentials
[OUTPUT]: User account data (open orders, balances)
[POS]:    HTTP layer - account endpoints (require auth)
[UPDATE]: When adding new account endpoints or changing parameters
*/

// ### Account Endpoints

use crate::http::{AuthenticatedClient, Result};
use crate::types::{AssetBalance, BalanceRequest, BalanceTable, OpenOrder, QueryOrdersRequest};
use reqwest::Method;

impl AuthenticatedClient {
    /// Query active orders, for one market or for all of them
    ///
    /// POST /account/orders
    /// Without a market the form body is empty and the server returns every
    /// open order.
    pub async fn get_orders(&self, market: Option<&str>) -> Result<Vec<OpenOrder>> {
        let form = QueryOrdersRequest {
            market: market.map(str::to_string),
        };
        let request = self.form_request(Method::POST, &["account", "orders"], &form)?;
        self.send_json(request).await
    }

    /// Query the balance of one currency
    ///
    /// POST /account/balance
    pub async fn get_balance(&self, currency: &str) -> Result<AssetBalance> {
        let form = BalanceRequest {
            currency: currency.to_string(),
        };
        let request = self.form_request(Method::POST, &["account", "balance"], &form)?;
        self.send_json(request).await
    }

    /// Query the balances of every currency
    ///
    /// GET /account/balances
    pub async fn get_balances(&self) -> Result<BalanceTable> {
        let request = self.request(Method::GET, &["account", "balances"])?;
        self.send_json(request).await
    }
}
