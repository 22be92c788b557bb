/*
[INPUT]:  Market symbols (e.g. "XMR-BTC")
[OUTPUT]: Market data (listings, order books, tickers, trade history)
[POS]:    HTTP layer - public market data endpoints (no auth required)
[UPDATE]: When adding new public endpoints or changing response format
*/

use crate::http::{Result, TradeOgreClient};
use crate::types::{MarketListing, OrderBook, Ticker, TradeRecord};
use reqwest::Method;

impl TradeOgreClient {
    /// List every market with its 24h statistics, in server order
    ///
    /// GET /markets
    pub async fn list_markets(&self) -> Result<Vec<MarketListing>> {
        let request = self.request(Method::GET, &["markets"])?;
        self.send_json(request).await
    }

    /// Query the order book of a market
    ///
    /// GET /orders/{market}
    pub async fn get_order_book(&self, market: &str) -> Result<OrderBook> {
        let request = self.request(Method::GET, &["orders", market])?;
        self.send_json(request).await
    }

    /// Query the 24h ticker of a market
    ///
    /// GET /ticker/{market}
    pub async fn get_ticker(&self, market: &str) -> Result<Ticker> {
        let request = self.request(Method::GET, &["ticker", market])?;
        self.send_json(request).await
    }

    /// Last trades of a market, at most 100, newest first as sent by the server
    ///
    /// GET /history/{market}
    pub async fn get_trade_history(&self, market: &str) -> Result<Vec<TradeRecord>> {
        let request = self.request(Method::GET, &["history", market])?;
        self.send_json(request).await
    }
}
