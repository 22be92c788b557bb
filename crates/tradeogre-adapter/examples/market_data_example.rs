/*
[INPUT]:  Market symbol (e.g., "XMR-BTC")
[OUTPUT]: Market data (listings, ticker, order book, trades)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use tradeogre_adapter::*;

/// Example: Query market data (no authentication required)
#[tokio::main]
async fn main() {
    println!("=== TradeOgre Market Data Example ===\n");

    let client = match TradeOgreClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created (no auth required for public endpoints)\n");

    let market = "XMR-BTC";

    println!("Listing markets...");
    match client.list_markets().await {
        Ok(markets) => println!("✓ {} markets listed", markets.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying ticker for {}...", market);
    match client.get_ticker(market).await {
        Ok(ticker) => println!("✓ Ticker: {:?}", ticker),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying order book for {}...", market);
    match client.get_order_book(market).await {
        Ok(book) => println!(
            "✓ Order book: {} bids, {} asks",
            book.buy.len(),
            book.sell.len()
        ),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nQuerying trade history for {}...", market);
    match client.get_trade_history(market).await {
        Ok(trades) => {
            for trade in trades.iter().take(5) {
                println!(
                    "  {} {} {} @ {}",
                    trade.date, trade.direction, trade.quantity, trade.price
                );
            }
        }
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Market data example complete");
}
