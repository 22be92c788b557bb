/*
[INPUT]:  API key/secret from the environment and order parameters
[OUTPUT]: Balances, open orders and order submission results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use tradeogre_adapter::*;

/// Example: Trading operations (requires HTTP Basic credentials)
///
/// Reads TRADEOGRE_API_KEY / TRADEOGRE_API_SECRET. Places a real order only
/// when TRADEOGRE_PLACE_ORDER=1 is set as well.
#[tokio::main]
async fn main() {
    println!("=== TradeOgre Trading Example ===\n");

    let (key, secret) = match (
        std::env::var("TRADEOGRE_API_KEY"),
        std::env::var("TRADEOGRE_API_SECRET"),
    ) {
        (Ok(key), Ok(secret)) => (key, secret),
        _ => {
            eprintln!("Set TRADEOGRE_API_KEY and TRADEOGRE_API_SECRET to run this example");
            return;
        }
    };

    let client = match TradeOgreClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    let private = client.as_authenticated(key, secret);
    println!("✓ Authenticated client derived (shares the public client's transport)");

    match private.get_balances().await {
        Ok(table) if table.success => {
            for (currency, balance) in &table.balances {
                println!("  {currency}: {balance}");
            }
        }
        Ok(table) => println!("✗ Balances rejected: {:?}", table.error),
        Err(e) => println!("✗ Error: {}", e),
    }

    match private.get_orders(None).await {
        Ok(orders) => println!("✓ {} open orders", orders.len()),
        Err(e) => println!("✗ Error: {}", e),
    }

    if std::env::var("TRADEOGRE_PLACE_ORDER").as_deref() != Ok("1") {
        println!("\nSkipping order placement (set TRADEOGRE_PLACE_ORDER=1)");
        return;
    }

    match private
        .submit_buy_order("XMR-BTC", "0.01", "0.00000100")
        .await
    {
        Ok(result) if result.success => {
            println!("✓ Order accepted: {:?}", result.uuid);
            if let Some(uuid) = result.uuid.filter(|uuid| !uuid.is_empty()) {
                match private.cancel_order(&uuid).await {
                    Ok(cancel) => println!("✓ Cancelled: {}", cancel.success),
                    Err(e) => println!("✗ Error: {}", e),
                }
            }
        }
        Ok(result) => println!("✗ Order rejected: {:?}", result.error),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Trading example complete");
}
