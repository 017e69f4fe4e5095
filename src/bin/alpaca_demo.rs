//! Binary that reads API keys from the environment, prints the paper
//! trading account, and optionally submits a sample limit order.
//!
//! # Usage
//!
//! ```sh
//! export APCA_API_KEY_ID="your-key-id"
//! export APCA_API_SECRET_KEY="your-secret-key"
//! cargo run --bin alpaca_demo --features cli
//! cargo run --bin alpaca_demo --features cli -- --place-order
//! ```
//!
//! Set `RUST_LOG=alpaca_rs=debug` to see request and response bodies.

use std::env;

use alpaca_rs::config::{ClientConfig, Environment};
use alpaca_rs::types::{OrderClass, OrderSide, OrderType, PositionIntent, TimeInForce};
use alpaca_rs::{AlpacaClient, Credentials};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> alpaca_rs::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let place_order = env::args().any(|arg| arg == "--place-order");

    let credentials = Credentials::from_env()?;
    let client = AlpacaClient::with_config(
        ClientConfig::new(Environment::Paper).with_log_bodies(true),
    )?
    .with_credentials(credentials);

    println!("Fetching account from {}…", client.base_url());
    let account = client.get_account().await?;
    println!("{account:#?}");

    if !place_order {
        println!("Pass --place-order to submit a sample AAPL limit order.");
        return Ok(());
    }

    println!("Submitting AAPL limit buy…");
    let result = client
        .orders()
        .create_order()
        .symbol("AAPL")
        .qty(Decimal::ONE)
        .side(OrderSide::Buy)
        .order_type(OrderType::Limit)
        .time_in_force(TimeInForce::Day)
        .order_class(OrderClass::Simple)
        .limit_price(Decimal::from(170))
        .position_intent(PositionIntent::BuyToOpen)
        .send()
        .await;

    match result {
        Ok(order) => println!("{order:#?}"),
        Err(e) => eprintln!("Error: {e}"),
    }

    Ok(())
}
