//! REST API façades.
//!
//! Each sub-module defines a façade borrowed from
//! [`AlpacaClient`](crate::client::AlpacaClient) plus one request builder per
//! endpoint. Builders start with every optional field absent, check required
//! fields when sent, and run the client's request pipeline. Shortcut methods
//! for the common calls are added to `AlpacaClient` directly.
//!
//! ## Usage
//!
//! ```no_run
//! use alpaca_rs::{AlpacaClient, Credentials};
//! use alpaca_rs::types::{OrderSide, OrderType, TimeInForce};
//! use rust_decimal::Decimal;
//!
//! # #[tokio::main]
//! # async fn main() -> alpaca_rs::Result<()> {
//! let client = AlpacaClient::paper(Credentials::from_env()?)?;
//! let account = client.get_account().await?;
//! let order = client
//!     .orders()
//!     .create_order()
//!     .symbol("AAPL")
//!     .qty(Decimal::ONE)
//!     .side(OrderSide::Buy)
//!     .order_type(OrderType::Limit)
//!     .time_in_force(TimeInForce::Day)
//!     .limit_price(Decimal::from(170))
//!     .send()
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Endpoints | Description |
//! |---|---|---|
//! | [`account`] | 1 | Account snapshot |
//! | [`orders`] | 6 | Submit, list, get, cancel |

pub mod account;
pub mod orders;
