//! # alpaca-rs
//!
//! A Rust client library for the [Alpaca Trading API v2](https://docs.alpaca.markets/).
//!
//! Every call goes through one pipeline: the request's parameters are
//! encoded (query string for reads, JSON body for writes), signed with the
//! client's credentials, resolved against the live or paper base URL, sent
//! with a bounded retry on `429 Too Many Requests`, and decoded into either
//! the typed result or an [`AlpacaError`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use alpaca_rs::{AlpacaClient, Credentials};
//!
//! #[tokio::main]
//! async fn main() -> alpaca_rs::Result<()> {
//!     let client = AlpacaClient::paper(Credentials::api_key("key-id", "secret"))?;
//!     let account = client.get_account().await?;
//!     println!("{} {:?}", account.id, account.status);
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod codec;
pub mod config;
pub mod constants;
pub mod credentials;
pub mod error;
pub mod response;
pub mod retry;
pub mod transport;
pub mod types;

/// Re-export the main client type at crate root for convenience.
pub use client::AlpacaClient;
pub use config::{ClientConfig, Environment, RetryPolicy};
pub use credentials::Credentials;
/// Re-export the error types and Result alias.
pub use error::{AlpacaError, ApiError, Result};
/// Re-exported so callers can cancel in-flight requests without a direct dependency.
pub use tokio_util::sync::CancellationToken;
