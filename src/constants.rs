//! Constants for the Alpaca Trading API v2.
//!
//! Contains base URLs, header names, environment variable names and the
//! client defaults. These are used internally by
//! [`AlpacaClient`](crate::client::AlpacaClient) but are also exported for
//! advanced usage.

use std::time::Duration;

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Base URL for the live trading REST API.
pub const LIVE_BASE_URL: &str = "https://api.alpaca.markets";

/// Base URL for the paper (simulated) trading REST API.
pub const PAPER_BASE_URL: &str = "https://paper-api.alpaca.markets";

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

/// Header carrying the API key ID (`APCA-API-KEY-ID`).
pub const HEADER_API_KEY_ID: &str = "apca-api-key-id";

/// Header carrying the API secret key (`APCA-API-SECRET-KEY`).
pub const HEADER_API_SECRET_KEY: &str = "apca-api-secret-key";

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

/// Environment variable holding the API key ID.
pub const ENV_API_KEY_ID: &str = "APCA_API_KEY_ID";

/// Environment variable holding the API secret key.
pub const ENV_API_SECRET_KEY: &str = "APCA_API_SECRET_KEY";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Per-request HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Additional attempts made after a rate-limited (429) response.
pub const DEFAULT_RETRY_LIMIT: u32 = 3;

/// Fixed pause between rate-limited attempts.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
