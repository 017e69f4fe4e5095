//! Request and response types for the Alpaca Trading API v2.
//!
//! ## Organization
//!
//! - [`enums`]: Closed enumerations with their wire tokens (side, type, time in force, ...)
//! - [`account`]: Account snapshot
//! - [`orders`]: New order body, order record, listing filters
//!
//! All enums are re-exported at the module root via `pub use enums::*`.

pub mod account;
pub mod enums;
pub mod orders;

pub use enums::*;
