//! Shared enum types that map directly to Alpaca API string values.
//!
//! Every enum serializes to its exact wire token and implements
//! [`FromStr`], so a string from outside the program (a CLI flag, a config
//! file) is checked against the allowed set before a request is built.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AlpacaError;

/// Declares a closed enum with its wire tokens, plus `as_str`, `Display`
/// and a validating `FromStr`.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $wire)] $variant ),+
        }

        impl $name {
            /// All accepted values.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// The wire token.
            pub fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = AlpacaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    other => Err(AlpacaError::Validation(format!(
                        "{other:?} is not a valid {}; expected one of: {}",
                        stringify!($name),
                        [$($wire),+].join(", "),
                    ))),
                }
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Order Side
// ---------------------------------------------------------------------------

wire_enum! {
    /// Buy or sell side of an order.
    OrderSide {
        Buy => "buy",
        Sell => "sell",
    }
}

// ---------------------------------------------------------------------------
// Order Type
// ---------------------------------------------------------------------------

wire_enum! {
    /// Type of order.
    OrderType {
        Market => "market",
        Limit => "limit",
        Stop => "stop",
        StopLimit => "stop_limit",
        TrailingStop => "trailing_stop",
    }
}

// ---------------------------------------------------------------------------
// Time In Force
// ---------------------------------------------------------------------------

wire_enum! {
    /// How long an order stays working.
    TimeInForce {
        /// Valid for the trading day (equities and options).
        Day => "day",
        /// Good until cancelled.
        Gtc => "gtc",
        /// Executes in the opening auction.
        Opg => "opg",
        /// Immediate or cancel.
        Ioc => "ioc",
        /// Fill or kill.
        Fok => "fok",
        /// Executes in the closing auction.
        Cls => "cls",
    }
}

// ---------------------------------------------------------------------------
// Order Class
// ---------------------------------------------------------------------------

wire_enum! {
    /// Order class; omit for a simple order.
    OrderClass {
        Simple => "simple",
        /// Entry plus take-profit and stop-loss legs.
        Bracket => "bracket",
        /// One-cancels-other.
        Oco => "oco",
        /// One-triggers-other.
        Oto => "oto",
        /// Multi-leg options order.
        Mleg => "mleg",
    }
}

// ---------------------------------------------------------------------------
// Position Intent
// ---------------------------------------------------------------------------

wire_enum! {
    /// Whether an options order opens or closes a position.
    PositionIntent {
        BuyToOpen => "buy_to_open",
        BuyToClose => "buy_to_close",
        SellToOpen => "sell_to_open",
        SellToClose => "sell_to_close",
    }
}

// ---------------------------------------------------------------------------
// Advanced Instructions
// ---------------------------------------------------------------------------

wire_enum! {
    /// Execution algorithm for advanced instructions.
    OrderAlgorithm {
        Vwap => "VWAP",
        Twap => "TWAP",
        Tma => "TMA",
    }
}

wire_enum! {
    /// Routing destination for advanced instructions.
    Destination {
        Nyse => "NYSE",
        Nasdaq => "NASDAQ",
        Arca => "ARCA",
    }
}

// ---------------------------------------------------------------------------
// Order listing
// ---------------------------------------------------------------------------

wire_enum! {
    /// Status filter for listing orders.
    OrderQueryStatus {
        Open => "open",
        Closed => "closed",
        All => "all",
    }
}

wire_enum! {
    /// Chronological sort order.
    SortDirection {
        Asc => "asc",
        Desc => "desc",
    }
}

// ---------------------------------------------------------------------------
// Order Status
// ---------------------------------------------------------------------------

/// Status of an order, as reported by the API.
///
/// Statuses this crate does not know about decode as [`OrderStatus::Unknown`]
/// instead of failing the whole response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    DoneForDay,
    Canceled,
    Expired,
    Replaced,
    PendingCancel,
    PendingReplace,
    Accepted,
    PendingNew,
    AcceptedForBidding,
    Stopped,
    Rejected,
    Suspended,
    Calculated,
    #[serde(other)]
    Unknown,
}

impl OrderStatus {
    /// No further fills or changes can happen.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Filled | Self::Canceled | Self::Expired | Self::Replaced | Self::Rejected
        )
    }
}

// ---------------------------------------------------------------------------
// Account Status
// ---------------------------------------------------------------------------

/// Lifecycle status of a brokerage account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Onboarding,
    SubmissionFailed,
    Submitted,
    AccountUpdated,
    ApprovalPending,
    Active,
    Rejected,
    #[serde(other)]
    Unknown,
}

// ---------------------------------------------------------------------------
// Options Level
// ---------------------------------------------------------------------------

/// Options trading level granted to an account.
///
/// Levels this crate does not know about decode as [`OptionsLevel::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(from = "u8")]
pub enum OptionsLevel {
    /// Options trading disabled.
    Disabled,
    /// Covered calls and cash-secured puts.
    CoveredCallCashSecuredPut,
    /// Long calls and puts.
    LongCallPut,
    /// Spreads and straddles.
    SpreadStraddle,
    /// Any other level the server reports.
    Other(u8),
}

impl OptionsLevel {
    /// The numeric level as sent by the API.
    pub fn level(self) -> u8 {
        match self {
            Self::Disabled => 0,
            Self::CoveredCallCashSecuredPut => 1,
            Self::LongCallPut => 2,
            Self::SpreadStraddle => 3,
            Self::Other(level) => level,
        }
    }
}

impl From<u8> for OptionsLevel {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::Disabled,
            1 => Self::CoveredCallCashSecuredPut,
            2 => Self::LongCallPut,
            3 => Self::SpreadStraddle,
            other => Self::Other(other),
        }
    }
}
