//! Account types.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::enums::{AccountStatus, OptionsLevel};

/// Trading account snapshot.
///
/// Returned by `GET /v2/account`. Monetary values arrive as JSON strings and
/// are decoded into [`Decimal`] without going through `f64`.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    #[serde(default)]
    pub account_number: Option<String>,
    pub status: AccountStatus,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub cash: Option<Decimal>,
    #[serde(default)]
    pub portfolio_value: Option<Decimal>,
    #[serde(default)]
    pub non_marginable_buying_power: Option<Decimal>,
    #[serde(default)]
    pub accrued_fees: Option<Decimal>,
    #[serde(default)]
    pub pending_transfer_in: Option<Decimal>,
    #[serde(default)]
    pub pending_transfer_out: Option<Decimal>,
    #[serde(default)]
    pub pattern_day_trader: bool,
    #[serde(default)]
    pub trade_suspended_by_user: bool,
    #[serde(default)]
    pub trading_blocked: bool,
    #[serde(default)]
    pub transfers_blocked: bool,
    #[serde(default)]
    pub account_blocked: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub shorting_enabled: bool,
    #[serde(default)]
    pub long_market_value: Option<Decimal>,
    #[serde(default)]
    pub short_market_value: Option<Decimal>,
    #[serde(default)]
    pub equity: Option<Decimal>,
    #[serde(default)]
    pub last_equity: Option<Decimal>,
    #[serde(default)]
    pub multiplier: Option<Decimal>,
    #[serde(default)]
    pub buying_power: Option<Decimal>,
    #[serde(default)]
    pub initial_margin: Option<Decimal>,
    #[serde(default)]
    pub maintenance_margin: Option<Decimal>,
    #[serde(default)]
    pub sma: Option<Decimal>,
    #[serde(default)]
    pub daytrade_count: Option<i64>,
    #[serde(default)]
    pub balance_asof: Option<String>,
    #[serde(default)]
    pub last_maintenance_margin: Option<Decimal>,
    #[serde(default)]
    pub daytrading_buying_power: Option<Decimal>,
    #[serde(default)]
    pub regt_buying_power: Option<Decimal>,
    #[serde(default)]
    pub options_buying_power: Option<Decimal>,
    #[serde(default)]
    pub options_approved_level: Option<OptionsLevel>,
    #[serde(default)]
    pub options_trading_level: Option<OptionsLevel>,
    #[serde(default)]
    pub intraday_adjustment: Option<Decimal>,
    #[serde(default)]
    pub pending_reg_taf_fees: Option<Decimal>,
}
