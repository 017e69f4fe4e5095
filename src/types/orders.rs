#![allow(missing_docs)]
//! Order types: new order body, order record, listing filters.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::enums::*;

// ---------------------------------------------------------------------------
// New Order
// ---------------------------------------------------------------------------

/// One leg of a multi-leg (`mleg`) order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leg {
    pub symbol: String,
    pub side: OrderSide,
    pub ratio_qty: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_intent: Option<PositionIntent>,
}

impl Leg {
    pub fn new(symbol: impl Into<String>, side: OrderSide, ratio_qty: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            ratio_qty,
            position_intent: None,
        }
    }

    pub fn position_intent(mut self, intent: PositionIntent) -> Self {
        self.position_intent = Some(intent);
        self
    }
}

/// Take-profit leg of a bracket or OCO order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TakeProfit {
    pub limit_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_intent: Option<PositionIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_instructions: Option<AdvancedInstruction>,
}

impl TakeProfit {
    pub fn new(limit_price: Decimal) -> Self {
        Self {
            limit_price,
            ..Default::default()
        }
    }

    pub fn stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    pub fn position_intent(mut self, intent: PositionIntent) -> Self {
        self.position_intent = Some(intent);
        self
    }

    pub fn advanced_instructions(mut self, instructions: AdvancedInstruction) -> Self {
        self.advanced_instructions = Some(instructions);
        self
    }
}

/// Stop-loss leg of a bracket or OCO order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopLoss {
    pub stop_price: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
}

/// Algorithmic execution instructions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdvancedInstruction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<OrderAlgorithm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<Destination>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_percentage: Option<Decimal>,
}

/// Request body for submitting an order.
///
/// Used by `POST /v2/orders`. Built and validated by
/// [`CreateOrderRequest`](crate::api::orders::CreateOrderRequest).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewOrder {
    /// Absent for multi-leg orders, whose symbols live on the legs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qty: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notional: Option<Decimal>,
    pub side: OrderSide,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub time_in_force: TimeInForce,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trail_percent: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended_hours: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_class: Option<OrderClass>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub legs: Vec<Leg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub take_profit: Option<TakeProfit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_loss: Option<StopLoss>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_intent: Option<PositionIntent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advanced_instructions: Option<AdvancedInstruction>,
}

/// Order size: a share/contract quantity or a dollar amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAmount {
    Quantity(Decimal),
    Notional(Decimal),
}

// ---------------------------------------------------------------------------
// Order
// ---------------------------------------------------------------------------

/// An order as returned by the order endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: String,
    pub client_order_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub filled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expired_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub canceled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub failed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub replaced_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub replaced_by: Option<String>,
    #[serde(default)]
    pub replaces: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub symbol: String,
    #[serde(default)]
    pub asset_class: Option<String>,
    #[serde(default)]
    pub notional: Option<Decimal>,
    #[serde(default)]
    pub qty: Option<Decimal>,
    #[serde(default)]
    pub filled_qty: Option<Decimal>,
    #[serde(default)]
    pub filled_avg_price: Option<Decimal>,
    #[serde(default)]
    pub order_class: Option<String>,
    /// `None` when the server reports a type this crate does not know.
    #[serde(rename = "type", default, deserialize_with = "known_token")]
    pub order_type: Option<OrderType>,
    /// `None` for multi-leg parents or unrecognized sides.
    #[serde(default, deserialize_with = "known_token")]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub time_in_force: Option<String>,
    #[serde(default)]
    pub limit_price: Option<Decimal>,
    #[serde(default)]
    pub stop_price: Option<Decimal>,
    pub status: OrderStatus,
    #[serde(default)]
    pub extended_hours: bool,
    #[serde(default)]
    pub legs: Option<Vec<Order>>,
    #[serde(default)]
    pub trail_percent: Option<Decimal>,
    #[serde(default)]
    pub trail_price: Option<Decimal>,
    #[serde(default)]
    pub hwm: Option<Decimal>,
    #[serde(default)]
    pub position_intent: Option<String>,
}

/// Parse a wire token leniently: null, empty or unrecognized values become `None`.
fn known_token<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token.and_then(|t| t.parse().ok()))
}

// ---------------------------------------------------------------------------
// List / Cancel
// ---------------------------------------------------------------------------

/// Query parameters for `GET /v2/orders`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListOrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderQueryStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub until: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<SortDirection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<bool>,
    /// Comma-separated symbol filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbols: Option<String>,
}

/// Per-order outcome of `DELETE /v2/orders`.
#[derive(Debug, Clone, Deserialize)]
pub struct CancelStatus {
    pub id: String,
    pub status: u16,
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}
