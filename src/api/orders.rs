//! Order management endpoints.

use chrono::{DateTime, Utc};
use reqwest::Method;
use rust_decimal::Decimal;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::AlpacaClient;
use crate::codec::Payload;
use crate::error::{AlpacaError, Result};
use crate::types::enums::*;
use crate::types::orders::*;

/// Order façade, obtained from [`AlpacaClient::orders`].
#[derive(Debug, Clone, Copy)]
pub struct OrderService<'a> {
    client: &'a AlpacaClient,
}

impl<'a> OrderService<'a> {
    pub(crate) fn new(client: &'a AlpacaClient) -> Self {
        Self { client }
    }

    /// **Endpoint:** `POST /v2/orders`
    pub fn create_order(&self) -> CreateOrderRequest<'a> {
        CreateOrderRequest::new(self.client)
    }

    /// **Endpoint:** `GET /v2/orders`
    pub fn list_orders(&self) -> ListOrdersRequest<'a> {
        ListOrdersRequest {
            client: self.client,
            query: ListOrdersQuery::default(),
        }
    }

    /// **Endpoint:** `GET /v2/orders/{order_id}`
    pub fn get_order(&self, order_id: impl Into<String>) -> GetOrderRequest<'a> {
        GetOrderRequest {
            client: self.client,
            order_id: order_id.into(),
            nested: None,
        }
    }

    /// **Endpoint:** `GET /v2/orders:by_client_order_id`
    pub fn get_order_by_client_id(
        &self,
        client_order_id: impl Into<String>,
    ) -> GetOrderByClientIdRequest<'a> {
        GetOrderByClientIdRequest {
            client: self.client,
            client_order_id: client_order_id.into(),
        }
    }

    /// **Endpoint:** `DELETE /v2/orders/{order_id}`
    pub fn cancel_order(&self, order_id: impl Into<String>) -> CancelOrderRequest<'a> {
        CancelOrderRequest {
            client: self.client,
            order_id: order_id.into(),
        }
    }

    /// **Endpoint:** `DELETE /v2/orders`
    pub fn cancel_all_orders(&self) -> CancelAllOrdersRequest<'a> {
        CancelAllOrdersRequest {
            client: self.client,
        }
    }
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

/// Builder for `POST /v2/orders`.
///
/// `side`, `order_type` and `time_in_force` are required; sending without
/// one of them fails with [`AlpacaError::Validation`] and nothing goes over
/// the network. Everything else is left off the wire unless set, including
/// `symbol`, which multi-leg orders carry on their legs instead.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct CreateOrderRequest<'a> {
    client: &'a AlpacaClient,
    symbol: Option<String>,
    amount: Option<OrderAmount>,
    side: Option<OrderSide>,
    order_type: Option<OrderType>,
    time_in_force: Option<TimeInForce>,
    limit_price: Option<Decimal>,
    stop_price: Option<Decimal>,
    trail_price: Option<Decimal>,
    trail_percent: Option<Decimal>,
    extended_hours: Option<bool>,
    client_order_id: Option<String>,
    order_class: Option<OrderClass>,
    legs: Vec<Leg>,
    take_profit: Option<TakeProfit>,
    stop_loss: Option<StopLoss>,
    position_intent: Option<PositionIntent>,
    advanced_instructions: Option<AdvancedInstruction>,
}

impl<'a> CreateOrderRequest<'a> {
    fn new(client: &'a AlpacaClient) -> Self {
        Self {
            client,
            symbol: None,
            amount: None,
            side: None,
            order_type: None,
            time_in_force: None,
            limit_price: None,
            stop_price: None,
            trail_price: None,
            trail_percent: None,
            extended_hours: None,
            client_order_id: None,
            order_class: None,
            legs: Vec::new(),
            take_profit: None,
            stop_loss: None,
            position_intent: None,
            advanced_instructions: None,
        }
    }

    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Order size in shares or contracts. Replaces any notional amount.
    pub fn qty(mut self, qty: Decimal) -> Self {
        self.amount = Some(OrderAmount::Quantity(qty));
        self
    }

    /// Order size in dollars. Replaces any quantity.
    pub fn notional(mut self, notional: Decimal) -> Self {
        self.amount = Some(OrderAmount::Notional(notional));
        self
    }

    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = Some(order_type);
        self
    }

    pub fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    pub fn limit_price(mut self, price: Decimal) -> Self {
        self.limit_price = Some(price);
        self
    }

    pub fn stop_price(mut self, price: Decimal) -> Self {
        self.stop_price = Some(price);
        self
    }

    pub fn trail_price(mut self, price: Decimal) -> Self {
        self.trail_price = Some(price);
        self
    }

    pub fn trail_percent(mut self, percent: Decimal) -> Self {
        self.trail_percent = Some(percent);
        self
    }

    pub fn extended_hours(mut self, extended_hours: bool) -> Self {
        self.extended_hours = Some(extended_hours);
        self
    }

    pub fn client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }

    pub fn order_class(mut self, class: OrderClass) -> Self {
        self.order_class = Some(class);
        self
    }

    /// Append one leg of a multi-leg order.
    pub fn leg(mut self, leg: Leg) -> Self {
        self.legs.push(leg);
        self
    }

    pub fn legs(mut self, legs: impl IntoIterator<Item = Leg>) -> Self {
        self.legs = legs.into_iter().collect();
        self
    }

    pub fn take_profit(mut self, take_profit: TakeProfit) -> Self {
        self.take_profit = Some(take_profit);
        self
    }

    pub fn stop_loss(mut self, stop_loss: StopLoss) -> Self {
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

    /// Check required fields and produce the wire body.
    pub fn build(&self) -> Result<NewOrder> {
        let symbol = self.symbol.clone().filter(|s| !s.is_empty());
        let (qty, notional) = match self.amount {
            Some(OrderAmount::Quantity(q)) => (Some(q), None),
            Some(OrderAmount::Notional(n)) => (None, Some(n)),
            None => (None, None),
        };
        Ok(NewOrder {
            symbol,
            qty,
            notional,
            side: required(self.side, "side")?,
            order_type: required(self.order_type, "type")?,
            time_in_force: required(self.time_in_force, "time_in_force")?,
            limit_price: self.limit_price,
            stop_price: self.stop_price,
            trail_price: self.trail_price,
            trail_percent: self.trail_percent,
            extended_hours: self.extended_hours,
            client_order_id: self.client_order_id.clone(),
            order_class: self.order_class,
            legs: self.legs.clone(),
            take_profit: self.take_profit.clone(),
            stop_loss: self.stop_loss.clone(),
            position_intent: self.position_intent,
            advanced_instructions: self.advanced_instructions.clone(),
        })
    }

    pub async fn send(self) -> Result<Order> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Order> {
        let body = self.build()?;
        self.client.submit_order_with(&body, cancel).await
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

/// Builder for `GET /v2/orders`.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct ListOrdersRequest<'a> {
    client: &'a AlpacaClient,
    query: ListOrdersQuery,
}

impl ListOrdersRequest<'_> {
    pub fn status(mut self, status: OrderQueryStatus) -> Self {
        self.query.status = Some(status);
        self
    }

    /// Maximum number of orders returned.
    pub fn limit(mut self, limit: u32) -> Self {
        self.query.limit = Some(limit);
        self
    }

    pub fn after(mut self, after: DateTime<Utc>) -> Self {
        self.query.after = Some(after);
        self
    }

    pub fn until(mut self, until: DateTime<Utc>) -> Self {
        self.query.until = Some(until);
        self
    }

    pub fn direction(mut self, direction: SortDirection) -> Self {
        self.query.direction = Some(direction);
        self
    }

    /// Roll multi-leg orders up under their parent.
    pub fn nested(mut self, nested: bool) -> Self {
        self.query.nested = Some(nested);
        self
    }

    pub fn symbols<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = symbols
            .into_iter()
            .map(|s| s.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(",");
        self.query.symbols = Some(joined).filter(|s| !s.is_empty());
        self
    }

    pub fn query(&self) -> &ListOrdersQuery {
        &self.query
    }

    pub async fn send(self) -> Result<Vec<Order>> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Vec<Order>> {
        let payload = Payload::query(&self.query)?;
        self.client
            .execute(Method::GET, "/v2/orders", payload, cancel)
            .await
    }
}

// ---------------------------------------------------------------------------
// Get
// ---------------------------------------------------------------------------

/// Builder for `GET /v2/orders/{order_id}`.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct GetOrderRequest<'a> {
    client: &'a AlpacaClient,
    order_id: String,
    nested: Option<bool>,
}

#[derive(Serialize)]
struct NestedQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    nested: Option<bool>,
}

impl GetOrderRequest<'_> {
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = Some(nested);
        self
    }

    pub async fn send(self) -> Result<Order> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Order> {
        let path = order_path(&self.order_id)?;
        let payload = Payload::query(&NestedQuery {
            nested: self.nested,
        })?;
        self.client.execute(Method::GET, &path, payload, cancel).await
    }
}

/// Builder for `GET /v2/orders:by_client_order_id`.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct GetOrderByClientIdRequest<'a> {
    client: &'a AlpacaClient,
    client_order_id: String,
}

#[derive(Serialize)]
struct ClientOrderIdQuery<'q> {
    client_order_id: &'q str,
}

impl GetOrderByClientIdRequest<'_> {
    pub async fn send(self) -> Result<Order> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Order> {
        let client_order_id = required(
            Some(self.client_order_id.as_str()).filter(|s| !s.is_empty()),
            "client_order_id",
        )?;
        let payload = Payload::query(&ClientOrderIdQuery { client_order_id })?;
        self.client
            .execute(
                Method::GET,
                "/v2/orders:by_client_order_id",
                payload,
                cancel,
            )
            .await
    }
}

// ---------------------------------------------------------------------------
// Cancel
// ---------------------------------------------------------------------------

/// Builder for `DELETE /v2/orders/{order_id}`.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct CancelOrderRequest<'a> {
    client: &'a AlpacaClient,
    order_id: String,
}

impl CancelOrderRequest<'_> {
    pub async fn send(self) -> Result<()> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<()> {
        let path = order_path(&self.order_id)?;
        self.client
            .execute_no_content(Method::DELETE, &path, Payload::Empty, cancel)
            .await
    }
}

/// Builder for `DELETE /v2/orders`.
#[derive(Debug, Clone)]
#[must_use = "requests do nothing until sent"]
pub struct CancelAllOrdersRequest<'a> {
    client: &'a AlpacaClient,
}

impl CancelAllOrdersRequest<'_> {
    pub async fn send(self) -> Result<Vec<CancelStatus>> {
        self.send_with(&CancellationToken::new()).await
    }

    pub async fn send_with(self, cancel: &CancellationToken) -> Result<Vec<CancelStatus>> {
        self.client
            .execute(Method::DELETE, "/v2/orders", Payload::Empty, cancel)
            .await
    }
}

// ---------------------------------------------------------------------------
// Shortcuts
// ---------------------------------------------------------------------------

impl AlpacaClient {
    /// Submit an already-built order body.
    ///
    /// **Endpoint:** `POST /v2/orders`
    pub async fn submit_order(&self, order: &NewOrder) -> Result<Order> {
        self.submit_order_with(order, &CancellationToken::new())
            .await
    }

    /// [`submit_order`](Self::submit_order) bound to a cancellation token.
    pub async fn submit_order_with(
        &self,
        order: &NewOrder,
        cancel: &CancellationToken,
    ) -> Result<Order> {
        let payload = Payload::json(order)?;
        self.execute(Method::POST, "/v2/orders", payload, cancel)
            .await
    }

    /// Retrieve a specific order by its ID.
    ///
    /// **Endpoint:** `GET /v2/orders/{order_id}`
    pub async fn get_order(&self, order_id: &str) -> Result<Order> {
        self.orders().get_order(order_id).send().await
    }

    /// Cancel an open order.
    ///
    /// **Endpoint:** `DELETE /v2/orders/{order_id}`
    pub async fn cancel_order(&self, order_id: &str) -> Result<()> {
        self.orders().cancel_order(order_id).send().await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| AlpacaError::Validation(format!("{field} is required")))
}

fn order_path(order_id: &str) -> Result<String> {
    if order_id.is_empty() || order_id.contains(['/', '?', '#']) {
        return Err(AlpacaError::Validation(format!(
            "invalid order id {order_id:?}"
        )));
    }
    Ok(format!("/v2/orders/{order_id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientConfig, Environment};

    fn client() -> AlpacaClient {
        AlpacaClient::with_config(ClientConfig::new(Environment::Paper)).unwrap()
    }

    #[test]
    fn missing_required_fields_are_reported_by_name() {
        let client = client();
        let cases = [
            (client.orders().create_order(), "side"),
            (client.orders().create_order().symbol("AAPL"), "side"),
            (
                client
                    .orders()
                    .create_order()
                    .symbol("AAPL")
                    .side(OrderSide::Buy),
                "type",
            ),
            (
                client
                    .orders()
                    .create_order()
                    .symbol("AAPL")
                    .side(OrderSide::Buy)
                    .order_type(OrderType::Market),
                "time_in_force",
            ),
        ];
        for (req, field) in cases {
            match req.build() {
                Err(AlpacaError::Validation(msg)) => assert_eq!(msg, format!("{field} is required")),
                other => panic!("expected validation error for {field}, got {other:?}"),
            }
        }
    }

    #[test]
    fn symbol_is_optional() {
        let client = client();
        let body = client
            .orders()
            .create_order()
            .symbol("")
            .side(OrderSide::Buy)
            .order_type(OrderType::Limit)
            .time_in_force(TimeInForce::Day)
            .build()
            .unwrap();
        assert_eq!(body.symbol, None);
    }

    #[test]
    fn qty_and_notional_are_exclusive() {
        let client = client();
        let body = client
            .orders()
            .create_order()
            .symbol("AAPL")
            .qty(Decimal::ONE)
            .notional(Decimal::from(250))
            .side(OrderSide::Buy)
            .order_type(OrderType::Market)
            .time_in_force(TimeInForce::Day)
            .build()
            .unwrap();
        assert_eq!(body.qty, None);
        assert_eq!(body.notional, Some(Decimal::from(250)));
    }

    #[test]
    fn order_ids_cannot_escape_the_path() {
        assert!(order_path("").is_err());
        assert!(order_path("../account").is_err());
        assert_eq!(order_path("abc-123").unwrap(), "/v2/orders/abc-123");
    }

    #[test]
    fn symbols_filter_is_comma_joined() {
        let client = client();
        let req = client.orders().list_orders().symbols(["AAPL", "MSFT"]);
        assert_eq!(req.query().symbols.as_deref(), Some("AAPL,MSFT"));
        let req = client.orders().list_orders().symbols(Vec::<String>::new());
        assert_eq!(req.query().symbols, None);
    }
}
