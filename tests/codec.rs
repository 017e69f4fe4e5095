//! Wire format of order bodies, decimal amounts and enum tokens.

use std::str::FromStr;

use alpaca_rs::types::orders::{AdvancedInstruction, Leg, Order, StopLoss, TakeProfit};
use alpaca_rs::types::{
    Destination, OptionsLevel, OrderAlgorithm, OrderClass, OrderSide, OrderStatus, OrderType,
    PositionIntent, TimeInForce,
};
use alpaca_rs::{AlpacaClient, AlpacaError, Credentials};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::{Value, json};

fn client() -> AlpacaClient {
    AlpacaClient::paper(Credentials::api_key("id", "secret")).unwrap()
}

#[test]
fn minimal_order_has_no_optional_keys() {
    let client = client();
    let order = client
        .orders()
        .create_order()
        .symbol("AAPL")
        .notional(dec!(250.50))
        .side(OrderSide::Sell)
        .order_type(OrderType::Market)
        .time_in_force(TimeInForce::Day)
        .build()
        .unwrap();

    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(
        value,
        json!({
            "symbol": "AAPL",
            "notional": "250.50",
            "side": "sell",
            "type": "market",
            "time_in_force": "day"
        })
    );
}

#[test]
fn bracket_and_advanced_fields_are_nested() {
    let client = client();
    let order = client
        .orders()
        .create_order()
        .symbol("MSFT")
        .qty(dec!(10))
        .side(OrderSide::Buy)
        .order_type(OrderType::Limit)
        .time_in_force(TimeInForce::Gtc)
        .limit_price(dec!(400.25))
        .order_class(OrderClass::Bracket)
        .take_profit(
            TakeProfit::new(dec!(450))
                .stop_loss(dec!(375))
                .position_intent(PositionIntent::SellToClose)
                .advanced_instructions(AdvancedInstruction {
                    destination: Some(Destination::Arca),
                    ..Default::default()
                }),
        )
        .stop_loss(StopLoss {
            stop_price: dec!(380),
            limit_price: None,
        })
        .advanced_instructions(AdvancedInstruction {
            algorithm: Some(OrderAlgorithm::Vwap),
            destination: Some(Destination::Nasdaq),
            ..Default::default()
        })
        .extended_hours(false)
        .build()
        .unwrap();

    let value = serde_json::to_value(&order).unwrap();
    assert_eq!(
        value["take_profit"],
        json!({
            "limit_price": "450",
            "stop_loss": "375",
            "position_intent": "sell_to_close",
            "advanced_instructions": {"destination": "ARCA"}
        })
    );
    assert_eq!(value["stop_loss"], json!({"stop_price": "380"}));
    assert_eq!(
        value["advanced_instructions"],
        json!({"algorithm": "VWAP", "destination": "NASDAQ"})
    );
    // Explicit false is present, not dropped.
    assert_eq!(value["extended_hours"], json!(false));
    assert!(value.get("legs").is_none());
    assert!(value.get("notional").is_none());
}

#[test]
fn multi_leg_order_carries_symbols_on_legs() {
    let client = client();
    let order = client
        .orders()
        .create_order()
        .qty(dec!(1))
        .side(OrderSide::Buy)
        .order_type(OrderType::Limit)
        .time_in_force(TimeInForce::Day)
        .limit_price(dec!(1.25))
        .order_class(OrderClass::Mleg)
        .legs([
            Leg::new("AAPL250620C00100000", OrderSide::Buy, dec!(1))
                .position_intent(PositionIntent::BuyToOpen),
            Leg::new("AAPL250620C00110000", OrderSide::Sell, dec!(1)),
        ])
        .build()
        .unwrap();

    assert_eq!(order.symbol, None);
    let value = serde_json::to_value(&order).unwrap();
    assert!(value.get("symbol").is_none());
    assert_eq!(value["order_class"], json!("mleg"));
    assert_eq!(
        value["legs"],
        json!([
            {"symbol": "AAPL250620C00100000", "side": "buy", "ratio_qty": "1", "position_intent": "buy_to_open"},
            {"symbol": "AAPL250620C00110000", "side": "sell", "ratio_qty": "1"}
        ])
    );
}

#[test]
fn take_profit_defaults_to_limit_price_only() {
    let value = serde_json::to_value(TakeProfit::new(dec!(200))).unwrap();
    assert_eq!(value, json!({"limit_price": "200"}));
}

#[test]
fn decimals_travel_as_exact_strings() {
    assert_eq!(serde_json::to_value(dec!(170)).unwrap(), json!("170"));
    assert_eq!(serde_json::to_value(dec!(0.1)).unwrap(), json!("0.1"));

    for amount in [dec!(0.1), dec!(0.3), dec!(123456789.000000001), dec!(-42.5)] {
        let text = serde_json::to_string(&amount).unwrap();
        let back: Decimal = serde_json::from_str(&text).unwrap();
        assert_eq!(back, amount, "{text}");
    }

    // 0.1 + 0.2 is exactly 0.3, unlike with binary floats.
    let sum: Decimal = serde_json::from_value::<Decimal>(json!("0.1")).unwrap()
        + serde_json::from_value::<Decimal>(json!("0.2")).unwrap();
    assert_eq!(sum, dec!(0.3));
}

#[test]
fn enum_wire_tokens() {
    assert_eq!(OrderType::StopLimit.as_str(), "stop_limit");
    assert_eq!(OrderType::TrailingStop.to_string(), "trailing_stop");
    assert_eq!(TimeInForce::Opg.as_str(), "opg");
    assert_eq!(PositionIntent::SellToClose.as_str(), "sell_to_close");
    assert_eq!(OrderAlgorithm::Tma.as_str(), "TMA");

    for side in OrderSide::ALL {
        assert_eq!(OrderSide::from_str(side.as_str()).unwrap(), *side);
    }
    assert_eq!(TimeInForce::ALL.len(), 6);
}

#[test]
fn unknown_enum_tokens_are_rejected() {
    for token in ["hold", "BUY", ""] {
        let err = OrderSide::from_str(token).unwrap_err();
        assert!(matches!(err, AlpacaError::Validation(_)), "{token:?}");
    }
    let err = TimeInForce::from_str("gtd").unwrap_err();
    assert!(err.to_string().contains("day, gtc, opg, ioc, fok, cls"));
}

#[test]
fn unknown_order_status_does_not_fail_decoding() {
    let status: OrderStatus = serde_json::from_value(Value::from("held")).unwrap();
    assert_eq!(status, OrderStatus::Unknown);
    let status: OrderStatus = serde_json::from_value(Value::from("partially_filled")).unwrap();
    assert_eq!(status, OrderStatus::PartiallyFilled);
    assert!(!status.is_terminal());
}

#[test]
fn unknown_options_level_is_kept() {
    let level: OptionsLevel = serde_json::from_value(json!(7)).unwrap();
    assert_eq!(level, OptionsLevel::Other(7));
    assert_eq!(level.level(), 7);
    let level: OptionsLevel = serde_json::from_value(json!(3)).unwrap();
    assert_eq!(level, OptionsLevel::SpreadStraddle);
}

#[test]
fn order_with_unfamiliar_type_and_side_still_decodes() {
    let order: Order = serde_json::from_value(json!({
        "id": "parent",
        "client_order_id": "c-1",
        "created_at": "2024-03-12T15:04:05Z",
        "symbol": "",
        "type": "pegged",
        "side": "",
        "status": "new"
    }))
    .unwrap();
    assert_eq!(order.order_type, None);
    assert_eq!(order.side, None);
    assert_eq!(order.status, OrderStatus::New);

    let order: Order = serde_json::from_value(json!({
        "id": "plain",
        "client_order_id": "c-2",
        "created_at": "2024-03-12T15:04:05Z",
        "symbol": "AAPL",
        "type": "stop_limit",
        "side": "sell",
        "status": "filled"
    }))
    .unwrap();
    assert_eq!(order.order_type, Some(OrderType::StopLimit));
    assert_eq!(order.side, Some(OrderSide::Sell));
}
