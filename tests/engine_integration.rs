//! End-to-end tests: JSON request bodies through the engine operations.

use rust_decimal_macros::dec;
use tax_alpha::request::{read_harvest_request_json, read_tax_request_json};
use tax_alpha::EngineError;

#[test]
fn gains_from_json_request() {
    let body = r#"{
        "investment_data": [
            {"security": "AAPL", "current_value": 12000, "cost_basis": 10000},
            {"security": "TSLA", "current_value": 4000, "cost_basis": 5500},
            {"current_value": 300.50, "cost_basis": 300.50}
        ]
    }"#;

    let request = read_tax_request_json(body.as_bytes()).unwrap();
    let engine = request.into_engine().unwrap();
    assert_eq!(engine.investment_gains(), Ok(dec!(500)));
}

#[test]
fn taxes_from_json_request() {
    let body = r#"{
        "income": 550000,
        "tax_brackets": [[0.35, 500000], [0.24, 100000]],
        "investment_data": [
            {"security": "VTI", "current_value": 80000, "cost_basis": 30000}
        ]
    }"#;

    let request = read_tax_request_json(body.as_bytes()).unwrap();
    let engine = request.into_engine().unwrap();
    // 50000 of gains lift total income to 600000:
    // (600000-500000)*0.35 + (500000-100000)*0.24 = 131000
    assert_eq!(engine.tax_due(), Ok(dec!(131000)));
}

#[test]
fn taxes_with_no_brackets_are_zero() {
    let body = r#"{"income": 600000, "investment_data": []}"#;
    let request = read_tax_request_json(body.as_bytes()).unwrap();
    let engine = request.into_engine().unwrap();
    assert_eq!(engine.tax_due(), Ok(dec!(0)));
}

#[test]
fn harvest_from_json_request() {
    let body = r#"{
        "investment_data": [
            {
                "name": "Brokerage",
                "securities": [
                    {
                        "name": "AAPL",
                        "transactions": [
                            {"type": "sell", "cost_basis": 100, "price": 80},
                            {"type": "sell", "cost_basis": 50, "price": 60},
                            {"type": "buy", "cost_basis": 10, "price": 1}
                        ]
                    },
                    {
                        "name": "MSFT",
                        "transactions": [
                            {"type": "sell", "cost_basis": 50, "price": 75}
                        ]
                    }
                ]
            }
        ]
    }"#;

    let request = read_harvest_request_json(body.as_bytes()).unwrap();
    let engine = request.into_engine().unwrap();
    let suggestions = engine.harvest_suggestions().unwrap();

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].security_name, "AAPL");
    assert_eq!(suggestions[0].total_loss, dec!(20));

    // The wire shape the service layer returns: a bare array with numeric
    // losses.
    let json = serde_json::to_value(&suggestions).unwrap();
    assert_eq!(json[0]["security_name"], "AAPL");
    assert_eq!(json[0]["total_loss"], 20.0);
}

#[test]
fn harvest_of_empty_request_is_empty() {
    let request = read_harvest_request_json("{}".as_bytes()).unwrap();
    let engine = request.into_engine().unwrap();
    assert_eq!(engine.harvest_suggestions(), Ok(vec![]));
}

#[test]
fn malformed_holding_is_rejected_at_validation() {
    let body = r#"{"investment_data": [{"security": "AAPL", "cost_basis": 100}]}"#;
    let request = read_tax_request_json(body.as_bytes()).unwrap();
    assert_eq!(
        request.into_engine().unwrap_err(),
        EngineError::MalformedHolding {
            field: "current_value"
        }
    );
}

#[test]
fn malformed_sell_is_rejected_at_validation() {
    let body = r#"{
        "investment_data": [
            {"securities": [{"name": "AAPL", "transactions": [{"type": "sell", "price": 80}]}]}
        ]
    }"#;
    let request = read_harvest_request_json(body.as_bytes()).unwrap();
    assert_eq!(
        request.into_engine().unwrap_err(),
        EngineError::MalformedTransaction {
            security: "AAPL".to_string(),
            field: "cost_basis"
        }
    );
}
