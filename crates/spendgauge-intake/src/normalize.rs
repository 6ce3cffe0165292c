//! Raw event normalization
//!
//! Pure mapping from buffered events to gauge-ready transactions. One
//! transaction per event, order preserved, no failures: fields that are
//! missing or unusable coerce to zero or `None` instead of erroring.

use serde_json::Value;
use spendgauge_types::{EventSource, RawEvent, Transaction};

use crate::parser::parse_sms;

/// Normalize a snapshot of buffered events into transactions
///
/// Produces exactly one [`Transaction`] per input event, in input order.
/// For SMS events whose payload carries no structured `amount`, the free
/// text under `text` is parsed as a fallback.
pub fn normalize_for_gauge(events: &[RawEvent]) -> Vec<Transaction> {
    events.iter().map(normalize_event).collect()
}

fn normalize_event(event: &RawEvent) -> Transaction {
    let payload = &event.payload;
    let mut tx = Transaction {
        source: event.source,
        merchant: string_field(payload, "merchant"),
        amount: coerce_amount(payload.get("amount")),
        method: string_field(payload, "method"),
        timestamp: event.received_at,
    };

    // SMS alerts often arrive as raw text with no structured fields.
    if event.source == EventSource::Sms && !has_structured_amount(payload) {
        if let Some(text) = payload.get("text").and_then(Value::as_str) {
            let parsed = parse_sms(text);
            if let Some(amount) = parsed.amount {
                tx.amount = sanitize(amount);
            }
            if tx.merchant.is_none() {
                tx.merchant = parsed.merchant;
            }
            if tx.method.is_none() {
                tx.method = parsed.method;
            }
        }
    }

    tx
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload.get(key).and_then(Value::as_str).map(str::to_string)
}

fn has_structured_amount(payload: &Value) -> bool {
    matches!(payload.get("amount"), Some(v) if !v.is_null())
}

/// Coerce an arbitrary JSON value into a spend amount
///
/// Numbers pass through, numeric strings are parsed, everything else
/// (missing, null, objects, booleans, NaN-producing strings) becomes 0.
/// Negative amounts are kept: refunds reduce spend.
pub fn coerce_amount(value: Option<&Value>) -> f64 {
    let amount = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    sanitize(amount)
}

fn sanitize(amount: f64) -> f64 {
    if amount.is_finite() {
        amount
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use spendgauge_gauge::compute_gauge;
    use spendgauge_types::{BudgetLimits, GaugeStatus};

    fn event(source: EventSource, payload: Value) -> RawEvent {
        RawEvent::now(source, payload)
    }

    #[test]
    fn test_one_transaction_per_event_in_order() {
        let events = vec![
            event(EventSource::Sms, json!({ "amount": 100 })),
            event(EventSource::Upi, json!({ "amount": 200 })),
            event(EventSource::Receipt, json!({ "amount": 300 })),
        ];
        let txs = normalize_for_gauge(&events);
        assert_eq!(txs.len(), 3);
        assert_eq!(txs[0].source, EventSource::Sms);
        assert_eq!(txs[1].source, EventSource::Upi);
        assert_eq!(txs[2].source, EventSource::Receipt);
        assert_eq!(txs[2].amount, 300.0);
    }

    #[test]
    fn test_fields_are_extracted() {
        let events = vec![event(
            EventSource::Upi,
            json!({ "amount": 560.5, "merchant": "Swiggy", "method": "UPI" }),
        )];
        let tx = &normalize_for_gauge(&events)[0];
        assert_eq!(tx.amount, 560.5);
        assert_eq!(tx.merchant.as_deref(), Some("Swiggy"));
        assert_eq!(tx.method.as_deref(), Some("UPI"));
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce_amount(Some(&json!("450.5"))), 450.5);
        assert_eq!(coerce_amount(Some(&json!(" 99 "))), 99.0);
    }

    #[test]
    fn test_coerce_garbage_to_zero() {
        assert_eq!(coerce_amount(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_amount(Some(&json!(null))), 0.0);
        assert_eq!(coerce_amount(Some(&json!(true))), 0.0);
        assert_eq!(coerce_amount(Some(&json!({ "nested": 1 }))), 0.0);
        assert_eq!(coerce_amount(None), 0.0);
    }

    #[test]
    fn test_negative_amounts_pass_through() {
        assert_eq!(coerce_amount(Some(&json!(-250.0))), -250.0);
    }

    #[test]
    fn test_missing_fields_degrade() {
        let events = vec![event(EventSource::Receipt, json!({}))];
        let tx = &normalize_for_gauge(&events)[0];
        assert_eq!(tx.amount, 0.0);
        assert!(tx.merchant.is_none());
        assert!(tx.method.is_none());
    }

    #[test]
    fn test_sms_text_fallback() {
        let events = vec![event(
            EventSource::Sms,
            json!({ "text": "Rs 1,250 debited via UPI for Zomato order" }),
        )];
        let tx = &normalize_for_gauge(&events)[0];
        assert_eq!(tx.amount, 1250.0);
        assert_eq!(tx.merchant.as_deref(), Some("Zomato"));
        assert_eq!(tx.method.as_deref(), Some("UPI"));
    }

    #[test]
    fn test_structured_amount_beats_text() {
        let events = vec![event(
            EventSource::Sms,
            json!({ "amount": 400, "text": "Rs 999 debited" }),
        )];
        let tx = &normalize_for_gauge(&events)[0];
        assert_eq!(tx.amount, 400.0);
    }

    #[test]
    fn test_non_numeric_amount_never_throws() {
        let events = vec![event(EventSource::Upi, json!({ "amount": "abc" }))];
        let txs = normalize_for_gauge(&events);
        let gauge = compute_gauge(&txs, &BudgetLimits::new(100.0));
        assert_eq!(gauge.percent, 0);
        assert_eq!(gauge.status, GaugeStatus::Green);
    }
}
