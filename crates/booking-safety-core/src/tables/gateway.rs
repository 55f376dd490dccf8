use std::collections::HashMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::BookingSafetyError;
use crate::types::{Money, RateKind};
use crate::BookingSafetyResult;

/// Sentinel payment method meaning "no gateway involved, no fee".
pub const NO_PAYMENT_METHOD: &str = "None";

/// Methods whose fee depends on transaction size. Their lookup key carries a
/// bracket suffix chosen against [`BRACKET_THRESHOLD`].
const BRACKETED_METHODS: [&str; 2] = ["Debit Cards(Visa)", "Debit Cards(Master)"];

/// Bracket boundary; a booking amount of exactly 2000 goes to the lower
/// bracket.
const BRACKET_THRESHOLD: Decimal = dec!(2000);

/// A single fee rule for a (method, gateway) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRule {
    pub kind: RateKind,
    pub value: Decimal,
}

/// Payment-method key to gateway name to fee rule. Read-only after load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatewayFeeTable {
    methods: HashMap<String, HashMap<String, FeeRule>>,
}

impl GatewayFeeTable {
    pub fn from_json_str(json: &str) -> BookingSafetyResult<Self> {
        serde_json::from_str(json).map_err(|e| BookingSafetyError::TableConfig {
            table: "gateway fee".into(),
            reason: e.to_string(),
        })
    }

    /// Lookup key for a payment method. The two size-bracketed debit-card
    /// brands get a `(<=2000)` or `(>2000)` suffix keyed off the booking
    /// amount; every other method is used as-is.
    pub fn resolve_method_key(method: &str, booking_amount: Money) -> String {
        if BRACKETED_METHODS.contains(&method) {
            if booking_amount <= BRACKET_THRESHOLD {
                format!("{method}(<=2000)")
            } else {
                format!("{method}(>2000)")
            }
        } else {
            method.to_string()
        }
    }

    /// Fee rule for a resolved method key and gateway. `None` on a miss; the
    /// caller degrades to a zero fee.
    pub fn rule(&self, method_key: &str, gateway: &str) -> Option<&FeeRule> {
        self.methods.get(method_key).and_then(|g| g.get(gateway))
    }

    /// All rules for a resolved method key, for listings.
    pub fn rules_for_method(&self, method_key: &str) -> Option<&HashMap<String, FeeRule>> {
        self.methods.get(method_key)
    }

    pub fn method_keys(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(|k| k.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn small_table() -> GatewayFeeTable {
        GatewayFeeTable::from_json_str(
            r#"{
                "UPI": {
                    "RazorPay(Aertrip)": { "kind": "percent", "value": "0.50" },
                    "PayU": { "kind": "flat", "value": "0.0" }
                },
                "Debit Cards(Visa)(<=2000)": {
                    "RazorPay(Aertrip)": { "kind": "percent", "value": "0.40" }
                },
                "Debit Cards(Visa)(>2000)": {
                    "RazorPay(Aertrip)": { "kind": "percent", "value": "0.80" }
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_plain_method_key_passes_through() {
        assert_eq!(
            GatewayFeeTable::resolve_method_key("UPI", dec!(50000)),
            "UPI"
        );
        assert_eq!(
            GatewayFeeTable::resolve_method_key("Credit Cards(Amex)", dec!(100)),
            "Credit Cards(Amex)"
        );
    }

    #[test]
    fn test_bracket_boundary_goes_low() {
        assert_eq!(
            GatewayFeeTable::resolve_method_key("Debit Cards(Visa)", dec!(2000)),
            "Debit Cards(Visa)(<=2000)"
        );
        assert_eq!(
            GatewayFeeTable::resolve_method_key("Debit Cards(Master)", dec!(2000.01)),
            "Debit Cards(Master)(>2000)"
        );
    }

    #[test]
    fn test_rule_lookup_and_miss() {
        let table = small_table();
        let rule = table.rule("UPI", "RazorPay(Aertrip)").unwrap();
        assert_eq!(rule.kind, RateKind::Percent);
        assert_eq!(rule.value, dec!(0.50));

        assert!(table.rule("UPI", "Easebuzz").is_none());
        assert!(table.rule("Wallet(Ola)", "PayU").is_none());
    }

    #[test]
    fn test_bracketed_lookup_end_to_end() {
        let table = small_table();
        let key = GatewayFeeTable::resolve_method_key("Debit Cards(Visa)", dec!(1500));
        assert_eq!(table.rule(&key, "RazorPay(Aertrip)").unwrap().value, dec!(0.40));

        let key = GatewayFeeTable::resolve_method_key("Debit Cards(Visa)", dec!(3500));
        assert_eq!(table.rule(&key, "RazorPay(Aertrip)").unwrap().value, dec!(0.80));
    }

    #[test]
    fn test_malformed_json_is_a_table_config_error() {
        let err = GatewayFeeTable::from_json_str(r#"{"UPI": 12}"#).unwrap_err();
        match err {
            BookingSafetyError::TableConfig { table, .. } => assert_eq!(table, "gateway fee"),
            other => panic!("Expected TableConfig, got {other:?}"),
        }
    }
}
