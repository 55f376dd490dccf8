use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BookingSafetyError;
use crate::types::{FlightType, Rate};
use crate::BookingSafetyResult;

/// A set of suppliers sharing one performance-linked-bonus deal, with the
/// domestic and international rates applied to base fare.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonusGroup {
    pub suppliers: Vec<String>,
    pub domestic_rate: Rate,
    pub international_rate: Rate,
}

impl BonusGroup {
    pub fn rate_for(&self, flight_type: FlightType) -> Rate {
        match flight_type {
            FlightType::Domestic => self.domestic_rate,
            FlightType::International => self.international_rate,
        }
    }
}

/// Disjoint bonus-eligible supplier groups. Suppliers outside every group
/// earn no performance bonus.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformanceBonusTable {
    groups: Vec<BonusGroup>,
}

impl PerformanceBonusTable {
    pub fn from_json_str(json: &str) -> BookingSafetyResult<Self> {
        serde_json::from_str(json).map_err(|e| BookingSafetyError::TableConfig {
            table: "performance bonus".into(),
            reason: e.to_string(),
        })
    }

    /// PLB rate for a supplier, zero when it belongs to no group.
    pub fn bonus_rate(&self, supplier: &str, flight_type: FlightType) -> Rate {
        self.groups
            .iter()
            .find(|g| g.suppliers.iter().any(|s| s == supplier))
            .map(|g| g.rate_for(flight_type))
            .unwrap_or(Decimal::ZERO)
    }

    pub fn groups(&self) -> &[BonusGroup] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn small_table() -> PerformanceBonusTable {
        PerformanceBonusTable::from_json_str(
            r#"[
                {
                    "suppliers": ["Carrier A Corp", "Carrier A Retail"],
                    "domestic_rate": "0.0075",
                    "international_rate": "0.015"
                }
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_group_member_gets_flight_type_rate() {
        let table = small_table();
        assert_eq!(
            table.bonus_rate("Carrier A Corp", FlightType::Domestic),
            dec!(0.0075)
        );
        assert_eq!(
            table.bonus_rate("Carrier A Retail", FlightType::International),
            dec!(0.015)
        );
    }

    #[test]
    fn test_non_member_gets_zero() {
        let table = small_table();
        assert_eq!(
            table.bonus_rate("Someone Else", FlightType::Domestic),
            Decimal::ZERO
        );
    }

    #[test]
    fn test_malformed_json_is_a_table_config_error() {
        let err = PerformanceBonusTable::from_json_str("[{}]").unwrap_err();
        match err {
            BookingSafetyError::TableConfig { table, .. } => {
                assert_eq!(table, "performance bonus")
            }
            other => panic!("Expected TableConfig, got {other:?}"),
        }
    }
}
