//! Rate masters backing the fee calculator: supplier distribution
//! incentives, gateway fee rules, and performance-bonus groups.
//!
//! All three are read-only lookups loaded once and never mutated. Missing
//! keys are not errors; they degrade to zero so that operations staff always
//! get a number.

pub mod bonus;
pub mod gateway;
pub mod supplier;

use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;

pub use bonus::{BonusGroup, PerformanceBonusTable};
pub use gateway::{FeeRule, GatewayFeeTable, NO_PAYMENT_METHOD};
pub use supplier::{SupplierIncentiveTable, OTHER_SUPPLIER};

use crate::error::BookingSafetyError;
use crate::BookingSafetyResult;

const SUPPLIER_INCENTIVES_JSON: &str = include_str!("data/supplier_incentives.json");
const GATEWAY_FEES_JSON: &str = include_str!("data/gateway_fees.json");
const PERFORMANCE_BONUS_JSON: &str = include_str!("data/performance_bonus.json");

/// File names expected inside a rate-table config directory.
pub const SUPPLIER_INCENTIVES_FILE: &str = "supplier_incentives.json";
pub const GATEWAY_FEES_FILE: &str = "gateway_fees.json";
pub const PERFORMANCE_BONUS_FILE: &str = "performance_bonus.json";

static BUILTIN: Lazy<RateTables> = Lazy::new(|| {
    RateTables::from_json(
        SUPPLIER_INCENTIVES_JSON,
        GATEWAY_FEES_JSON,
        PERFORMANCE_BONUS_JSON,
    )
    .expect("embedded rate tables parse")
});

/// The three rate masters an evaluation reads from.
#[derive(Debug, Clone)]
pub struct RateTables {
    pub suppliers: SupplierIncentiveTable,
    pub gateway_fees: GatewayFeeTable,
    pub performance_bonus: PerformanceBonusTable,
}

impl RateTables {
    pub fn from_json(
        supplier_json: &str,
        gateway_json: &str,
        bonus_json: &str,
    ) -> BookingSafetyResult<Self> {
        Ok(RateTables {
            suppliers: SupplierIncentiveTable::from_json_str(supplier_json)?,
            gateway_fees: GatewayFeeTable::from_json_str(gateway_json)?,
            performance_bonus: PerformanceBonusTable::from_json_str(bonus_json)?,
        })
    }

    /// Load all three tables from a config directory holding
    /// `supplier_incentives.json`, `gateway_fees.json` and
    /// `performance_bonus.json`. Lets rates change without redeploying the
    /// engine.
    pub fn from_config_dir(dir: impl AsRef<Path>) -> BookingSafetyResult<Self> {
        let dir = dir.as_ref();
        let read = |file: &str| -> BookingSafetyResult<String> {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|e| BookingSafetyError::TableConfig {
                table: file.to_string(),
                reason: format!("{}: {e}", path.display()),
            })
        };
        RateTables::from_json(
            &read(SUPPLIER_INCENTIVES_FILE)?,
            &read(GATEWAY_FEES_FILE)?,
            &read(PERFORMANCE_BONUS_FILE)?,
        )
    }

    /// The compiled-in production masters, parsed once per process.
    pub fn builtin() -> &'static RateTables {
        &BUILTIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FlightType, RateKind};
    use rust_decimal_macros::dec;

    #[test]
    fn test_builtin_tables_load() {
        let tables = RateTables::builtin();
        assert!(!tables.suppliers.is_empty());
        assert_eq!(tables.performance_bonus.groups().len(), 2);
        assert!(tables.gateway_fees.method_keys().count() >= 30);
    }

    #[test]
    fn test_builtin_supplier_spot_checks() {
        let suppliers = &RateTables::builtin().suppliers;
        assert_eq!(
            suppliers.incentive_rate("TBO Flights Online - BOMA774"),
            dec!(0.0064)
        );
        assert_eq!(suppliers.incentive_rate("Tripjack Pvt. Ltd."), dec!(0.005));
        assert_eq!(
            suppliers.incentive_rate("BTO Bhasin Travels HAP OP7"),
            dec!(0.018)
        );
        assert_eq!(
            suppliers.incentive_rate("Indigo Corporate Travelport Universal Api (KTBOM278)"),
            dec!(0.0045)
        );
        assert_eq!(suppliers.incentive_rate("MASTER BSP"), dec!(0));
    }

    #[test]
    fn test_builtin_gateway_spot_checks() {
        let gateways = &RateTables::builtin().gateway_fees;

        let upi = gateways.rule("UPI", "RazorPay(Aertrip)").unwrap();
        assert_eq!((upi.kind, upi.value), (RateKind::Percent, dec!(0.50)));

        let icici_payu = gateways.rule("Net Banking(ICICI)", "PayU").unwrap();
        assert_eq!((icici_payu.kind, icici_payu.value), (RateKind::Flat, dec!(30.29)));

        let amex = gateways.rule("Credit Cards(Amex)", "Easebuzz").unwrap();
        assert_eq!((amex.kind, amex.value), (RateKind::Percent, dec!(2.75)));

        let debit_low = gateways
            .rule("Debit Cards(Visa)(<=2000)", "PhonePe(Aertrip)")
            .unwrap();
        assert_eq!((debit_low.kind, debit_low.value), (RateKind::Percent, dec!(0.35)));
    }

    #[test]
    fn test_builtin_bonus_spot_checks() {
        let bonus = &RateTables::builtin().performance_bonus;
        assert_eq!(
            bonus.bonus_rate(
                "Indigo Regular Fare (Corporate)(KTBOM278)",
                FlightType::Domestic
            ),
            dec!(0.0075)
        );
        assert_eq!(
            bonus.bonus_rate("Indigo Retail Chandni (14354255C)", FlightType::International),
            dec!(0.0185)
        );
        assert_eq!(
            bonus.bonus_rate("Tripjack Pvt. Ltd.", FlightType::Domestic),
            dec!(0)
        );
    }

    #[test]
    fn test_from_config_dir_missing_file() {
        let err = RateTables::from_config_dir("/definitely/not/here").unwrap_err();
        match err {
            BookingSafetyError::TableConfig { .. } => {}
            other => panic!("Expected TableConfig, got {other:?}"),
        }
    }
}
