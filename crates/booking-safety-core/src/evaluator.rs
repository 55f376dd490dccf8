use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::BookingSafetyError;
use crate::fees::{
    distribution_incentive, gateway_fee, meta_fee, net_handling_fee, performance_bonus,
};
use crate::tables::{RateTables, NO_PAYMENT_METHOD, OTHER_SUPPLIER};
use crate::types::{
    round_money, with_metadata, Classification, ComputationOutput, FlightType, MetaPartner, Money,
    Rate, RateKind,
};
use crate::BookingSafetyResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// One booking as the operations desk enters it. Built fresh per
/// calculation, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingInput {
    pub meta_partner: MetaPartner,
    pub flight_type: FlightType,
    /// Supplier name as it appears in the incentive master, or "Other".
    pub supplier_name: String,
    pub pax_count: u32,
    pub base_fare: Money,
    pub purchase_amount: Money,
    pub booking_amount: Money,
    /// Tax-inclusive handling fees charged to the customer.
    pub handling_fees: Money,
    /// Manually-agreed PG fee; when present and nonzero it replaces the
    /// gateway table lookup entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pg_fees_override: Option<Money>,
    /// Payment method key, or "None" when no gateway was involved.
    pub payment_method: String,
    pub payment_gateway: String,
}

impl BookingInput {
    /// Precondition check for front ends. [`evaluate`] trusts its input and
    /// never runs this; callers reject bad values before computing.
    pub fn validate(&self) -> BookingSafetyResult<()> {
        if self.pax_count == 0 {
            return Err(BookingSafetyError::InvalidInput {
                field: "pax_count".into(),
                reason: "Pax count must be at least 1.".into(),
            });
        }
        let amounts = [
            ("base_fare", self.base_fare),
            ("purchase_amount", self.purchase_amount),
            ("booking_amount", self.booking_amount),
            ("handling_fees", self.handling_fees),
            ("pg_fees_override", self.pg_fees_override.unwrap_or(Decimal::ZERO)),
        ];
        for (field, value) in amounts {
            if value < Decimal::ZERO {
                return Err(BookingSafetyError::InvalidInput {
                    field: field.into(),
                    reason: "Monetary amounts cannot be negative.".into(),
                });
            }
        }
        Ok(())
    }
}

/// Itemized fee breakdown backing the verdict, kept for audit display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeComponents {
    pub meta_fee_total: Money,
    pub meta_fee_base: Money,
    pub meta_fee_ads: Money,
    pub gateway_fee: Money,
    pub gateway_rate_kind: RateKind,
    pub gateway_rate_value: Decimal,
    pub incentive_rate: Rate,
    pub incentive_amount: Money,
    pub performance_bonus_rate: Rate,
    pub performance_bonus_amount: Money,
    pub handling_fee_net: Money,
}

/// Purchase side against sale side, with the classification and the full
/// itemization that explains it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PnlResult {
    pub components: FeeComponents,
    pub purchase_side_total: Money,
    pub sale_side_total: Money,
    pub difference: Money,
    pub classification: Classification,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Evaluate one booking against the rate masters.
///
/// Pure and total: every degenerate case (unknown supplier, missing gateway
/// rule, absent override) resolves to a documented zero so the desk always
/// gets a number. Degenerate lookups are surfaced as warnings on the
/// envelope instead.
pub fn evaluate(input: &BookingInput, tables: &RateTables) -> ComputationOutput<PnlResult> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let meta = meta_fee(
        input.meta_partner,
        input.flight_type,
        input.purchase_amount,
        input.pax_count,
    );

    let pg = gateway_fee(
        &tables.gateway_fees,
        &input.payment_method,
        &input.payment_gateway,
        input.booking_amount,
        input.handling_fees,
        input.pg_fees_override,
    );
    if pg.rate_kind == RateKind::NotApplicable && input.payment_method != NO_PAYMENT_METHOD {
        warnings.push(format!(
            "No fee rule for '{}' via '{}'; gateway fee defaulted to 0.",
            input.payment_method, input.payment_gateway
        ));
    }

    let (incentive_rate, incentive_amount) = distribution_incentive(
        &tables.suppliers,
        &input.supplier_name,
        input.purchase_amount,
    );
    if input.supplier_name != OTHER_SUPPLIER && !tables.suppliers.contains(&input.supplier_name) {
        warnings.push(format!(
            "Supplier '{}' is not in the incentive master; rebate defaulted to 0.",
            input.supplier_name
        ));
    }

    let (bonus_rate, bonus_amount) = performance_bonus(
        &tables.performance_bonus,
        &input.supplier_name,
        input.flight_type,
        input.base_fare,
    );

    let handling_net = net_handling_fee(input.handling_fees);

    let purchase_side_total = round_money(input.purchase_amount + meta.total + pg.amount);
    let sale_side_total =
        round_money(input.booking_amount + incentive_amount + handling_net + bonus_amount);
    let difference = round_money(sale_side_total - purchase_side_total);
    let classification = if difference < Decimal::ZERO {
        Classification::Loss
    } else {
        Classification::Safe
    };

    let result = PnlResult {
        components: FeeComponents {
            meta_fee_total: meta.total,
            meta_fee_base: meta.base,
            meta_fee_ads: meta.ads,
            gateway_fee: pg.amount,
            gateway_rate_kind: pg.rate_kind,
            gateway_rate_value: pg.rate_value,
            incentive_rate,
            incentive_amount,
            performance_bonus_rate: bonus_rate,
            performance_bonus_amount: bonus_amount,
            handling_fee_net: handling_net,
        },
        purchase_side_total,
        sale_side_total,
        difference,
        classification,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    let assumptions = serde_json::json!({
        "purchase_side": "purchase_amount + meta_fee_total + gateway_fee",
        "sale_side": "booking_amount + incentive_amount + handling_fee_net + performance_bonus_amount",
        "pg_fee_base": "booking_amount + handling_fees",
        "meta_tier_inputs": "purchase_amount and pax_count",
        "handling_tax": "18% inclusive, net = gross / 1.18",
        "unknown_rate_keys": "resolve to zero, never an error"
    });

    with_metadata(
        "Booking Safety PnL (purchase side vs sale side)",
        &assumptions,
        warnings,
        elapsed,
        result,
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn bare_input() -> BookingInput {
        BookingInput {
            meta_partner: MetaPartner::None,
            flight_type: FlightType::Domestic,
            supplier_name: "Other".into(),
            pax_count: 1,
            base_fare: dec!(0),
            purchase_amount: dec!(10000),
            booking_amount: dec!(10200),
            handling_fees: dec!(0),
            pg_fees_override: None,
            payment_method: "None".into(),
            payment_gateway: "RazorPay(Aertrip)".into(),
        }
    }

    #[test]
    fn test_bare_booking_difference_and_verdict() {
        let output = evaluate(&bare_input(), RateTables::builtin());
        let r = &output.result;

        assert_eq!(r.components.meta_fee_total, dec!(0));
        assert_eq!(r.components.gateway_fee, dec!(0));
        assert_eq!(r.components.incentive_amount, dec!(0));
        assert_eq!(r.components.performance_bonus_amount, dec!(0));
        assert_eq!(r.components.handling_fee_net, dec!(0));
        assert_eq!(r.purchase_side_total, dec!(10000));
        assert_eq!(r.sale_side_total, dec!(10200));
        assert_eq!(r.difference, dec!(200.00));
        assert_eq!(r.classification, Classification::Safe);
    }

    #[test]
    fn test_difference_is_sale_minus_purchase() {
        let mut input = bare_input();
        input.supplier_name = "Tripjack Pvt. Ltd.".into();
        input.payment_method = "UPI".into();
        input.handling_fees = dec!(236);
        let output = evaluate(&input, RateTables::builtin());
        let r = &output.result;
        assert_eq!(r.difference, r.sale_side_total - r.purchase_side_total);
    }

    #[test]
    fn test_zero_difference_is_safe() {
        let mut input = bare_input();
        input.booking_amount = dec!(10000);
        let output = evaluate(&input, RateTables::builtin());
        assert_eq!(output.result.difference, dec!(0));
        assert_eq!(output.result.classification, Classification::Safe);
    }

    #[test]
    fn test_loss_booking_flagged() {
        let mut input = bare_input();
        input.booking_amount = dec!(9999.99);
        let output = evaluate(&input, RateTables::builtin());
        assert_eq!(output.result.difference, dec!(-0.01));
        assert_eq!(output.result.classification, Classification::Loss);
    }

    #[test]
    fn test_unknown_supplier_still_computes_with_warning() {
        let mut input = bare_input();
        input.supplier_name = "Some Brand New Supplier".into();
        let output = evaluate(&input, RateTables::builtin());
        assert_eq!(output.result.components.incentive_amount, dec!(0));
        assert_eq!(output.result.components.performance_bonus_amount, dec!(0));
        assert_eq!(output.result.classification, Classification::Safe);
        assert!(output.warnings.iter().any(|w| w.contains("incentive master")));
    }

    #[test]
    fn test_other_supplier_raises_no_warning() {
        let output = evaluate(&bare_input(), RateTables::builtin());
        assert!(output.warnings.is_empty());
    }

    #[test]
    fn test_gateway_miss_warns_but_succeeds() {
        let mut input = bare_input();
        input.payment_method = "Wallet(Ola)".into();
        input.payment_gateway = "Stripe".into();
        let output = evaluate(&input, RateTables::builtin());
        assert_eq!(output.result.components.gateway_fee, dec!(0));
        assert_eq!(
            output.result.components.gateway_rate_kind,
            RateKind::NotApplicable
        );
        assert!(output.warnings.iter().any(|w| w.contains("fee rule")));
    }

    #[test]
    fn test_validate_rejects_zero_pax() {
        let mut input = bare_input();
        input.pax_count = 0;
        let err = input.validate().unwrap_err();
        match err {
            BookingSafetyError::InvalidInput { field, .. } => assert_eq!(field, "pax_count"),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let mut input = bare_input();
        input.booking_amount = dec!(-1);
        assert!(input.validate().is_err());

        let mut input = bare_input();
        input.pg_fees_override = Some(dec!(-5));
        assert!(input.validate().is_err());

        assert!(bare_input().validate().is_ok());
    }

    #[test]
    fn test_envelope_metadata_populated() {
        let output = evaluate(&bare_input(), RateTables::builtin());
        assert!(!output.methodology.is_empty());
        assert_eq!(output.metadata.precision, "rust_decimal_128bit");
    }
}
