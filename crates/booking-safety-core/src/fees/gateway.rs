use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::tables::{GatewayFeeTable, NO_PAYMENT_METHOD};
use crate::types::{round_money, Money, RateKind};

const PERCENT_DIVISOR: Decimal = dec!(100);

/// Gateway fee with the rate that produced it, kept for audit display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayFee {
    pub amount: Money,
    pub rate_kind: RateKind,
    pub rate_value: Decimal,
}

/// Payment-gateway fee on the purchase side.
///
/// Resolution order: a nonzero manual override wins outright; the "None"
/// payment method carries no fee; otherwise the (method, gateway) pair is
/// looked up with the debit-card bracket applied. A lookup miss is a zero
/// fee with kind N/A, never an error. Percent rules apply to
/// `booking_amount + handling_fees`.
pub fn gateway_fee(
    table: &GatewayFeeTable,
    payment_method: &str,
    payment_gateway: &str,
    booking_amount: Money,
    handling_fees: Money,
    override_fee: Option<Money>,
) -> GatewayFee {
    if let Some(manual) = override_fee {
        if !manual.is_zero() {
            return GatewayFee {
                amount: manual,
                rate_kind: RateKind::Manual,
                rate_value: Decimal::ZERO,
            };
        }
    }

    if payment_method == NO_PAYMENT_METHOD {
        return GatewayFee {
            amount: Decimal::ZERO,
            rate_kind: RateKind::None,
            rate_value: Decimal::ZERO,
        };
    }

    let key = GatewayFeeTable::resolve_method_key(payment_method, booking_amount);
    match table.rule(&key, payment_gateway) {
        Some(rule) => {
            let amount = if rule.kind == RateKind::Percent {
                round_money((booking_amount + handling_fees) * rule.value / PERCENT_DIVISOR)
            } else {
                rule.value
            };
            GatewayFee {
                amount,
                rate_kind: rule.kind,
                rate_value: rule.value,
            }
        }
        None => GatewayFee {
            amount: Decimal::ZERO,
            rate_kind: RateKind::NotApplicable,
            rate_value: Decimal::ZERO,
        },
    }
}
