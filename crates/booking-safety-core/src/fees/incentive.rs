use crate::tables::{PerformanceBonusTable, SupplierIncentiveTable};
use crate::types::{round_money, FlightType, Money, Rate};

/// Distribution incentive the supplier rebates on the purchase amount.
/// Returns `(rate, amount)`; both zero for "Other" and unknown suppliers.
pub fn distribution_incentive(
    table: &SupplierIncentiveTable,
    supplier: &str,
    purchase_amount: Money,
) -> (Rate, Money) {
    let rate = table.incentive_rate(supplier);
    (rate, round_money(purchase_amount * rate))
}

/// Performance-linked bonus the airline pays on base fare for bonus-eligible
/// corporate deals. Returns `(rate, amount)`; both zero outside the groups.
pub fn performance_bonus(
    table: &PerformanceBonusTable,
    supplier: &str,
    flight_type: FlightType,
    base_fare: Money,
) -> (Rate, Money) {
    let rate = table.bonus_rate(supplier, flight_type);
    (rate, round_money(base_fare * rate))
}
