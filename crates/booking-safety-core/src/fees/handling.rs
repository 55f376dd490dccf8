use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{round_money, Money};

/// Handling fees are collected tax-inclusive at 18% GST; dividing by 1.18
/// strips the tax component.
const HANDLING_TAX_DIVISOR: Decimal = dec!(1.18);

/// Net handling fee credited to the sale side.
pub fn net_handling_fee(handling_fees: Money) -> Money {
    round_money(handling_fees / HANDLING_TAX_DIVISOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exact_gross_divides_cleanly() {
        assert_eq!(net_handling_fee(dec!(118)), dec!(100.00));
        assert_eq!(net_handling_fee(dec!(0)), dec!(0));
    }

    #[test]
    fn test_net_rounds_to_two_places() {
        assert_eq!(net_handling_fee(dec!(100)), dec!(84.75));
    }

    #[test]
    fn test_round_trip_within_a_paisa() {
        let gross = dec!(250);
        let net = net_handling_fee(gross);
        let rebuilt = net * HANDLING_TAX_DIVISOR;
        assert!((rebuilt - gross).abs() <= dec!(0.01));
    }
}
