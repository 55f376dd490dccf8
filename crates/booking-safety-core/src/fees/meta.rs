use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::types::{FlightType, MetaPartner, Money};

const DOMESTIC_SMALL_PARTY_FEE: Decimal = dec!(200);
const DOMESTIC_LARGE_PARTY_FEE: Decimal = dec!(300);
const INTERNATIONAL_BASE_FEE: Decimal = dec!(400);
const INTERNATIONAL_HIGH_VALUE_FEE: Decimal = dec!(600);

/// Domestic bookings with this many pax or fewer take the small-party fee.
const SMALL_PARTY_MAX_PAX: u32 = 2;

/// International bookings above this purchase amount take the high-value fee.
const INTERNATIONAL_FEE_THRESHOLD: Decimal = dec!(30000);

/// Extra referral fee when the partner ran a paid ads placement.
const ADS_SURCHARGE: Decimal = dec!(123);

/// Referral fee owed to the meta-search partner, itemized for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaFee {
    pub total: Money,
    pub base: Money,
    pub ads: Money,
}

impl MetaFee {
    pub const ZERO: MetaFee = MetaFee {
        total: Decimal::ZERO,
        base: Decimal::ZERO,
        ads: Decimal::ZERO,
    };
}

/// Fee charged by the meta-search partner for the referral behind this
/// booking. The tier is decided on `purchase_amount` and `pax_count` even
/// though the sale side of the book runs on `booking_amount`; that is how
/// the commercial agreement is written.
pub fn meta_fee(
    partner: MetaPartner,
    flight_type: FlightType,
    purchase_amount: Money,
    pax_count: u32,
) -> MetaFee {
    if partner == MetaPartner::None {
        return MetaFee::ZERO;
    }

    let base = match flight_type {
        FlightType::Domestic => {
            if pax_count <= SMALL_PARTY_MAX_PAX {
                DOMESTIC_SMALL_PARTY_FEE
            } else {
                DOMESTIC_LARGE_PARTY_FEE
            }
        }
        FlightType::International => {
            if purchase_amount <= INTERNATIONAL_FEE_THRESHOLD {
                INTERNATIONAL_BASE_FEE
            } else {
                INTERNATIONAL_HIGH_VALUE_FEE
            }
        }
    };

    let ads = if partner == MetaPartner::WegoAds {
        ADS_SURCHARGE
    } else {
        Decimal::ZERO
    };

    MetaFee {
        total: base + ads,
        base,
        ads,
    }
}
