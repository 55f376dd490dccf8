use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BookingSafetyError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as fractions (0.01 = 1%). Never as percentages.
pub type Rate = Decimal;

/// Every monetary figure is settled to two decimal places the moment it is
/// produced, not just at display time.
pub const MONEY_DP: u32 = 2;

/// Round to the standard monetary precision (banker's rounding).
pub fn round_money(value: Decimal) -> Money {
    value.round_dp(MONEY_DP)
}

/// Meta-search partner the booking was referred from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetaPartner {
    #[default]
    None,
    Wego,
    #[serde(rename = "Wego Ads")]
    WegoAds,
}

impl std::fmt::Display for MetaPartner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MetaPartner::None => write!(f, "None"),
            MetaPartner::Wego => write!(f, "Wego"),
            MetaPartner::WegoAds => write!(f, "Wego Ads"),
        }
    }
}

impl FromStr for MetaPartner {
    type Err = BookingSafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "None" => Ok(MetaPartner::None),
            "Wego" => Ok(MetaPartner::Wego),
            "Wego Ads" | "WegoAds" => Ok(MetaPartner::WegoAds),
            other => Err(BookingSafetyError::InvalidInput {
                field: "meta_partner".into(),
                reason: format!("Unknown meta partner '{other}'. Expected None, Wego or Wego Ads."),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlightType {
    #[default]
    Domestic,
    International,
}

impl std::fmt::Display for FlightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FlightType::Domestic => write!(f, "Domestic"),
            FlightType::International => write!(f, "International"),
        }
    }
}

impl FromStr for FlightType {
    type Err = BookingSafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Domestic" => Ok(FlightType::Domestic),
            "International" => Ok(FlightType::International),
            other => Err(BookingSafetyError::InvalidInput {
                field: "flight_type".into(),
                reason: format!("Unknown flight type '{other}'. Expected Domestic or International."),
            }),
        }
    }
}

/// Final verdict on a booking. A difference of exactly zero is Safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Safe,
    Loss,
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Classification::Safe => write!(f, "Safe"),
            Classification::Loss => write!(f, "Loss"),
        }
    }
}

impl FromStr for Classification {
    type Err = BookingSafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Safe" => Ok(Classification::Safe),
            "Loss" => Ok(Classification::Loss),
            other => Err(BookingSafetyError::InvalidInput {
                field: "classification".into(),
                reason: format!("Unknown classification '{other}'. Expected Safe or Loss."),
            }),
        }
    }
}

/// How a gateway fee figure was arrived at. Percent and Flat come from the
/// fee table; Manual is an operator override; None means no payment method;
/// NotApplicable means the lookup missed and the fee defaulted to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateKind {
    #[serde(rename = "percent")]
    Percent,
    #[serde(rename = "flat")]
    Flat,
    #[serde(rename = "None")]
    None,
    #[serde(rename = "manual")]
    Manual,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl std::fmt::Display for RateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateKind::Percent => write!(f, "percent"),
            RateKind::Flat => write!(f, "flat"),
            RateKind::None => write!(f, "None"),
            RateKind::Manual => write!(f, "manual"),
            RateKind::NotApplicable => write!(f, "N/A"),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
