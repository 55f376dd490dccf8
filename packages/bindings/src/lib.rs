use napi::Result as NapiResult;
use napi_derive::napi;

use booking_safety_core::evaluator::{evaluate, BookingInput};
use booking_safety_core::tables::{GatewayFeeTable, RateTables};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate one booking against the built-in rate masters. Takes the
/// `BookingInput` shape as JSON, returns the full computation envelope.
#[napi]
pub fn evaluate_booking(input_json: String) -> NapiResult<String> {
    let input: BookingInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    input.validate().map_err(to_napi_error)?;
    let output = evaluate(&input, RateTables::builtin());
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Rate-master listings for front-end dropdowns
// ---------------------------------------------------------------------------

/// The supplier distribution-incentive master as a name-to-rate map.
#[napi]
pub fn list_suppliers() -> NapiResult<String> {
    serde_json::to_string(&RateTables::builtin().suppliers).map_err(to_napi_error)
}

/// Fee rules for one payment method. `booking_amount_json` is a decimal (as
/// a JSON string or number) used to resolve the debit-card size bracket.
#[napi]
pub fn gateway_fee_rules(method: String, booking_amount_json: String) -> NapiResult<String> {
    let booking_amount: rust_decimal::Decimal =
        serde_json::from_str(&booking_amount_json).map_err(to_napi_error)?;
    let key = GatewayFeeTable::resolve_method_key(&method, booking_amount);
    let rules = RateTables::builtin().gateway_fees.rules_for_method(&key);
    serde_json::to_string(&serde_json::json!({
        "method_key": key,
        "rules": rules,
    }))
    .map_err(to_napi_error)
}

/// The bonus-eligible supplier groups with their domestic and international
/// rates.
#[napi]
pub fn performance_bonus_groups() -> NapiResult<String> {
    serde_json::to_string(RateTables::builtin().performance_bonus.groups()).map_err(to_napi_error)
}
