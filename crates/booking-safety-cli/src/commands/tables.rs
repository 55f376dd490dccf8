use clap::Args;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

use booking_safety_core::tables::{GatewayFeeTable, RateTables};

/// Arguments for listing the supplier incentive master
#[derive(Args)]
pub struct SuppliersArgs {
    /// Only suppliers carrying a nonzero incentive rate
    #[arg(long)]
    pub nonzero: bool,
}

/// Arguments for listing gateway fee rules
#[derive(Args)]
pub struct GatewaysArgs {
    /// Payment method key, e.g. "UPI" or "Debit Cards(Visa)"
    #[arg(long)]
    pub method: String,

    /// Booking amount used to resolve the debit-card size bracket
    #[arg(long)]
    pub booking_amount: Option<Decimal>,
}

pub fn run_suppliers(args: SuppliersArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let suppliers = &RateTables::builtin().suppliers;

    let mut rows: Vec<(String, Decimal)> = suppliers
        .iter()
        .filter(|(_, rate)| !args.nonzero || !rate.is_zero())
        .map(|(name, rate)| (name.to_string(), rate))
        .collect();
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    let rows: Vec<Value> = rows
        .into_iter()
        .map(|(supplier, rate)| {
            serde_json::json!({
                "supplier": supplier,
                "incentive_rate": rate,
                "incentive_pct": format!("{}%", (rate * dec!(100)).round_dp(2)),
            })
        })
        .collect();

    Ok(Value::Array(rows))
}

pub fn run_gateways(args: GatewaysArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let gateways = &RateTables::builtin().gateway_fees;

    let key = GatewayFeeTable::resolve_method_key(
        &args.method,
        args.booking_amount.unwrap_or(Decimal::ZERO),
    );
    let rules = gateways
        .rules_for_method(&key)
        .ok_or_else(|| format!("No fee rules for payment method '{key}'"))?;

    let mut rows: Vec<Value> = rules
        .iter()
        .map(|(gateway, rule)| {
            serde_json::json!({
                "method": key,
                "gateway": gateway,
                "kind": rule.kind,
                "value": rule.value,
            })
        })
        .collect();
    rows.sort_by_key(|row| row["gateway"].as_str().unwrap_or_default().to_string());

    Ok(Value::Array(rows))
}
