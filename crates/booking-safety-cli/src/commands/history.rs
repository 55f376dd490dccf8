use chrono::{DateTime, Utc};
use clap::Args;
use serde_json::Value;

use booking_safety_core::types::Classification;

use crate::commands::compute::DEFAULT_LEDGER;
use crate::ledger::FileLedger;

/// Arguments for filtering the calculation ledger
#[derive(Args)]
pub struct HistoryArgs {
    /// Ledger file path
    #[arg(long, default_value = DEFAULT_LEDGER)]
    pub ledger: String,

    /// Filter by operator name
    #[arg(long)]
    pub actor: Option<String>,

    /// Filter by supplier name
    #[arg(long)]
    pub supplier: Option<String>,

    /// Filter by classification: "Safe" or "Loss"
    #[arg(long)]
    pub classification: Option<Classification>,

    /// Only records at or after this RFC 3339 timestamp
    #[arg(long)]
    pub since: Option<DateTime<Utc>>,
}

pub fn run_history(args: HistoryArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let records = FileLedger::new(&args.ledger).load()?;

    let filtered: Vec<Value> = records
        .into_iter()
        .filter(|r| args.actor.as_deref().is_none_or(|a| r.actor.name == a))
        .filter(|r| args.supplier.as_deref().is_none_or(|s| r.supplier_name == s))
        .filter(|r| args.classification.is_none_or(|c| r.classification == c))
        .filter(|r| args.since.is_none_or(|t| r.recorded_at >= t))
        .map(|r| serde_json::to_value(r))
        .collect::<Result<_, _>>()?;

    Ok(Value::Array(filtered))
}
