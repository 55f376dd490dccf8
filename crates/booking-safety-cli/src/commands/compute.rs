use chrono::Utc;
use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use booking_safety_core::audit::{Actor, CalculationRecord, LedgerSink, Role};
use booking_safety_core::evaluator::{evaluate, BookingInput};
use booking_safety_core::tables::RateTables;
use booking_safety_core::types::{FlightType, MetaPartner};

use crate::input;
use crate::ledger::FileLedger;

/// Default ledger file, created next to wherever the desk runs the tool.
pub const DEFAULT_LEDGER: &str = "bsafe-ledger.jsonl";

/// Arguments for a booking evaluation
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct ComputeArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Meta partner: "None", "Wego" or "Wego Ads"
    #[arg(long, default_value = "None")]
    pub meta_partner: MetaPartner,

    /// Flight type: "Domestic" or "International"
    #[arg(long, default_value = "Domestic")]
    pub flight_type: FlightType,

    /// Supplier name as it appears in the incentive master ("Other" when absent)
    #[arg(long, default_value = "Other")]
    pub supplier: String,

    /// Passenger count
    #[arg(long, default_value_t = 1)]
    pub pax: u32,

    /// Base fare
    #[arg(long, default_value = "0")]
    pub base_fare: Decimal,

    /// Purchase amount
    #[arg(long)]
    pub purchase_amount: Option<Decimal>,

    /// Booking amount
    #[arg(long)]
    pub booking_amount: Option<Decimal>,

    /// Handling fees, tax inclusive
    #[arg(long, default_value = "0")]
    pub handling_fees: Decimal,

    /// Manually-agreed PG fee; nonzero skips the gateway fee table
    #[arg(long)]
    pub pg_fees: Option<Decimal>,

    /// Payment method key ("None" for no gateway fee)
    #[arg(long, default_value = "None")]
    pub payment_method: String,

    /// Payment gateway name
    #[arg(long, default_value = "RazorPay(Aertrip)")]
    pub payment_gateway: String,

    /// Directory of rate-table JSON overrides; defaults to the built-in masters
    #[arg(long)]
    pub tables: Option<String>,

    /// Operator name recorded against this calculation
    #[arg(long, default_value = "unknown")]
    pub actor: String,

    /// Operator role: "Operator", "Supervisor" or "Admin"
    #[arg(long, default_value = "Operator")]
    pub role: Role,

    /// Ledger file path
    #[arg(long, default_value = DEFAULT_LEDGER)]
    pub ledger: String,

    /// Skip appending this calculation to the ledger
    #[arg(long)]
    pub no_log: bool,
}

pub fn run_compute(args: ComputeArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let booking: BookingInput = if let Some(ref path) = args.input {
        input::read_json(path)?
    } else if let Some(data) = input::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        BookingInput {
            meta_partner: args.meta_partner,
            flight_type: args.flight_type,
            supplier_name: args.supplier,
            pax_count: args.pax,
            base_fare: args.base_fare,
            purchase_amount: args
                .purchase_amount
                .ok_or("--purchase-amount is required (or provide --input)")?,
            booking_amount: args
                .booking_amount
                .ok_or("--booking-amount is required (or provide --input)")?,
            handling_fees: args.handling_fees,
            pg_fees_override: args.pg_fees,
            payment_method: args.payment_method,
            payment_gateway: args.payment_gateway,
        }
    };

    booking.validate()?;

    let override_tables;
    let tables = match args.tables {
        Some(ref dir) => {
            override_tables = RateTables::from_config_dir(dir)?;
            &override_tables
        }
        None => RateTables::builtin(),
    };

    let output = evaluate(&booking, tables);

    if !args.no_log {
        let actor = Actor {
            name: args.actor,
            role: args.role,
        };
        let record = CalculationRecord::new(actor, &booking, &output.result, Utc::now());
        let mut ledger = FileLedger::new(&args.ledger);
        ledger.append(&record)?;
    }

    Ok(serde_json::to_value(output)?)
}
