mod commands;
mod input;
mod ledger;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::compute::ComputeArgs;
use commands::history::HistoryArgs;
use commands::tables::{GatewaysArgs, SuppliersArgs};

/// Safe-vs-loss booking calculator for the operations desk
#[derive(Parser)]
#[command(
    name = "bsafe",
    version,
    about = "Safe-vs-loss booking calculator for the operations desk",
    long_about = "Evaluates whether a booking is profitable from its purchase \
                  amount, booking amount and the fee/rebate adjustments: \
                  meta-partner referral fees, payment-gateway fees, supplier \
                  distribution incentive and airline performance bonus. Every \
                  calculation can be appended to a JSONL ledger for audit."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a booking: purchase side vs sale side, Safe or Loss
    Compute(ComputeArgs),
    /// List the supplier distribution-incentive master
    Suppliers(SuppliersArgs),
    /// Show gateway fee rules for a payment method
    Gateways(GatewaysArgs),
    /// Filter past calculations out of the ledger
    History(HistoryArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Compute(args) => commands::compute::run_compute(args),
        Commands::Suppliers(args) => commands::tables::run_suppliers(args),
        Commands::Gateways(args) => commands::tables::run_gateways(args),
        Commands::History(args) => commands::history::run_history(args),
        Commands::Version => {
            println!("bsafe {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
