use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use booking_safety_core::audit::{CalculationRecord, LedgerSink};
use booking_safety_core::{BookingSafetyError, BookingSafetyResult};

/// Append-only JSONL calculation ledger: one record per line, newest last.
/// The file is created on first append; records are never rewritten.
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    pub fn new(path: impl AsRef<Path>) -> Self {
        FileLedger {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// All records in append order. A missing file is an empty ledger, not
    /// an error.
    pub fn load(&self) -> BookingSafetyResult<Vec<CalculationRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let file = File::open(&self.path).map_err(|e| self.io_err(e))?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line.map_err(|e| self.io_err(e))?;
            if line.trim().is_empty() {
                continue;
            }
            let record =
                serde_json::from_str(&line).map_err(|e| self.io_err(format!("bad record: {e}")))?;
            records.push(record);
        }
        Ok(records)
    }

    fn io_err(&self, reason: impl std::fmt::Display) -> BookingSafetyError {
        BookingSafetyError::Ledger {
            path: self.path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

impl LedgerSink for FileLedger {
    fn append(&mut self, record: &CalculationRecord) -> BookingSafetyResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;
        let line = serde_json::to_string(record)?;
        writeln!(file, "{line}").map_err(|e| self.io_err(e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_safety_core::audit::{Actor, Role};
    use booking_safety_core::evaluator::{evaluate, BookingInput};
    use booking_safety_core::tables::RateTables;
    use booking_safety_core::types::{Classification, FlightType, MetaPartner};
    use chrono::Utc;
    use rust_decimal_macros::dec;

    fn scratch_path(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("bsafe-{tag}-{}.jsonl", std::process::id()))
    }

    fn sample_record(supplier: &str, booking_amount: rust_decimal::Decimal) -> CalculationRecord {
        let input = BookingInput {
            meta_partner: MetaPartner::None,
            flight_type: FlightType::Domestic,
            supplier_name: supplier.into(),
            pax_count: 1,
            base_fare: dec!(0),
            purchase_amount: dec!(10000),
            booking_amount,
            handling_fees: dec!(0),
            pg_fees_override: None,
            payment_method: "None".into(),
            payment_gateway: "PayU".into(),
        };
        let output = evaluate(&input, RateTables::builtin());
        CalculationRecord::new(
            Actor {
                name: "asha".into(),
                role: Role::Operator,
            },
            &input,
            &output.result,
            Utc::now(),
        )
    }

    #[test]
    fn test_append_then_load_round_trips() {
        let path = scratch_path("roundtrip");
        let _ = std::fs::remove_file(&path);

        let mut ledger = FileLedger::new(&path);
        ledger.append(&sample_record("Other", dec!(10500))).unwrap();
        ledger.append(&sample_record("Other", dec!(9000))).unwrap();

        let records = ledger.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].classification, Classification::Safe);
        assert_eq!(records[1].classification, Classification::Loss);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_is_an_empty_ledger() {
        let ledger = FileLedger::new(scratch_path("never-written"));
        assert!(ledger.load().unwrap().is_empty());
    }
}
