use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::BookingSafetyError;
use crate::types::Rate;
use crate::BookingSafetyResult;

/// Sentinel offered to operators when the booking's supplier is not in the
/// distribution-incentive master.
pub const OTHER_SUPPLIER: &str = "Other";

/// Supplier name to distribution-incentive rate (fraction of purchase
/// amount). Read-only after load; unknown names carry no incentive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierIncentiveTable {
    rates: HashMap<String, Rate>,
}

impl SupplierIncentiveTable {
    pub fn from_json_str(json: &str) -> BookingSafetyResult<Self> {
        serde_json::from_str(json).map_err(|e| BookingSafetyError::TableConfig {
            table: "supplier incentive".into(),
            reason: e.to_string(),
        })
    }

    /// DI rate for a supplier. "Other" and names absent from the master
    /// resolve to zero, never an error.
    pub fn incentive_rate(&self, supplier: &str) -> Rate {
        if supplier == OTHER_SUPPLIER {
            return Decimal::ZERO;
        }
        self.rates.get(supplier).copied().unwrap_or(Decimal::ZERO)
    }

    /// Whether the supplier appears in the master at all (including the
    /// zero-DI block).
    pub fn contains(&self, supplier: &str) -> bool {
        self.rates.contains_key(supplier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rate)> {
        self.rates.iter().map(|(name, rate)| (name.as_str(), *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
