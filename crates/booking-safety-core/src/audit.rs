use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::BookingSafetyError;
use crate::evaluator::{BookingInput, PnlResult};
use crate::types::{Classification, FlightType, Money};
use crate::BookingSafetyResult;

/// Desk role of the person running calculations. Carried for reporting only;
/// the engine applies no access control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[default]
    Operator,
    Supervisor,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Operator => write!(f, "Operator"),
            Role::Supervisor => write!(f, "Supervisor"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

impl FromStr for Role {
    type Err = BookingSafetyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Operator" => Ok(Role::Operator),
            "Supervisor" => Ok(Role::Supervisor),
            "Admin" => Ok(Role::Admin),
            other => Err(BookingSafetyError::InvalidInput {
                field: "role".into(),
                reason: format!("Unknown role '{other}'. Expected Operator, Supervisor or Admin."),
            }),
        }
    }
}

/// Who ran a calculation. Request-scoped; there is no ambient session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub name: String,
    pub role: Role,
}

/// One finished calculation as the ledger stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub actor: Actor,
    pub supplier_name: String,
    pub flight_type: FlightType,
    pub payment_method: String,
    pub purchase_side_total: Money,
    pub sale_side_total: Money,
    pub difference: Money,
    pub classification: Classification,
    pub recorded_at: DateTime<Utc>,
}

impl CalculationRecord {
    pub fn new(
        actor: Actor,
        input: &BookingInput,
        result: &PnlResult,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        CalculationRecord {
            actor,
            supplier_name: input.supplier_name.clone(),
            flight_type: input.flight_type,
            payment_method: input.payment_method.clone(),
            purchase_side_total: result.purchase_side_total,
            sale_side_total: result.sale_side_total,
            difference: result.difference,
            classification: result.classification,
            recorded_at,
        }
    }
}

/// Durable sink for finished calculations. Appends are fire-and-forget from
/// the engine's point of view; a failed append never invalidates the result
/// already computed.
pub trait LedgerSink {
    fn append(&mut self, record: &CalculationRecord) -> BookingSafetyResult<()>;
}
