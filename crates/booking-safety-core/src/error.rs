use thiserror::Error;

#[derive(Debug, Error)]
pub enum BookingSafetyError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Malformed {table} table: {reason}")]
    TableConfig { table: String, reason: String },

    #[error("Ledger error ({path}): {reason}")]
    Ledger { path: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BookingSafetyError {
    fn from(e: serde_json::Error) -> Self {
        BookingSafetyError::SerializationError(e.to_string())
    }
}
