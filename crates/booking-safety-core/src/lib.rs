pub mod audit;
pub mod error;
pub mod evaluator;
pub mod fees;
pub mod tables;
pub mod types;

pub use error::BookingSafetyError;
pub use evaluator::{evaluate, BookingInput, FeeComponents, PnlResult};
pub use types::*;

/// Standard result type for all booking-safety operations
pub type BookingSafetyResult<T> = Result<T, BookingSafetyError>;
