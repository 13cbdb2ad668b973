use thiserror::Error;
use trade_api::{LedgerError, PredictorError};

/// Failure modes of the trade pipeline. Risk rejection and skip-by-signal
/// are NOT errors; they are terminal outcomes carried by
/// [`crate::ExecutionOutcome`].
#[derive(Error, Debug)]
pub enum ExecuteError {
    /// The trade itself was malformed. Caller fault, never retried.
    #[error("invalid trade: {0}")]
    Validation(String),

    /// The scoring call failed in some way. The pipeline fails closed: the
    /// trade is not applied.
    #[error("prediction unavailable: {0}")]
    Prediction(#[from] PredictorError),

    /// The ledger could not commit the trade.
    #[error("ledger commit failed: {0}")]
    Storage(#[from] LedgerError),
}

/// A specialized Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ExecuteError>;
