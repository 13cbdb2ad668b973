use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Sentinel signal value that clears a trade for execution. Any other value
/// means the trade is intentionally skipped.
pub const FAVORABLE_SIGNAL: i64 = 1;

/// Every way the scoring call can fail. The orchestrator treats all of them
/// the same — prediction unavailable, trade not applied — but the variants
/// keep logs and retry decisions precise.
#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("scoring service returned status {0}")]
    Status(u16),

    #[error("undecodable response: {0}")]
    Decode(String),

    #[error("response missing prediction field")]
    MissingSignal,
}

impl PredictorError {
    /// Transient failures are worth a bounded retry; caller-shaped failures
    /// (4xx, bad payloads) are not.
    pub fn is_transient(&self) -> bool {
        match self {
            PredictorError::Transport(_) => true,
            PredictorError::Status(code) => *code >= 500,
            PredictorError::Decode(_) | PredictorError::MissingSignal => false,
        }
    }
}

/// Scores a flat map of named numeric features and returns a discrete
/// signal. The reference implementation is an HTTP call to an external
/// model server; tests substitute doubles.
#[async_trait]
pub trait Predictor: Send + Sync {
    async fn score(&self, features: &HashMap<String, f64>) -> Result<i64, PredictorError>;
}
