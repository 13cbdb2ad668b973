use crate::model::portfolio::Portfolio;
use crate::model::trade::Trade;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    /// The ledger lock was poisoned by a panicking writer. State is suspect;
    /// the process should be restarted rather than limp on.
    #[error("ledger lock poisoned")]
    Poisoned,

    /// The backing store refused or failed the commit.
    #[error("ledger backend error: {0}")]
    Backend(String),
}

/// Owner of one portfolio's cash, holdings, and valuation.
///
/// `apply` commits a trade as a single unit: trade history, holding delta,
/// cash delta, last-price update, and revaluation all land together or not
/// at all. Implementations must serialize `apply` calls for the portfolio
/// and must never let `portfolio` observe a half-applied trade.
pub trait Ledger: Send + Sync {
    /// Commits `trade` and returns the post-commit snapshot.
    fn apply(&self, trade: &Trade) -> Result<Portfolio, LedgerError>;

    /// Consistent snapshot of the current portfolio state.
    fn portfolio(&self) -> Result<Portfolio, LedgerError>;
}
