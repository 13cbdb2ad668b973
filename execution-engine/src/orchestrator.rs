//! The trade pipeline: risk gate, predictive signal, ledger commit.
//!
//! Each gate is hard: a rejection or failure anywhere before the commit
//! leaves the ledger untouched. The commit itself is the only side effect
//! and happens at most once per call.

use crate::error::{ExecuteError, Result};
use log::{debug, info};
use std::sync::Arc;
use trade_api::{
    Ledger, MarketData, Portfolio, Predictor, RiskContext, RiskDecision, RiskGate, Trade,
    FAVORABLE_SIGNAL,
};

/// Terminal outcome of a pipeline run. All three are successes at the
/// transport level; only [`ExecutionOutcome::Applied`] mutated the ledger.
#[derive(Debug)]
pub enum ExecutionOutcome {
    /// The trade was committed; carries the post-commit snapshot.
    Applied(Portfolio),
    /// The predictive signal was not favorable; the trade was intentionally
    /// skipped. A successful no-op, not an error.
    Skipped { signal: i64 },
    /// The risk gate declined the trade.
    RiskRejected { reason: String },
}

/// Sequences one incoming trade through the pipeline. The only component
/// that instructs the ledger to mutate.
pub struct TradeExecutor {
    ledger: Arc<dyn Ledger>,
    risk_gate: Arc<dyn RiskGate>,
    predictor: Arc<dyn Predictor>,
}

impl TradeExecutor {
    pub fn new(
        ledger: Arc<dyn Ledger>,
        risk_gate: Arc<dyn RiskGate>,
        predictor: Arc<dyn Predictor>,
    ) -> Self {
        Self {
            ledger,
            risk_gate,
            predictor,
        }
    }

    /// Runs the full pipeline for one trade.
    ///
    /// The only await point is the scoring call, which precedes the commit;
    /// a caller that disconnects mid-prediction abandons the trade without
    /// side effects, and a commit that starts always finishes.
    pub async fn execute(&self, trade: &Trade) -> Result<ExecutionOutcome> {
        trade.validate().map_err(ExecuteError::Validation)?;

        let data = MarketData::from_trade(trade);
        let snapshot = self.ledger.portfolio()?;
        let ctx = RiskContext {
            trade,
            portfolio: &snapshot,
        };

        if let RiskDecision::Rejected(reason) = self.risk_gate.evaluate(&data, &ctx) {
            return Ok(ExecutionOutcome::RiskRejected { reason });
        }

        // Fail closed: any scoring failure means the trade is not applied.
        let signal = self.predictor.score(&data.features()).await?;
        if signal != FAVORABLE_SIGNAL {
            debug!("trade {} skipped by signal {}", trade.id, signal);
            return Ok(ExecutionOutcome::Skipped { signal });
        }

        let portfolio = self.ledger.apply(trade)?;
        info!("trade {} applied", trade.id);
        Ok(ExecutionOutcome::Applied(portfolio))
    }

    /// Read path: current portfolio snapshot, straight from the ledger.
    pub fn portfolio(&self) -> Result<Portfolio> {
        Ok(self.ledger.portfolio()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::MemoryLedger;
    use crate::risk_guard::RiskGuard;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use trade_api::{LedgerError, PredictorError, Side};

    struct FixedPredictor(i64);

    #[async_trait]
    impl Predictor for FixedPredictor {
        async fn score(&self, _: &HashMap<String, f64>) -> std::result::Result<i64, PredictorError> {
            Ok(self.0)
        }
    }

    struct DownPredictor;

    #[async_trait]
    impl Predictor for DownPredictor {
        async fn score(&self, _: &HashMap<String, f64>) -> std::result::Result<i64, PredictorError> {
            Err(PredictorError::Transport("connection refused".into()))
        }
    }

    struct RejectGate;

    impl RiskGate for RejectGate {
        fn evaluate(&self, _: &MarketData, _: &RiskContext) -> RiskDecision {
            RiskDecision::Rejected("over exposure limit".into())
        }
    }

    struct BrokenLedger;

    impl Ledger for BrokenLedger {
        fn apply(&self, _: &Trade) -> std::result::Result<Portfolio, LedgerError> {
            Err(LedgerError::Backend("disk full".into()))
        }
        fn portfolio(&self) -> std::result::Result<Portfolio, LedgerError> {
            Ok(Portfolio::new("main", 0.0))
        }
    }

    fn buy() -> Trade {
        Trade::new("t-1", 1, "AAPL", 10.0, 100.0, Side::Buy)
    }

    fn executor(signal: i64) -> (Arc<MemoryLedger>, TradeExecutor) {
        let ledger = Arc::new(MemoryLedger::new("main", 0.0));
        let exec = TradeExecutor::new(
            ledger.clone(),
            Arc::new(RiskGuard::new()),
            Arc::new(FixedPredictor(signal)),
        );
        (ledger, exec)
    }

    #[tokio::test]
    async fn test_favorable_signal_applies_trade() {
        let (ledger, exec) = executor(1);
        match exec.execute(&buy()).await.unwrap() {
            ExecutionOutcome::Applied(p) => {
                assert_eq!(p.holding("AAPL"), 10.0);
                assert_eq!(p.cash, -1000.0);
            }
            other => panic!("expected Applied, got {:?}", other),
        }
        assert_eq!(ledger.trade_count(), 1);
    }

    #[tokio::test]
    async fn test_unfavorable_signal_skips_without_side_effects() {
        let (ledger, exec) = executor(0);
        match exec.execute(&buy()).await.unwrap() {
            ExecutionOutcome::Skipped { signal } => assert_eq!(signal, 0),
            other => panic!("expected Skipped, got {:?}", other),
        }
        assert_eq!(ledger.trade_count(), 0);
        assert_eq!(ledger.portfolio().unwrap().cash, 0.0);
    }

    #[tokio::test]
    async fn test_risk_rejection_leaves_ledger_untouched() {
        let ledger = Arc::new(MemoryLedger::new("main", 0.0));
        let exec = TradeExecutor::new(
            ledger.clone(),
            Arc::new(RejectGate),
            Arc::new(FixedPredictor(1)),
        );
        match exec.execute(&buy()).await.unwrap() {
            ExecutionOutcome::RiskRejected { reason } => {
                assert_eq!(reason, "over exposure limit")
            }
            other => panic!("expected RiskRejected, got {:?}", other),
        }
        assert_eq!(ledger.trade_count(), 0);
    }

    #[tokio::test]
    async fn test_predictor_failure_fails_closed() {
        let ledger = Arc::new(MemoryLedger::new("main", 0.0));
        let exec = TradeExecutor::new(
            ledger.clone(),
            Arc::new(RiskGuard::new()),
            Arc::new(DownPredictor),
        );
        match exec.execute(&buy()).await {
            Err(ExecuteError::Prediction(_)) => {}
            other => panic!("expected prediction error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(ledger.trade_count(), 0);
    }

    #[tokio::test]
    async fn test_invalid_trade_never_reaches_the_gates() {
        let (ledger, exec) = executor(1);
        let mut trade = buy();
        trade.quantity = -1.0;
        assert!(matches!(
            exec.execute(&trade).await,
            Err(ExecuteError::Validation(_))
        ));
        assert_eq!(ledger.trade_count(), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_surfaces_as_storage_error() {
        let exec = TradeExecutor::new(
            Arc::new(BrokenLedger),
            Arc::new(RiskGuard::new()),
            Arc::new(FixedPredictor(1)),
        );
        assert!(matches!(
            exec.execute(&buy()).await,
            Err(ExecuteError::Storage(_))
        ));
    }
}
