pub mod error;
pub mod ledger;
pub mod orchestrator;
pub mod risk_guard;

pub use error::{ExecuteError, Result};
pub use ledger::MemoryLedger;
pub use orchestrator::{ExecutionOutcome, TradeExecutor};
pub use risk_guard::{Policy, RiskGuard};
