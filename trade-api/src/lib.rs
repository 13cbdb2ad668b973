pub mod model;
pub mod traits;

pub use model::market_data::MarketData;
pub use model::portfolio::Portfolio;
pub use model::trade::{Side, Trade};

pub use traits::ledger::{Ledger, LedgerError};
pub use traits::predictor::{Predictor, PredictorError, FAVORABLE_SIGNAL};
pub use traits::risk_gate::{RiskContext, RiskDecision, RiskGate};
