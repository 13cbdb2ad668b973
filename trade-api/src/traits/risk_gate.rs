use crate::model::market_data::MarketData;
use crate::model::portfolio::Portfolio;
use crate::model::trade::Trade;

#[derive(Debug, Clone, PartialEq)]
pub enum RiskDecision {
    Approved,
    Rejected(String),
}

/// Context handed to the risk gate alongside the market snapshot: the
/// candidate trade and the portfolio state it would land on.
pub struct RiskContext<'a> {
    pub trade: &'a Trade,
    pub portfolio: &'a Portfolio,
}

/// Yes/no judgment on a trade. Pure: a gate never mutates anything, and a
/// rejection must leave no trace in the ledger.
pub trait RiskGate: Send + Sync {
    fn evaluate(&self, data: &MarketData, ctx: &RiskContext) -> RiskDecision;
}
