use log::warn;
use trade_api::{MarketData, RiskContext, RiskDecision, RiskGate};

pub mod max_position_value;
pub mod no_short_selling;

pub use max_position_value::MaxPositionValuePolicy;
pub use no_short_selling::NoShortSellingPolicy;

/// One pluggable risk rule. Policies are pure judgments over the market
/// snapshot and the portfolio the trade would land on.
pub trait Policy: Send + Sync {
    fn name(&self) -> &str;
    fn check(&self, data: &MarketData, ctx: &RiskContext) -> RiskDecision;
}

/// Ordered stack of policies; the first rejection wins. An empty guard
/// approves everything, which is the reference risk gate.
pub struct RiskGuard {
    policies: Vec<Box<dyn Policy>>,
}

impl Default for RiskGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl RiskGuard {
    pub fn new() -> Self {
        Self {
            policies: Vec::new(),
        }
    }

    pub fn add_policy(&mut self, policy: Box<dyn Policy>) {
        self.policies.push(policy);
    }
}

impl RiskGate for RiskGuard {
    fn evaluate(&self, data: &MarketData, ctx: &RiskContext) -> RiskDecision {
        for policy in &self.policies {
            if let RiskDecision::Rejected(reason) = policy.check(data, ctx) {
                warn!("trade {} rejected by {}: {}", ctx.trade.id, policy.name(), reason);
                return RiskDecision::Rejected(format!("{}: {}", policy.name(), reason));
            }
        }
        RiskDecision::Approved
    }
}
