use super::Policy;
use trade_api::{MarketData, RiskContext, RiskDecision, Side};

/// Rejects any sell that would take the symbol's holding below zero. The
/// ledger itself permits shorts; enabling this policy is how a deployment
/// forbids them.
pub struct NoShortSellingPolicy;

impl Policy for NoShortSellingPolicy {
    fn name(&self) -> &str {
        "NoShortSelling"
    }

    fn check(&self, _data: &MarketData, ctx: &RiskContext) -> RiskDecision {
        if ctx.trade.side != Side::Sell {
            return RiskDecision::Approved;
        }

        let held = ctx.portfolio.holding(&ctx.trade.symbol);
        if ctx.trade.quantity > held {
            return RiskDecision::Rejected(format!(
                "selling {} {} but only {} held",
                ctx.trade.quantity, ctx.trade.symbol, held
            ));
        }

        RiskDecision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_api::{Portfolio, Trade};

    fn ctx_check(trade: &Trade, portfolio: &Portfolio) -> RiskDecision {
        let data = MarketData::from_trade(trade);
        NoShortSellingPolicy.check(
            &data,
            &RiskContext {
                trade,
                portfolio,
            },
        )
    }

    #[test]
    fn test_sell_within_holding_approved() {
        let mut portfolio = Portfolio::new("main", 0.0);
        portfolio.holdings.insert("AAPL".into(), 10.0);
        let trade = Trade::new("t-1", 1, "AAPL", 4.0, 110.0, Side::Sell);
        assert_eq!(ctx_check(&trade, &portfolio), RiskDecision::Approved);
    }

    #[test]
    fn test_oversell_rejected() {
        let mut portfolio = Portfolio::new("main", 0.0);
        portfolio.holdings.insert("AAPL".into(), 3.0);
        let trade = Trade::new("t-1", 1, "AAPL", 4.0, 110.0, Side::Sell);
        assert!(matches!(
            ctx_check(&trade, &portfolio),
            RiskDecision::Rejected(_)
        ));
    }

    #[test]
    fn test_buys_ignored() {
        let portfolio = Portfolio::new("main", 0.0);
        let trade = Trade::new("t-1", 1, "AAPL", 100.0, 110.0, Side::Buy);
        assert_eq!(ctx_check(&trade, &portfolio), RiskDecision::Approved);
    }
}
