use super::Policy;
use trade_api::{MarketData, RiskContext, RiskDecision, Side};

/// Caps the post-trade value of any single position at an absolute limit,
/// priced at the candidate trade's own price.
pub struct MaxPositionValuePolicy {
    pub max_value: f64,
}

impl Policy for MaxPositionValuePolicy {
    fn name(&self) -> &str {
        "MaxPositionValue"
    }

    fn check(&self, data: &MarketData, ctx: &RiskContext) -> RiskDecision {
        let held = ctx.portfolio.holding(&ctx.trade.symbol);
        let after = match ctx.trade.side {
            Side::Buy => held + ctx.trade.quantity,
            Side::Sell => held - ctx.trade.quantity,
        };

        let position_value = after.abs() * data.price;
        if position_value > self.max_value {
            return RiskDecision::Rejected(format!(
                "position {} value {:.2} exceeds limit {:.2}",
                ctx.trade.symbol, position_value, self.max_value
            ));
        }

        RiskDecision::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_api::{Portfolio, Trade};

    fn check(policy: &MaxPositionValuePolicy, trade: &Trade, portfolio: &Portfolio) -> RiskDecision {
        let data = MarketData::from_trade(trade);
        policy.check(
            &data,
            &RiskContext {
                trade,
                portfolio,
            },
        )
    }

    #[test]
    fn test_buy_under_cap_approved() {
        let policy = MaxPositionValuePolicy { max_value: 5000.0 };
        let portfolio = Portfolio::new("main", 0.0);
        let trade = Trade::new("t-1", 1, "AAPL", 10.0, 100.0, Side::Buy);
        assert_eq!(check(&policy, &trade, &portfolio), RiskDecision::Approved);
    }

    #[test]
    fn test_buy_breaching_cap_rejected() {
        let policy = MaxPositionValuePolicy { max_value: 5000.0 };
        let mut portfolio = Portfolio::new("main", 0.0);
        portfolio.holdings.insert("AAPL".into(), 45.0);
        let trade = Trade::new("t-1", 1, "AAPL", 10.0, 100.0, Side::Buy);
        assert!(matches!(
            check(&policy, &trade, &portfolio),
            RiskDecision::Rejected(_)
        ));
    }

    #[test]
    fn test_short_position_counted_by_magnitude() {
        let policy = MaxPositionValuePolicy { max_value: 5000.0 };
        let portfolio = Portfolio::new("main", 0.0);
        // Opening a 60-unit short at 100 is a 6000 position.
        let trade = Trade::new("t-1", 1, "AAPL", 60.0, 100.0, Side::Sell);
        assert!(matches!(
            check(&policy, &trade, &portfolio),
            RiskDecision::Rejected(_)
        ));
    }
}
