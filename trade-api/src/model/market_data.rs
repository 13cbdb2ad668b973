use super::trade::Trade;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Wire names of the two moving-average features expected by the scoring
/// service.
pub const FEATURE_SMA_SHORT: &str = "SMA_50";
pub const FEATURE_SMA_LONG: &str = "SMA_200";

/// Per-trade market snapshot handed to the risk gate and the predictor.
/// Constructed fresh for every trade and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketData {
    pub timestamp: i64,
    pub symbol: String,
    pub price: f64,
    pub volume: f64,
    pub sma_short: f64,
    pub sma_long: f64,
}

impl MarketData {
    /// Derives a snapshot from a trade. The moving averages are placeholder
    /// features scaled from the trade price; there is no live feed to
    /// compute real windows from. The derivation is deterministic, so the
    /// same trade always produces the same snapshot.
    pub fn from_trade(trade: &Trade) -> Self {
        Self {
            timestamp: trade.timestamp,
            symbol: trade.symbol.clone(),
            price: trade.price,
            volume: trade.quantity,
            sma_short: trade.price * 1.05,
            sma_long: trade.price * 0.95,
        }
    }

    /// The flat named-numeric feature map submitted to the scoring service.
    pub fn features(&self) -> HashMap<String, f64> {
        let mut features = HashMap::new();
        features.insert(FEATURE_SMA_SHORT.to_string(), self.sma_short);
        features.insert(FEATURE_SMA_LONG.to_string(), self.sma_long);
        features
    }
}
