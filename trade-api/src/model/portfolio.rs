use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Snapshot of a single portfolio: holdings per symbol, cash, and the
/// valuation computed from the last known trade prices.
///
/// Holdings are signed; a negative quantity is a short position. Whether
/// shorts are permitted is a risk-policy question, not a property of the
/// snapshot itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Holdings")]
    pub holdings: HashMap<String, f64>,
    #[serde(rename = "Cash")]
    pub cash: f64,
    #[serde(rename = "TotalValue")]
    pub total_value: f64,
}

impl Portfolio {
    pub fn new(id: impl Into<String>, cash: f64) -> Self {
        Self {
            id: id.into(),
            holdings: HashMap::new(),
            cash,
            total_value: cash,
        }
    }

    /// Quantity held for `symbol`, zero if the symbol has never traded.
    pub fn holding(&self, symbol: &str) -> f64 {
        self.holdings.get(symbol).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        let mut p = Portfolio::new("main", 1000.0);
        p.holdings.insert("AAPL".into(), 6.0);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["ID"], "main");
        assert_eq!(json["Cash"], 1000.0);
        assert_eq!(json["TotalValue"], 1000.0);
        assert_eq!(json["Holdings"]["AAPL"], 6.0);
    }

    #[test]
    fn test_unknown_symbol_holding_is_zero() {
        let p = Portfolio::new("main", 0.0);
        assert_eq!(p.holding("TSLA"), 0.0);
    }
}
