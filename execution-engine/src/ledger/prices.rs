use std::collections::HashMap;

/// Last observed trade price per symbol. Fed exclusively by applied trades;
/// this is the only pricing source the ledger values holdings against.
#[derive(Debug, Clone, Default)]
pub struct PriceBoard {
    last: HashMap<String, f64>,
}

impl PriceBoard {
    pub fn record(&mut self, symbol: &str, price: f64) {
        self.last.insert(symbol.to_string(), price);
    }

    pub fn last(&self, symbol: &str) -> Option<f64> {
        self.last.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.last.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last.is_empty()
    }
}
