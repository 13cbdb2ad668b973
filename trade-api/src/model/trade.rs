use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Direction of a trade. Quantity is always a magnitude; the side carries
/// the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buy" => Ok(Side::Buy),
            "sell" => Ok(Side::Sell),
            other => Err(format!("unknown side '{}'", other)),
        }
    }
}

/// A single trade request. Immutable once constructed; this is the unit of
/// mutation applied to the ledger.
///
/// Field names on the wire match the upstream service (`ID`, `Timestamp`,
/// ...), so existing clients keep working.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Timestamp")]
    pub timestamp: i64,
    #[serde(rename = "Symbol")]
    pub symbol: String,
    #[serde(rename = "Quantity")]
    pub quantity: f64,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Side")]
    pub side: Side,
}

impl Trade {
    pub fn new(
        id: impl Into<String>,
        timestamp: i64,
        symbol: impl Into<String>,
        quantity: f64,
        price: f64,
        side: Side,
    ) -> Self {
        Self {
            id: id.into(),
            timestamp,
            symbol: symbol.into(),
            quantity,
            price,
            side,
        }
    }

    /// Checks the structural invariants of a trade: symbol present, quantity
    /// a strictly positive finite magnitude, price a non-negative finite
    /// number. Direction lives in `side`, never in the sign of `quantity`.
    pub fn validate(&self) -> Result<(), String> {
        if self.symbol.trim().is_empty() {
            return Err("symbol must not be empty".to_string());
        }
        if !self.quantity.is_finite() || self.quantity <= 0.0 {
            return Err(format!(
                "quantity must be a positive finite number, got {}",
                self.quantity
            ));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(format!(
                "price must be a non-negative finite number, got {}",
                self.price
            ));
        }
        Ok(())
    }

    /// Notional value of the trade (`quantity * price`).
    pub fn notional(&self) -> f64 {
        self.quantity * self.price
    }
}
