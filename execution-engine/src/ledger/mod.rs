//! In-memory portfolio ledger.
//!
//! The ledger owns all mutable portfolio state: trade history, holdings,
//! cash, and the price board. A single mutex is held across the whole of
//! `apply`, so commits for the portfolio serialize and reads always see a
//! fully-applied state.

use crate::ledger::prices::PriceBoard;
use log::info;
use std::sync::Mutex;
use trade_api::{Ledger, LedgerError, Portfolio, Side, Trade};

pub mod prices;

/// The bookkeeping core, free of locking concerns so it can be unit tested
/// directly.
#[derive(Debug)]
struct Book {
    portfolio: Portfolio,
    prices: PriceBoard,
    history: Vec<Trade>,
}

impl Book {
    fn new(portfolio_id: &str, opening_cash: f64) -> Self {
        Self {
            portfolio: Portfolio::new(portfolio_id, opening_cash),
            prices: PriceBoard::default(),
            history: Vec::new(),
        }
    }

    /// Commits one trade: history, holding delta, cash delta, last price,
    /// revaluation. Nothing here can fail, so a commit that starts always
    /// finishes and the invariant `total_value == cash + sum(holding *
    /// last_price)` holds on exit.
    fn apply(&mut self, trade: &Trade) {
        self.history.push(trade.clone());

        let holding = self.portfolio.holdings.entry(trade.symbol.clone()).or_insert(0.0);
        match trade.side {
            Side::Buy => {
                *holding += trade.quantity;
                self.portfolio.cash -= trade.notional();
            }
            Side::Sell => {
                *holding -= trade.quantity;
                self.portfolio.cash += trade.notional();
            }
        }

        self.prices.record(&trade.symbol, trade.price);
        self.revalue();
    }

    /// Recomputes the valuation over the full holdings set. A held symbol
    /// with no recorded price values at zero; in practice every holding
    /// comes from an applied trade, which records a price.
    fn revalue(&mut self) {
        let mut total = self.portfolio.cash;
        for (symbol, quantity) in &self.portfolio.holdings {
            total += quantity * self.prices.last(symbol).unwrap_or(0.0);
        }
        self.portfolio.total_value = total;
    }
}

/// Reference [`Ledger`] backed by process memory. The mutex is the
/// serialization point required for concurrent trades on one portfolio.
pub struct MemoryLedger {
    inner: Mutex<Book>,
}

impl MemoryLedger {
    pub fn new(portfolio_id: &str, opening_cash: f64) -> Self {
        Self {
            inner: Mutex::new(Book::new(portfolio_id, opening_cash)),
        }
    }

    /// Number of trades committed so far.
    pub fn trade_count(&self) -> usize {
        self.inner.lock().map(|book| book.history.len()).unwrap_or(0)
    }

    /// Last known price for `symbol`, if any trade for it has been applied.
    pub fn last_price(&self, symbol: &str) -> Option<f64> {
        self.inner.lock().ok().and_then(|book| book.prices.last(symbol))
    }
}

impl Ledger for MemoryLedger {
    fn apply(&self, trade: &Trade) -> Result<Portfolio, LedgerError> {
        let mut book = self.inner.lock().map_err(|_| LedgerError::Poisoned)?;
        book.apply(trade);
        info!(
            "ledger: applied {} {} {} @ {} (cash {:.2}, total {:.2})",
            trade.side,
            trade.quantity,
            trade.symbol,
            trade.price,
            book.portfolio.cash,
            book.portfolio.total_value
        );
        Ok(book.portfolio.clone())
    }

    fn portfolio(&self) -> Result<Portfolio, LedgerError> {
        let book = self.inner.lock().map_err(|_| LedgerError::Poisoned)?;
        Ok(book.portfolio.clone())
    }
}
