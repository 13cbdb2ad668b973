pub mod ledger;
pub mod predictor;
pub mod risk_gate;
