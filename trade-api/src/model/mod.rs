pub mod market_data;
pub mod portfolio;
pub mod trade;
