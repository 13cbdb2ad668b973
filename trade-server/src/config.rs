use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PredictorConfig {
    /// Scoring endpoint, e.g. http://localhost:5000/predict
    pub endpoint: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Total attempts per scoring call (1 = no retry).
    pub max_attempts: u32,
    /// Base backoff between attempts; doubles after each failure.
    pub backoff_ms: u64,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub listen_port: u16,
    pub log_level: String,

    /// Stable identity of the single portfolio this instance manages.
    pub portfolio_id: String,
    pub opening_cash: f64,

    // Risk policy knobs
    pub no_short_selling: bool,
    pub max_position_value: Option<f64>,

    pub predictor: PredictorConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_port: 8080,
            log_level: "info".to_string(),

            portfolio_id: "main".to_string(),
            opening_cash: 0.0,

            // Permissive by default, matching the reference risk gate.
            no_short_selling: false,
            max_position_value: None,

            predictor: PredictorConfig {
                endpoint: "http://localhost:5000/predict".to_string(),
                timeout_ms: 2_000,
                max_attempts: 3,
                backoff_ms: 200,
            },
        }
    }
}

impl ServerConfig {
    /// Layered load: defaults, then an optional config file, then
    /// TRADE__-prefixed environment variables (e.g.
    /// `TRADE__PREDICTOR__ENDPOINT`).
    pub fn load(file: &str) -> anyhow::Result<Self> {
        let defaults = config::Config::try_from(&ServerConfig::default())?;
        let cfg = config::Config::builder()
            .add_source(defaults)
            .add_source(config::File::with_name(file).required(false))
            .add_source(config::Environment::with_prefix("TRADE").separator("__"))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }
}
