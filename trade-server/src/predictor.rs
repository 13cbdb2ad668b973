//! HTTP client for the external scoring service.
//!
//! The request body is the flat feature map as JSON; the response is a JSON
//! object with an integer `prediction` field. Anything else is an error.
//! Transient failures (transport, 5xx) are retried a bounded number of
//! times with doubling backoff; caller-shaped failures are not.

use crate::config::PredictorConfig;
use async_trait::async_trait;
use log::warn;
use std::collections::HashMap;
use std::time::Duration;
use trade_api::{Predictor, PredictorError};

pub struct HttpPredictor {
    client: reqwest::Client,
    endpoint: String,
    max_attempts: u32,
    base_backoff: Duration,
}

impl HttpPredictor {
    pub fn new(cfg: &PredictorConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(cfg.timeout_ms))
            .build()?;
        Ok(Self {
            client,
            endpoint: cfg.endpoint.clone(),
            max_attempts: cfg.max_attempts.max(1),
            base_backoff: Duration::from_millis(cfg.backoff_ms),
        })
    }

    async fn attempt(&self, features: &HashMap<String, f64>) -> Result<i64, PredictorError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(features)
            .send()
            .await
            .map_err(|e| PredictorError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PredictorError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| PredictorError::Decode(e.to_string()))?;

        body.get("prediction")
            .and_then(|v| v.as_i64())
            .ok_or(PredictorError::MissingSignal)
    }
}

#[async_trait]
impl Predictor for HttpPredictor {
    async fn score(&self, features: &HashMap<String, f64>) -> Result<i64, PredictorError> {
        let mut backoff = self.base_backoff;
        for attempt in 1..=self.max_attempts {
            match self.attempt(features).await {
                Ok(signal) => return Ok(signal),
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    warn!(
                        "scoring attempt {}/{} failed ({}); retrying in {:?}",
                        attempt, self.max_attempts, err, backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff *= 2;
                }
                Err(err) => return Err(err),
            }
        }
        Err(PredictorError::Transport("no attempts configured".into()))
    }
}
