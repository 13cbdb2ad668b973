//! HTTP surface: POST /trade, GET /portfolio, GET /health.
//!
//! Each terminal pipeline outcome maps to its own status code so callers
//! can tell "applied" from "skipped by signal" from "rejected by risk" from
//! an actual failure.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use execution_engine::{ExecuteError, ExecutionOutcome, TradeExecutor};
use log::error;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use trade_api::Trade;

#[derive(Clone)]
pub struct AppState {
    pub executor: Arc<TradeExecutor>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/trade", post(post_trade))
        .route("/portfolio", get(get_portfolio))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}

async fn post_trade(State(state): State<AppState>, Json(mut trade): Json<Trade>) -> impl IntoResponse {
    // Fill in what the caller is allowed to omit.
    if trade.id.is_empty() {
        trade.id = uuid::Uuid::new_v4().to_string();
    }
    if trade.timestamp == 0 {
        trade.timestamp = chrono::Utc::now().timestamp_millis();
    }

    let result = state.executor.execute(&trade).await;
    trade_response(&trade.id, result)
}

fn trade_response(
    trade_id: &str,
    result: execution_engine::Result<ExecutionOutcome>,
) -> (StatusCode, Json<Value>) {
    match result {
        Ok(ExecutionOutcome::Applied(portfolio)) => (
            StatusCode::OK,
            Json(json!({
                "status": "applied",
                "trade_id": trade_id,
                "portfolio": portfolio,
            })),
        ),
        Ok(ExecutionOutcome::Skipped { signal }) => (
            StatusCode::OK,
            Json(json!({
                "status": "skipped",
                "trade_id": trade_id,
                "signal": signal,
            })),
        ),
        Ok(ExecutionOutcome::RiskRejected { reason }) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({
                "status": "rejected",
                "trade_id": trade_id,
                "reason": reason,
            })),
        ),
        Err(ExecuteError::Validation(msg)) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "status": "error", "msg": msg })),
        ),
        Err(err @ ExecuteError::Prediction(_)) => {
            error!("trade {} failed: {}", trade_id, err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "status": "error", "msg": err.to_string() })),
            )
        }
        Err(err @ ExecuteError::Storage(_)) => {
            error!("trade {} failed: {}", trade_id, err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "msg": err.to_string() })),
            )
        }
    }
}

async fn get_portfolio(State(state): State<AppState>) -> impl IntoResponse {
    match state.executor.portfolio() {
        Ok(portfolio) => (StatusCode::OK, Json(serde_json::to_value(portfolio).unwrap_or(Value::Null))),
        Err(err) => {
            error!("portfolio read failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "status": "error", "msg": err.to_string() })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trade_api::{LedgerError, Portfolio, PredictorError};

    #[test]
    fn test_outcomes_map_to_distinct_statuses() {
        let applied = trade_response("t", Ok(ExecutionOutcome::Applied(Portfolio::new("main", 0.0))));
        assert_eq!(applied.0, StatusCode::OK);
        assert_eq!(applied.1["status"], "applied");

        let skipped = trade_response("t", Ok(ExecutionOutcome::Skipped { signal: 0 }));
        assert_eq!(skipped.0, StatusCode::OK);
        assert_eq!(skipped.1["status"], "skipped");
        assert_eq!(skipped.1["signal"], 0);

        let rejected = trade_response(
            "t",
            Ok(ExecutionOutcome::RiskRejected {
                reason: "limit".into(),
            }),
        );
        assert_eq!(rejected.0, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(rejected.1["status"], "rejected");
    }

    #[test]
    fn test_errors_map_to_distinct_statuses() {
        let validation = trade_response("t", Err(ExecuteError::Validation("bad".into())));
        assert_eq!(validation.0, StatusCode::BAD_REQUEST);

        let prediction = trade_response("t", Err(ExecuteError::Prediction(PredictorError::MissingSignal)));
        assert_eq!(prediction.0, StatusCode::BAD_GATEWAY);

        let storage = trade_response(
            "t",
            Err(ExecuteError::Storage(LedgerError::Backend("disk".into()))),
        );
        assert_eq!(storage.0, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
