use clap::Parser;
use execution_engine::risk_guard::{MaxPositionValuePolicy, NoShortSellingPolicy};
use execution_engine::{MemoryLedger, RiskGuard, TradeExecutor};
use log::info;
use std::sync::Arc;
use trade_server::api::{self, AppState};
use trade_server::config::ServerConfig;
use trade_server::predictor::HttpPredictor;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file name (without extension); missing file means defaults.
    #[arg(long, default_value = "trade-server")]
    config: String,

    /// Override the configured listen port.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let mut cfg = ServerConfig::load(&args.config)?;
    if let Some(port) = args.port {
        cfg.listen_port = port;
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(cfg.log_level.clone()),
    )
    .init();
    info!("=== Trade Server Starting ===");

    // 1. Ledger: the single shared mutable resource.
    let ledger = Arc::new(MemoryLedger::new(&cfg.portfolio_id, cfg.opening_cash));

    // 2. Risk gate: empty guard approves everything; policies come from config.
    let mut risk_guard = RiskGuard::new();
    if cfg.no_short_selling {
        info!("risk policy enabled: NoShortSelling");
        risk_guard.add_policy(Box::new(NoShortSellingPolicy));
    }
    if let Some(max_value) = cfg.max_position_value {
        info!("risk policy enabled: MaxPositionValue ({})", max_value);
        risk_guard.add_policy(Box::new(MaxPositionValuePolicy { max_value }));
    }

    // 3. Prediction client.
    info!("scoring endpoint: {}", cfg.predictor.endpoint);
    let predictor = Arc::new(HttpPredictor::new(&cfg.predictor)?);

    // 4. Pipeline.
    let executor = Arc::new(TradeExecutor::new(ledger, Arc::new(risk_guard), predictor));

    // 5. HTTP surface.
    let app = api::router(AppState { executor });
    let addr = format!("0.0.0.0:{}", cfg.listen_port);
    info!("Trade Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
