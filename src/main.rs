use anyhow::Result;
use axum::Router;
use config::Config;
use eac_market_dashboard::{api, config, dashboard, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    let app_state = dashboard::AppState::new(cfg.clone())?;

    #[allow(unused_mut)]
    let mut app: Router = api::router(app_state, &cfg);

    #[cfg(feature = "metrics")]
    {
        app = api::with_metrics(app);
    }

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "Server binding to 0.0.0.0 - dashboard API will be reachable from the network. \
            Bind to 127.0.0.1 unless behind a reverse proxy."
        );
    }

    info!(
        %addr,
        default_region = %cfg.dashboard.default_region,
        default_scenario = %cfg.dashboard.default_scenario,
        "starting EAC market dashboard"
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
