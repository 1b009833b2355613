use tracing::info;
use tracing::level_filters::LevelFilter;

use crypto_dashboard::{Dashboard, DashboardConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(LevelFilter::INFO)
        .init();

    let config = DashboardConfig::default();
    info!(
        currency = %config.vs_currency,
        price_refresh_secs = config.price_refresh.as_secs(),
        trend_refresh_secs = config.trend_refresh.as_secs(),
        "Starting crypto dashboard"
    );

    let dashboard = Dashboard::new(config);
    dashboard.start();

    info!("Dashboard is running. Press Ctrl+C to stop.");
    tokio::signal::ctrl_c().await?;

    info!("Shutting down...");
    dashboard.shutdown();

    Ok(())
}
