//! Chart widget configuration
//!
//! Charting itself is delegated to an external widget the host environment
//! provides; the dashboard only builds one configuration per asset and hands
//! them to the host at startup.

use serde::Serialize;

use crate::types::Asset;

/// Configuration for one externally hosted chart surface
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartConfig {
    pub autosize: bool,
    /// Trading pair the chart tracks
    pub symbol: String,
    /// Candle interval in minutes
    pub interval: String,
    pub timezone: String,
    pub theme: String,
    pub style: String,
    pub locale: String,
    /// Display region the host mounts the chart into
    pub container_id: String,
}

impl ChartConfig {
    /// Builds the chart configuration for an asset
    pub fn for_asset(asset: Asset) -> Self {
        Self {
            autosize: true,
            symbol: asset.tradingview_symbol().to_string(),
            interval: "30".to_string(),
            timezone: "Etc/UTC".to_string(),
            theme: "dark".to_string(),
            style: "1".to_string(),
            locale: "en".to_string(),
            container_id: format!("{}-chart", asset.symbol().to_lowercase()),
        }
    }
}

/// Host-provided chart widget
///
/// The dashboard does not control the widget's behavior; it only instantiates
/// it once per asset when a host is present.
pub trait ChartHost: Send + Sync {
    /// Mounts one chart surface with the given configuration
    fn mount(&self, config: &ChartConfig);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_config_targets_the_asset_pair_and_container() {
        let config = ChartConfig::for_asset(Asset::BTC);
        assert_eq!(config.symbol, "BINANCE:BTCUSDT");
        assert_eq!(config.container_id, "btc-chart");
        assert!(config.autosize);

        let usdt = ChartConfig::for_asset(Asset::USDT);
        assert_eq!(usdt.symbol, "USDTUSD");
        assert_eq!(usdt.container_id, "usdt-chart");
    }
}
