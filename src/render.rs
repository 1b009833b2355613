//! Projection of dashboard state onto display regions
//!
//! Pure formatting functions plus the `DisplaySink` seam the dashboard
//! writes through. Each region is rewritten wholesale, so repeating an
//! update with the same state is idempotent.

use chrono::{Local, TimeZone};
use tracing::info;

use crate::types::{Asset, AssetQuote, PriceSnapshot, TrendingCoin};

/// Ticker text shown when a price fetch fails
pub const PRICE_FAILURE_NOTICE: &str = "Failed to load prices. Retrying...";

/// Trend list text shown when a trend fetch fails
pub const TREND_FAILURE_NOTICE: &str = "Failed to load trending coins.";

/// Last-updated text shown before the first successful fetch
pub const LAST_UPDATED_PLACEHOLDER: &str = "Last updated: --";

/// Copy button labels
pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// A designated display region
///
/// Regions are the only mutation targets; no text outside a region is ever
/// touched by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// The single concatenated ticker line
    Ticker,
    /// One per-asset price label
    PriceLabel(Asset),
    /// Human-readable last-updated line
    LastUpdated,
    /// Converter output
    ConvertedAmount,
    /// Copy button label
    CopyButton,
    /// The trending coin list (or its failure notice)
    TrendList,
}

/// Output surface the dashboard renders to
pub trait DisplaySink: Send + Sync {
    /// Replaces a region's text wholesale
    fn update(&self, region: Region, text: &str);
}

/// Sink that renders region updates as log lines
pub struct ConsoleSink;

impl DisplaySink for ConsoleSink {
    fn update(&self, region: Region, text: &str) {
        info!(region = ?region, "{text}");
    }
}

/// Formats a 24h change percentage
///
/// Positive values get a `+` prefix; an unknown change renders as an empty
/// string, never as `0%`.
pub fn format_change(change: Option<f64>) -> String {
    match change {
        Some(c) => {
            let sign = if c > 0.0 { "+" } else { "" };
            format!("{sign}{c:.2}%")
        }
        None => String::new(),
    }
}

/// Formats a price with comma thousands separators
///
/// At most two fraction digits, trailing zeros trimmed.
pub fn format_amount(value: f64) -> String {
    let formatted = format!("{value:.2}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (trimmed, None),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(d) => ("-", d),
        None => ("", int_part),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats one per-asset price label
pub fn price_label(asset: Asset, quote: AssetQuote, vs_currency: &str) -> String {
    format!(
        "{}: {} {} ({})",
        asset.symbol(),
        vs_currency.to_uppercase(),
        format_amount(quote.price),
        format_change(quote.change_24h)
    )
}

/// Builds the single concatenated ticker line: every asset price followed by
/// a compact 24h-change summary
pub fn ticker_line(snapshot: &PriceSnapshot, assets: &[Asset], vs_currency: &str) -> String {
    let currency = vs_currency.to_uppercase();

    let prices = assets
        .iter()
        .map(|asset| {
            let quote = snapshot.quote(*asset).unwrap_or_default();
            format!(
                "{}: {} {}",
                asset.symbol(),
                currency,
                format_amount(quote.price)
            )
        })
        .collect::<Vec<_>>()
        .join(" | ");

    let changes = assets
        .iter()
        .map(|asset| {
            let quote = snapshot.quote(*asset).unwrap_or_default();
            format!("{} {}", asset.symbol(), format_change(quote.change_24h))
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("{prices} | 24h: {changes}")
}

/// Formats the last-updated line from unix seconds, in local time
pub fn last_updated_line(last_updated: Option<i64>) -> String {
    match last_updated.and_then(|ts| Local.timestamp_opt(ts, 0).single()) {
        Some(t) => format!("Last updated: {}", t.format("%H:%M:%S")),
        None => LAST_UPDATED_PLACEHOLDER.to_string(),
    }
}

/// Renders the trend list, one coin per line in rank order
pub fn trend_list_text(coins: &[TrendingCoin]) -> String {
    coins
        .iter()
        .map(|coin| {
            let rank = coin
                .market_cap_rank
                .map_or_else(|| "?".to_string(), |r| r.to_string());
            format!(
                "{} ({}) Rank: {} [{}]",
                coin.name, coin.symbol, rank, coin.icon_url
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn format_change_signs_and_rounds() {
        assert_eq!(format_change(Some(2.5)), "+2.50%");
        assert_eq!(format_change(Some(-1.333)), "-1.33%");
        assert_eq!(format_change(Some(0.0)), "0.00%");
        assert_eq!(format_change(None), "");
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(129.0), "129");
        assert_eq!(format_amount(1000.0), "1,000");
        assert_eq!(format_amount(5_000_000.0), "5,000,000");
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(1234.56), "1,234.56");
        assert_eq!(format_amount(-1234.56), "-1,234.56");
    }

    #[test]
    fn price_label_with_and_without_change() {
        let with_change = AssetQuote {
            price: 5_000_000.0,
            change_24h: Some(2.5),
        };
        assert_eq!(
            price_label(Asset::BTC, with_change, "kes"),
            "BTC: KES 5,000,000 (+2.50%)"
        );

        let without_change = AssetQuote {
            price: 129.0,
            change_24h: None,
        };
        assert_eq!(
            price_label(Asset::USDT, without_change, "kes"),
            "USDT: KES 129 ()"
        );
    }

    #[test]
    fn ticker_line_concatenates_all_assets() {
        let mut quotes = HashMap::new();
        quotes.insert(
            Asset::BTC,
            AssetQuote {
                price: 5_000_000.0,
                change_24h: Some(2.5),
            },
        );
        quotes.insert(
            Asset::ETH,
            AssetQuote {
                price: 400_000.0,
                change_24h: Some(-1.0),
            },
        );
        quotes.insert(
            Asset::USDT,
            AssetQuote {
                price: 129.0,
                change_24h: None,
            },
        );
        let snapshot = PriceSnapshot {
            quotes,
            last_updated: Some(1_700_000_000),
        };

        assert_eq!(
            ticker_line(&snapshot, Asset::all(), "kes"),
            "BTC: KES 5,000,000 | ETH: KES 400,000 | USDT: KES 129 \
             | 24h: BTC +2.50%, ETH -1.00%, USDT "
        );
    }

    #[test]
    fn last_updated_placeholder_until_first_success() {
        assert_eq!(last_updated_line(None), "Last updated: --");
        assert!(last_updated_line(Some(1_700_000_000)).starts_with("Last updated: "));
    }

    #[test]
    fn trend_list_renders_rank_or_question_mark() {
        let coins = vec![
            TrendingCoin {
                name: "Pepe".to_string(),
                symbol: "PEPE".to_string(),
                icon_url: "https://img/pepe.png".to_string(),
                market_cap_rank: Some(40),
            },
            TrendingCoin {
                name: "Newcoin".to_string(),
                symbol: "NEW".to_string(),
                icon_url: "https://img/new.png".to_string(),
                market_cap_rank: None,
            },
        ];

        assert_eq!(
            trend_list_text(&coins),
            "Pepe (PEPE) Rank: 40 [https://img/pepe.png]\n\
             Newcoin (NEW) Rank: ? [https://img/new.png]"
        );
    }
}
