/*
[INPUT]:  Currency pair (e.g., "BTC_ETH")
[OUTPUT]: Market data (ticker, order book, candles)
[POS]:    Examples - public market data queries
[UPDATE]: When adding new market data endpoints
*/

use chrono::Utc;
use poloniex_adapter::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Example: Query market data (no credentials required)
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = match PoloniexClient::new() {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create client");
            return;
        }
    };

    let pair = "BTC_ETH";

    match client.get_ticker().await.and_then(|result| result.parse::<Ticker>()) {
        Ok(ticker) => match ticker.get(pair) {
            Some(entry) => info!(pair, last = %entry.last, bid = %entry.highest_bid, ask = %entry.lowest_ask, "ticker"),
            None => info!(pair, markets = ticker.len(), "pair not listed"),
        },
        Err(e) => error!(error = %e, "ticker request failed"),
    }

    match client.get_order_book(Some(pair), Some(5)).await {
        Ok(result) => info!(pair, body = result.contents(), "order book"),
        Err(e) => error!(error = %e, "order book request failed"),
    }

    let end = Utc::now().timestamp();
    let start = end - 12 * 60 * 60;
    match client
        .get_chart_data(Some(pair), start, end, 900)
        .await
        .and_then(|result| result.parse::<Vec<ChartCandle>>())
    {
        Ok(candles) => info!(pair, count = candles.len(), last_close = ?candles.last().map(|c| c.close), "candles"),
        Err(e) => error!(error = %e, "chart data request failed"),
    }
}
