/*
[INPUT]:  YAML config with api key/secret, order parameters
[OUTPUT]: Balances and order placement results
[POS]:    Examples - trading operations
[UPDATE]: When trading API changes
*/

use poloniex_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Example: Trading operations (requires api key + secret)
///
/// Usage: cargo run --example trading_example -- poloniex.yaml
///
/// ```yaml
/// api_key: YOUR-KEY
/// api_secret: YOUR-SECRET
/// client:
///   timeout: 10
/// ```
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(path) = std::env::args().nth(1) else {
        error!("usage: trading_example <config.yaml>");
        return;
    };

    let client = match AdapterConfig::from_file(&path).and_then(PoloniexClient::from_config) {
        Ok(c) => c,
        Err(e) => {
            error!(error = %e, "failed to create client");
            return;
        }
    };
    if !client.trading_enabled() {
        warn!("config has no credentials; trading commands will be refused");
    }

    match client.get_balances().await {
        Ok(result) if result.has_nonce_error() => warn!("nonce rejected, retry with a fresh nonce"),
        Ok(result) => match result.parse::<Balances>() {
            Ok(balances) => info!(currencies = balances.len(), btc = ?balances.get("BTC"), "balances"),
            Err(e) => error!(error = %e, body = result.contents(), "unexpected balances body"),
        },
        Err(e) => error!(error = %e, "balances request failed"),
    }

    // Post-only bid far below market; rests on the book without filling
    let rate = Decimal::from_str("0.00001").unwrap_or_default();
    let amount = Decimal::from_str("1").unwrap_or_default();
    match client.buy("BTC_ETH", rate, amount, OrderOptions::post_only()).await {
        Ok(result) => info!(body = result.contents(), "order placed"),
        Err(e) => error!(error = %e, "buy failed"),
    }
}
